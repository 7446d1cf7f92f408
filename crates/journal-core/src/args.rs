//! Positional argument checks shared by the dispatch handlers.

use crate::error::{JournalError, Result};

/// Fail unless exactly `expected` arguments were passed.
pub(crate) fn expect_count(args: &[String], expected: usize, usage: &str) -> Result<()> {
    if args.len() != expected {
        return Err(JournalError::InvalidArgument(format!(
            "incorrect number of arguments, expecting {} ({}), got {}",
            expected,
            usage,
            args.len()
        )));
    }
    Ok(())
}

/// Fail if the argument at zero-based `position` is empty.
pub(crate) fn require_non_empty(args: &[String], position: usize) -> Result<&str> {
    match args.get(position) {
        Some(value) if !value.is_empty() => Ok(value.as_str()),
        _ => Err(JournalError::InvalidArgument(format!(
            "{} argument must be a non-empty string",
            ordinal(position + 1)
        ))),
    }
}

/// English ordinal for a one-based position: 1st, 2nd, 3rd, 4th, ...
pub(crate) fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(5), "5th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(22), "22nd");
    }

    #[test]
    fn test_expect_count_mismatch() {
        let args = vec!["a".to_string()];
        let err = expect_count(&args, 2, "key, value").unwrap_err();
        assert!(matches!(err, JournalError::InvalidArgument(ref msg) if msg.contains("expecting 2")));
        assert!(expect_count(&args, 1, "key").is_ok());
    }

    #[test]
    fn test_require_non_empty_names_position() {
        let args = vec!["x".to_string(), String::new()];
        assert_eq!(require_non_empty(&args, 0).unwrap(), "x");
        let err = require_non_empty(&args, 1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: 2nd argument must be a non-empty string"
        );
    }
}
