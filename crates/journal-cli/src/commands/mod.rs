pub mod call;
pub mod init;
pub mod list;
pub mod maintenance;
pub mod misc;
