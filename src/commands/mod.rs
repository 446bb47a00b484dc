pub mod add;
pub mod health;
pub mod init;
pub mod list;
pub mod open;
pub mod prompt;
pub mod show;
