pub mod directory;
pub mod host;
pub mod login;
