pub mod login;
pub mod password;
pub mod recovery;
pub mod validate;
