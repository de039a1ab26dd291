mod claims;
pub mod password;
pub mod token;
