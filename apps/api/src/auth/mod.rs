// Bearer token handling
// Tokens are issued by the login service; this service only verifies them

pub mod jwt;
