// Accounts: registration, login, and the bearer-token extractor every
// protected route depends on.

pub mod extractor;
pub mod handlers;
pub mod password;
pub mod store;
pub mod token;
