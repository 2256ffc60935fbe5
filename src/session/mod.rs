/// Login, role check and logout flow
pub mod auth;
/// Cookie-backed session state
pub mod store;

pub use auth::ManagerAuth;
pub use store::{ManagerSession, SessionStore};
