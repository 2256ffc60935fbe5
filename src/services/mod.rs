/// Module containing the online-session service
pub mod online;
/// Module containing the user administration service
pub mod users;

pub use online::{OnlineService, OnlineServiceImpl};
pub use users::{UserService, UserServiceImpl};
