/// HTTP request primitive shared by the client and the auth flow
pub mod http;
/// Request body types for the manager API
pub mod requests;
/// The uniform response envelope and role type
pub mod response;
