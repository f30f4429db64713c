//! HTTP 요청/응답 DTO

pub mod auth_request;
pub mod auth_response;

pub use auth_request::GoogleAuthRequest;
pub use auth_response::{GoogleAuthResponse, HealthResponse};
