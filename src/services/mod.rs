//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 싱글톤이 아니라 `AppState` 생성 시점에 명시적으로 조립됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use hedwige_backend::services::auth::{GoogleAuthService, GoogleIdTokenVerifier};
//!
//! let verifier = GoogleIdTokenVerifier::from_config(&config.google)?;
//! let google_auth = GoogleAuthService::new(Arc::new(verifier), config.google.client_id.clone());
//! ```

pub mod auth;
