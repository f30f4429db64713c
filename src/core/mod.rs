//! # Core Module
//!
//! 요청 핸들러가 공유하는 애플리케이션 상태를 조립합니다.
//!
//! 전역 싱글톤이나 서비스 로케이터 없이, 시작 시점에 로드한 [`AppConfig`](crate::config::AppConfig)를
//! [`AppState`] 생성자에 넘기고 그 결과를 `web::Data`로 등록합니다.
//!
//! ```rust,ignore
//! let config = AppConfig::from_env()?;
//! let state = web::Data::new(AppState::from_config(&config)?);
//!
//! App::new()
//!     .app_data(state.clone())
//!     .configure(configure_all_routes)
//! ```

pub mod app_state;

pub use app_state::AppState;
