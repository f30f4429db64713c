//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인에 끼워 넣는 횡단 관심사(Cross-cutting concerns)를 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. CORS (`configure_cors`)
//! - 설정된 프론트엔드 Origin 만 허용
//! - Preflight 응답 캐시 시간 설정
//!
//! Rate Limiting(`actix-governor`)은 클라이언트 IP 가 필요하므로
//! 실제 서버를 띄우는 `main`에서만 적용합니다.
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use hedwige_backend::middlewares::configure_cors;
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .wrap(configure_cors(&cors_config))
//! })
//! ```

pub mod cors;

pub use cors::configure_cors;
