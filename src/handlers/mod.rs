//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Angular 프론트엔드)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 요청 파싱, 응답 변환       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - Google ID 토큰 검증                ← Service Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! 에러는 `AppError`의 `ResponseError` 구현을 통해 `{"error": "..."}` JSON 으로 변환됩니다.

pub mod auth;
