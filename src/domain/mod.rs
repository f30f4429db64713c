//! # Domain Layer Module
//!
//! 요청/응답 계약(DTO)과 Google ID 토큰에서 얻은 신원 모델을 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── DTOs    - HTTP 요청/응답 본문
//! └── Models  - 외부 시스템(Google) 통합 모델
//! ```
//!
//! 이 서비스는 아무것도 저장하지 않으므로 엔티티 계층이 없습니다.
//! 모든 값은 요청 하나의 수명 동안만 존재합니다.

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
