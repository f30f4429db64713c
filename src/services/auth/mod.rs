//! 인증 서비스 모듈
//!
//! Google 로그인 credential(ID 토큰)을 검증하고 신원 정보로 변환합니다.
//!
//! # Features
//!
//! - Google JWKS 기반 RS256 서명 검증
//! - audience(Client ID), issuer, 만료 검증
//! - 검증 capability 를 trait 으로 분리하여 테스트 스텁 교체 지원
//!
//! # Security
//!
//! - 서비스는 토큰을 발급하거나 저장하지 않습니다
//! - 실패 원인은 서버 로그에만 남깁니다

pub mod google_auth_service;
pub mod google_token_verifier;

pub use google_auth_service::*;
pub use google_token_verifier::*;

#[cfg(test)]
pub(crate) mod test_support;
