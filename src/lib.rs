//! Hedwige 백엔드
//!
//! Hedwige 메일 프론트엔드를 위한 최소한의 API 서버입니다.
//! 헬스체크와 Google 로그인 credential(ID 토큰) 검증 엔드포인트를 제공합니다.
//!
//! # Features
//!
//! - **헬스체크**: `GET /` 고정 응답
//! - **Google 로그인 검증**: `POST /api/auth/google` - Google JWKS 기반 RS256 검증
//! - **CORS**: 설정된 프론트엔드 Origin 허용
//! - **Rate Limiting**: `actix-governor` 기반 IP 별 요청 제한
//!
//! 세션, 토큰 발급, 사용자 저장은 하지 않습니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← Google ID 토큰 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Google JWKS   │ ← 외부 공개키
//! └─────────────────┘
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
