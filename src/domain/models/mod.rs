//! 외부 시스템 통합 모델

pub mod google_claims;

pub use google_claims::{GoogleIdClaims, VerifiedIdentity};
