//! Google ID 토큰 클레임 모델
//!
//! Google Identity Services 가 발급하는 OpenID Connect ID 토큰의 페이로드입니다.
//! 서명, `iss`, `aud`, `exp` 검증은 `GoogleIdTokenVerifier`에서 끝난 뒤에만
//! 이 구조체가 만들어집니다.
//!
//! ```json
//! {
//!   "iss": "https://accounts.google.com",
//!   "aud": "123456789-abc.apps.googleusercontent.com",
//!   "sub": "110169484474386276334",
//!   "email": "hedwige@example.com",
//!   "email_verified": true,
//!   "name": "Hedwige",
//!   "picture": "https://lh3.googleusercontent.com/a/photo.jpg",
//!   "iat": 1700000000,
//!   "exp": 1700003600
//! }
//! ```

use serde::{Deserialize, Serialize};

/// 검증이 끝난 Google ID 토큰 클레임
///
/// `email`은 필수입니다. 없으면 역직렬화 단계에서 토큰이 거부됩니다.
/// `name`, `picture`는 `profile` 스코프가 없으면 빠질 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoogleIdClaims {
    pub iss: String,
    pub aud: String,
    pub sub: String,
    pub exp: i64,
    #[serde(default)]
    pub iat: i64,
    pub email: String,
    #[serde(default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

/// 검증된 신원 정보
///
/// 요청 하나의 수명 동안만 존재하며 어디에도 저장되지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedIdentity {
    pub email: String,
    pub display_name: String,
    pub picture_url: String,
}

impl From<GoogleIdClaims> for VerifiedIdentity {
    fn from(claims: GoogleIdClaims) -> Self {
        Self {
            email: claims.email,
            display_name: claims.name.unwrap_or_default(),
            picture_url: claims.picture.unwrap_or_default(),
        }
    }
}
