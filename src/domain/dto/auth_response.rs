//! 응답 DTO 모듈

use serde::Serialize;

use crate::domain::models::VerifiedIdentity;

/// 헬스체크 응답
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
}

/// Google 로그인 성공 응답
///
/// 검증된 ID 토큰의 클레임 중 프론트엔드가 화면에 표시하는 세 가지만 돌려줍니다.
#[derive(Debug, Serialize, PartialEq)]
pub struct GoogleAuthResponse {
    pub email: String,
    pub name: String,
    pub picture: String,
}

impl From<VerifiedIdentity> for GoogleAuthResponse {
    fn from(identity: VerifiedIdentity) -> Self {
        Self {
            email: identity.email,
            name: identity.display_name,
            picture: identity.picture_url,
        }
    }
}
