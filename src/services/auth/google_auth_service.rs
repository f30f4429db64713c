//! # Google 로그인 서비스
//!
//! 프론트엔드의 Google Identity Services 버튼이 돌려준 credential(ID 토큰)을
//! 검증하고, 화면에 필요한 신원 정보(email, 이름, 사진)로 변환합니다.
//!
//! ```text
//! ┌──────────────┐   credential    ┌─────────────────┐   verify(token, client_id)   ┌──────────────────┐
//! │  프론트엔드    ├────────────────►│ GoogleAuthService├─────────────────────────────►│ IdTokenVerifier   │
//! └──────────────┘                 └─────────────────┘                              └──────────────────┘
//!        ▲                                 │                                                 │
//!        │  200 {email, name, picture}     │◄────────── GoogleIdClaims / GoogleTokenError ──┘
//!        └─────────────────────────────────┘  401 / 502
//! ```
//!
//! ## 에러 매핑
//!
//! | 검증 결과 | AppError | HTTP |
//! |-----------|----------|------|
//! | 빈 credential | `ValidationError` | 400 |
//! | 서명/aud/iss/exp 실패, 형식 오류 | `AuthenticationError` | 401 |
//! | Google 공개키 조회 실패 | `ExternalServiceError` | 502 |
//!
//! 세션 생성, 토큰 발급, 사용자 저장은 하지 않습니다.

use std::sync::Arc;

use super::google_token_verifier::IdTokenVerifier;
use crate::domain::models::VerifiedIdentity;
use crate::errors::{AppError, AppResult};

/// 클라이언트에게 노출되는 인증 실패 메시지
pub const INVALID_TOKEN_MESSAGE: &str = "유효하지 않은 Google 토큰입니다";

/// 클라이언트에게 노출되는 Google 장애 메시지
pub const UPSTREAM_UNAVAILABLE_MESSAGE: &str = "Google 인증 서버에 연결할 수 없습니다";

pub const MISSING_CREDENTIAL_MESSAGE: &str = "credential이 필요합니다";

/// Google 로그인 서비스
///
/// 검증기와 이 애플리케이션의 Client ID 를 소유합니다.
/// 요청 간 공유되는 가변 상태는 없습니다.
pub struct GoogleAuthService {
    verifier: Arc<dyn IdTokenVerifier>,
    client_id: String,
}

impl GoogleAuthService {
    pub fn new(verifier: Arc<dyn IdTokenVerifier>, client_id: impl Into<String>) -> Self {
        Self {
            verifier,
            client_id: client_id.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// credential 을 검증하고 신원 정보를 돌려줍니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - credential 이 비어 있음 (검증기 호출 없음)
    /// * `AppError::AuthenticationError` - 토큰 검증 실패
    /// * `AppError::ExternalServiceError` - Google 공개키 조회 실패
    pub async fn authenticate(&self, credential: &str) -> AppResult<VerifiedIdentity> {
        if credential.is_empty() {
            return Err(AppError::ValidationError(MISSING_CREDENTIAL_MESSAGE.to_string()));
        }

        match self.verifier.verify(credential, &self.client_id).await {
            Ok(claims) => {
                log::info!("✅ Google 로그인 성공: {}", claims.email);
                Ok(VerifiedIdentity::from(claims))
            }
            Err(e) if e.is_upstream() => {
                log::error!("❌ Google 공개키 조회 실패: {}", e);
                Err(AppError::ExternalServiceError(
                    UPSTREAM_UNAVAILABLE_MESSAGE.to_string(),
                ))
            }
            Err(e) => {
                log::warn!("Google ID 토큰 검증 실패: {}", e);
                Err(AppError::AuthenticationError(INVALID_TOKEN_MESSAGE.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::test_support::{StubVerifier, TEST_CLIENT_ID};

    fn service_with(verifier: Arc<StubVerifier>) -> GoogleAuthService {
        GoogleAuthService::new(verifier, TEST_CLIENT_ID)
    }

    #[actix_web::test]
    async fn test_accepted_token_maps_claims_to_identity() {
        let verifier = Arc::new(StubVerifier::accepting(
            "good-token",
            "a@b.com",
            "A B",
            "http://x/y.png",
        ));
        let service = service_with(verifier.clone());

        let identity = service.authenticate("good-token").await.unwrap();

        assert_eq!(
            identity,
            VerifiedIdentity {
                email: "a@b.com".to_string(),
                display_name: "A B".to_string(),
                picture_url: "http://x/y.png".to_string(),
            }
        );
        assert_eq!(verifier.calls(), 1);
    }

    #[actix_web::test]
    async fn test_rejected_token_is_generic_authentication_error() {
        let service = service_with(Arc::new(StubVerifier::default()));

        let error = service.authenticate("forged").await.unwrap_err();

        match error {
            AppError::AuthenticationError(msg) => assert_eq!(msg, INVALID_TOKEN_MESSAGE),
            other => panic!("expected AuthenticationError, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_token_for_other_audience_is_rejected() {
        let verifier = Arc::new(StubVerifier::accepting("good-token", "a@b.com", "A B", ""));
        let service = GoogleAuthService::new(verifier, "another-app.apps.googleusercontent.com");

        let error = service.authenticate("good-token").await.unwrap_err();

        assert!(matches!(error, AppError::AuthenticationError(_)));
    }

    #[actix_web::test]
    async fn test_unreachable_google_is_external_service_error() {
        let service = service_with(Arc::new(StubVerifier::unreachable()));

        let error = service.authenticate("good-token").await.unwrap_err();

        assert!(matches!(error, AppError::ExternalServiceError(_)));
    }

    #[actix_web::test]
    async fn test_empty_credential_never_reaches_verifier() {
        let verifier = Arc::new(StubVerifier::default());
        let service = service_with(verifier.clone());

        let error = service.authenticate("").await.unwrap_err();

        assert!(matches!(error, AppError::ValidationError(_)));
        assert_eq!(verifier.calls(), 0);
    }
}
