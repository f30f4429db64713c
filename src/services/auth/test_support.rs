//! 테스트용 검증기 스텁

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use jsonwebtoken::errors::ErrorKind;

use super::{GoogleTokenError, IdTokenVerifier};
use crate::domain::models::GoogleIdClaims;

pub(crate) const TEST_CLIENT_ID: &str = "hedwige-test.apps.googleusercontent.com";

/// 등록된 토큰만 통과시키고 호출 횟수를 기록하는 검증기
#[derive(Default)]
pub(crate) struct StubVerifier {
    accepted: HashMap<String, GoogleIdClaims>,
    unreachable: bool,
    calls: AtomicUsize,
}

impl StubVerifier {
    pub(crate) fn accepting(token: &str, email: &str, name: &str, picture: &str) -> Self {
        let claims = GoogleIdClaims {
            iss: "https://accounts.google.com".to_string(),
            aud: TEST_CLIENT_ID.to_string(),
            sub: "1234567890".to_string(),
            exp: i64::MAX,
            iat: 0,
            email: email.to_string(),
            email_verified: Some(true),
            name: Some(name.to_string()),
            picture: Some(picture.to_string()),
        };

        Self {
            accepted: HashMap::from([(token.to_string(), claims)]),
            ..Self::default()
        }
    }

    /// Google 공개키 엔드포인트에 닿지 못하는 상황
    pub(crate) fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdTokenVerifier for StubVerifier {
    async fn verify(
        &self,
        credential: &str,
        audience: &str,
    ) -> Result<GoogleIdClaims, GoogleTokenError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.unreachable {
            return Err(GoogleTokenError::KeyFetch("connection timed out".to_string()));
        }

        match self.accepted.get(credential) {
            Some(claims) if claims.aud == audience => Ok(claims.clone()),
            Some(_) => Err(GoogleTokenError::Rejected(ErrorKind::InvalidAudience.into())),
            None => Err(GoogleTokenError::Rejected(ErrorKind::InvalidToken.into())),
        }
    }
}
