//! 애플리케이션 상태
//!
//! 모든 워커가 `web::Data<AppState>`로 공유합니다. 내부에 요청 간 가변 상태는
//! Google 공개키 캐시뿐이며, 이는 검증기 안에 캡슐화되어 있습니다.

use std::sync::Arc;

use crate::config::{AppConfig, GoogleAuthConfig};
use crate::errors::AppResult;
use crate::services::auth::{GoogleAuthService, GoogleIdTokenVerifier, IdTokenVerifier};

/// 핸들러에 주입되는 서비스 묶음
pub struct AppState {
    pub google_auth: GoogleAuthService,
}

impl AppState {
    /// 주어진 검증기로 상태를 만듭니다. 테스트에서는 스텁 검증기를 넘깁니다.
    pub fn new(config: &GoogleAuthConfig, verifier: Arc<dyn IdTokenVerifier>) -> Self {
        Self {
            google_auth: GoogleAuthService::new(verifier, config.client_id.clone()),
        }
    }

    /// Google certs 엔드포인트를 사용하는 운영용 상태를 만듭니다.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let verifier = GoogleIdTokenVerifier::from_config(&config.google)?;
        log::info!("🔐 Google ID 토큰 검증기 준비 완료 (audience: {})", config.google.client_id);

        Ok(Self::new(&config.google, Arc::new(verifier)))
    }
}
