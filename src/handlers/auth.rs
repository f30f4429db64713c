//! Authentication HTTP Handlers
//!
//! Google 로그인 credential 검증 엔드포인트를 처리합니다.
//!
//! # Endpoint
//!
//! - `POST /api/auth/google` - Google ID 토큰 검증
use actix_web::{HttpResponse, post, web};
use validator::Validate;

use crate::core::AppState;
use crate::domain::{GoogleAuthRequest, GoogleAuthResponse};
use crate::errors::AppError;
use crate::services::auth::MISSING_CREDENTIAL_MESSAGE;

/// Google 로그인 핸들러
///
/// 프론트엔드가 Google Identity Services 로부터 받은 credential 을 검증하고
/// 사용자의 email, 이름, 프로필 사진 URL 을 돌려줍니다.
///
/// # Endpoint
/// `POST /api/auth/google`
///
/// # Responses
///
/// * `200` - `{"email", "name", "picture"}`
/// * `400` - credential 누락
/// * `401` - 유효하지 않은 토큰
/// * `502` - Google 공개키 조회 실패
#[post("/google")]
pub async fn google_login(
    state: web::Data<AppState>,
    payload: web::Json<GoogleAuthRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate().map_err(|e| {
        log::debug!("credential 검증 실패: {}", e);
        AppError::ValidationError(MISSING_CREDENTIAL_MESSAGE.to_string())
    })?;

    let identity = state.google_auth.authenticate(&payload.credential).await?;

    Ok(HttpResponse::Ok().json(GoogleAuthResponse::from(identity)))
}
