//! API 라우트 설정 모듈
//!
//! 헬스체크와 Google 로그인 엔드포인트를 등록합니다.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/` | [`health_check`] |
//! | POST | `/api/auth/google` | [`handlers::auth::google_login`] |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{HttpRequest, HttpResponse, error, get, web};

use crate::domain::HealthResponse;
use crate::errors::AppError;
use crate::handlers;

/// 헬스체크 응답 메시지
pub const READINESS_MESSAGE: &str = "Hedwige est prête !";

/// 모든 라우트를 설정합니다
///
/// JSON 본문 파싱 실패도 다른 에러와 같은 `{"error": "..."}` 형태로 응답하도록
/// `JsonConfig` 에러 핸들러를 함께 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// - `POST /api/auth/google` - Google ID 토큰 검증
///
/// ```bash
/// curl -X POST http://localhost:5001/api/auth/google \
///   -H "Content-Type: application/json" \
///   -d '{"credential":"eyJhbGciOiJSUzI1NiIsImtpZCI6..."}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/auth").service(handlers::auth::google_login));
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("잘못된 JSON 요청 본문: {}", err);
    AppError::ValidationError("요청 본문이 올바른 JSON 이 아닙니다".to_string()).into()
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
/// 요청 헤더나 쿼리 파라미터와 무관하게 항상 같은 응답을 돌려줍니다.
///
/// ```bash
/// curl http://localhost:5001/
/// ```
///
/// Response:
/// ```json
/// { "message": "Hedwige est prête !" }
/// ```
#[get("/")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        message: READINESS_MESSAGE,
    })
}
