//! CORS 미들웨어 구성
//!
//! 브라우저에서 동작하는 Angular 프론트엔드가 API 를 호출할 수 있도록
//! 설정된 Origin 만 허용합니다.

use actix_cors::Cors;
use actix_web::http::header;

use crate::config::CorsConfig;

/// CORS 설정을 구성합니다
///
/// `allowed_origins`에 `*`가 들어 있으면 위치와 상관없이 모든 Origin 을 허용하고,
/// 나머지 항목은 무시합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let cors = configure_cors(&config.cors);
/// App::new().wrap(cors)
/// ```
pub fn configure_cors(config: &CorsConfig) -> Cors {
    let cors = if config.allowed_origins.iter().any(|origin| origin == "*") {
        Cors::default().allow_any_origin()
    } else {
        config
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(config.max_age_seconds)
}
