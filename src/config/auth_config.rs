//! # Authentication Configuration Module
//!
//! Google 로그인(ID 토큰 검증)과 브라우저 클라이언트의 CORS 허용 목록을 관리합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export GOOGLE_CLIENT_ID="123456789-abcdefg.apps.googleusercontent.com"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! export GOOGLE_CERTS_URI="https://www.googleapis.com/oauth2/v3/certs"
//! export GOOGLE_CLOCK_SKEW_SECONDS="0"
//! export GOOGLE_HTTP_TIMEOUT_SECONDS="10"
//! export GOOGLE_KEYS_MIN_REFRESH_SECONDS="60"
//! export CORS_ALLOWED_ORIGINS="http://localhost:4200,https://hedwige.example.com"
//! export CORS_MAX_AGE_SECONDS="3600"
//! ```

use std::time::Duration;

use super::ConfigSource;
use super::data_config::parse_or;
use crate::errors::AppError;

/// Google 공개키(JWKS) 기본 엔드포인트
pub const DEFAULT_GOOGLE_CERTS_URI: &str = "https://www.googleapis.com/oauth2/v3/certs";

/// Google ID 토큰의 `iss` 클레임으로 허용되는 값
pub const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// Google 로그인 설정
///
/// Google Cloud Console 에서 발급한 OAuth 2.0 Client ID 와
/// ID 토큰 검증에 필요한 부가 설정을 담습니다.
///
/// `client_id`는 토큰의 `aud` 클레임과 비교되어,
/// 다른 애플리케이션을 위해 발급된 토큰을 거부하는 데 사용됩니다.
#[derive(Debug, Clone)]
pub struct GoogleAuthConfig {
    /// 이 애플리케이션의 Client ID (audience)
    pub client_id: String,
    /// Google 공개키 JWKS URI
    pub certs_uri: String,
    /// `exp` 검증 시 허용하는 시계 오차 (초)
    pub clock_skew_seconds: u64,
    /// Google 엔드포인트 호출 타임아웃
    pub http_timeout: Duration,
    /// 모르는 kid 로 공개키를 강제 재조회하는 최소 간격 (초)
    pub min_key_refresh_seconds: u64,
}

impl GoogleAuthConfig {
    /// 설정 소스에서 Google 로그인 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// `GOOGLE_CLIENT_ID`가 없거나 비어 있으면 `AppError::ConfigError`를 반환합니다.
    pub fn from_source(source: &ConfigSource<'_>) -> Result<Self, AppError> {
        let client_id = source("GOOGLE_CLIENT_ID")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::ConfigError("GOOGLE_CLIENT_ID must be set".to_string()))?;

        let timeout_secs = parse_or(
            "GOOGLE_HTTP_TIMEOUT_SECONDS",
            source("GOOGLE_HTTP_TIMEOUT_SECONDS"),
            10u64,
        );

        Ok(Self {
            client_id,
            certs_uri: source("GOOGLE_CERTS_URI")
                .unwrap_or_else(|| DEFAULT_GOOGLE_CERTS_URI.to_string()),
            clock_skew_seconds: parse_or(
                "GOOGLE_CLOCK_SKEW_SECONDS",
                source("GOOGLE_CLOCK_SKEW_SECONDS"),
                0,
            ),
            http_timeout: Duration::from_secs(timeout_secs),
            min_key_refresh_seconds: parse_or(
                "GOOGLE_KEYS_MIN_REFRESH_SECONDS",
                source("GOOGLE_KEYS_MIN_REFRESH_SECONDS"),
                60,
            ),
        })
    }
}

/// CORS 허용 목록 설정
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub max_age_seconds: usize,
}

impl CorsConfig {
    /// Angular 개발 서버
    pub const DEFAULT_ORIGIN: &'static str = "http://localhost:4200";

    pub fn from_source(source: &ConfigSource<'_>) -> Self {
        let allowed_origins = source("CORS_ALLOWED_ORIGINS")
            .map(|raw| split_origins(&raw))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| vec![Self::DEFAULT_ORIGIN.to_string()]);

        Self {
            allowed_origins,
            max_age_seconds: parse_or("CORS_MAX_AGE_SECONDS", source("CORS_MAX_AGE_SECONDS"), 3600),
        }
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_google_config_requires_client_id() {
        let empty = vars(&[("GOOGLE_CLIENT_ID", "   ")]);
        let result = GoogleAuthConfig::from_source(&|key| empty.get(key).cloned());

        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn test_google_config_defaults() {
        let env = vars(&[("GOOGLE_CLIENT_ID", "hedwige.apps.googleusercontent.com")]);
        let config = GoogleAuthConfig::from_source(&|key| env.get(key).cloned()).unwrap();

        assert_eq!(config.client_id, "hedwige.apps.googleusercontent.com");
        assert_eq!(config.certs_uri, DEFAULT_GOOGLE_CERTS_URI);
        assert_eq!(config.clock_skew_seconds, 0);
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert_eq!(config.min_key_refresh_seconds, 60);
    }

    #[test]
    fn test_cors_origins_are_split_and_trimmed() {
        let env = vars(&[(
            "CORS_ALLOWED_ORIGINS",
            " http://localhost:4200/ , https://hedwige.example.com,,",
        )]);
        let config = CorsConfig::from_source(&|key| env.get(key).cloned());

        assert_eq!(
            config.allowed_origins,
            vec!["http://localhost:4200", "https://hedwige.example.com"]
        );
        assert_eq!(config.max_age_seconds, 3600);
    }

    #[test]
    fn test_cors_defaults_to_angular_dev_server() {
        let env = vars(&[("CORS_ALLOWED_ORIGINS", " , ")]);
        let config = CorsConfig::from_source(&|key| env.get(key).cloned());

        assert_eq!(config.allowed_origins, vec![CorsConfig::DEFAULT_ORIGIN]);
    }
}
