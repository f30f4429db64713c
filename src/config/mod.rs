//! # Configuration Module
//!
//! 백엔드 서비스의 설정을 환경 변수에서 읽어 하나의 [`AppConfig`]로 묶습니다.
//! 전역 상태 대신 시작 시점에 한 번 로드되어 라우트/CORS/서버 구성에 명시적으로 전달됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, Rate Limiting, 실행 환경 설정
//! - [`auth_config`] - Google 로그인, CORS 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use hedwige_backend::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Server will bind to {}", config.server.bind_address());
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use crate::errors::AppError;

/// 설정 키를 받아 값을 돌려주는 조회 함수
///
/// 운영에서는 `std::env::var`, 테스트에서는 `HashMap` 조회가 사용됩니다.
pub type ConfigSource<'a> = dyn Fn(&str) -> Option<String> + 'a;

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub rate_limit: RateLimitConfig,
    pub google: GoogleAuthConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 로드합니다.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_source(&|key| std::env::var(key).ok())
    }

    pub fn from_source(source: &ConfigSource<'_>) -> Result<Self, AppError> {
        Ok(Self {
            environment: Environment::from_source(source),
            server: ServerConfig::from_source(source),
            rate_limit: RateLimitConfig::from_source(source),
            google: GoogleAuthConfig::from_source(source)?,
            cors: CorsConfig::from_source(source),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_app_config_from_source() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("GOOGLE_CLIENT_ID", "hedwige.apps.googleusercontent.com"),
            ("ENVIRONMENT", "dev"),
            ("PORT", "8080"),
        ]);
        let config =
            AppConfig::from_source(&|key| vars.get(key).map(|v| v.to_string())).unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.google.client_id, "hedwige.apps.googleusercontent.com");
    }

    #[test]
    fn test_app_config_fails_without_client_id() {
        let result = AppConfig::from_source(&|_| None);

        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }
}
