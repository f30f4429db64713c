//! 서버 및 실행 환경 설정 관리 모듈
//!
//! 바인딩 주소, 워커 수, Rate Limiting, 실행 환경 관련 설정을 관리합니다.

use super::ConfigSource;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn from_source(source: &ConfigSource<'_>) -> Self {
        source("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// HTTP 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn from_source(source: &ConfigSource<'_>) -> Self {
        Self {
            host: source("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or("PORT", source("PORT"), 5001),
            workers: parse_or("SERVER_WORKERS", source("SERVER_WORKERS"), 4),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_source(source: &ConfigSource<'_>) -> Self {
        Self {
            per_second: parse_or("RATE_LIMIT_PER_SECOND", source("RATE_LIMIT_PER_SECOND"), 100),
            burst_size: parse_or("RATE_LIMIT_BURST_SIZE", source("RATE_LIMIT_BURST_SIZE"), 200),
        }
    }
}

/// 숫자 설정값을 파싱하고, 실패하면 기본값을 사용합니다.
pub(crate) fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source_from(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("STAGE"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_server_config_defaults() {
        let vars = source_from(&[]);
        let config = ServerConfig::from_source(&|key| vars.get(key).cloned());

        assert_eq!(config.bind_address(), "127.0.0.1:5001");
        assert_eq!(config.workers, 4);
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let vars = source_from(&[
            ("PORT", "not-a-port"),
            ("RATE_LIMIT_PER_SECOND", "20"),
            ("RATE_LIMIT_BURST_SIZE", "-1"),
        ]);
        let source = |key: &str| vars.get(key).cloned();

        assert_eq!(ServerConfig::from_source(&source).port, 5001);

        let rate_limit = RateLimitConfig::from_source(&source);
        assert_eq!(rate_limit.per_second, 20);
        assert_eq!(rate_limit.burst_size, 200);
    }
}
