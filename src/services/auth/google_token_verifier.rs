//! # Google ID 토큰 검증기
//!
//! Google 이 공개한 검증 절차를 그대로 따릅니다.
//!
//! ```text
//! credential (JWT)
//!    │ 1. 헤더 디코딩: alg == RS256, kid 존재
//!    ▼
//! Google JWKS (https://www.googleapis.com/oauth2/v3/certs)
//!    │ 2. kid 로 공개키 선택 (없으면 1회 재조회 - 키 로테이션)
//!    ▼
//! jsonwebtoken::decode
//!    │ 3. 서명, aud == client_id, iss ∈ {accounts.google.com, https://accounts.google.com}, exp
//!    ▼
//! GoogleIdClaims
//! ```
//!
//! 공개키 집합만 `Cache-Control: max-age` 동안 캐시합니다. 검증 결과는 캐시하지 않습니다.
//!
//! 모르는 kid 로 인한 강제 재조회는 최소 간격(기본 [`MIN_REFRESH_INTERVAL_SECONDS`]) 안에 한 번만 일어납니다.
//! 간격 안에서는 Google 을 호출하지 않고 바로 [`GoogleTokenError::UnknownKey`] 로 거부하며,
//! 캐시된 키가 있는 상태에서 재조회가 실패해도 토큰은 `UnknownKey` 로 거부됩니다.
//!
//! 검증 로직은 [`IdTokenVerifier`] trait 뒤에 있으므로 테스트에서는 스텁으로 교체할 수 있고,
//! 공개키 조회 역시 [`JwksSource`] trait 으로 분리되어 네트워크 없이 검증 절차 전체를 시험할 수 있습니다.

use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::jwk::{AlgorithmParameters, JwkSet};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use reqwest::header::CACHE_CONTROL;
use thiserror::Error;

use crate::config::{GOOGLE_ISSUERS, GoogleAuthConfig};
use crate::domain::models::GoogleIdClaims;
use crate::errors::{AppResult, ErrorContext};

/// `Cache-Control` 헤더가 없을 때 공개키를 보관하는 시간
const DEFAULT_KEYS_LIFETIME_HOURS: i64 = 1;

/// 모르는 kid 때문에 공개키를 강제로 다시 조회하는 기본 최소 간격
pub const MIN_REFRESH_INTERVAL_SECONDS: i64 = 60;

/// ID 토큰 검증 실패 원인
///
/// 원인은 서버 로그에만 남고, 클라이언트에게는 일반화된 메시지만 전달됩니다.
#[derive(Debug, Error)]
pub enum GoogleTokenError {
    /// JWT 형식이 아님 (헤더/페이로드 디코딩 실패)
    #[error("malformed token: {0}")]
    Malformed(#[source] jsonwebtoken::errors::Error),

    #[error("token header has no key id")]
    MissingKeyId,

    #[error("unsupported signing algorithm: {0:?}")]
    UnsupportedAlgorithm(Algorithm),

    /// 재조회 후에도 kid 에 해당하는 Google 공개키가 없음
    #[error("no Google signing key matches kid `{0}`")]
    UnknownKey(String),

    /// 서명, audience, issuer, 만료 검증 실패
    #[error("token rejected: {0}")]
    Rejected(#[source] jsonwebtoken::errors::Error),

    /// Google 공개키 엔드포인트 호출 실패
    #[error("failed to fetch Google signing keys: {0}")]
    KeyFetch(String),
}

impl GoogleTokenError {
    /// 토큰 자체가 아니라 Google 측 장애로 실패했는지 여부
    pub fn is_upstream(&self) -> bool {
        matches!(self, GoogleTokenError::KeyFetch(_))
    }
}

/// ID 토큰 검증 capability
///
/// 입력은 credential 과 이 애플리케이션의 Client ID(audience),
/// 출력은 검증된 클레임 또는 실패 원인입니다.
#[async_trait]
pub trait IdTokenVerifier: Send + Sync {
    async fn verify(
        &self,
        credential: &str,
        audience: &str,
    ) -> Result<GoogleIdClaims, GoogleTokenError>;
}

/// 한 번의 공개키 조회 결과
#[derive(Debug, Clone)]
pub struct FetchedKeys {
    pub keys: JwkSet,
    /// `Cache-Control: max-age` 에서 읽은 유효 기간
    pub max_age: Option<Duration>,
}

/// Google 공개키(JWKS) 공급원
#[async_trait]
pub trait JwksSource: Send + Sync {
    async fn fetch(&self) -> Result<FetchedKeys, GoogleTokenError>;
}

/// `reqwest`로 Google certs 엔드포인트를 호출하는 공급원
pub struct HttpJwksSource {
    client: reqwest::Client,
    uri: String,
}

impl HttpJwksSource {
    pub fn new(config: &GoogleAuthConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .context("Google HTTP 클라이언트 생성 실패")?;

        Ok(Self {
            client,
            uri: config.certs_uri.clone(),
        })
    }
}

#[async_trait]
impl JwksSource for HttpJwksSource {
    async fn fetch(&self) -> Result<FetchedKeys, GoogleTokenError> {
        let response = self
            .client
            .get(&self.uri)
            .send()
            .await
            .map_err(|e| GoogleTokenError::KeyFetch(format!("Google 공개키 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(GoogleTokenError::KeyFetch(format!(
                "Google 공개키 조회 실패: HTTP {}",
                response.status()
            )));
        }

        let max_age = response
            .headers()
            .get(CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_max_age);

        let keys = response
            .json::<JwkSet>()
            .await
            .map_err(|e| GoogleTokenError::KeyFetch(format!("Google 공개키 파싱 실패: {}", e)))?;

        log::debug!("🔑 Google 공개키 {}개 조회됨 (max-age: {:?})", keys.keys.len(), max_age);

        Ok(FetchedKeys { keys, max_age })
    }
}

/// `Cache-Control` 헤더에서 `max-age` 값을 읽습니다.
///
/// ```text
/// "public, max-age=19008, must-revalidate, no-transform" → 19008초
/// ```
pub fn parse_max_age(cache_control: &str) -> Option<Duration> {
    cache_control
        .split(',')
        .map(str::trim)
        .find_map(|directive| directive.strip_prefix("max-age="))
        .and_then(|seconds| seconds.trim().parse::<u32>().ok())
        .map(|seconds| Duration::seconds(i64::from(seconds)))
}

struct CachedKeys {
    keys: Arc<JwkSet>,
    fetched_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

/// Google 공개키로 ID 토큰을 검증하는 운영 구현체
pub struct GoogleIdTokenVerifier<S = HttpJwksSource> {
    source: S,
    cache: RwLock<Option<CachedKeys>>,
    last_forced_refresh: Mutex<Option<DateTime<Utc>>>,
    min_refresh_interval: Duration,
    leeway_seconds: u64,
}

impl GoogleIdTokenVerifier<HttpJwksSource> {
    /// 설정으로부터 Google certs 엔드포인트를 사용하는 검증기를 만듭니다.
    pub fn from_config(config: &GoogleAuthConfig) -> AppResult<Self> {
        let min_refresh_interval = i64::try_from(config.min_key_refresh_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or_else(|| Duration::seconds(MIN_REFRESH_INTERVAL_SECONDS));

        Ok(
            Self::with_source(HttpJwksSource::new(config)?, config.clock_skew_seconds)
                .with_min_refresh_interval(min_refresh_interval),
        )
    }
}

impl<S: JwksSource> GoogleIdTokenVerifier<S> {
    pub fn with_source(source: S, leeway_seconds: u64) -> Self {
        Self {
            source,
            cache: RwLock::new(None),
            last_forced_refresh: Mutex::new(None),
            min_refresh_interval: Duration::seconds(MIN_REFRESH_INTERVAL_SECONDS),
            leeway_seconds,
        }
    }

    pub fn with_min_refresh_interval(mut self, interval: Duration) -> Self {
        self.min_refresh_interval = interval;
        self
    }

    fn validation(&self, audience: &str) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[audience]);
        validation.set_issuer(&GOOGLE_ISSUERS[..]);
        validation.set_required_spec_claims(&["exp", "iss", "aud"]);
        validation.leeway = self.leeway_seconds;
        validation
    }

    fn cached_keys(&self) -> Option<Arc<JwkSet>> {
        let guard = self.cache.read().ok()?;
        guard
            .as_ref()
            .filter(|cached| cached.expires_at > Utc::now())
            .map(|cached| Arc::clone(&cached.keys))
    }

    async fn current_keys(&self, force_refresh: bool) -> Result<Arc<JwkSet>, GoogleTokenError> {
        if !force_refresh {
            if let Some(keys) = self.cached_keys() {
                return Ok(keys);
            }
        }

        let fetched = self.source.fetch().await?;
        let lifetime = fetched
            .max_age
            .unwrap_or_else(|| Duration::hours(DEFAULT_KEYS_LIFETIME_HOURS));
        let keys = Arc::new(fetched.keys);

        let now = Utc::now();
        if let Ok(mut guard) = self.cache.write() {
            *guard = Some(CachedKeys {
                keys: Arc::clone(&keys),
                fetched_at: now,
                expires_at: now + lifetime,
            });
        }

        Ok(keys)
    }

    /// 강제 재조회 권한을 얻습니다.
    ///
    /// 마지막 조회(정상 조회 포함) 또는 마지막 강제 재조회 시도로부터
    /// 최소 간격이 지나지 않았다면 `false` 입니다. 권한을 얻으면 시도 시각을 바로 기록하므로
    /// 동시에 들어온 요청 중 하나만 Google 을 호출합니다.
    fn claim_forced_refresh(&self) -> bool {
        let now = Utc::now();
        let fetched_at = self
            .cache
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|cached| cached.fetched_at));

        let Ok(mut last_attempt) = self.last_forced_refresh.lock() else {
            return false;
        };

        let recent = [fetched_at, *last_attempt]
            .into_iter()
            .flatten()
            .any(|at| now - at < self.min_refresh_interval);
        if recent {
            return false;
        }

        *last_attempt = Some(now);
        true
    }

    async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, GoogleTokenError> {
        let keys = self.current_keys(false).await?;
        if let Some(key) = find_rsa_key(&keys, kid)? {
            return Ok(key);
        }

        if !self.claim_forced_refresh() {
            return Err(GoogleTokenError::UnknownKey(kid.to_string()));
        }

        log::info!("🔄 kid `{}` 에 해당하는 공개키가 없어 Google 공개키를 다시 조회합니다", kid);
        let keys = match self.current_keys(true).await {
            Ok(keys) => keys,
            Err(e) => {
                // 캐시된 키로는 이미 검증할 수 없는 토큰이므로 업스트림 장애가 아닌 거부로 처리
                log::warn!("⚠️ Google 공개키 재조회 실패: {}", e);
                return Err(GoogleTokenError::UnknownKey(kid.to_string()));
            }
        };
        find_rsa_key(&keys, kid)?.ok_or_else(|| GoogleTokenError::UnknownKey(kid.to_string()))
    }
}

fn find_rsa_key(keys: &JwkSet, kid: &str) -> Result<Option<DecodingKey>, GoogleTokenError> {
    let Some(jwk) = keys.find(kid) else {
        return Ok(None);
    };

    match &jwk.algorithm {
        AlgorithmParameters::RSA(rsa) => DecodingKey::from_rsa_components(&rsa.n, &rsa.e)
            .map(Some)
            .map_err(|e| GoogleTokenError::KeyFetch(format!("잘못된 Google 공개키 `{}`: {}", kid, e))),
        _ => Err(GoogleTokenError::KeyFetch(format!(
            "Google 공개키 `{}` 가 RSA 키가 아닙니다",
            kid
        ))),
    }
}

#[async_trait]
impl<S: JwksSource> IdTokenVerifier for GoogleIdTokenVerifier<S> {
    async fn verify(
        &self,
        credential: &str,
        audience: &str,
    ) -> Result<GoogleIdClaims, GoogleTokenError> {
        let header = decode_header(credential).map_err(GoogleTokenError::Malformed)?;

        if header.alg != Algorithm::RS256 {
            return Err(GoogleTokenError::UnsupportedAlgorithm(header.alg));
        }
        let kid = header.kid.ok_or(GoogleTokenError::MissingKeyId)?;

        let decoding_key = self.decoding_key(&kid).await?;

        decode::<GoogleIdClaims>(credential, &decoding_key, &self.validation(audience))
            .map(|data| data.claims)
            .map_err(GoogleTokenError::Rejected)
    }
}
