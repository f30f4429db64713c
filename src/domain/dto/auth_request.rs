//! 인증 요청관련 DTO
//!
//! Google 로그인 버튼이 프론트엔드에 넘겨준 credential(ID 토큰)을 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// Google 로그인 요청 구조체
///
/// `credential` 필드가 아예 없는 본문(`{}`)도 역직렬화에는 성공하고,
/// 이후 `validate()` 단계에서 빈 문자열과 똑같이 거부됩니다.
/// 클라이언트에게 보여줄 메시지는 핸들러가 정합니다.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct GoogleAuthRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub credential: String,
}
