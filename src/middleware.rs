//! axum nonce 校验中间件
//!
//! 从请求头 `nonce` 读取客户端时间戳，不在允许窗口内的请求直接返回 401。

use axum::{
    Json, Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use nonce_validator::{Clock, NonceError, NonceValidator, SystemClock};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

/// 在请求处理任务之间共享的校验器
pub type SharedValidator<C = SystemClock> = Arc<NonceValidator<C>>;

/// nonce 校验失败时的响应
///
/// 两类错误统一返回 401，具体原因只写日志，不返回给客户端。
#[derive(Debug)]
pub struct NonceRejection(pub NonceError);

impl NonceRejection {
    pub fn error(&self) -> &NonceError {
        &self.0
    }
}

impl From<NonceError> for NonceRejection {
    fn from(err: NonceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for NonceRejection {
    fn into_response(self) -> Response {
        let status = StatusCode::UNAUTHORIZED;
        let body = Json(json!({
            "error": "Authentication failed",
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

/// 校验 `nonce` 请求头，通过后交给下一层
///
/// 缺失或非 UTF-8 的请求头按空字符串处理，得到解析错误。
pub async fn require_fresh_nonce<C: Clock + 'static>(
    State(validator): State<SharedValidator<C>>,
    request: Request,
    next: Next,
) -> Result<Response, NonceRejection> {
    if let Err(e) = validator.validate_source(request.headers()) {
        warn!(
            reason = e.kind(),
            method = %request.method(),
            uri = %request.uri(),
            "Rejected request with invalid nonce: {}",
            e
        );
        return Err(NonceRejection(e));
    }

    debug!("Nonce accepted: {} {}", request.method(), request.uri());
    Ok(next.run(request).await)
}

/// 为路由上的所有接口加上 nonce 校验
pub fn protect<C: Clock + 'static>(router: Router, validator: SharedValidator<C>) -> Router {
    router.layer(middleware::from_fn_with_state(
        validator,
        require_fresh_nonce::<C>,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn rejection_body(err: NonceError) -> (StatusCode, Value) {
        let response = NonceRejection::from(err).into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_out_of_range_response() {
        let (status, body) = rejection_body(NonceError::OutOfRange).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Authentication failed");
        assert_eq!(body["code"], 401);
    }

    #[tokio::test]
    async fn test_parse_error_response_hides_reason() {
        let err = nonce_validator::parse_nonce("abc").unwrap_err();
        let (status, body) = rejection_body(err).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(!body.to_string().contains("invalid digit"));
    }

    #[test]
    fn test_rejection_keeps_error() {
        let rejection = NonceRejection(NonceError::OutOfRange);
        assert!(rejection.error().is_out_of_range());
    }
}
