//! JSON body extractor and responder

use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::{de::DeserializeOwned, Serialize};

use super::error::ApiError;

/// `axum::Json` whose rejections use the `{"status","message"}` envelope
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        AxumJson::<T>::from_request(req, state)
            .await
            .map(|AxumJson(value)| Json(value))
            .map_err(|rejection| {
                ApiError::bad_request(format!(
                    "invalid request format: '{}'",
                    rejection.body_text()
                ))
            })
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{self, StatusCode};
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: String,
    }

    fn request(content_type: &str, body: &'static str) -> Request {
        http::Request::builder()
            .method("POST")
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap()
    }

    async fn rejection_message(req: Request) -> String {
        let err = Json::<Payload>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        err.response.message
    }

    #[tokio::test]
    async fn test_extracts_valid_body() {
        let req = request("application/json", r#"{"name":"x"}"#);
        let Json(body) = Json::<Payload>::from_request(req, &()).await.unwrap();

        assert_eq!(body.name, "x");
    }

    #[tokio::test]
    async fn test_syntax_error_is_bad_request() {
        let message = rejection_message(request("application/json", "{oops")).await;
        assert!(message.starts_with("invalid request format: '"));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let message = rejection_message(request("text/plain", r#"{"name":"x"}"#)).await;
        assert!(message.starts_with("invalid request format"));
    }

    #[tokio::test]
    async fn test_serializes_response() {
        let response = Json(serde_json::json!({"ok": true})).into_response();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        assert_eq!(&bytes[..], br#"{"ok":true}"#);
    }
}
