//! HTTP course catalog client

use async_trait::async_trait;

use super::http_client::{LookupConfig, LookupHttpClient};
use crate::domain::lookup::{Course, CourseLookup};
use crate::domain::DomainError;

/// Course lookup backed by the course service HTTP API
#[derive(Debug, Clone)]
pub struct HttpCourseClient {
    http: LookupHttpClient,
}

impl HttpCourseClient {
    pub fn new(config: &LookupConfig) -> Result<Self, DomainError> {
        Ok(Self {
            http: LookupHttpClient::new(config, "courses", "courses")?,
        })
    }
}

#[async_trait]
impl CourseLookup for HttpCourseClient {
    async fn get(&self, id: &str) -> Result<Course, DomainError> {
        self.http
            .fetch::<Course>(id)
            .await?
            .ok_or_else(|| DomainError::course_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_existing_course() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/courses/c1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": 200,
                "data": {"id": "c1", "name": "Rust 101"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpCourseClient::new(&LookupConfig::new(server.uri())).unwrap();
        let course = client.get("c1").await.unwrap();

        assert_eq!(course.id, "c1");
        assert_eq!(course.name.as_deref(), Some("Rust 101"));
    }

    #[tokio::test]
    async fn test_missing_course() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/courses/c404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = HttpCourseClient::new(&LookupConfig::new(server.uri())).unwrap();
        let err = client.get("c404").await.unwrap_err();

        assert_eq!(err, DomainError::course_not_found("c404"));
    }

    #[tokio::test]
    async fn test_fragment_in_id_not_dropped() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/courses/c1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "c1"}})),
            )
            .expect(0)
            .mount(&server)
            .await;

        let client = HttpCourseClient::new(&LookupConfig::new(server.uri())).unwrap();
        let err = client.get("c1#x").await.unwrap_err();

        assert_eq!(err, DomainError::course_not_found("c1#x"));
    }

    #[tokio::test]
    async fn test_bad_gateway_is_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let client = HttpCourseClient::new(&LookupConfig::new(server.uri())).unwrap();
        let err = client.get("c1").await.unwrap_err();

        assert!(matches!(err, DomainError::Upstream { ref service, .. } if service == "courses"));
    }
}
