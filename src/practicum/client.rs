use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use super::error::PracticumError;

/// Anything that can return the raw homework-status body for a time window.
///
/// The poller only depends on this trait, so tests can feed it canned bodies.
pub trait HomeworkSource {
    async fn fetch(&self, from_date: i64) -> Result<Value, PracticumError>;
}

pub struct PracticumClient {
    token: String,
    client: Client,
    endpoint: String,
}

impl PracticumClient {
    /// `endpoint` comes from config; tests point it at a local mock server.
    pub fn new(
        token: String,
        endpoint: String,
        timeout: Duration,
    ) -> Result<Self, PracticumError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            token,
            client,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl HomeworkSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, PracticumError> {
        tracing::debug!(endpoint = %self.endpoint, from_date, "requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PracticumError::Status {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(PracticumError::InvalidJson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PracticumClient {
        PracticumClient::new(
            "practicum-token".into(),
            format!("{}/api/user_api/homework_statuses/", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn fetch_sends_oauth_header_and_cursor() {
        let server = MockServer::start().await;
        let body = json!({
            "homeworks": [{"homework_name": "proj1", "status": "approved"}],
            "current_date": 1700000000
        });
        Mock::given(method("GET"))
            .and(path("/api/user_api/homework_statuses/"))
            .and(header("Authorization", "OAuth practicum-token"))
            .and(query_param("from_date", "1699990000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&server)
            .await;

        let value = client_for(&server).fetch(1699990000).await.unwrap();
        assert_eq!(value, body);
    }

    #[tokio::test]
    async fn non_success_status_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.fetch(0).await.unwrap_err();
        match err {
            PracticumError::Status { endpoint, status } => {
                assert_eq!(status, 500);
                assert_eq!(endpoint, client.endpoint());
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unauthorized_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch(0).await.unwrap_err();
        assert!(matches!(err, PracticumError::Status { status: 401, .. }));
    }

    #[tokio::test]
    async fn invalid_json_body_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch(0).await.unwrap_err();
        assert!(matches!(err, PracticumError::InvalidJson(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let client = PracticumClient::new(
            "t".into(),
            "http://127.0.0.1:1/".into(),
            Duration::from_secs(2),
        )
        .unwrap();
        let err = client.fetch(0).await.unwrap_err();
        assert!(matches!(err, PracticumError::Network(_)));
    }
}
