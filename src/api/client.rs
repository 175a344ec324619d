//! Blocking HTTP client for the campaign backend.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::directory::AgentDirectory;
use super::error::ApiError;
use super::types::{Agent, ConcurrencyInfo, Health, LeadStats, UploadReceipt};

/// Error body shape used by the backend for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Client for the campaign backend's HTTP API.
///
/// All calls are blocking; the application runs them on worker threads so
/// the UI keeps ticking. The base URL is injected so tests can point the
/// client at a local mock server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    /// Create a client for the backend at `base_url` with a global request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Fetch the configured voice agents.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for non-2xx responses (the status code is
    /// part of the message), [`ApiError::Transport`] when the backend is
    /// unreachable, and [`ApiError::Decode`] for malformed bodies.
    pub fn list_agents(&self) -> Result<Vec<Agent>, ApiError> {
        let response = self.http.get(self.endpoint("/api/v1/agents")).send()?;
        read_json(response)
    }

    /// Upload a CSV of leads and associate them with `agent_id`.
    ///
    /// Sends a multipart form with the file under `file` and the agent id
    /// under `agent_id`, exactly one request per call.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::File`] if the CSV cannot be read locally (no
    /// request is made), [`ApiError::Status`] with the server's `detail`
    /// field for rejections, and [`ApiError::Transport`]/[`ApiError::Decode`]
    /// for the remaining failure classes.
    pub fn upload_leads(&self, file: &Path, agent_id: &str) -> Result<UploadReceipt, ApiError> {
        let bytes = std::fs::read(file).map_err(|source| ApiError::File {
            path: file.to_path_buf(),
            source,
        })?;
        let file_name = file
            .file_name()
            .map_or_else(|| "leads.csv".to_string(), |n| n.to_string_lossy().into_owned());

        let part = reqwest::blocking::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("text/csv")
            .map_err(ApiError::Transport)?;
        let form = reqwest::blocking::multipart::Form::new()
            .part("file", part)
            .text("agent_id", agent_id.to_string());

        let response = self
            .http
            .post(self.endpoint("/api/v1/upload-leads"))
            .multipart(form)
            .send()?;
        read_json(response)
    }

    /// Fetch lead counts per call status.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::list_agents`].
    pub fn lead_stats(&self) -> Result<LeadStats, ApiError> {
        let response = self.http.get(self.endpoint("/api/v1/stats/leads")).send()?;
        read_json(response)
    }

    /// Fetch the current calling concurrency.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::list_agents`].
    pub fn concurrency(&self) -> Result<ConcurrencyInfo, ApiError> {
        let response = self
            .http
            .get(self.endpoint("/api/v1/stats/concurrency"))
            .send()?;
        read_json(response)
    }

    /// Probe backend health.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::list_agents`].
    pub fn health(&self) -> Result<Health, ApiError> {
        let response = self.http.get(self.endpoint("/api/v1/health")).send()?;
        read_json(response)
    }

    /// Ask the backend to start a calling batch for queued leads.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::list_agents`].
    pub fn trigger_call_batch(&self) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.endpoint("/api/v1/manual-call-batch"))
            .send()?;
        let _: serde::de::IgnoredAny = read_json(response)?;
        Ok(())
    }
}

impl AgentDirectory for ApiClient {
    fn list(&self) -> Result<Vec<Agent>, ApiError> {
        self.list_agents()
    }
}

/// Decode a response: non-2xx becomes [`ApiError::Status`] carrying the
/// server's `detail` when present, otherwise the body is parsed as `T`.
fn read_json<T: DeserializeOwned>(response: reqwest::blocking::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text()?;
    if !status.is_success() {
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.detail)
            .unwrap_or_else(|| "request failed".to_string());
        return Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        });
    }
    serde_json::from_str(&body).map_err(ApiError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(3);

    fn client_for(server: &mockito::Server) -> ApiClient {
        match ApiClient::new(server.url(), TIMEOUT) {
            Ok(client) => client,
            Err(err) => panic!("failed to build client: {err}"),
        }
    }

    #[test]
    fn list_agents_decodes_roster() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v1/agents")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":"agent_1","name":"Alpha"},{"id":"agent_2"}]"#)
            .create();

        let result = client_for(&server).list_agents();
        mock.assert();

        let agents = result.unwrap_or_default();
        assert_eq!(agents.len(), 2);
        assert_eq!(agents[0].display_label(), "Alpha");
        assert_eq!(agents[1].display_label(), "agent_2");
    }

    #[test]
    fn list_agents_empty_roster_is_ok() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v1/agents")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create();

        let result = client_for(&server).list_agents();
        mock.assert();

        assert_eq!(result.ok().map(|a| a.len()), Some(0));
    }

    #[test]
    fn list_agents_surfaces_status_code() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v1/agents")
            .with_status(500)
            .create();

        let result = client_for(&server).list_agents();
        mock.assert();

        match result {
            Err(err @ ApiError::Status { status: 500, .. }) => {
                assert!(err.to_string().contains("500"));
            }
            other => panic!("expected HTTP 500 error, got {other:?}"),
        }
    }

    #[test]
    fn list_agents_rejects_malformed_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v1/agents")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json")
            .create();

        let result = client_for(&server).list_agents();
        mock.assert();

        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn list_agents_transport_failure() {
        // Nothing listens on this port; the connect fails before any HTTP.
        let client = match ApiClient::new("http://127.0.0.1:9", TIMEOUT) {
            Ok(client) => client,
            Err(err) => panic!("failed to build client: {err}"),
        };
        assert!(matches!(client.list_agents(), Err(ApiError::Transport(_))));
    }

    fn write_csv(dir: &tempfile::TempDir) -> std::path::PathBuf {
        let path = dir.path().join("leads.csv");
        if let Err(err) = std::fs::write(&path, "name,phone_number\nAda,+15550100\n") {
            panic!("failed to write fixture: {err}");
        }
        path
    }

    #[test]
    fn upload_leads_reports_created_ids() -> Result<(), std::io::Error> {
        let dir = tempfile::tempdir()?;
        let csv = write_csv(&dir);

        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/v1/upload-leads")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"status":"success","message":"Successfully uploaded 3 leads","lead_ids":["1","2","3"]}"#,
            )
            .create();

        let result = client_for(&server).upload_leads(&csv, "agent_42");
        mock.assert();

        assert_eq!(result.ok().map(|r| r.lead_ids.len()), Some(3));
        Ok(())
    }

    #[test]
    fn upload_leads_surfaces_server_detail() -> Result<(), std::io::Error> {
        let dir = tempfile::tempdir()?;
        let csv = write_csv(&dir);

        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/v1/upload-leads")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail":"bad column"}"#)
            .create();

        let result = client_for(&server).upload_leads(&csv, "agent_42");
        mock.assert();

        match result {
            Err(err @ ApiError::Status { status: 400, .. }) => {
                assert!(err.to_string().contains("bad column"));
            }
            other => panic!("expected HTTP 400 error, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn upload_leads_generic_label_without_detail() -> Result<(), std::io::Error> {
        let dir = tempfile::tempdir()?;
        let csv = write_csv(&dir);

        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/v1/upload-leads")
            .with_status(500)
            .with_body("oops")
            .create();

        let result = client_for(&server).upload_leads(&csv, "agent_42");
        mock.assert();

        match result {
            Err(ApiError::Status { status, detail }) => {
                assert_eq!(status, 500);
                assert_eq!(detail, "request failed");
            }
            other => panic!("expected HTTP 500 error, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn upload_leads_missing_file_makes_no_request() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/v1/upload-leads")
            .expect(0)
            .create();

        let result =
            client_for(&server).upload_leads(Path::new("/nonexistent/leads.csv"), "agent_42");
        mock.assert();

        assert!(matches!(result, Err(ApiError::File { .. })));
    }

    #[test]
    fn lead_stats_decodes_counts() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v1/stats/leads")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"total_leads":10,"new_calls":4,"retry_calls":1,"callback_calls":0,"completed_calls":3,"failed_calls":2}"#,
            )
            .create();

        let result = client_for(&server).lead_stats();
        mock.assert();

        let stats = result.unwrap_or_default();
        assert_eq!(stats.total_leads, 10);
        assert_eq!(stats.completed_calls, 3);
    }

    #[test]
    fn concurrency_decodes_counts() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v1/stats/concurrency")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"current_concurrency":3,"concurrency_limit":15}"#)
            .create();

        let result = client_for(&server).concurrency();
        mock.assert();

        let info = result.unwrap_or_default();
        assert_eq!(info.current_concurrency, 3);
        assert_eq!(info.concurrency_limit, 15);
    }

    #[test]
    fn health_decodes_status() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v1/health")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":"healthy","service":"Lead Management Backend"}"#)
            .create();

        let result = client_for(&server).health();
        mock.assert();

        assert_eq!(result.ok().map(|h| h.status), Some("healthy".to_string()));
    }

    #[test]
    fn trigger_call_batch_posts_once() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/v1/manual-call-batch")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":"success","message":"Calling batch triggered successfully"}"#)
            .create();

        let result = client_for(&server).trigger_call_batch();
        mock.assert();

        assert!(result.is_ok());
    }

    #[test]
    fn trigger_call_batch_surfaces_rejection() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/v1/manual-call-batch")
            .with_status(503)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail":"Could not fetch concurrency information"}"#)
            .create();

        let result = client_for(&server).trigger_call_batch();
        mock.assert();

        match result {
            Err(err @ ApiError::Status { status: 503, .. }) => {
                assert!(err.to_string().contains("concurrency"));
            }
            other => panic!("expected HTTP 503 error, got {other:?}"),
        }
    }
}
