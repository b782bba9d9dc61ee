/// Judge client: the single point of entry for all remote code execution.
///
/// ARCHITECTURAL RULE: No other module may call the judge directly.
/// Handlers and the verdict engine depend on the `CodeExecutor` trait, never on
/// `Judge0Client`, so tests can substitute an in-process executor.
///
/// One `execute` call = one judge submission. The judge is asked to block until
/// the run reaches a terminal state (`wait=true`); this client never polls.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod languages;

pub use languages::judge_language_id;

const MAX_ATTEMPTS: u32 = 3;
/// Judge0 status id reported when the judge itself failed to run the submission.
const STATUS_INTERNAL_ERROR: u32 = 13;

#[derive(Debug, Error)]
pub enum JudgeError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Judge API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected judge response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Judge reported an internal error: {0}")]
    JudgeInternal(String),
}

/// Terminal status metadata as reported by the judge.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JudgeStatus {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub description: String,
}

/// Output of one completed run. Text fields are never absent: the judge's
/// `null` becomes an empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: String,
    pub compile_output: String,
    pub status: JudgeStatus,
}

impl ExecutionResult {
    pub fn compile_failed(&self) -> bool {
        !self.compile_output.is_empty()
    }

    pub fn runtime_failed(&self) -> bool {
        !self.stderr.is_empty()
    }
}

/// Runs source code against one stdin. `Ok` means the judge completed the run,
/// whatever the program did; `Err` means the run could not be obtained.
#[async_trait]
pub trait CodeExecutor: Send + Sync {
    async fn execute(
        &self,
        source_code: &str,
        language: &str,
        stdin: &str,
    ) -> Result<ExecutionResult, JudgeError>;
}

#[derive(Debug, Serialize)]
struct SubmissionRequest<'a> {
    source_code: &'a str,
    language_id: u32,
    stdin: &'a str,
}

#[derive(Debug, Deserialize)]
struct SubmissionResponse {
    stdout: Option<String>,
    stderr: Option<String>,
    compile_output: Option<String>,
    message: Option<String>,
    status: Option<JudgeStatus>,
}

impl SubmissionResponse {
    fn into_result(self) -> Result<ExecutionResult, JudgeError> {
        let status = self.status.unwrap_or_default();

        if status.id == STATUS_INTERNAL_ERROR {
            let detail = self
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| status.description.clone());
            return Err(JudgeError::JudgeInternal(detail));
        }

        Ok(ExecutionResult {
            stdout: self.stdout.unwrap_or_default(),
            stderr: self.stderr.unwrap_or_default(),
            compile_output: self.compile_output.unwrap_or_default(),
            status,
        })
    }
}

/// Client for a Judge0-compatible execution service.
#[derive(Clone)]
pub struct Judge0Client {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    retry_base_delay: Duration,
}

impl Judge0Client {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, JudgeError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.into(),
            api_key,
            retry_base_delay: Duration::from_secs(1),
        })
    }

    #[cfg(test)]
    fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    fn submissions_url(&self) -> String {
        format!("{}/submissions", self.base_url)
    }
}

#[async_trait]
impl CodeExecutor for Judge0Client {
    /// Submits one run and waits for the judge's terminal result.
    /// Retries on 429, 5xx and connection failures with exponential backoff.
    async fn execute(
        &self,
        source_code: &str,
        language: &str,
        stdin: &str,
    ) -> Result<ExecutionResult, JudgeError> {
        let language_id = judge_language_id(language)
            .ok_or_else(|| JudgeError::UnsupportedLanguage(language.to_string()))?;

        let request_body = SubmissionRequest {
            source_code,
            language_id,
            stdin,
        };

        let mut last_error: Option<JudgeError> = None;

        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                // Exponential backoff: base, 2x base
                let delay = self.retry_base_delay * (1 << (attempt - 1));
                warn!(
                    "Judge call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let mut request = self
                .client
                .post(self.submissions_url())
                .query(&[("base64_encoded", "false"), ("wait", "true")])
                .json(&request_body);
            if let Some(key) = &self.api_key {
                request = request.header("X-Auth-Token", key);
            }

            let response = match request.send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(JudgeError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Judge API returned {}: {}", status, body);
                last_error = Some(JudgeError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(JudgeError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let body = response.text().await?;
            let parsed: SubmissionResponse = serde_json::from_str(&body)?;
            let result = parsed.into_result()?;

            debug!(
                language,
                judge_status = result.status.id,
                "Judge call completed: {}",
                result.status.description
            );

            return Ok(result);
        }

        Err(last_error.unwrap_or(JudgeError::Api {
            status: 0,
            message: format!("no response after {MAX_ATTEMPTS} attempts"),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::{
        extract::{Query, State},
        http::StatusCode,
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};

    use super::*;

    #[derive(Clone)]
    struct FakeJudge {
        calls: Arc<AtomicUsize>,
        failures_before_success: usize,
        reply: Value,
        seen: Arc<std::sync::Mutex<Vec<(HashMap<String, String>, Value)>>>,
    }

    async fn fake_submissions(
        State(judge): State<FakeJudge>,
        Query(query): Query<HashMap<String, String>>,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        let n = judge.calls.fetch_add(1, Ordering::SeqCst);
        judge.seen.lock().unwrap().push((query, body));
        if n < judge.failures_before_success {
            return (StatusCode::SERVICE_UNAVAILABLE, Json(json!({"error": "busy"})));
        }
        (StatusCode::CREATED, Json(judge.reply.clone()))
    }

    async fn spawn_fake_judge(judge: FakeJudge) -> String {
        let app = Router::new()
            .route("/submissions", post(fake_submissions))
            .with_state(judge);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn fake_judge(failures_before_success: usize, reply: Value) -> FakeJudge {
        FakeJudge {
            calls: Arc::new(AtomicUsize::new(0)),
            failures_before_success,
            reply,
            seen: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    fn client(base_url: String) -> Judge0Client {
        Judge0Client::new(base_url, None, Duration::from_secs(5))
            .unwrap()
            .with_retry_base_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_unsupported_language_fails_before_network() {
        // Nothing listens on the discard port; reaching the network would be an Http error.
        let client = client("http://127.0.0.1:9".to_string());
        let err = client.execute("code", "brainfuck", "").await.unwrap_err();
        assert!(matches!(err, JudgeError::UnsupportedLanguage(ref l) if l == "brainfuck"));
    }

    #[tokio::test]
    async fn test_execute_sends_sync_non_base64_request() {
        let judge = fake_judge(
            0,
            json!({
                "stdout": "0 1\n",
                "stderr": null,
                "compile_output": null,
                "status": {"id": 3, "description": "Accepted"}
            }),
        );
        let base = spawn_fake_judge(judge.clone()).await;

        let result = client(base)
            .execute("print('0 1')", "python", "4\n2 7 11 15\n9\n")
            .await
            .unwrap();

        assert_eq!(result.stdout, "0 1\n");
        assert_eq!(result.stderr, "");
        assert_eq!(result.compile_output, "");
        assert_eq!(result.status.id, 3);

        let seen = judge.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (query, body) = &seen[0];
        assert_eq!(query.get("wait").map(String::as_str), Some("true"));
        assert_eq!(query.get("base64_encoded").map(String::as_str), Some("false"));
        assert_eq!(body["language_id"], 71);
        assert_eq!(body["stdin"], "4\n2 7 11 15\n9\n");
        assert_eq!(body["source_code"], "print('0 1')");
    }

    #[tokio::test]
    async fn test_execute_retries_on_server_error() {
        let judge = fake_judge(
            2,
            json!({"stdout": "ok", "status": {"id": 3, "description": "Accepted"}}),
        );
        let base = spawn_fake_judge(judge.clone()).await;

        let result = client(base).execute("x", "cpp", "").await.unwrap();

        assert_eq!(result.stdout, "ok");
        assert_eq!(judge.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_execute_gives_up_after_max_attempts() {
        let judge = fake_judge(usize::MAX, json!({}));
        let base = spawn_fake_judge(judge.clone()).await;

        let err = client(base).execute("x", "java", "").await.unwrap_err();

        assert!(matches!(err, JudgeError::Api { status: 503, .. }));
        assert_eq!(judge.calls.load(Ordering::SeqCst), MAX_ATTEMPTS as usize);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let parsed: SubmissionResponse = serde_json::from_str("{}").unwrap();
        let result = parsed.into_result().unwrap();
        assert_eq!(result, ExecutionResult::default());
        assert!(!result.compile_failed());
        assert!(!result.runtime_failed());
    }

    #[test]
    fn test_compile_output_marks_compile_failure() {
        let parsed: SubmissionResponse = serde_json::from_str(
            r#"{"stdout": null, "compile_output": "main.cpp:1: error", "status": {"id": 6, "description": "Compilation Error"}}"#,
        )
        .unwrap();
        let result = parsed.into_result().unwrap();
        assert!(result.compile_failed());
        assert_eq!(result.status.description, "Compilation Error");
    }

    #[test]
    fn test_judge_internal_error_is_not_a_completed_run() {
        let parsed: SubmissionResponse = serde_json::from_str(
            r#"{"message": "sandbox unavailable", "status": {"id": 13, "description": "Internal Error"}}"#,
        )
        .unwrap();
        let err = parsed.into_result().unwrap_err();
        assert!(matches!(err, JudgeError::JudgeInternal(ref m) if m == "sandbox unavailable"));
    }
}
