use std::sync::Arc;

use crate::catalog::ProblemCatalog;
use crate::judge_client::CodeExecutor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup, read-only afterwards.
    pub catalog: Arc<ProblemCatalog>,
    /// Judge backend. Default: Judge0Client. Tests swap in scripted executors.
    pub judge: Arc<dyn CodeExecutor>,
}
