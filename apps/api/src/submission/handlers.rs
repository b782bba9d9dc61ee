//! Axum route handlers for the coding-practice API.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::catalog::PublicProblem;
use crate::errors::AppError;
use crate::state::AppState;
use crate::submission::engine::evaluate;
use crate::submission::models::{SubmitRequest, Verdict};

#[derive(Debug, Deserialize)]
pub struct CompanyQuery {
    pub company: Option<String>,
}

/// GET /api/coding-questions?company=<name>
///
/// Lists problems in catalog order, hidden tests withheld. A blank filter lists everything.
pub async fn handle_list_questions(
    State(state): State<AppState>,
    Query(params): Query<CompanyQuery>,
) -> Json<Vec<PublicProblem>> {
    let company = params
        .company
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    let problems = state
        .catalog
        .list_by_company(company)
        .into_iter()
        .map(|p| p.public_view())
        .collect();

    Json(problems)
}

/// POST /api/coding-questions/:id/submit
///
/// Validates the problem, the body and the language, in that order, then
/// evaluates the code against the selected tests. Compile/runtime failures of
/// the submitted code are a 200 with a non-Accepted status; only judge
/// failures become a 500.
pub async fn handle_submit(
    State(state): State<AppState>,
    Path(problem_id): Path<String>,
    body: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<Json<Verdict>, AppError> {
    let problem = state
        .catalog
        .find(&problem_id)
        .ok_or_else(|| AppError::NotFound(format!("Question {problem_id} not found")))?;

    // Decoded after the lookup so an unknown id is a 404 whatever the body holds.
    let Json(request) = body?;

    if !problem.allows_language(&request.language) {
        return Err(AppError::InvalidLanguage(format!(
            "Language '{}' not allowed for this question",
            request.language
        )));
    }

    let submission_id = Uuid::new_v4();
    let verdict = evaluate(
        state.judge.as_ref(),
        problem,
        &request.language,
        &request.code,
        request.mode,
    )
    .await?;

    info!(
        %submission_id,
        problem_id = %problem.id,
        language = %request.language,
        mode = ?request.mode,
        status = ?verdict.status,
        "Submission evaluated: {}/{} passed",
        verdict.passed_count,
        verdict.total_count
    );

    Ok(Json(verdict))
}
