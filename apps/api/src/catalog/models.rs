use serde::{Deserialize, Serialize};

/// Whether a test case may be shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestKind {
    Sample,
    Hidden,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub kind: TestKind,
    pub input: String,
    /// Expected stdout; compared after trimming both sides.
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl TestCase {
    pub fn sample(name: &str, input: &str, output: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: TestKind::Sample,
            input: input.to_string(),
            output: output.to_string(),
            explanation: None,
        }
    }

    pub fn hidden(name: &str, input: &str, output: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: TestKind::Hidden,
            input: input.to_string(),
            output: output.to_string(),
            explanation: None,
        }
    }

    pub fn explained(mut self, explanation: &str) -> Self {
        self.explanation = Some(explanation.to_string());
        self
    }
}

/// Full problem definition, hidden tests included. Never leaves the process
/// as-is; listings go through `PublicProblem`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub title: String,
    pub company: String,
    /// Free-form ("Easy" / "Medium" / "Hard" in the built-in set).
    pub difficulty: String,
    pub description: String,
    pub input_format: String,
    pub output_format: String,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub sample_tests: Vec<TestCase>,
    #[serde(default)]
    pub hidden_tests: Vec<TestCase>,
    pub allowed_languages: Vec<String>,
}

impl Problem {
    pub fn allows_language(&self, language: &str) -> bool {
        self.allowed_languages.iter().any(|l| l == language)
    }

    pub fn public_view(&self) -> PublicProblem {
        PublicProblem {
            id: self.id.clone(),
            title: self.title.clone(),
            company: self.company.clone(),
            difficulty: self.difficulty.clone(),
            description: self.description.clone(),
            input_format: self.input_format.clone(),
            output_format: self.output_format.clone(),
            constraints: self.constraints.clone(),
            sample_tests: self.sample_tests.clone(),
            hidden_test_count: self.hidden_tests.len(),
            allowed_languages: self.allowed_languages.clone(),
        }
    }
}

/// Browsing projection of a `Problem`: hidden tests are reduced to a count.
#[derive(Debug, Clone, Serialize)]
pub struct PublicProblem {
    pub id: String,
    pub title: String,
    pub company: String,
    pub difficulty: String,
    pub description: String,
    pub input_format: String,
    pub output_format: String,
    pub constraints: Vec<String>,
    pub sample_tests: Vec<TestCase>,
    pub hidden_test_count: usize,
    pub allowed_languages: Vec<String>,
}
