//! Problem Catalog — immutable, in-memory problem set built once at startup.
//!
//! `AppState` holds an `Arc<ProblemCatalog>`; nothing mutates it after
//! construction, so concurrent requests read it without locking.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::info;

pub mod builtin;
pub mod models;

pub use models::{Problem, PublicProblem, TestCase, TestKind};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Problem with empty id")]
    EmptyId,

    #[error("Duplicate problem id '{0}'")]
    DuplicateId(String),

    #[error("Problem '{0}' has no allowed languages")]
    NoLanguages(String),

    #[error("Problem '{problem}': test '{test}' is listed as {listed:?} but tagged {tagged:?}")]
    KindMismatch {
        problem: String,
        test: String,
        listed: TestKind,
        tagged: TestKind,
    },
}

#[derive(Debug)]
pub struct ProblemCatalog {
    problems: Vec<Problem>,
}

impl ProblemCatalog {
    /// Validates and wraps a problem list. Declaration order is preserved for listings.
    pub fn new(problems: Vec<Problem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();

        for problem in &problems {
            if problem.id.trim().is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !seen.insert(problem.id.as_str()) {
                return Err(CatalogError::DuplicateId(problem.id.clone()));
            }
            if problem.allowed_languages.is_empty() {
                return Err(CatalogError::NoLanguages(problem.id.clone()));
            }
            check_kinds(problem, &problem.sample_tests, TestKind::Sample)?;
            check_kinds(problem, &problem.hidden_tests, TestKind::Hidden)?;
        }

        Ok(Self { problems })
    }

    /// The problem set shipped with the service.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin::problems())
    }

    /// Loads a JSON array of problems from disk.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let problems: Vec<Problem> = serde_json::from_str(&raw)?;
        let catalog = Self::new(problems)?;
        info!("Loaded {} problems from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn find(&self, id: &str) -> Option<&Problem> {
        self.problems.iter().find(|p| p.id == id)
    }

    /// Case-insensitive exact match on the company tag. `None` returns everything.
    pub fn list_by_company(&self, company: Option<&str>) -> Vec<&Problem> {
        match company {
            Some(company) => {
                let wanted = company.to_lowercase();
                self.problems
                    .iter()
                    .filter(|p| p.company.to_lowercase() == wanted)
                    .collect()
            }
            None => self.problems.iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

fn check_kinds(
    problem: &Problem,
    tests: &[TestCase],
    listed: TestKind,
) -> Result<(), CatalogError> {
    match tests.iter().find(|t| t.kind != listed) {
        Some(test) => Err(CatalogError::KindMismatch {
            problem: problem.id.clone(),
            test: test.name.clone(),
            listed,
            tagged: test.kind,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn problem(id: &str, company: &str) -> Problem {
        Problem {
            id: id.to_string(),
            title: format!("Problem {id}"),
            company: company.to_string(),
            difficulty: "Easy".to_string(),
            description: String::new(),
            input_format: String::new(),
            output_format: String::new(),
            constraints: vec![],
            sample_tests: vec![TestCase::sample("Sample 1", "1\n", "1\n")],
            hidden_tests: vec![TestCase::hidden("Hidden 1", "2\n", "2\n")],
            allowed_languages: vec!["cpp".to_string()],
        }
    }

    #[test]
    fn test_find_known_and_unknown() {
        let catalog =
            ProblemCatalog::new(vec![problem("a", "Acme"), problem("b", "Beta")]).unwrap();
        assert_eq!(catalog.find("b").map(|p| p.title.as_str()), Some("Problem b"));
        assert!(catalog.find("zzz").is_none());
    }

    #[test]
    fn test_list_by_company_is_case_insensitive_exact() {
        let catalog = ProblemCatalog::new(vec![
            problem("a", "Google"),
            problem("b", "Amazon"),
            problem("c", "google"),
        ])
        .unwrap();

        let ids: Vec<_> = catalog
            .list_by_company(Some("GOOGLE"))
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);

        // exact, not substring
        assert!(catalog.list_by_company(Some("goog")).is_empty());
        assert_eq!(catalog.list_by_company(None).len(), 3);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = ProblemCatalog::new(vec![problem("a", "X"), problem("a", "Y")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "a"));
    }

    #[test]
    fn test_empty_languages_rejected() {
        let mut p = problem("a", "X");
        p.allowed_languages.clear();
        let err = ProblemCatalog::new(vec![p]).unwrap_err();
        assert!(matches!(err, CatalogError::NoLanguages(_)));
    }

    #[test]
    fn test_hidden_test_in_sample_list_rejected() {
        let mut p = problem("a", "X");
        p.sample_tests.push(TestCase::hidden("Sneaky", "3\n", "3\n"));
        let err = ProblemCatalog::new(vec![p]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::KindMismatch { listed: TestKind::Sample, tagged: TestKind::Hidden, .. }
        ));
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = ProblemCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 11);
        let two_sum = catalog.find("g1").unwrap();
        assert_eq!(two_sum.title, "Two Sum");
        assert_eq!(two_sum.sample_tests.len(), 1);
        assert_eq!(two_sum.hidden_tests.len(), 2);
        assert_eq!(catalog.list_by_company(Some("meta")).len(), 2);
    }

    #[test]
    fn test_from_json_file_loads_problems() {
        let json = serde_json::to_string(&vec![problem("x1", "Acme")]).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = ProblemCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("x1").unwrap().hidden_tests[0].kind, TestKind::Hidden);
    }

    #[test]
    fn test_from_json_file_requires_explicit_kind() {
        let json = r#"[{
            "id": "x1", "title": "T", "company": "Acme", "difficulty": "Easy",
            "description": "", "input_format": "", "output_format": "",
            "sample_tests": [{"name": "S", "input": "1", "output": "1"}],
            "allowed_languages": ["cpp"]
        }]"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let err = ProblemCatalog::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_from_json_file_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProblemCatalog::from_json_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
