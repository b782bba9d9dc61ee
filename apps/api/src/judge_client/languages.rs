//! Language identifiers accepted by the catalog, mapped to the judge's runtime ids.
//!
//! Must stay in sync with the judge's own language registry
//! (`GET /languages` on a Judge0 instance).

/// (catalog identifier, Judge0 language_id)
const LANGUAGE_TABLE: &[(&str, u32)] = &[
    ("cpp", 54),        // C++ (GCC 9.2.0)
    ("java", 62),       // Java (OpenJDK 13.0.1)
    ("python", 71),     // Python (3.8.1)
    ("javascript", 63), // JavaScript (Node.js 12.14.0)
];

/// Returns the judge runtime id for a catalog language identifier.
pub fn judge_language_id(language: &str) -> Option<u32> {
    LANGUAGE_TABLE
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, id)| *id)
}

/// All language identifiers the judge adapter can run.
pub fn supported_languages() -> impl Iterator<Item = &'static str> {
    LANGUAGE_TABLE.iter().map(|(name, _)| *name)
}
