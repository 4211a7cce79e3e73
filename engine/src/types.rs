use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Concept record as persisted in the catalogue JSON.
/// Every field is optional on disk and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConceptRecord {
    /// Normalized key; filled from the enclosing JSON object key on load
    #[serde(skip_serializing)]
    pub key: String,
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub basic_ops: Vec<String>,
    pub principle: String,
    pub description: String,
    pub relations: Vec<String>,
    pub use_cases: Vec<String>,
}

impl ConceptRecord {
    /// Display name, falling back to the key for unnamed records
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.key
        } else {
            &self.name
        }
    }

    /// Case-insensitive membership test against the relation tags
    pub fn has_relation(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.relations.iter().any(|r| r.to_lowercase() == tag)
    }
}

/// Static seed entry the catalogue builder starts from
#[derive(Debug, Clone, Copy)]
pub struct SeedConcept {
    pub key: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub category: &'static str,
    pub basic_ops: &'static [&'static str],
    pub principle: &'static str,
    pub description: &'static str,
}

/// Exact hit: the record together with the key it was stored under
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExactHit {
    pub key: String,
    pub record: ConceptRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzyHit {
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub match_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationHit {
    pub key: String,
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordHit {
    pub key: String,
    pub name: String,
    pub snippet: String,
}

/// Results of all four strategies for one raw query
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompositeSearchResult {
    pub exact: Option<ExactHit>,
    pub fuzzy: Vec<FuzzyHit>,
    pub related: Vec<RelationHit>,
    pub keyword: Vec<KeywordHit>,
}

/// Strategy that produced a selected concept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSource {
    Exact,
    Fuzzy,
    Keyword,
    None,
}

impl MatchSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchSource::Exact => "exact",
            MatchSource::Fuzzy => "fuzzy",
            MatchSource::Keyword => "keyword",
            MatchSource::None => "none",
        }
    }
}

/// Catalogue statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub concept_count: usize,
    /// Sum of relation-set sizes, duplicates across records included
    pub relation_tag_count: usize,
    pub source: String,
}

/// One relation tag of a neighborhood and the concepts sharing it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagNeighbors {
    pub tag: String,
    pub concepts: Vec<RelationHit>,
}

/// Local graph around one concept: concept -> tag -> neighboring concepts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighborhood {
    pub key: String,
    pub name: String,
    pub tags: Vec<TagNeighbors>,
}

/// Search and rendering knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of fuzzy results (default: 5)
    pub fuzzy_limit: usize,
    /// Minimum similarity for a fuzzy result (default: 0.6)
    pub fuzzy_cutoff: f64,
    /// Characters kept on each side of a keyword match (default: 60)
    pub snippet_window: usize,
    /// Column width for wrapped descriptions (default: 90)
    pub wrap_width: usize,
    /// Neighbors listed per relation tag in a neighborhood (default: 6)
    pub neighbor_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fuzzy_limit: 5,
            fuzzy_cutoff: 0.6,
            snippet_window: 60,
            wrap_width: 90,
            neighbor_limit: 6,
        }
    }
}

pub type KgResult<T> = Result<T, KgError>;

#[derive(Error, Debug)]
pub enum KgError {
    #[error("Catalogue not found: {0}")]
    NotFound(std::path::PathBuf),

    #[error("Unknown concept: {0}")]
    UnknownConcept(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_defaults_for_missing_fields() {
        let record: ConceptRecord = serde_json::from_str(r#"{"name": "Stack"}"#).unwrap();
        assert_eq!(record.name, "Stack");
        assert!(record.basic_ops.is_empty());
        assert!(record.relations.is_empty());
        assert_eq!(record.description, "");
    }

    #[test]
    fn test_has_relation_ignores_case() {
        let record = ConceptRecord {
            relations: vec!["LIFO_Structure".to_string()],
            ..Default::default()
        };
        assert!(record.has_relation("lifo_structure"));
        assert!(record.has_relation("LIFO_STRUCTURE"));
        assert!(!record.has_relation("lifo"));
    }

    #[test]
    fn test_display_name_falls_back_to_key() {
        let record = ConceptRecord {
            key: "bst".to_string(),
            ..Default::default()
        };
        assert_eq!(record.display_name(), "bst");
    }

    #[test]
    fn test_config_partial_json() {
        let config: SearchConfig = serde_json::from_str(r#"{"fuzzy_limit": 3}"#).unwrap();
        assert_eq!(config.fuzzy_limit, 3);
        assert_eq!(config.fuzzy_cutoff, 0.6);
        assert_eq!(config.snippet_window, 60);
    }

    #[test]
    fn test_match_source_serializes_lowercase() {
        let json = serde_json::to_string(&MatchSource::Keyword).unwrap();
        assert_eq!(json, "\"keyword\"");
        assert_eq!(MatchSource::None.as_str(), "none");
    }
}
