use crate::format;
use crate::parse::strip_query_prefix;
use crate::store::ConceptStore;
use crate::types::{CompositeSearchResult, ConceptRecord, FuzzyHit, MatchSource};
use crate::SearchEngine;
use serde::Serialize;

/// Concept picked from a composite result, with the key it is stored under
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub key: Option<String>,
    pub record: Option<ConceptRecord>,
    pub source: MatchSource,
}

impl Selection {
    fn none() -> Self {
        Selection {
            key: None,
            record: None,
            source: MatchSource::None,
        }
    }

    fn resolve(store: &ConceptStore, key: &str, source: MatchSource) -> Option<Self> {
        store.get(key).map(|record| Selection {
            key: Some(key.to_string()),
            record: Some(record.clone()),
            source,
        })
    }
}

/// Pick the concept to explain: exact, then best fuzzy, then first keyword
///
/// Fuzzy and keyword hits carry only keys, so records are looked up in
/// `store`; a key the store does not hold falls through to the next
/// strategy. Relation hits alone never select a concept.
pub fn select(store: &ConceptStore, results: &CompositeSearchResult) -> Selection {
    if let Some(hit) = &results.exact {
        return Selection {
            key: Some(hit.key.clone()),
            record: Some(hit.record.clone()),
            source: MatchSource::Exact,
        };
    }

    // First hit wins among equal scores
    let mut best_fuzzy: Option<&FuzzyHit> = None;
    for hit in &results.fuzzy {
        if best_fuzzy.map_or(true, |best| hit.match_score > best.match_score) {
            best_fuzzy = Some(hit);
        }
    }
    if let Some(selection) =
        best_fuzzy.and_then(|hit| Selection::resolve(store, &hit.key, MatchSource::Fuzzy))
    {
        return selection;
    }

    results
        .keyword
        .iter()
        .find_map(|hit| Selection::resolve(store, &hit.key, MatchSource::Keyword))
        .unwrap_or_else(Selection::none)
}

/// Tutor response for one question
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    /// Text that was searched for, after prefix stripping
    pub query: String,
    pub matched_key: Option<String>,
    pub match_source: MatchSource,
    pub concept: Option<ConceptRecord>,
    pub answer_text: String,
}

/// Deterministic, catalogue-only DSA tutor
pub struct Tutor<'a> {
    engine: &'a SearchEngine,
}

impl<'a> Tutor<'a> {
    pub fn new(engine: &'a SearchEngine) -> Self {
        Tutor { engine }
    }

    /// Answer a free-text question
    /// A leading "explain", "what is" or "define" is stripped first.
    pub fn answer(&self, question: &str) -> Answer {
        self.explain_concept(strip_query_prefix(question))
    }

    /// Explain a concept named directly, without prefix handling
    pub fn explain_concept(&self, name: &str) -> Answer {
        let query = name.trim();
        if query.is_empty() {
            return Answer {
                query: String::new(),
                matched_key: None,
                match_source: MatchSource::None,
                concept: None,
                answer_text: format::EMPTY_QUERY_MESSAGE.to_string(),
            };
        }

        let results = self.engine.search_all(query);
        let selection = select(self.engine.store(), &results);
        tracing::debug!(
            query,
            source = selection.source.as_str(),
            key = ?selection.key,
            "selected concept"
        );

        let answer_text = match &selection.record {
            Some(record) => format::render_concept(record, self.engine.config().wrap_width),
            None => format::not_found_message(query),
        };

        Answer {
            query: query.to_string(),
            matched_key: selection.key,
            match_source: selection.source,
            concept: selection.record,
            answer_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExactHit, KeywordHit, RelationHit, SearchConfig};
    use std::sync::Arc;

    const CATALOGUE: &str = r#"{
        "stack": {
            "name": "Stack", "type": "linear_structure", "category": "data_structure",
            "basic_ops": ["push", "pop"], "relations": ["lifo_structure"],
            "description": "A linear structure supporting last-in first-out access."
        },
        "binary_search": {
            "name": "Binary Search", "type": "search_algorithm", "category": "algorithm",
            "basic_ops": ["mid_compare", "divide"],
            "description": "Efficient search on sorted arrays."
        },
        "graph": {
            "name": "Graph", "category": "data_structure",
            "description": "A non-linear data structure representing relationships."
        }
    }"#;

    fn engine() -> SearchEngine {
        let store = ConceptStore::from_json(CATALOGUE, "test").unwrap();
        SearchEngine::new(Arc::new(store), SearchConfig::default())
    }

    fn fuzzy(key: &str, score: f64) -> FuzzyHit {
        FuzzyHit {
            key: key.to_string(),
            name: key.to_string(),
            kind: String::new(),
            match_score: score,
        }
    }

    #[test]
    fn test_select_prefers_exact_over_fuzzy() {
        let eng = engine();
        let results = CompositeSearchResult {
            exact: Some(ExactHit {
                key: "stack".to_string(),
                record: eng.store().get("stack").unwrap().clone(),
            }),
            fuzzy: vec![fuzzy("graph", 0.99)],
            ..Default::default()
        };
        let selection = select(eng.store(), &results);
        assert_eq!(selection.source, MatchSource::Exact);
        assert_eq!(selection.key.as_deref(), Some("stack"));
    }

    #[test]
    fn test_select_best_fuzzy_first_on_ties() {
        let eng = engine();
        let results = CompositeSearchResult {
            fuzzy: vec![fuzzy("graph", 0.7), fuzzy("stack", 0.8), fuzzy("binary_search", 0.8)],
            keyword: vec![KeywordHit {
                key: "graph".to_string(),
                name: "Graph".to_string(),
                snippet: String::new(),
            }],
            ..Default::default()
        };
        let selection = select(eng.store(), &results);
        assert_eq!(selection.source, MatchSource::Fuzzy);
        assert_eq!(selection.key.as_deref(), Some("stack"));
    }

    #[test]
    fn test_select_keyword_then_none() {
        let eng = engine();
        let keyword = |key: &str| KeywordHit {
            key: key.to_string(),
            name: String::new(),
            snippet: String::new(),
        };
        let results = CompositeSearchResult {
            keyword: vec![keyword("graph"), keyword("stack")],
            ..Default::default()
        };
        let selection = select(eng.store(), &results);
        assert_eq!(selection.source, MatchSource::Keyword);
        assert_eq!(selection.key.as_deref(), Some("graph"));

        let related_only = CompositeSearchResult {
            related: vec![RelationHit {
                key: "stack".to_string(),
                name: "Stack".to_string(),
                category: "data_structure".to_string(),
            }],
            ..Default::default()
        };
        assert_eq!(select(eng.store(), &related_only), Selection::none());
    }

    #[test]
    fn test_select_skips_keys_missing_from_store() {
        let eng = engine();
        let keyword = |key: &str| KeywordHit {
            key: key.to_string(),
            name: String::new(),
            snippet: String::new(),
        };
        let results = CompositeSearchResult {
            fuzzy: vec![fuzzy("heap", 0.9)],
            keyword: vec![keyword("trie"), keyword("binary_search")],
            ..Default::default()
        };
        let selection = select(eng.store(), &results);
        assert_eq!(selection.source, MatchSource::Keyword);
        assert_eq!(selection.key.as_deref(), Some("binary_search"));

        let unknown_only = CompositeSearchResult {
            fuzzy: vec![fuzzy("heap", 0.9)],
            keyword: vec![keyword("trie")],
            ..Default::default()
        };
        assert_eq!(select(eng.store(), &unknown_only), Selection::none());
    }

    #[test]
    fn test_select_is_deterministic() {
        let eng = engine();
        let results = eng.search_all("grap");
        assert_eq!(select(eng.store(), &results), select(eng.store(), &results));
    }

    #[test]
    fn test_explain_stack() {
        let eng = engine();
        let answer = Tutor::new(&eng).answer("Explain stack");
        assert_eq!(answer.query, "stack");
        assert_eq!(answer.match_source, MatchSource::Exact);
        assert_eq!(answer.matched_key.as_deref(), Some("stack"));
        assert!(answer.answer_text.starts_with("### Stack"));
        assert!(answer.answer_text.contains("`data_structure`"));
        assert!(answer.answer_text.contains("`push`, `pop`"));
        assert_eq!(
            format::study_tip("data_structure").map(|tip| answer.answer_text.ends_with(tip)),
            Some(true)
        );
    }

    #[test]
    fn test_typo_goes_through_fuzzy() {
        let eng = engine();
        let answer = Tutor::new(&eng).answer("binary serch");
        assert_eq!(answer.match_source, MatchSource::Fuzzy);
        assert_eq!(answer.concept.unwrap().name, "Binary Search");
    }

    #[test]
    fn test_relation_only_match_is_not_found() {
        let eng = engine();
        let results = eng.search_all("lifo_structure");
        assert!(!results.related.is_empty());

        let answer = Tutor::new(&eng).answer("lifo_structure");
        assert_eq!(answer.match_source, MatchSource::None);
        assert!(answer.matched_key.is_none());
        assert_eq!(answer.answer_text, format::not_found_message("lifo_structure"));
    }

    #[test]
    fn test_keyword_fallback() {
        let eng = engine();
        let answer = Tutor::new(&eng).answer("what is sorted arrays");
        assert_eq!(answer.match_source, MatchSource::Keyword);
        assert_eq!(answer.matched_key.as_deref(), Some("binary_search"));
    }

    #[test]
    fn test_prefixed_and_direct_queries_agree() {
        let eng = engine();
        let tutor = Tutor::new(&eng);
        for (question, name) in [
            ("Explain stack", "stack"),
            ("what is binary search?", "binary search?"),
            ("DEFINE graph", "graph"),
            ("define nothing-like-this", "nothing-like-this"),
        ] {
            assert_eq!(tutor.answer(question), tutor.explain_concept(name));
        }
    }

    #[test]
    fn test_empty_query() {
        let eng = engine();
        let answer = Tutor::new(&eng).answer("   ");
        assert_eq!(answer.match_source, MatchSource::None);
        assert_eq!(answer.answer_text, format::EMPTY_QUERY_MESSAGE);
    }
}
