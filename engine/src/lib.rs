use std::cell::RefCell;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

pub mod build;
pub mod format;
pub mod parse;
pub mod rank;
pub mod seed;
pub mod store;
pub mod tutor;
pub mod types;

pub use crate::store::ConceptStore;
pub use crate::tutor::{select, Answer, Selection, Tutor};
pub use crate::types::{
    CompositeSearchResult, ConceptRecord, ExactHit, FuzzyHit, KeywordHit, KgError, KgResult,
    MatchSource, Neighborhood, RelationHit, SearchConfig, Stats, TagNeighbors,
};

/// Multi-strategy search over a loaded concept catalogue
#[derive(Debug, Clone)]
pub struct SearchEngine {
    store: Arc<ConceptStore>,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(store: Arc<ConceptStore>, config: SearchConfig) -> Self {
        SearchEngine { store, config }
    }

    pub fn store(&self) -> &ConceptStore {
        &self.store
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Look up the normalized query as a key; no partial matching
    pub fn exact(&self, query: &str) -> Option<ExactHit> {
        let key = parse::normalize_key(query);
        if key.is_empty() {
            return None;
        }
        self.store.get(&key).map(|record| ExactHit {
            key,
            record: record.clone(),
        })
    }

    /// Keys most similar to the normalized query, best first
    ///
    /// Keeps keys scoring at least `cutoff` and returns at most `limit` of
    /// them; equal scores keep catalogue order.
    pub fn fuzzy(&self, query: &str, limit: usize, cutoff: f64) -> Vec<FuzzyHit> {
        let norm = parse::normalize_key(query);
        if norm.is_empty() || limit == 0 {
            return Vec::new();
        }

        let records: Vec<&ConceptRecord> = self.store.iter().collect();

        #[cfg(feature = "native")]
        let scores: Vec<f64> = {
            use rayon::prelude::*;
            records
                .par_iter()
                .map(|r| rank::similarity(&norm, &r.key))
                .collect()
        };
        #[cfg(not(feature = "native"))]
        let scores: Vec<f64> = records
            .iter()
            .map(|r| rank::similarity(&norm, &r.key))
            .collect();

        let candidates: Vec<(f64, &ConceptRecord)> = scores
            .into_iter()
            .zip(records)
            .filter(|(score, _)| *score >= cutoff)
            .collect();

        rank::top_n(candidates, limit)
            .into_iter()
            .map(|(score, record)| FuzzyHit {
                key: record.key.clone(),
                name: record.display_name().to_string(),
                kind: record.kind.clone(),
                match_score: score,
            })
            .collect()
    }

    /// Records carrying `tag` among their relations (case-insensitive)
    pub fn relation(&self, tag: &str) -> Vec<RelationHit> {
        if tag.trim().is_empty() {
            return Vec::new();
        }
        self.store
            .iter()
            .filter(|record| record.has_relation(tag))
            .map(|record| RelationHit {
                key: record.key.clone(),
                name: record.display_name().to_string(),
                category: record.category.clone(),
            })
            .collect()
    }

    /// Records whose name or description contains the query (case-insensitive)
    pub fn keyword(&self, query: &str) -> Vec<KeywordHit> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        self.store
            .iter()
            .filter(|record| {
                format!("{}{}", record.name, record.description)
                    .to_lowercase()
                    .contains(&needle)
            })
            .map(|record| KeywordHit {
                key: record.key.clone(),
                name: record.display_name().to_string(),
                snippet: parse::snippet(&record.description, query, self.config.snippet_window),
            })
            .collect()
    }

    /// Run all four strategies on the same raw query
    /// The relation strategy treats the raw query as a tag
    pub fn search_all(&self, query: &str) -> CompositeSearchResult {
        let start = now_ms();

        let result = CompositeSearchResult {
            exact: self.exact(query),
            fuzzy: self.fuzzy(query, self.config.fuzzy_limit, self.config.fuzzy_cutoff),
            related: self.relation(query),
            keyword: self.keyword(query),
        };

        log_perf(&format!(
            "[perf] query='{}' exact={} fuzzy={} related={} keyword={} | total={:.1}ms",
            query,
            result.exact.is_some(),
            result.fuzzy.len(),
            result.related.len(),
            result.keyword.len(),
            now_ms() - start
        ));

        result
    }

    pub fn stats(&self) -> Stats {
        Stats {
            concept_count: self.store.len(),
            relation_tag_count: self.store.iter().map(|r| r.relations.len()).sum(),
            source: self.store.source().to_string(),
        }
    }

    /// Concepts sharing each relation tag of `key`, excluding `key` itself
    pub fn neighborhood(&self, key: &str) -> KgResult<Neighborhood> {
        let center = self
            .store
            .get(key)
            .ok_or_else(|| KgError::UnknownConcept(key.to_string()))?;

        let tags = center
            .relations
            .iter()
            .map(|tag| TagNeighbors {
                tag: tag.clone(),
                concepts: self
                    .relation(tag)
                    .into_iter()
                    .filter(|hit| hit.key != center.key)
                    .take(self.config.neighbor_limit)
                    .collect(),
            })
            .collect();

        Ok(Neighborhood {
            key: center.key.clone(),
            name: center.display_name().to_string(),
            tags,
        })
    }
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

fn log_perf(line: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&line.into());
    tracing::debug!("{}", line);
}

// Use thread_local with RefCell for lazy initialization from JS
thread_local! {
    static ENGINE: RefCell<Option<SearchEngine>> = const { RefCell::new(None) };
}

fn with_engine<T>(f: impl FnOnce(&SearchEngine) -> Result<T, JsError>) -> Result<T, JsError> {
    ENGINE.with(|engine| match engine.borrow().as_ref() {
        Some(eng) => f(eng),
        None => Err(JsError::new(
            "Engine not initialized. Call init_engine(catalogue_json, config_json) first.",
        )),
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value)
        .map_err(|e| JsError::new(&format!("Failed to serialize result: {}", e)))
}

/// Initialize the search engine with a catalogue and config from JavaScript
/// catalogue_json: JSON object of concept key -> concept record
/// config_json: JSON string of SearchConfig (empty string for defaults)
#[wasm_bindgen]
pub fn init_engine(catalogue_json: &str, config_json: &str) -> Result<(), JsError> {
    let store = ConceptStore::from_json(catalogue_json, "wasm")
        .map_err(|e| JsError::new(&format!("Failed to parse catalogue: {}", e)))?;

    let config: SearchConfig = if config_json.trim().is_empty() {
        SearchConfig::default()
    } else {
        serde_json::from_str(config_json)
            .map_err(|e| JsError::new(&format!("Failed to parse config: {}", e)))?
    };

    ENGINE.with(|engine| {
        *engine.borrow_mut() = Some(SearchEngine::new(Arc::new(store), config));
    });

    Ok(())
}

/// Check if the engine has been initialized
#[wasm_bindgen]
pub fn is_engine_ready() -> bool {
    ENGINE.with(|engine| engine.borrow().is_some())
}

/// Run every search strategy and return the composite result as JSON
#[wasm_bindgen]
pub fn search_concepts(query: &str) -> Result<String, JsError> {
    with_engine(|eng| to_json(&eng.search_all(query)))
}

/// Answer a free-text question and return the tutor answer as JSON
#[wasm_bindgen]
pub fn explain_query(query: &str) -> Result<String, JsError> {
    with_engine(|eng| to_json(&Tutor::new(eng).answer(query)))
}

/// Catalogue statistics as JSON
#[wasm_bindgen]
pub fn get_stats() -> Result<String, JsError> {
    with_engine(|eng| to_json(&eng.stats()))
}

/// Relation neighborhood of one concept as JSON
#[wasm_bindgen]
pub fn concept_graph(key: &str) -> Result<String, JsError> {
    with_engine(|eng| {
        let graph = eng
            .neighborhood(key)
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_json(&graph)
    })
}
