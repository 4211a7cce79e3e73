use crate::types::{ConceptRecord, KgError, KgResult};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Default location of the built catalogue
pub const DEFAULT_CATALOGUE_PATH: &str = "data/knowledge_graph.json";

/// Read-only concept catalogue: normalized key -> record, in file order
#[derive(Debug, Clone)]
pub struct ConceptStore {
    records: Vec<ConceptRecord>,
    index: HashMap<String, usize>,
    source: String,
}

impl ConceptStore {
    /// Build a store from records, keeping the first record seen for a key
    pub fn from_records(records: Vec<ConceptRecord>, source: impl Into<String>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        let mut kept = Vec::with_capacity(records.len());

        for mut record in records {
            if record.key.is_empty() || index.contains_key(&record.key) {
                tracing::warn!(key = %record.key, "skipping empty or duplicate concept key");
                continue;
            }
            if record.id.is_empty() {
                record.id = format!("dsa_{}", record.key);
            }
            index.insert(record.key.clone(), kept.len());
            kept.push(record);
        }

        ConceptStore {
            records: kept,
            index,
            source: source.into(),
        }
    }

    /// Parse a catalogue JSON object (key -> record)
    pub fn from_json(json: &str, source: impl Into<String>) -> KgResult<Self> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let records = raw
            .into_iter()
            .map(|(key, value)| -> KgResult<ConceptRecord> {
                let mut record: ConceptRecord = serde_json::from_value(value)?;
                record.key = key;
                Ok(record)
            })
            .collect::<KgResult<Vec<_>>>()?;
        Ok(Self::from_records(records, source))
    }

    /// Load the catalogue file at `path`
    pub fn load(path: impl AsRef<Path>) -> KgResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(KgError::NotFound(path.to_path_buf()));
        }
        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json(&json, path.display().to_string())?;
        tracing::info!(
            concepts = store.len(),
            source = %store.source,
            "loaded concept catalogue"
        );
        Ok(store)
    }

    /// Open a catalogue from a file path or an `http(s)://` URL
    pub fn open(location: &str) -> KgResult<Self> {
        if is_url(location) {
            Self::fetch(location)
        } else {
            Self::load(location)
        }
    }

    /// Fetch the catalogue JSON over HTTP
    #[cfg(feature = "native")]
    pub fn fetch(url: &str) -> KgResult<Self> {
        let response = reqwest::blocking::get(url)
            .and_then(|r| r.error_for_status())
            .map_err(|e| KgError::Http(e.to_string()))?;
        let json = response.text().map_err(|e| KgError::Http(e.to_string()))?;
        let store = Self::from_json(&json, url)?;
        tracing::info!(concepts = store.len(), source = url, "fetched concept catalogue");
        Ok(store)
    }

    #[cfg(not(feature = "native"))]
    pub fn fetch(url: &str) -> KgResult<Self> {
        Err(KgError::Http(format!(
            "cannot fetch {url}: built without the `native` feature"
        )))
    }

    pub fn get(&self, key: &str) -> Option<&ConceptRecord> {
        self.index.get(key).map(|&i| &self.records[i])
    }

    /// Records in catalogue order
    pub fn iter(&self) -> impl Iterator<Item = &ConceptRecord> {
        self.records.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Where the catalogue came from (file path, URL, or a label)
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Whether a catalogue location names a remote URL rather than a file
pub fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

static SHARED: OnceLock<Arc<ConceptStore>> = OnceLock::new();

/// Open the process-wide catalogue once and return its handle
///
/// The first successful call opens `location`; later calls return the same
/// handle and ignore their argument. A failed open leaves the slot empty.
pub fn initialize(location: &str) -> KgResult<Arc<ConceptStore>> {
    if let Some(store) = SHARED.get() {
        return Ok(Arc::clone(store));
    }
    let opened = Arc::new(ConceptStore::open(location)?);
    // Another caller may have won the race; its handle is the one kept
    Ok(Arc::clone(SHARED.get_or_init(|| opened)))
}
