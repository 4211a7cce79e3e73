use crate::types::{ConceptRecord, KgResult, SeedConcept};
use std::collections::BTreeSet;
use std::path::Path;

fn contains_any(name: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| name.contains(n))
}

/// Relation tags derived from substrings of a concept key, plus its category
/// Returned sorted and de-duplicated
pub fn auto_relations(key: &str, category: &str) -> Vec<String> {
    let name = key.to_lowercase();
    let mut tags: BTreeSet<&str> = BTreeSet::new();

    if contains_any(&name, &["array", "matrix", "list", "vector"]) {
        tags.extend(["linear_structure", "sequential_access"]);
    }
    if contains_any(&name, &["linked"]) {
        tags.extend(["pointer_based", "dynamic_structure"]);
    }
    if contains_any(&name, &["stack"]) {
        tags.extend(["lifo_structure", "recursion_support"]);
    }
    if contains_any(&name, &["queue"]) {
        tags.extend(["fifo_structure", "scheduling"]);
    }
    if contains_any(&name, &["tree"]) {
        tags.extend(["hierarchical_structure", "recursion"]);
    }
    if contains_any(&name, &["graph"]) {
        tags.extend(["network_structure", "traversal_bfs_dfs"]);
    }
    if contains_any(&name, &["sparse"]) {
        tags.insert("compressed_representation");
    }
    if contains_any(&name, &["search"]) {
        tags.insert("lookup_operation");
    }
    if contains_any(&name, &["sort"]) {
        tags.insert("ordering");
    }
    if contains_any(&name, &["bfs", "dfs"]) {
        tags.insert("graph_traversal");
    }
    if contains_any(&name, &["dijkstra", "bellman"]) {
        tags.insert("shortest_path");
    }

    let category = if category.is_empty() {
        "data_structure"
    } else {
        category
    };
    tags.insert(category);

    tags.into_iter().map(String::from).collect()
}

/// Use-case tags for a concept key; the first matching rule wins
pub fn use_cases(key: &str) -> Vec<String> {
    let n = key.to_lowercase();
    let tags: &[&str] = if n.contains("stack") {
        &["function_call_stack", "undo_operations"]
    } else if n.contains("queue") {
        &["task_scheduling", "bfs_traversal"]
    } else if n.contains("tree") {
        &["hierarchical_data", "database_indexing"]
    } else if n.contains("sort") {
        &["data_ordering"]
    } else if n.contains("graph") {
        &["network_routing"]
    } else if n.contains("matrix") || n.contains("sparse") {
        &["scientific_computing"]
    } else {
        &["general_dsa_application"]
    };
    tags.iter().map(|t| t.to_string()).collect()
}

/// Description used when the seed carries none
pub fn fallback_description(name: &str) -> String {
    format!("A data structure or algorithm related to {name}.")
}

/// Turn one seed entry into a full catalogue record
pub fn build_record(seed: &SeedConcept) -> ConceptRecord {
    let description = if seed.description.trim().is_empty() {
        fallback_description(seed.name)
    } else {
        seed.description.to_string()
    };

    ConceptRecord {
        key: seed.key.to_string(),
        id: format!("dsa_{}", seed.key),
        name: seed.name.to_string(),
        kind: seed.kind.to_string(),
        category: seed.category.to_string(),
        basic_ops: seed.basic_ops.iter().map(|op| op.to_string()).collect(),
        principle: seed.principle.to_string(),
        description,
        relations: auto_relations(seed.key, seed.category),
        use_cases: use_cases(seed.key),
    }
}

/// Build catalogue records from seed entries, in seed order
pub fn build_catalogue(seed: &[SeedConcept]) -> Vec<ConceptRecord> {
    seed.iter()
        .map(|concept| {
            tracing::debug!(key = concept.key, "building concept");
            build_record(concept)
        })
        .collect()
}

/// Serialize records as a pretty JSON object keyed by concept key
pub fn catalogue_to_json(records: &[ConceptRecord]) -> KgResult<String> {
    let mut object = serde_json::Map::new();
    for record in records {
        object.insert(record.key.clone(), serde_json::to_value(record)?);
    }
    Ok(serde_json::to_string_pretty(&object)?)
}

/// Write the catalogue to `path`, creating parent directories
pub fn write_catalogue(records: &[ConceptRecord], path: impl AsRef<Path>) -> KgResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, catalogue_to_json(records)?)?;
    tracing::info!(
        concepts = records.len(),
        path = %path.display(),
        "saved concept catalogue"
    );
    Ok(())
}
