use crate::parse::wrap_text;
use crate::types::ConceptRecord;

pub const EMPTY_QUERY_MESSAGE: &str = "Please type a question or a concept name.";

const DATA_STRUCTURE_TIP: &str = "**Study tip:** For data structures, practice implementing the core \
operations (insert, delete, search) and analyse their time complexity.";

const ALGORITHM_TIP: &str = "**Study tip:** For algorithms, make sure you understand both the \
step-by-step procedure *and* the Big-O complexity. Trace small examples by hand.";

/// Study tip for a concept category, if the category has one
pub fn study_tip(category: &str) -> Option<&'static str> {
    match category.to_lowercase().as_str() {
        "data_structure" => Some(DATA_STRUCTURE_TIP),
        "algorithm" => Some(ALGORITHM_TIP),
        _ => None,
    }
}

/// Message shown when no strategy selected a concept
pub fn not_found_message(query: &str) -> String {
    format!(
        "I couldn't find a clear match for **{query}** in the knowledge graph.\n\n\
         Try asking something like:\n\
         - `Explain stack`\n\
         - `What is binary search?`\n\
         - `Define adjacency list`"
    )
}

fn code_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("`{item}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

/// Markdown explanation of one concept, followed by its study tip
pub fn render_concept(record: &ConceptRecord, wrap_width: usize) -> String {
    let mut lines = vec![
        format!("### {}", record.display_name()),
        String::new(),
        format!("- **Type:** `{}`", or_na(&record.kind)),
        format!("- **Category:** `{}`", or_na(&record.category)),
    ];

    if !record.basic_ops.is_empty() {
        lines.push(format!("- **Core operations:** {}", code_list(&record.basic_ops)));
    }
    if !record.use_cases.is_empty() {
        lines.push(format!("- **Typical use cases:** {}", code_list(&record.use_cases)));
    }
    if !record.relations.is_empty() {
        lines.push(format!("- **Relations / tags:** {}", code_list(&record.relations)));
    }

    let description = record.description.trim();
    if !description.is_empty() {
        lines.push(String::new());
        lines.push("#### Explanation".to_string());
        lines.push(wrap_text(description, wrap_width));
    }

    let mut text = lines.join("\n");
    if let Some(tip) = study_tip(&record.category) {
        text.push_str("\n\n");
        text.push_str(tip);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack() -> ConceptRecord {
        ConceptRecord {
            key: "stack".to_string(),
            name: "Stack".to_string(),
            kind: "linear_structure".to_string(),
            category: "data_structure".to_string(),
            basic_ops: vec!["push".to_string(), "pop".to_string()],
            relations: vec!["lifo_structure".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_concept_sections() {
        let text = render_concept(&stack(), 90);
        assert!(text.starts_with("### Stack\n"));
        assert!(text.contains("- **Category:** `data_structure`"));
        assert!(text.contains("- **Core operations:** `push`, `pop`"));
        assert!(text.contains("- **Relations / tags:** `lifo_structure`"));
        assert!(!text.contains("Typical use cases"));
        assert!(!text.contains("#### Explanation"));
        assert!(text.ends_with(DATA_STRUCTURE_TIP));
    }

    #[test]
    fn test_render_concept_wraps_description() {
        let record = ConceptRecord {
            name: "Recursion".to_string(),
            category: "Algorithm".to_string(),
            description: "word ".repeat(40),
            ..Default::default()
        };
        let text = render_concept(&record, 20);
        assert!(text.contains("- **Type:** `N/A`"));
        let body = text.split("#### Explanation\n").nth(1).unwrap();
        let paragraph = body.split("\n\n").next().unwrap();
        assert!(paragraph.lines().all(|l| l.chars().count() <= 20));
        assert!(text.ends_with(ALGORITHM_TIP));
    }

    #[test]
    fn test_study_tip_categories() {
        assert_eq!(study_tip("DATA_STRUCTURE"), Some(DATA_STRUCTURE_TIP));
        assert_eq!(study_tip("algorithm"), Some(ALGORITHM_TIP));
        assert_eq!(study_tip("technique"), None);
    }

    #[test]
    fn test_not_found_message_names_query() {
        assert!(not_found_message("heap").contains("**heap**"));
    }
}
