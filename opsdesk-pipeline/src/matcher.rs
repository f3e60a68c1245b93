//! Case-insensitive substring matching over a record's text fields.
//!
//! Exact substring containment only; no tokenization, no fuzzy matching.
//! This is the predicate behind every search box in the dashboard.

use crate::record::{FieldValue, Record};

/// True if `search_text` is empty, or the lowercased value of any listed
/// field contains the lowercased needle. For tag-list fields, any single
/// tag containing the needle matches. Numeric fields are never text-matched.
pub fn matches<R: Record>(record: &R, search_text: &str, fields: &[&str]) -> bool {
    if search_text.is_empty() {
        return true;
    }
    let needle = search_text.to_lowercase();

    fields.iter().any(|name| match record.field(name) {
        Some(FieldValue::Text(value)) => value.to_lowercase().contains(&needle),
        Some(FieldValue::Tags(tags)) => {
            tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
        }
        Some(FieldValue::Number(_)) | None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::template::{template_fixtures, TemplateRecord};

    fn welcome() -> TemplateRecord {
        template_fixtures().into_iter().next().unwrap()
    }

    #[test]
    fn empty_needle_matches_everything() {
        assert!(matches(&welcome(), "", TemplateRecord::search_fields()));
    }

    #[test]
    fn match_is_case_insensitive() {
        let t = welcome();
        assert!(matches(&t, "WELCOME", TemplateRecord::search_fields()));
        assert!(matches(&t, "welcome", TemplateRecord::search_fields()));
    }

    #[test]
    fn substring_in_content_matches() {
        // "customer service" appears in the welcome greeting body.
        assert!(matches(
            &welcome(),
            "customer service",
            TemplateRecord::search_fields()
        ));
    }

    #[test]
    fn tag_containment_matches() {
        // "introduction" is a tag, not part of title or content.
        assert!(matches(
            &welcome(),
            "introduc",
            TemplateRecord::search_fields()
        ));
    }

    #[test]
    fn no_fuzzy_matching() {
        // Transposed characters must not match.
        assert!(!matches(&welcome(), "welcmoe", TemplateRecord::search_fields()));
    }

    #[test]
    fn unlisted_fields_are_not_scanned() {
        // The needle appears in the category field, which is not a search field.
        let t = template_fixtures().into_iter().nth(5).unwrap();
        assert_eq!(t.category, "escalation");
        assert!(matches(&t, "escalation", TemplateRecord::search_fields()));
        // ...but only because "escalation" is also a tag; a needle found
        // nowhere in the listed fields never matches.
        assert!(!matches(&t, "zzz-not-present", TemplateRecord::search_fields()));
    }
}
