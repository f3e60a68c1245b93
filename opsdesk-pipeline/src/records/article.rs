//! Help-center knowledge base articles.

use serde::{Deserialize, Serialize};

use crate::record::{FieldValue, Record};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HelpArticle {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub views: u32,
    pub rating: f64,
    pub last_updated: String,
}

impl Record for HelpArticle {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "title" => Some(FieldValue::Text(&self.title)),
            "content" => Some(FieldValue::Text(&self.content)),
            "category" => Some(FieldValue::Text(&self.category)),
            "views" => Some(FieldValue::Number(f64::from(self.views))),
            "rating" => Some(FieldValue::Number(self.rating)),
            _ => None,
        }
    }

    // The help-center search box scans title and content only; articles
    // carry no tag list.
    fn search_fields() -> &'static [&'static str] {
        &["title", "content"]
    }
}

/// The knowledge base articles the help center ships with.
pub fn article_fixtures() -> Vec<HelpArticle> {
    vec![
        HelpArticle {
            id: "1".into(),
            title: "How to Handle Billing Disputes".into(),
            content: "Step-by-step guide for resolving customer billing disputes \
                      effectively..."
                .into(),
            category: "billing".into(),
            views: 2456,
            rating: 4.8,
            last_updated: "2024-01-15".into(),
        },
        HelpArticle {
            id: "2".into(),
            title: "Network Troubleshooting Guide".into(),
            content: "Comprehensive troubleshooting steps for common network connectivity \
                      issues..."
                .into(),
            category: "technical".into(),
            views: 1823,
            rating: 4.6,
            last_updated: "2024-01-18".into(),
        },
        HelpArticle {
            id: "3".into(),
            title: "Customer Retention Best Practices".into(),
            content: "Proven strategies for retaining customers and preventing churn...".into(),
            category: "retention".into(),
            views: 1234,
            rating: 4.9,
            last_updated: "2024-01-12".into(),
        },
        HelpArticle {
            id: "4".into(),
            title: "Escalation Procedures".into(),
            content: "When and how to escalate customer issues to supervisors...".into(),
            category: "procedures".into(),
            views: 987,
            rating: 4.7,
            last_updated: "2024-01-20".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::run_query;
    use crate::types::{DeskQuery, CATEGORY_ALL};

    #[test]
    fn title_search_finds_troubleshooting_guide() {
        let kept = run_query(
            &article_fixtures(),
            &DeskQuery::new("troubleshooting", CATEGORY_ALL),
        );
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "2");
    }

    #[test]
    fn content_search_finds_churn_article() {
        // "churn" only appears in article 3's body, not its title.
        let kept = run_query(&article_fixtures(), &DeskQuery::new("churn", CATEGORY_ALL));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "3");
    }
}
