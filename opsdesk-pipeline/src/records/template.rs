//! Chat template records: pre-written agent responses.
//!
//! The text search scans title, content, and tags; the category dropdown
//! matches the category field exactly.

use serde::{Deserialize, Serialize};

use crate::record::{FieldValue, Record};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub usage: u32,
    pub last_used: String,
    pub rating: f64,
}

impl Record for TemplateRecord {
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
            "tags" => Some(FieldValue::Tags(&self.tags)),
            "usage" => Some(FieldValue::Number(f64::from(self.usage))),
            "rating" => Some(FieldValue::Number(self.rating)),
            _ => None,
        }
    }

    fn search_fields() -> &'static [&'static str] {
        &["title", "content", "tags"]
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// The six canned response templates the dashboard ships with.
pub fn template_fixtures() -> Vec<TemplateRecord> {
    vec![
        TemplateRecord {
            id: "1".into(),
            title: "Welcome Greeting".into(),
            content: "Hello! Thank you for contacting our customer service. My name is \
                      {AGENT_NAME} and I'll be happy to assist you today. How can I help you?"
                .into(),
            category: "greeting".into(),
            tags: tags(&["welcome", "introduction"]),
            usage: 145,
            last_used: "2024-01-20".into(),
            rating: 4.8,
        },
        TemplateRecord {
            id: "2".into(),
            title: "Billing Inquiry Response".into(),
            content: "I understand you have a question about your billing. Let me pull up \
                      your account details to better assist you. Can you please confirm your \
                      account number or the phone number associated with your account?"
                .into(),
            category: "billing".into(),
            tags: tags(&["billing", "account", "verification"]),
            usage: 98,
            last_used: "2024-01-19".into(),
            rating: 4.6,
        },
        TemplateRecord {
            id: "3".into(),
            title: "Technical Issue Acknowledgment".into(),
            content: "I'm sorry to hear you're experiencing technical difficulties. I \
                      completely understand how frustrating this must be. Let me help you \
                      troubleshoot this issue step by step."
                .into(),
            category: "technical".into(),
            tags: tags(&["technical", "troubleshooting", "empathy"]),
            usage: 76,
            last_used: "2024-01-20".into(),
            rating: 4.7,
        },
        TemplateRecord {
            id: "4".into(),
            title: "Service Cancellation Retention".into(),
            content: "I understand you're considering canceling your service. Before we \
                      proceed, I'd love to see if there's anything we can do to address your \
                      concerns. May I ask what's prompting this decision?"
                .into(),
            category: "retention".into(),
            tags: tags(&["cancellation", "retention", "feedback"]),
            usage: 54,
            last_used: "2024-01-18".into(),
            rating: 4.9,
        },
        TemplateRecord {
            id: "5".into(),
            title: "Payment Failure Follow-up".into(),
            content: "We noticed there was an issue processing your recent payment. This \
                      could be due to expired card information or insufficient funds. Would \
                      you like me to help you update your payment method?"
                .into(),
            category: "billing".into(),
            tags: tags(&["payment", "billing", "resolution"]),
            usage: 42,
            last_used: "2024-01-19".into(),
            rating: 4.5,
        },
        TemplateRecord {
            id: "6".into(),
            title: "Escalation to Supervisor".into(),
            content: "I understand your frustration and I want to ensure you receive the \
                      best possible service. I'm going to connect you with my supervisor who \
                      will be able to provide additional assistance. Please hold for just a \
                      moment."
                .into(),
            category: "escalation".into(),
            tags: tags(&["escalation", "supervisor", "service"]),
            usage: 23,
            last_used: "2024-01-17".into(),
            rating: 4.4,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_ids_are_sequential() {
        let ids: Vec<String> = template_fixtures().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn two_templates_are_billing() {
        let billing: Vec<TemplateRecord> = template_fixtures()
            .into_iter()
            .filter(|t| t.category == "billing")
            .collect();
        assert_eq!(billing.len(), 2);
        assert_eq!(billing[0].id, "2");
        assert_eq!(billing[1].id, "5");
    }

    #[test]
    fn field_mapping_exposes_numbers() {
        let t = &template_fixtures()[0];
        assert_eq!(t.field("usage"), Some(FieldValue::Number(145.0)));
        assert_eq!(t.field("rating"), Some(FieldValue::Number(4.8)));
        assert!(t.field("unknown").is_none());
    }
}
