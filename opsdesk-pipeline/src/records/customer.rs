//! Customer directory records.
//!
//! The lookup screen searches these by customer ID, email, or phone; the
//! plan string doubles as the category discriminant for plan filters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::{FieldValue, Record};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
    Suspended,
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerStatus::Active => write!(f, "active"),
            CustomerStatus::Inactive => write!(f, "inactive"),
            CustomerStatus::Suspended => write!(f, "suspended"),
        }
    }
}

/// One open or resolved support ticket on a customer's account.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TicketRecord {
    pub id: String,
    pub subject: String,
    pub status: String,
    pub date: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub plan: String,
    pub status: CustomerStatus,
    /// Negative balance means the customer owes money.
    pub account_balance: f64,
    pub join_date: String,
    pub last_payment: String,
    pub data_used_gb: f64,
    pub data_total_gb: f64,
    pub recent_tickets: Vec<TicketRecord>,
}

impl CustomerRecord {
    /// Data usage as a 0-100 percentage; 0 when no quota is configured.
    pub fn data_usage_pct(&self) -> f64 {
        if self.data_total_gb == 0.0 {
            0.0
        } else {
            self.data_used_gb / self.data_total_gb * 100.0
        }
    }
}

impl Record for CustomerRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> &str {
        &self.plan
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "name" => Some(FieldValue::Text(&self.name)),
            "email" => Some(FieldValue::Text(&self.email)),
            "phone" => Some(FieldValue::Text(&self.phone)),
            "address" => Some(FieldValue::Text(&self.address)),
            "plan" => Some(FieldValue::Text(&self.plan)),
            "account_balance" => Some(FieldValue::Number(self.account_balance)),
            "data_used_gb" => Some(FieldValue::Number(self.data_used_gb)),
            "data_total_gb" => Some(FieldValue::Number(self.data_total_gb)),
            _ => None,
        }
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "email", "phone"]
    }
}

/// The customer directory fixture.
///
/// CUST-001 is the account every demo walkthrough uses; the others exist
/// so that misses and plan filters are exercisable.
pub fn customer_fixtures() -> Vec<CustomerRecord> {
    vec![
        CustomerRecord {
            id: "CUST-001".into(),
            name: "John Smith".into(),
            email: "john.smith@email.com".into(),
            phone: "+1 (555) 123-4567".into(),
            address: "123 Main St, New York, NY 10001".into(),
            plan: "Premium Unlimited".into(),
            status: CustomerStatus::Active,
            account_balance: -45.99,
            join_date: "2022-03-15".into(),
            last_payment: "2024-01-15".into(),
            data_used_gb: 85.0,
            data_total_gb: 100.0,
            recent_tickets: vec![
                TicketRecord {
                    id: "TKT-001".into(),
                    subject: "Network connectivity issue".into(),
                    status: "open".into(),
                    date: "2024-01-20".into(),
                },
                TicketRecord {
                    id: "TKT-002".into(),
                    subject: "Billing inquiry".into(),
                    status: "resolved".into(),
                    date: "2024-01-18".into(),
                },
            ],
        },
        CustomerRecord {
            id: "CUST-002".into(),
            name: "Sarah Johnson".into(),
            email: "sarah.johnson@email.com".into(),
            phone: "+1 (555) 234-5678".into(),
            address: "456 Oak Ave, Brooklyn, NY 11201".into(),
            plan: "Standard".into(),
            status: CustomerStatus::Active,
            account_balance: 0.0,
            join_date: "2023-06-02".into(),
            last_payment: "2024-01-12".into(),
            data_used_gb: 22.0,
            data_total_gb: 50.0,
            recent_tickets: vec![TicketRecord {
                id: "TKT-003".into(),
                subject: "Payment failed".into(),
                status: "resolved".into(),
                date: "2024-01-19".into(),
            }],
        },
        CustomerRecord {
            id: "CUST-003".into(),
            name: "Mike Davis".into(),
            email: "mike.davis@email.com".into(),
            phone: "+1 (555) 345-6789".into(),
            address: "789 Pine Rd, Queens, NY 11354".into(),
            plan: "Basic".into(),
            status: CustomerStatus::Suspended,
            account_balance: -120.5,
            join_date: "2021-11-20".into(),
            last_payment: "2023-12-03".into(),
            data_used_gb: 4.0,
            data_total_gb: 20.0,
            recent_tickets: vec![TicketRecord {
                id: "TKT-004".into(),
                subject: "Service cancellation request".into(),
                status: "pending".into(),
                date: "2024-01-19".into(),
            }],
        },
    ]
}
