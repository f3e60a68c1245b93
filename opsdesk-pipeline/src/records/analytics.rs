//! Analytics rows and their CSV loader.
//!
//! Monthly churn rows drive the churn trend panel; revenue rows drive the
//! revenue-vs-target panel. Both ship as built-in fixtures and churn rows
//! can also be loaded from a CSV export with columns:
//!   month, churn_rate, new_customers, total_customers

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::record::{FieldValue, Record};

/// One month of churn analytics.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChurnMonth {
    pub month: String,
    pub churn_rate: f64,
    pub new_customers: u32,
    pub total_customers: u32,
}

impl Record for ChurnMonth {
    fn id(&self) -> &str {
        &self.month
    }

    // Churn rows have no category dropdown; only "all" passes.
    fn category(&self) -> &str {
        ""
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "month" => Some(FieldValue::Text(&self.month)),
            "churn_rate" => Some(FieldValue::Number(self.churn_rate)),
            "new_customers" => Some(FieldValue::Number(f64::from(self.new_customers))),
            "total_customers" => Some(FieldValue::Number(f64::from(self.total_customers))),
            _ => None,
        }
    }

    fn search_fields() -> &'static [&'static str] {
        &["month"]
    }
}

/// One month of revenue vs target.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RevenueMonth {
    pub month: String,
    pub revenue: f64,
    pub target: f64,
}

impl Record for RevenueMonth {
    fn id(&self) -> &str {
        &self.month
    }

    fn category(&self) -> &str {
        ""
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "month" => Some(FieldValue::Text(&self.month)),
            "revenue" => Some(FieldValue::Number(self.revenue)),
            "target" => Some(FieldValue::Number(self.target)),
            _ => None,
        }
    }

    fn search_fields() -> &'static [&'static str] {
        &["month"]
    }
}

/// Six months of churn history (January through June).
pub fn churn_fixtures() -> Vec<ChurnMonth> {
    let rows = [
        ("Jan", 2.8, 450, 24_120),
        ("Feb", 3.1, 380, 24_200),
        ("Mar", 2.9, 520, 24_450),
        ("Apr", 3.4, 410, 24_380),
        ("May", 3.2, 470, 24_520),
        ("Jun", 2.7, 560, 24_780),
    ];
    rows.iter()
        .map(|&(month, churn_rate, new_customers, total_customers)| ChurnMonth {
            month: month.into(),
            churn_rate,
            new_customers,
            total_customers,
        })
        .collect()
}

/// Six months of revenue against target.
pub fn revenue_fixtures() -> Vec<RevenueMonth> {
    let rows = [
        ("Jan", 2_450_000.0, 2_400_000.0),
        ("Feb", 2_380_000.0, 2_400_000.0),
        ("Mar", 2_520_000.0, 2_450_000.0),
        ("Apr", 2_490_000.0, 2_450_000.0),
        ("May", 2_630_000.0, 2_500_000.0),
        ("Jun", 2_580_000.0, 2_500_000.0),
    ];
    rows.iter()
        .map(|&(month, revenue, target)| RevenueMonth {
            month: month.into(),
            revenue,
            target,
        })
        .collect()
}

/// Load churn rows from a CSV reader.
pub fn load_churn<R: Read>(reader: R) -> Result<Vec<ChurnMonth>, String> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (line_num, result) in csv_reader.deserialize().enumerate() {
        let row: ChurnMonth =
            result.map_err(|e| format!("CSV parse error at line {}: {}", line_num + 2, e))?;
        rows.push(row);
    }

    Ok(rows)
}

/// Load churn rows from a CSV file path.
pub fn load_churn_file(path: &str) -> Result<Vec<ChurnMonth>, String> {
    let file =
        std::fs::File::open(path).map_err(|e| format!("Failed to open '{}': {}", path, e))?;
    load_churn(file)
}
