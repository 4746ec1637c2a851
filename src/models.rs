use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded coin delta. Never mutated after it is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub label: String,
    pub amount: i64,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn new(label: impl Into<String>, amount: i64, date: DateTime<Utc>) -> Self {
        Self {
            label: label.into(),
            amount,
            date,
        }
    }
}

/// A catalog entry: earn tasks carry positive coins, spend tasks negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Task {
    pub label: &'static str,
    pub coins: i64,
}

#[derive(Debug, Deserialize)]
pub struct TaskRequest {
    pub task: String,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub earn: &'static [Task],
    pub spend: &'static [Task],
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub date: String,
    pub balance: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub balance: i64,
    pub transaction: Transaction,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BonusResponse {
    pub granted: bool,
    pub balance: i64,
    pub transaction: Option<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    pub earned: i64,
    pub spent: i64,
    pub net: i64,
    pub avg_per_day: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: String,
    pub total: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub weekly_summary: WeeklySummary,
    pub daily_totals: Vec<DailyTotal>,
    pub balance_points: Vec<i64>,
}
