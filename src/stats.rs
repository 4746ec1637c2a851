use crate::models::{DailyTotal, StatsResponse, Transaction, WeeklySummary};
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;

/// Divisor for the weekly average, whatever the number of active days.
const DAYS_PER_WEEK: i64 = 7;

pub fn build_stats(history: &[Transaction]) -> StatsResponse {
    build_stats_at(history, Utc::now())
}

pub fn build_stats_at(history: &[Transaction], now: DateTime<Utc>) -> StatsResponse {
    StatsResponse {
        weekly_summary: weekly_summary_at(history, now),
        daily_totals: daily_totals(history),
        balance_points: running_balance_points(history),
    }
}

pub fn weekly_summary(history: &[Transaction]) -> WeeklySummary {
    weekly_summary_at(history, Utc::now())
}

pub fn weekly_summary_at(history: &[Transaction], now: DateTime<Utc>) -> WeeklySummary {
    let week_ago = now - Duration::days(DAYS_PER_WEEK);

    let mut earned = 0i64;
    let mut spent = 0i64;
    for transaction in history.iter().filter(|t| t.date >= week_ago) {
        if transaction.amount > 0 {
            earned += transaction.amount;
        } else {
            spent += transaction.amount;
        }
    }

    let net = earned + spent;
    WeeklySummary {
        earned,
        spent,
        net,
        avg_per_day: net as f64 / DAYS_PER_WEEK as f64,
    }
}

/// Sums amounts per UTC calendar day, newest day first.
pub fn daily_totals(history: &[Transaction]) -> Vec<DailyTotal> {
    let mut days: BTreeMap<String, i64> = BTreeMap::new();
    for transaction in history {
        *days.entry(date_key(transaction.date)).or_default() += transaction.amount;
    }

    days.into_iter()
        .rev()
        .map(|(date, total)| DailyTotal { date, total })
        .collect()
}

/// Prefix sums of the amounts in chronological order, for the balance chart.
pub fn running_balance_points(history: &[Transaction]) -> Vec<i64> {
    let mut sorted: Vec<&Transaction> = history.iter().collect();
    sorted.sort_by_key(|t| t.date);

    sorted
        .into_iter()
        .scan(0i64, |running, t| {
            *running += t.amount;
            Some(*running)
        })
        .collect()
}

fn date_key(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}
