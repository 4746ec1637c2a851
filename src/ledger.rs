use crate::errors::LedgerError;
use crate::models::{Task, Transaction};
use crate::storage::KeyValueStore;
use chrono::{DateTime, NaiveDate, Utc};
use tracing::{info, warn};

pub const BALANCE_KEY: &str = "dodoCoins";
pub const HISTORY_KEY: &str = "dodoHistory";
pub const DAILY_BONUS_KEY: &str = "lastFreeDay";
pub const END_OF_DAY_BONUS_KEY: &str = "lastEndOfDayBonus";

pub const DAILY_BONUS_LABEL: &str = "Daily Bonus";
pub const DAILY_BONUS_COINS: i64 = 2;
pub const END_OF_DAY_BONUS_LABEL: &str = "End of Day Bonus";
pub const END_OF_DAY_BONUS_COINS: i64 = 10;

/// Balance, history and the two once-per-day bonus gates.
///
/// Every mutation is written through to the store before the call returns.
/// History is kept most recent first.
#[derive(Debug)]
pub struct Ledger<S> {
    store: S,
    balance: i64,
    history: Vec<Transaction>,
    last_daily_bonus: Option<NaiveDate>,
    last_end_of_day_bonus: Option<NaiveDate>,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Reads the persisted state. Missing keys load as their defaults, and so
    /// do values that fail to parse.
    pub async fn load(store: S) -> Result<Self, LedgerError> {
        let balance = match store.get(BALANCE_KEY).await? {
            Some(raw) => raw.trim().parse::<i64>().unwrap_or_else(|err| {
                warn!("ignoring stored balance {raw:?}: {err}");
                0
            }),
            None => 0,
        };

        let history: Vec<Transaction> = match store.get(HISTORY_KEY).await? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!("ignoring stored history: {err}");
                Vec::new()
            }),
            None => Vec::new(),
        };

        let last_daily_bonus = load_marker(&store, DAILY_BONUS_KEY).await?;
        let last_end_of_day_bonus = load_marker(&store, END_OF_DAY_BONUS_KEY).await?;

        info!(balance, transactions = history.len(), "ledger loaded");

        Ok(Self {
            store,
            balance,
            history,
            last_daily_bonus,
            last_end_of_day_bonus,
        })
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    pub fn last_daily_bonus(&self) -> Option<NaiveDate> {
        self.last_daily_bonus
    }

    pub fn last_end_of_day_bonus(&self) -> Option<NaiveDate> {
        self.last_end_of_day_bonus
    }

    /// Records `amount` under `label`, unless it would take the balance below zero.
    pub async fn apply_transaction(
        &mut self,
        label: impl Into<String>,
        amount: i64,
        timestamp: DateTime<Utc>,
    ) -> Result<Transaction, LedgerError> {
        let label = label.into();
        if self.next_balance(amount)? < 0 {
            warn!(label = %label, amount, balance = self.balance, "transaction rejected");
            return Err(LedgerError::InsufficientCoins {
                balance: self.balance,
                amount,
            });
        }

        let transaction = Transaction::new(label, amount, timestamp);
        self.record(transaction.clone(), None).await?;
        info!(
            label = %transaction.label,
            amount,
            balance = self.balance,
            "transaction applied"
        );
        Ok(transaction)
    }

    pub async fn apply_task(
        &mut self,
        task: Task,
        now: DateTime<Utc>,
    ) -> Result<Transaction, LedgerError> {
        self.apply_transaction(task.label, task.coins, now).await
    }

    /// Credits the daily bonus the first time it is asked for on a UTC day.
    /// Returns `None` when today's bonus was already granted.
    pub async fn grant_daily_bonus(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<Option<Transaction>, LedgerError> {
        let today = now.date_naive();
        if self.last_daily_bonus == Some(today) {
            return Ok(None);
        }

        let transaction = Transaction::new(DAILY_BONUS_LABEL, DAILY_BONUS_COINS, now);
        self.record(transaction.clone(), Some((DAILY_BONUS_KEY, today)))
            .await?;
        self.last_daily_bonus = Some(today);

        info!(%today, balance = self.balance, "daily bonus granted");
        Ok(Some(transaction))
    }

    /// Like the daily bonus, but a repeat on the same day is an error.
    pub async fn grant_end_of_day_bonus(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<Transaction, LedgerError> {
        let today = now.date_naive();
        if self.last_end_of_day_bonus == Some(today) {
            warn!(%today, "end of day bonus already claimed");
            return Err(LedgerError::AlreadyClaimed(today));
        }

        let transaction = Transaction::new(END_OF_DAY_BONUS_LABEL, END_OF_DAY_BONUS_COINS, now);
        self.record(transaction.clone(), Some((END_OF_DAY_BONUS_KEY, today)))
            .await?;
        self.last_end_of_day_bonus = Some(today);

        info!(%today, balance = self.balance, "end of day bonus granted");
        Ok(transaction)
    }

    /// Zeroes the balance and reopens today's daily bonus. History stays.
    pub async fn reset(&mut self) -> Result<(), LedgerError> {
        self.store.set(BALANCE_KEY, "0".to_string()).await?;
        self.store.remove(DAILY_BONUS_KEY).await?;
        self.balance = 0;
        self.last_daily_bonus = None;
        info!("balance reset");
        Ok(())
    }

    pub async fn clear_history(&mut self) -> Result<(), LedgerError> {
        self.store.remove(HISTORY_KEY).await?;
        self.history.clear();
        info!("history cleared");
        Ok(())
    }

    fn next_balance(&self, amount: i64) -> Result<i64, LedgerError> {
        self.balance
            .checked_add(amount)
            .ok_or(LedgerError::Overflow {
                balance: self.balance,
                amount,
            })
    }

    /// Writes the new balance, history and bonus marker. Memory is only
    /// updated once every write has succeeded.
    async fn record(
        &mut self,
        transaction: Transaction,
        marker: Option<(&str, NaiveDate)>,
    ) -> Result<(), LedgerError> {
        let balance = self.next_balance(transaction.amount)?;
        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.push(transaction);
        history.extend(self.history.iter().cloned());

        let encoded = serde_json::to_string(&history)?;
        self.store.set(HISTORY_KEY, encoded).await?;
        self.store.set(BALANCE_KEY, balance.to_string()).await?;
        if let Some((key, day)) = marker {
            self.store.set(key, day.to_string()).await?;
        }

        self.balance = balance;
        self.history = history;
        Ok(())
    }
}

async fn load_marker<S: KeyValueStore>(
    store: &S,
    key: &str,
) -> Result<Option<NaiveDate>, LedgerError> {
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };
    match raw.trim().parse::<NaiveDate>() {
        Ok(date) => Ok(Some(date)),
        Err(err) => {
            warn!("ignoring stored {key} {raw:?}: {err}");
            Ok(None)
        }
    }
}
