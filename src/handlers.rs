use crate::catalog::{find_task, EARN_TASKS, SPEND_TASKS};
use crate::errors::AppError;
use crate::models::{
    BalanceResponse, BonusResponse, CatalogResponse, StatsResponse, TaskRequest, Transaction,
    TransactionResponse,
};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use chrono::Utc;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let ledger = state.ledger.lock().await;
    Html(render_index(&today_string(), ledger.balance()))
}

pub async fn get_tasks() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        earn: EARN_TASKS,
        spend: SPEND_TASKS,
    })
}

pub async fn get_balance(State(state): State<AppState>) -> Json<BalanceResponse> {
    let ledger = state.ledger.lock().await;
    Json(balance_response(ledger.balance()))
}

pub async fn get_history(State(state): State<AppState>) -> Json<Vec<Transaction>> {
    let ledger = state.ledger.lock().await;
    Json(ledger.history().to_vec())
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let ledger = state.ledger.lock().await;
    Json(build_stats(ledger.history()))
}

pub async fn apply_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskRequest>,
) -> Result<Json<TransactionResponse>, AppError> {
    let label = payload.task.trim();
    let task = find_task(label)
        .ok_or_else(|| AppError::bad_request(format!("unknown task '{label}'")))?;

    let mut ledger = state.ledger.lock().await;
    let transaction = ledger.apply_task(task, Utc::now()).await?;

    Ok(Json(TransactionResponse {
        balance: ledger.balance(),
        transaction,
    }))
}

pub async fn daily_bonus(State(state): State<AppState>) -> Result<Json<BonusResponse>, AppError> {
    let mut ledger = state.ledger.lock().await;
    let transaction = ledger.grant_daily_bonus(Utc::now()).await?;

    Ok(Json(BonusResponse {
        granted: transaction.is_some(),
        balance: ledger.balance(),
        transaction,
    }))
}

pub async fn end_of_day_bonus(
    State(state): State<AppState>,
) -> Result<Json<TransactionResponse>, AppError> {
    let mut ledger = state.ledger.lock().await;
    let transaction = ledger.grant_end_of_day_bonus(Utc::now()).await?;

    Ok(Json(TransactionResponse {
        balance: ledger.balance(),
        transaction,
    }))
}

pub async fn reset(State(state): State<AppState>) -> Result<Json<BalanceResponse>, AppError> {
    let mut ledger = state.ledger.lock().await;
    ledger.reset().await?;
    Ok(Json(balance_response(ledger.balance())))
}

pub async fn clear_history(
    State(state): State<AppState>,
) -> Result<Json<BalanceResponse>, AppError> {
    let mut ledger = state.ledger.lock().await;
    ledger.clear_history().await?;
    Ok(Json(balance_response(ledger.balance())))
}

fn balance_response(balance: i64) -> BalanceResponse {
    BalanceResponse {
        date: today_string(),
        balance,
    }
}

fn today_string() -> String {
    Utc::now().date_naive().to_string()
}
