use axum::http::StatusCode;
use chrono::NaiveDate;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("not enough coins: balance {balance}, amount {amount}")]
    InsufficientCoins { balance: i64, amount: i64 },
    #[error("balance overflow: balance {balance}, amount {amount}")]
    Overflow { balance: i64, amount: i64 },
    #[error("bonus already claimed on {0}")]
    AlreadyClaimed(NaiveDate),
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("failed to encode history: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientCoins { .. } => Self::bad_request("Not enough coins."),
            LedgerError::Overflow { .. } => Self::bad_request("Balance limit reached."),
            LedgerError::AlreadyClaimed(_) => {
                Self::conflict("End of day bonus already claimed today.")
            }
            LedgerError::Storage(_) | LedgerError::Encode(_) => {
                error!("ledger persistence failed: {err}");
                Self::internal(err)
            }
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
