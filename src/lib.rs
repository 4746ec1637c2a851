pub mod app;
pub mod catalog;
pub mod errors;
pub mod handlers;
pub mod ledger;
pub mod models;
pub mod stats;
pub mod storage;
pub mod ui;
pub mod state;

pub use app::router;
pub use errors::{AppError, LedgerError};
pub use ledger::Ledger;
pub use state::AppState;
pub use storage::{resolve_data_path, FileStore, KeyValueStore, MemoryStore};
