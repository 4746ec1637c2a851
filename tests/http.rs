use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct BalanceResponse {
    date: String,
    balance: i64,
}

#[derive(Debug, Deserialize)]
struct Transaction {
    label: String,
    amount: i64,
    date: String,
}

#[derive(Debug, Deserialize)]
struct TransactionResponse {
    balance: i64,
    transaction: Transaction,
}

#[derive(Debug, Deserialize)]
struct BonusResponse {
    granted: bool,
    balance: i64,
}

#[derive(Debug, Deserialize)]
struct WeeklySummary {
    earned: i64,
    spent: i64,
    net: i64,
}

#[derive(Debug, Deserialize)]
struct StatsResponse {
    weekly_summary: WeeklySummary,
    balance_points: Vec<i64>,
}

struct TestServer {
    base_url: String,
    data_path: PathBuf,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
        let _ = std::fs::remove_file(&self.data_path);
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[cfg(unix)]
mod cleanup {
    use once_cell::sync::Lazy;
    use std::sync::{Mutex, Once};

    static REGISTER: Once = Once::new();
    static PIDS: Lazy<Mutex<Vec<i32>>> = Lazy::new(|| Mutex::new(Vec::new()));

    pub fn register(pid: u32) {
        if let Ok(mut pids) = PIDS.lock() {
            pids.push(pid as i32);
        }
        REGISTER.call_once(|| unsafe {
            libc::atexit(on_exit);
        });
    }

    extern "C" fn on_exit() {
        if let Ok(pids) = PIDS.lock() {
            for &pid in pids.iter() {
                unsafe {
                    libc::kill(pid, libc::SIGTERM);
                }
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("dodo_coin_http_{}_{}.json", std::process::id(), nanos));
    path
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/balance")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

/// Every test gets its own process and data file, so balances start at zero.
async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_dodo_coin"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", &data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer {
        base_url,
        data_path,
        child,
    }
}

async fn balance(client: &Client, server: &TestServer) -> BalanceResponse {
    client
        .get(format!("{}/api/balance", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn history(client: &Client, server: &TestServer) -> Vec<Transaction> {
    client
        .get(format!("{}/api/history", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn apply(client: &Client, server: &TestServer, task: &str) -> reqwest::Response {
    client
        .post(format!("{}/api/transactions", server.base_url))
        .json(&serde_json::json!({ "task": task }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_earn_task_raises_balance() {
    let _guard = TEST_LOCK.lock().await;
    let server = spawn_server().await;
    let client = Client::new();

    let before = balance(&client, &server).await;
    assert_eq!(before.balance, 0);
    assert!(!before.date.is_empty());

    let response = apply(&client, &server, "Workout").await;
    assert!(response.status().is_success());
    let applied: TransactionResponse = response.json().await.unwrap();
    assert_eq!(applied.balance, 15);
    assert_eq!(applied.transaction.label, "Workout");
    assert_eq!(applied.transaction.amount, 15);
    assert!(applied.transaction.date.starts_with(&before.date));

    assert_eq!(balance(&client, &server).await.balance, 15);
    let history = history(&client, &server).await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].label, "Workout");
}

#[tokio::test]
async fn http_unaffordable_spend_is_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = spawn_server().await;
    let client = Client::new();

    let response = apply(&client, &server, "Baseball").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text().await.unwrap(), "Not enough coins.");

    assert_eq!(balance(&client, &server).await.balance, 0);
    assert!(history(&client, &server).await.is_empty());

    let unknown = apply(&client, &server, "Nap").await;
    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_bonuses_are_gated_per_day() {
    let _guard = TEST_LOCK.lock().await;
    let server = spawn_server().await;
    let client = Client::new();

    let daily_url = format!("{}/api/bonus/daily", server.base_url);
    let first: BonusResponse = client.post(&daily_url).send().await.unwrap().json().await.unwrap();
    let second: BonusResponse = client.post(&daily_url).send().await.unwrap().json().await.unwrap();
    assert!(first.granted);
    assert_eq!(first.balance, 2);
    assert!(!second.granted);
    assert_eq!(second.balance, 2);

    let eod_url = format!("{}/api/bonus/end-of-day", server.base_url);
    let claimed = client.post(&eod_url).send().await.unwrap();
    assert!(claimed.status().is_success());
    let claimed: TransactionResponse = claimed.json().await.unwrap();
    assert_eq!(claimed.balance, 12);

    let repeat = client.post(&eod_url).send().await.unwrap();
    assert_eq!(repeat.status(), StatusCode::CONFLICT);
    assert_eq!(balance(&client, &server).await.balance, 12);
}

#[tokio::test]
async fn http_reset_and_clear_history() {
    let _guard = TEST_LOCK.lock().await;
    let server = spawn_server().await;
    let client = Client::new();

    assert!(apply(&client, &server, "Workout").await.status().is_success());
    assert!(apply(&client, &server, "Ice cream / snack").await.status().is_success());

    let stats: StatsResponse = client
        .get(format!("{}/api/stats", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats.weekly_summary.earned, 15);
    assert_eq!(stats.weekly_summary.spent, -10);
    assert_eq!(stats.weekly_summary.net, 5);
    assert_eq!(stats.balance_points, vec![15, 5]);

    let reset: BalanceResponse = client
        .post(format!("{}/api/reset", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reset.balance, 0);
    assert_eq!(history(&client, &server).await.len(), 2);

    let cleared = client
        .delete(format!("{}/api/history", server.base_url))
        .send()
        .await
        .unwrap();
    assert!(cleared.status().is_success());
    assert!(history(&client, &server).await.is_empty());
    assert_eq!(balance(&client, &server).await.balance, 0);
}

#[tokio::test]
async fn http_index_shows_balance() {
    let _guard = TEST_LOCK.lock().await;
    let server = spawn_server().await;
    let client = Client::new();

    assert!(apply(&client, &server, "5 min edit").await.status().is_success());
    let page = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("Dodo Coin"));
    assert!(page.contains(r#"<span id="balance" class="value coins">3</span>"#));
}

#[tokio::test]
async fn http_data_file_is_removed_with_the_server() {
    let _guard = TEST_LOCK.lock().await;
    let server = spawn_server().await;
    let client = Client::new();

    assert!(apply(&client, &server, "Workout").await.status().is_success());
    let data_path = server.data_path.clone();
    assert!(data_path.exists());

    drop(server);
    assert!(!data_path.exists());
}
