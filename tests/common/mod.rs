use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use axum::{routing::post, Json, Router};
use reqwest::StatusCode;
use tokio::sync::OnceCell;

static SERVER: OnceCell<TestServer> = OnceCell::const_new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    async fn spawn() -> Result<Self> {
        let upstream = spawn_mock_upstream()?;

        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/campus-hub-rust");
        cmd.env("PORT", port.to_string())
            .env("SECRET_KEY", "integration-test-secret")
            .env("DATABASE_CONNECTION_TIMEOUT", "2")
            .env("CHAT_API_URL", format!("http://{}/chat", upstream))
            .env("CHAT_TIMEOUT_SECS", "1")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Inherit the rest of the environment so the server sees DATABASE_URL
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER
        .get_or_try_init(|| async { TestServer::spawn().await })
        .await?;
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Local stand-in for the external Q&A endpoint. Behavior is keyed off the
/// question text so tests can drive every upstream failure mode.
fn spawn_mock_upstream() -> Result<std::net::SocketAddr> {
    // Run the mock on its own dedicated runtime/thread so it outlives the
    // per-test runtime of whichever test first initializes the shared server.
    // (A `tokio::spawn` here would be torn down when that test returns,
    // leaving later tests pointed at a dead upstream.)
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(_) => return,
        };
        rt.block_on(async move {
            let listener = match tokio::net::TcpListener::bind("127.0.0.1:0").await {
                Ok(l) => l,
                Err(_) => return,
            };
            let addr = listener.local_addr().ok();
            let _ = tx.send(addr);
            let router = Router::new().route("/chat", post(chat_mock));
            let _ = axum::serve(listener, router).await;
        });
    });

    rx.recv()
        .context("mock upstream thread failed to start")?
        .context("mock upstream failed to bind")
}

async fn chat_mock(Json(body): Json<serde_json::Value>) -> axum::response::Response {
    use axum::response::IntoResponse;

    let question = body
        .get("question")
        .and_then(serde_json::Value::as_str)
        .unwrap_or("");

    match question {
        "upstream-unavailable" => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "error": "upstream down" })),
        )
            .into_response(),
        "upstream-slow" => {
            // Longer than the proxy's CHAT_TIMEOUT_SECS=1
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(serde_json::json!({ "answer": "late" })).into_response()
        }
        _ => Json(serde_json::json!({ "answer": "x" })).into_response(),
    }
}

/// Unique handle per test run; handles are capped at 20 chars.
pub fn unique_handle(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    format!("{}{}{}", prefix, std::process::id() % 10_000, nanos % 100_000)
}
