use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::Value;
use tokio::net::TcpListener;

/// What the mock endpoint saw on its last request.
#[derive(Debug, Clone, Default)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

pub struct MockCompletionServer {
    pub base_url: String,
    captured: Arc<Mutex<Option<CapturedRequest>>>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl MockCompletionServer {
    pub async fn start(status: u16, response_body: impl Into<String>) -> Self {
        let response_body: String = response_body.into();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://127.0.0.1:{}/v1", addr.port());

        let captured: Arc<Mutex<Option<CapturedRequest>>> = Arc::new(Mutex::new(None));
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let sink = captured.clone();
        tokio::spawn(async move {
            let route = post(move |headers: HeaderMap, body: String| {
                let sink = sink.clone();
                let response_body = response_body.clone();
                async move {
                    let header = |name: &str| {
                        headers
                            .get(name)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string)
                    };
                    *sink.lock().unwrap() = Some(CapturedRequest {
                        authorization: header("authorization"),
                        content_type: header("content-type"),
                        body: serde_json::from_str(&body).unwrap_or(Value::Null),
                    });
                    (
                        StatusCode::from_u16(status).unwrap(),
                        [("Content-Type", "application/json")],
                        response_body,
                    )
                }
            });

            let app = Router::new().route("/v1/chat/completions", route);

            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
                .unwrap();
        });

        Self {
            base_url,
            captured,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn captured(&self) -> Option<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

impl Drop for MockCompletionServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-1",
        "model": "m1",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}],
        "usage": {"prompt_tokens": 30, "completion_tokens": 12, "total_tokens": 42}
    })
    .to_string()
}
