// tests/common/mod.rs

//! Canned-response HTTP/1.1 server for driving the client against a
//! loopback listener. Responses are served in order; every request target
//! (path plus query) is recorded for assertions.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use url::Url;

pub struct CannedResponse {
    status: u16,
    content_type: &'static str,
    body: String,
}

impl CannedResponse {
    pub fn json(body: Value) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub fn text(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "text/plain",
            body: body.to_string(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: String::new(),
        }
    }

    fn to_bytes(&self) -> Vec<u8> {
        format!(
            "HTTP/1.1 {} canned\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status,
            self.content_type,
            self.body.len(),
            self.body
        )
        .into_bytes()
    }
}

pub struct TestServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

/// Installs an env-filter subscriber so `RUST_LOG` controls the client's
/// `tracing` output while debugging tests. Only the first call installs;
/// later ones are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

impl TestServer {
    /// Binds a loopback listener and serves `responses` in order. Requests
    /// beyond the scripted ones get a 500.
    pub async fn start(responses: Vec<CannedResponse>) -> Self {
        init_tracing();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        tokio::spawn(async move {
            let mut responses = responses.into_iter();
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                let Some(target) = read_request_target(&mut stream).await else {
                    continue;
                };
                recorded.lock().await.push(target);
                let response = responses.next().unwrap_or_else(|| CannedResponse::status(500));
                let _ = stream.write_all(&response.to_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });
        Self { addr, requests }
    }

    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}/", self.addr)).unwrap()
    }

    /// Request targets (path plus query) seen so far, in order.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }
}

/// Reads the request head (and any body announced via Content-Length) and
/// returns the request target.
async fn read_request_target(stream: &mut tokio::net::TcpStream) -> Option<String> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    let head_end = loop {
        if let Some(pos) = buf.windows(4).position(|window| window == b"\r\n\r\n") {
            break pos;
        }
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return None,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    };
    let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            let line = line.to_ascii_lowercase();
            line.strip_prefix("content-length:")
                .map(|value| value.trim().to_string())
        })
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(0);
    while buf.len() < head_end + 4 + content_length {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    head.lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .map(String::from)
}

/// A client suitable for tests with a paused clock: no total timeout and
/// no idle-pool timer that auto-advance could trip over.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .build()
        .unwrap()
}

pub fn info_json(current: u64, max: u64, cool_off: u64) -> Value {
    json!({
        "engineVersion": "2.2.0",
        "criteriaVersion": "2009q",
        "maxAssessments": max,
        "currentAssessments": current,
        "newAssessmentCoolOff": cool_off,
        "messages": ["This assessment service is provided free of charge by Qualys SSL Labs."]
    })
}

pub fn host_json(status: &str) -> Value {
    json!({
        "host": "example.com",
        "port": 443,
        "protocol": "http",
        "isPublic": false,
        "status": status
    })
}

pub fn endpoint_json() -> Value {
    json!({
        "ipAddress": "192.0.2.1",
        "serverName": "example.com",
        "statusMessage": "Ready",
        "grade": "A",
        "gradeTrustIgnored": "A",
        "hasWarnings": false,
        "isExceptional": false,
        "progress": 100,
        "duration": 66409,
        "delegation": 1
    })
}
