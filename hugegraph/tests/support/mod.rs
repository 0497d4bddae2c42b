//! Transport doubles for integration tests.

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use hugegraph::{ApiError, Transport, TransportConfig};

pub const AGE_JSON: &str = r#"{"id":1,"name":"age","data_type":"INT","cardinality":"SINGLE","aggregate_type":"NONE","write_type":"OLTP","properties":[],"status":"CREATED","user_data":{"min":0,"max":100,"~create_time":"2024-01-01"}}"#;

/// What the stub does when `perform` is called.
pub enum Reply {
    /// Answer with this status and body.
    Body(u16, &'static str),
    /// Fail with the error this function builds.
    Fail(fn() -> ApiError),
    /// Never answer.
    Hang,
    /// Panic: the test asserts no I/O happens.
    Unreachable,
}

/// A request as the stub saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Seen {
    pub method: reqwest::Method,
    pub path: String,
    pub timeout: Option<Duration>,
}

pub struct StubTransport {
    config: TransportConfig,
    reply: Reply,
    calls: AtomicUsize,
    seen: Mutex<Vec<Seen>>,
}

impl StubTransport {
    pub fn new(reply: Reply) -> Self {
        Self::with_graph("hugegraph", reply)
    }

    pub fn with_graph(graph: &str, reply: Reply) -> Self {
        let config = TransportConfig::builder()
            .graph(graph)
            .build()
            .expect("valid test config");
        Self {
            config,
            reply,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().expect("seen lock").clone()
    }
}

impl Transport for StubTransport {
    fn config(&self) -> &TransportConfig {
        &self.config
    }

    async fn perform(&self, request: reqwest::Request) -> Result<reqwest::Response, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().expect("seen lock").push(Seen {
            method: request.method().clone(),
            path: request.url().path().to_string(),
            timeout: request.timeout().copied(),
        });

        match &self.reply {
            Reply::Body(status, body) => {
                let response = http::Response::builder()
                    .status(*status)
                    .header("content-type", "application/json")
                    .body(body.to_string())
                    .expect("valid canned response");
                Ok(reqwest::Response::from(response))
            }
            Reply::Fail(make) => Err(make()),
            Reply::Hang => std::future::pending().await,
            Reply::Unreachable => panic!("transport must not be called"),
        }
    }
}
