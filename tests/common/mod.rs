//! Shared helpers: a local stand-in for the Eden AI endpoint and a
//! diagnostics sink that remembers what it was told.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::routing::post;
use axum::Router;
use edenrelay::{Diagnostics, EdenClient, RelayConfig, RelayState};
use http_body_util::BodyExt;
use log::Level;
use tower::ServiceExt;

pub const STUB_PATH: &str = "/v2/text/generation";
pub const TEST_KEY: &str = "test-key";

/// What the stub provider saw for one call
#[derive(Debug, Clone)]
pub struct SeenRequest
{   pub authorization: Option<String>
  , pub body: serde_json::Value
}

pub struct StubProvider
{   pub url: String
  , seen: Arc<Mutex<Vec<SeenRequest>>>
}

impl StubProvider
{   pub fn seen(&self) -> Vec<SeenRequest>
    {   self.seen.lock().unwrap().clone()
    }
}

/// Serve a fixed reply on an ephemeral local port
pub async fn spawn_provider(status: StatusCode, reply: &str)
  -> StubProvider
{   let seen = Arc::new(Mutex::new(Vec::new()));
    let reply = reply.to_string();

    let recorder = Arc::clone(&seen);
    let app = Router::new().route(
      STUB_PATH,
      post(move |headers: HeaderMap, body: Bytes| {
        let recorder = Arc::clone(&recorder);
        let reply = reply.clone();
        async move {
          let authorization = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
          let body = serde_json::from_slice(&body)
            .unwrap_or(serde_json::Value::Null);
          recorder.lock().unwrap()
            .push(SeenRequest { authorization, body });
          (status, reply)
        }
      }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
      .await
      .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
      axum::serve(listener, app).await.unwrap();
    });

    StubProvider
    {   url: format!("http://{}{}", addr, STUB_PATH)
      , seen
    }
}

/// A URL nothing is listening on
pub async fn refused_url() -> String
{   let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
      .await
      .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, STUB_PATH)
}

#[derive(Default)]
pub struct RecordingDiagnostics
{   entries: Mutex<Vec<(Level, String)>>
}

impl RecordingDiagnostics
{   pub fn entries(&self) -> Vec<(Level, String)>
    {   self.entries.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String>
    {   self.entries()
          .into_iter()
          .filter(|(level, _)| *level == Level::Error)
          .map(|(_, message)| message)
          .collect()
    }

    pub fn has_error_containing(&self, needle: &str) -> bool
    {   self.errors().iter().any(|m| m.contains(needle))
    }
}

impl Diagnostics for RecordingDiagnostics
{   fn record(&self, level: Level, message: String)
    {   self.entries.lock().unwrap().push((level, message));
    }
}

pub fn test_config(api_url: &str) -> RelayConfig
{   RelayConfig
    {   api_key: Some(TEST_KEY.to_string())
      , api_url: api_url.to_string()
      , bind: "127.0.0.1:0".parse().unwrap()
    }
}

pub fn client(api_url: &str, diagnostics: Arc<RecordingDiagnostics>)
  -> EdenClient
{   EdenClient::new(&test_config(api_url), diagnostics)
}

pub fn relay(api_url: &str, diagnostics: Arc<RecordingDiagnostics>)
  -> Router
{   let client = client(api_url, Arc::clone(&diagnostics));
    edenrelay::router(RelayState::new(client, diagnostics))
}

/// POST `body` to `/chat` and decode the JSON reply
pub async fn post_chat(app: Router, body: &str)
  -> (StatusCode, serde_json::Value)
{   let response = app
      .oneshot(
        Request::builder()
          .method("POST")
          .uri("/chat")
          .header("content-type", "application/json")
          .body(Body::from(body.to_string()))
          .unwrap(),
      )
      .await
      .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// Eden AI style body with a single provider entry
pub fn eden_body(entry: serde_json::Value) -> String
{   serde_json::json!({ "openai": entry }).to_string()
}
