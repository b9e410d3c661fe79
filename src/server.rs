//! HTTP front door: landing page and the `/chat` endpoint

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::info;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use crate::diagnostics::Diagnostics;
use crate::error::RelayError;
use crate::providers::EdenClient;
use crate::request::{ChatRequest, ChatResponse};

pub const NO_MESSAGE: &str = "No message provided";
pub const INTERNAL_ERROR: &str = "Internal Server Error";

const INDEX_HTML: &str = include_str!("../static/index.html");
const SCRIPT_JS: &str = include_str!("../static/js/script.js");

/// Shared, read-only state of every request
pub struct RelayState
{   client: EdenClient
  , diagnostics: Arc<dyn Diagnostics>
}

impl RelayState
{   pub fn new(
      client: EdenClient
    , diagnostics: Arc<dyn Diagnostics>
    ) -> Self
    {   RelayState
        {   client
          , diagnostics
        }
    }
}

/// Ways a `/chat` request can fail at the HTTP level
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatFailure
{   /// `message` missing or empty
    NoMessage
  , /// Anything unexpected; the detail is logged, never returned
    Internal(String)
}

impl IntoResponse for ChatFailure
{   fn into_response(self) -> Response
    {   match self
        {   ChatFailure::NoMessage => (
              StatusCode::BAD_REQUEST,
              Json(ChatResponse::Error(NO_MESSAGE.to_string())),
            ).into_response()
          , ChatFailure::Internal(_) => internal_error()
        }
    }
}

fn internal_error() -> Response
{   (
      StatusCode::INTERNAL_SERVER_ERROR,
      Json(ChatResponse::Error(INTERNAL_ERROR.to_string())),
    ).into_response()
}

/// Build the relay router
pub fn router(state: RelayState) -> Router
{   let diagnostics = Arc::clone(&state.diagnostics);
    let on_panic = move |panic: Box<dyn Any + Send + 'static>| {
      diagnostics.error(format!(
        "Error processing the request: handler panicked: {}",
        panic_message(panic.as_ref())
      ));
      internal_error()
    };

    Router::new()
      .route("/", get(index))
      .route("/static/js/script.js", get(script))
      .route("/chat", post(chat))
      .layer(CatchPanicLayer::custom(on_panic))
      .with_state(Arc::new(state))
}

/// Bind `addr` and serve the relay until the process is terminated
pub async fn serve(state: RelayState, addr: SocketAddr)
  -> Result<(), RelayError>
{   let app = router(state);

    let listener = TcpListener::bind(addr)
      .await
      .map_err(|source| RelayError::Bind { addr, source })?;
    info!("Relay listening on http://{}", addr);

    axum::serve(listener, app)
      .await
      .map_err(RelayError::Serve)
}

async fn index() -> Html<&'static str>
{   Html(INDEX_HTML)
}

async fn script() -> impl IntoResponse
{   ([(header::CONTENT_TYPE, "application/javascript")], SCRIPT_JS)
}

async fn chat(
  State(state): State<Arc<RelayState>>
, body: Bytes
) -> Result<Json<ChatResponse>, ChatFailure>
{   match process_chat(&state, &body).await
    {   Ok(text) => {
          state.diagnostics.debug(format!(
            "Eden AI response: {}", text
          ));
          Ok(Json(ChatResponse::Response(text)))
        }
      , Err(ChatFailure::NoMessage) => {
          state.diagnostics.error(NO_MESSAGE.to_string());
          Err(ChatFailure::NoMessage)
        }
      , Err(ChatFailure::Internal(detail)) => {
          state.diagnostics.error(format!(
            "Error processing the request: {}", detail
          ));
          Err(ChatFailure::Internal(detail))
        }
    }
}

async fn process_chat(state: &RelayState, body: &[u8])
  -> Result<String, ChatFailure>
{   let body: serde_json::Value = serde_json::from_slice(body)
      .map_err(|e| ChatFailure::Internal(
        format!("invalid request body: {}", e)
      ))?;
    if !body.is_object()
    {   return Err(ChatFailure::Internal(
          "invalid request body: not a JSON object".to_string()
        ));
    }

    let request: ChatRequest = serde_json::from_value(body)
      .map_err(|e| ChatFailure::Internal(
        format!("invalid request body: {}", e)
      ))?;

    let message = request.message()
      .map_err(|e| ChatFailure::Internal(
        format!("invalid request body: {}", e)
      ))?
      .ok_or(ChatFailure::NoMessage)?;

    state.client.generate(message)
      .await
      .map_err(|e| ChatFailure::Internal(e.to_string()))
}

fn panic_message(panic: &(dyn Any + Send)) -> &str
{   if let Some(s) = panic.downcast_ref::<String>()
    {   s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>()
    {   s
    } else
    {   "unknown panic"
    }
}
