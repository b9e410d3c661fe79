//! Request and response types of the relay and the provider API

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /chat`
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest
{   #[serde(default)]
    pub message: Option<Value>
}

impl ChatRequest
{   /// The message to forward.
    ///
    /// `Ok(None)` when it is missing or falsy (`null`, `""`, `0`,
    /// `false`, `[]`, `{}`); `Err` when it is a non-empty value that
    /// is not a string.
    pub fn message(&self) -> Result<Option<&str>, String>
    {   match &self.message
        {   None => Ok(None)
          , Some(value) if is_falsy(value) => Ok(None)
          , Some(Value::String(text)) => Ok(Some(text.as_str()))
          , Some(other) => Err(format!(
              "message is not a string: {}", other
            ))
        }
    }
}

fn is_falsy(value: &Value) -> bool
{   match value
    {   Value::Null => true
      , Value::Bool(b) => !b
      , Value::Number(n) => n.as_f64() == Some(0.0)
      , Value::String(s) => s.is_empty()
      , Value::Array(items) => items.is_empty()
      , Value::Object(fields) => fields.is_empty()
    }
}

/// Body returned by `POST /chat`; serializes to either
/// `{"response": ..}` or `{"error": ..}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatResponse
{   Response(String)
  , Error(String)
}

/// Payload sent to the text generation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderRequestPayload
{   pub text: String
  , pub providers: Vec<String>
}
