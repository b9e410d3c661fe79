use std::sync::Arc;
use log::trace;
use crate::diagnostics::Diagnostics;
use crate::error::ProviderError;
use crate::request::ProviderRequestPayload;

pub const EDEN_API_URL: &str
  = "https://api.edenai.run/v2/text/generation";

/// Backing model provider selected inside the Eden AI payload
pub const PROVIDER: &str = "openai";

const SUCCESS_STATUS: &str = "success";

/// Client for the Eden AI text generation endpoint.
///
/// Every call is a single POST with no retry, no backoff and no
/// timeout beyond what the transport imposes.
#[derive(Clone)]
pub struct EdenClient
{   http_client: reqwest::Client
  , api_url: String
  , api_key: Option<String>
  , diagnostics: Arc<dyn Diagnostics>
}

impl EdenClient
{   pub fn new(
      config: &crate::config::RelayConfig
    , diagnostics: Arc<dyn Diagnostics>
    ) -> Self
    {   diagnostics.debug(format!(
          "Creating EdenClient for {}", config.api_url
        ));
        EdenClient
        {   http_client: reqwest::Client::new()
          , api_url: config.api_url.clone()
          , api_key: config.api_key.clone()
          , diagnostics
        }
    }

    /// Generate text for `message`.
    ///
    /// Provider-side failures come back as `Ok` with their descriptive
    /// string; only a malformed provider entry is returned as `Err`.
    pub async fn generate(&self, message: &str)
      -> Result<String, ProviderError>
    {   match self.call(message).await
        {   Ok(text) => Ok(text)
          , Err(e) if e.is_absorbed() => Ok(e.to_string())
          , Err(e) => Err(e)
        }
    }

    /// Perform the outbound call and classify the outcome
    pub async fn call(&self, message: &str)
      -> Result<String, ProviderError>
    {   let payload = ProviderRequestPayload
        {   text: message.to_string()
          , providers: vec![PROVIDER.to_string()]
        };

        trace!("Eden request: {:?}", payload);

        let response = self.http_client
          .post(&self.api_url)
          .bearer_auth(self.api_key.as_deref().unwrap_or_default())
          .header("Content-Type", "application/json")
          .json(&payload)
          .send()
          .await
          .map_err(|e| {
            self.diagnostics.error(format!(
              "Request exception occurred: {}", e
            ));
            ProviderError::Request(e.to_string())
          })?;

        let status = response.status();
        trace!("Eden response status: {}", status);

        let http_error = response.error_for_status_ref()
          .err()
          .map(|e| e.to_string());

        if let Some(detail) = http_error
        {   let body = response.text().await
              .unwrap_or_default();
            self.diagnostics.error(format!(
              "HTTP error occurred: {} - {}", detail, body
            ));
            return Err(ProviderError::Http
            {   status: status.as_u16()
              , detail
              , body
            });
        }

        let bytes = response.bytes().await
          .map_err(|e| {
            self.diagnostics.error(format!(
              "Request exception occurred: {}", e
            ));
            ProviderError::Request(e.to_string())
          })?;

        let data: serde_json::Value
          = serde_json::from_slice(&bytes).map_err(|e| {
            self.diagnostics.error(format!(
              "JSON decode error: {}", e
            ));
            ProviderError::Decode(e.to_string())
          })?;

        self.extract_text(data)
    }

    fn extract_text(&self, data: serde_json::Value)
      -> Result<String, ProviderError>
    {   let entry = match data.get(PROVIDER)
        {   Some(entry) => entry
          , None => return Err(self.unprocessable(&data))
        };

        let fields = entry.as_object().ok_or_else(|| {
          self.malformed(format!("{} entry is not an object", PROVIDER))
        })?;

        let status = fields.get("status").ok_or_else(|| {
          self.malformed(format!("{} entry has no status", PROVIDER))
        })?;

        if status.as_str() != Some(SUCCESS_STATUS)
        {   return Err(self.unprocessable(&data));
        }

        match fields.get("generated_text")
        {   Some(serde_json::Value::String(text)) => Ok(text.clone())
          , _ => Err(self.malformed(format!(
              "successful {} entry without generated_text", PROVIDER
            )))
        }
    }

    fn malformed(&self, detail: String) -> ProviderError
    {   self.diagnostics.error(format!(
          "Unexpected result from Eden AI: {}", detail
        ));
        ProviderError::Malformed(detail)
    }

    fn unprocessable(&self, data: &serde_json::Value) -> ProviderError
    {   let body = data.to_string();
        self.diagnostics.error(format!(
          "Error from Eden AI API: {}", body
        ));
        ProviderError::Unprocessable(body)
    }
}
