use std::sync::Arc;
use log::{debug, info, warn};
use edenrelay::{Diagnostics, EdenClient, LogDiagnostics, RelayConfig, RelayState};

#[tokio::main]
async fn main() -> Result<(), edenrelay::RelayError>
{   let dotenv = dotenvy::dotenv();

    env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or("debug")
    ).init();

    if let Err(e) = dotenv
    {   // a missing .env is the normal case
        if !e.not_found()
        {   warn!("Ignoring unreadable .env: {}", e);
        }
    }

    info!("Starting edenrelay");
    let config = RelayConfig::from_env()?;
    debug!("API key configured: {}", config.api_key.is_some());

    let diagnostics: Arc<dyn Diagnostics> = Arc::new(LogDiagnostics);
    let client = EdenClient::new(&config, Arc::clone(&diagnostics));
    let state = RelayState::new(client, diagnostics);

    edenrelay::serve(state, config.bind).await
}
