pub mod error;
pub mod config;
pub mod diagnostics;
pub mod providers;
pub mod request;
pub mod server;

/*

edenrelay: a small web relay in front of the Eden AI text generation
api. a browser posts a message to /chat, the relay forwards it to the
openai provider through eden, and hands back whatever text comes out.

edenrelay/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports
│   ├── main.rs         # Server binary
│   ├── error.rs        # Provider, config and server errors
│   ├── config.rs       # Environment configuration
│   ├── diagnostics.rs  # Injected logging sink
│   ├── request.rs      # Relay and provider payloads
│   ├── server.rs       # Routes and status mapping
│   └── providers/
│       ├── mod.rs
│       └── eden.rs     # Eden AI client
├── static/             # Landing page
└── tests/

provider side failures (bad status, network, undecodable json, a
non-success status) are reported as a normal 200 `response` string.
only a missing message (400) or something unexpected (500) changes the
status code.

*/

pub use config::RelayConfig;
pub use diagnostics::{Diagnostics, LogDiagnostics};
pub use error::{ConfigError, ProviderError, RelayError};
pub use providers::EdenClient;
pub use request::{ChatRequest, ChatResponse};
pub use server::{router, serve, RelayState};
