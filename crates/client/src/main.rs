//! `orderdesk` command-line entry point.
//!
//! Issues one authenticated GET against the API and prints the JSON body:
//!
//! ```text
//! ORDERDESK_API_URL=http://localhost:8000 ORDERDESK_AUTH_TOKEN=... orderdesk /orders/
//! ```
//!
//! Without `ORDERDESK_AUTH_TOKEN` the token persisted by a previous login is
//! used, if any.

#[cfg(not(target_arch = "wasm32"))]
const AUTH_TOKEN_ENV: &str = "ORDERDESK_AUTH_TOKEN";

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::sync::Arc;

    use anyhow::Context;
    use orderdesk_auth::{FileStore, KeyValueStore, Session};
    use orderdesk_client::{
        ApiClient, AuthInterceptor, ClientConfig, LOGIN_PATH, MemoryNavigator, Navigator,
        RequestDescriptor,
    };

    orderdesk_observability::init();

    let config = ClientConfig::from_env().context("invalid ORDERDESK_API_URL")?;

    let storage: Arc<dyn KeyValueStore> =
        Arc::new(FileStore::open_default().context("failed to open token storage")?);

    let session = if let Ok(token) = std::env::var(AUTH_TOKEN_ENV) {
        tracing::info!("Initializing session with authentication token");
        Session::with_token(Arc::clone(&storage), token)
    } else {
        tracing::info!("Initializing session without authentication token");
        Session::new(Arc::clone(&storage))
    };

    let navigator = Arc::new(MemoryNavigator::default());
    let interceptor = AuthInterceptor::new(Arc::new(session), storage, navigator.clone());
    let client = ApiClient::new(config, interceptor);

    let path = std::env::args().nth(1).unwrap_or_else(|| "/orders/".to_string());

    match client
        .fetch_json::<serde_json::Value>(RequestDescriptor::get(path.as_str()))
        .await
    {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        Err(err) => {
            if navigator.current_path() == LOGIN_PATH {
                eprintln!("Session expired or missing; log in again ({LOGIN_PATH}).");
            }
            Err(err).with_context(|| format!("GET {path} failed"))
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
