//! `orderdesk-client`
//!
//! **Responsibility:** authenticated HTTP access to the service-order API for
//! the single-page frontend (and a small CLI).
//!
//! This crate provides:
//! - [`ApiClient`]: a request client bound to one base endpoint with JSON
//!   defaults, wrapping every call in [`AuthInterceptor`]
//! - the 401 policy: session logout plus a hard redirect to `/login`
//! - the static route table the frontend router is built from
//! - typed calls for the users and orders endpoints

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod navigation;
pub mod request;
pub mod routes;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use interceptor::{AuthInterceptor, handle_unauthorized};
pub use navigation::{MemoryNavigator, Navigator};
pub use request::{Body, RequestDescriptor};
pub use routes::{LOGIN_PATH, ROUTES, RouteEntry, View};

#[cfg(target_arch = "wasm32")]
pub use navigation::BrowserNavigator;
