//! `orderdesk-core` — shared types for the service-order client.
//!
//! Everything here is transport-agnostic and compiles for both native and
//! `wasm32` targets.

pub mod credential;
pub mod error;
pub mod id;
pub mod model;

pub use credential::Credential;
pub use error::{CoreError, CoreResult};
pub use id::{OrderId, UserId};
pub use model::{ClientRead, EquipmentRead, OrderFilter, ServiceOrderRead, Token, UserRead};
