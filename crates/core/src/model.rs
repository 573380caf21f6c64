//! Request/response shapes of the service-order API.
//!
//! Field names follow the JSON produced by the backend. Timestamps are naive
//! because the backend stores them without an offset.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::id::{OrderId, UserId};

fn default_role() -> String {
    "tecnico".to_string()
}

fn default_active() -> bool {
    true
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// A user as returned by `/users/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRead {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserRead,
}

/// Customer owning the equipment under service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRead {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRead {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    pub client_id: i64,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// A service order with its related records expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOrderRead {
    pub id: OrderId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    pub client_id: i64,
    pub equipment_id: i64,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub client: Option<ClientRead>,
    #[serde(default)]
    pub equipment: Option<EquipmentRead>,
    #[serde(default)]
    pub user: Option<UserRead>,
}

/// Optional filters for `GET /orders/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub skip: Option<u32>,
    /// The backend caps this at 100.
    pub limit: Option<u32>,
    pub status: Option<String>,
    pub user_id: Option<UserId>,
}

impl OrderFilter {
    /// Query-string pairs for the filters that are set, in a stable order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(skip) = self.skip {
            pairs.push(("skip".to_string(), skip.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status".to_string(), status.clone()));
        }
        if let Some(user_id) = self.user_id {
            pairs.push(("user_id".to_string(), user_id.to_string()));
        }
        pairs
    }
}
