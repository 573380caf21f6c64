//! Typed calls against the service-order API.
//!
//! All of them go through [`ApiClient::send`], so the bearer credential is
//! attached and a 401 invalidates the session like any other request.

use orderdesk_auth::Session;
use orderdesk_core::{OrderFilter, OrderId, ServiceOrderRead, Token, UserId, UserRead};

use crate::client::ApiClient;
use crate::error::ClientError;
use crate::request::RequestDescriptor;

/// Exchange username/password for a token and store it in `session`.
pub async fn login(
    client: &ApiClient,
    session: &Session,
    username: &str,
    password: &str,
) -> Result<UserRead, ClientError> {
    let request = RequestDescriptor::post("/auth/login").form([
        ("username".to_string(), username.to_string()),
        ("password".to_string(), password.to_string()),
    ]);

    let token: Token = client.fetch_json(request).await?;
    let user = token.user.clone();
    session.login(token)?;
    Ok(user)
}

pub async fn list_users(client: &ApiClient) -> Result<Vec<UserRead>, ClientError> {
    client.fetch_json(RequestDescriptor::get("/users/")).await
}

pub async fn get_user(client: &ApiClient, user_id: UserId) -> Result<UserRead, ClientError> {
    client
        .fetch_json(RequestDescriptor::get(format!("/users/{user_id}")))
        .await
}

pub async fn list_orders(
    client: &ApiClient,
    filter: &OrderFilter,
) -> Result<Vec<ServiceOrderRead>, ClientError> {
    let request = RequestDescriptor::get("/orders/").query(filter.query_pairs());
    client.fetch_json(request).await
}

pub async fn get_order(
    client: &ApiClient,
    order_id: OrderId,
) -> Result<ServiceOrderRead, ClientError> {
    client
        .fetch_json(RequestDescriptor::get(format!("/orders/{order_id}")))
        .await
}
