//! Outbound request description.
//!
//! A [`RequestDescriptor`] is what the interceptors see and mutate before the
//! client hands it to the transport.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

use crate::error::ClientError;

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded` pairs.
    Form(Vec<(String, String)>),
}

#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    /// Path relative to the base endpoint, or an absolute URL.
    pub path: String,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub body: Option<Body>,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Set a header, replacing any previous value.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn query(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ClientError> {
        let value = serde_json::to_value(body).map_err(|e| ClientError::Encode(e.to_string()))?;
        self.body = Some(Body::Json(value));
        Ok(self)
    }

    /// Form-encoded body. Overrides the default JSON content type.
    pub fn form(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        self.body = Some(Body::Form(pairs.into_iter().collect()));
        self
    }

    pub fn authorization(&self) -> Option<&str> {
        self.headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok())
    }

    /// Fill in every default header the request does not set itself.
    pub(crate) fn apply_defaults(&mut self, defaults: &HeaderMap) {
        for (name, value) in defaults {
            if !self.headers.contains_key(name) {
                self.headers.insert(name.clone(), value.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json_defaults() -> HeaderMap {
        let mut defaults = HeaderMap::new();
        defaults.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        defaults
    }

    #[test]
    fn defaults_fill_missing_headers() {
        let mut request = RequestDescriptor::get("/orders");
        request.apply_defaults(&json_defaults());
        assert_eq!(request.headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn caller_headers_beat_defaults() {
        let mut request = RequestDescriptor::post("/auth/login")
            .form([("username".to_string(), "admin".to_string())]);
        request.apply_defaults(&json_defaults());

        assert_eq!(
            request.headers.get(CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(
            request.body,
            Some(Body::Form(vec![("username".to_string(), "admin".to_string())]))
        );
    }

    #[test]
    fn json_body_is_captured() {
        let request = RequestDescriptor::put("/orders/1")
            .json(&serde_json::json!({ "status": "fechada" }))
            .unwrap();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(
            request.body,
            Some(Body::Json(serde_json::json!({ "status": "fechada" })))
        );
    }

    #[test]
    fn authorization_accessor() {
        let request = RequestDescriptor::delete("/orders/1")
            .header(AUTHORIZATION, HeaderValue::from_static("Basic Zm9vOmJhcg=="));
        assert_eq!(request.authorization(), Some("Basic Zm9vOmJhcg=="));
        assert_eq!(RequestDescriptor::get("/").authorization(), None);
    }
}
