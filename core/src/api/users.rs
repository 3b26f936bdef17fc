//! Users façade.
//!
//! # Design
//! Reads go through the retrying verbs like every other façade. Mutations
//! intentionally do NOT: they call `send_raw`, a single attempt with no
//! retry. This mirrors long-standing suite behavior and is kept as a
//! distinct, undecorated code path rather than unified with the rest.

use std::fmt::Display;

use serde_json::Value;

use crate::error::ClientError;
use crate::http::{Envelope, HttpClient, HttpMethod};

#[derive(Clone)]
pub struct UsersClient {
    http: HttpClient,
}

impl UsersClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn get_users(&self) -> Result<Envelope, ClientError> {
        self.http.get("/users", &[])
    }

    pub fn get_user_by_id(&self, user_id: impl Display) -> Result<Envelope, ClientError> {
        self.http.get(&format!("/users/{user_id}"), &[])
    }

    pub fn create_user(&self, user: &Value) -> Result<Envelope, ClientError> {
        self.http.send_raw(HttpMethod::Post, "/users", Some(user))
    }

    pub fn update_user(&self, user_id: impl Display, user: &Value) -> Result<Envelope, ClientError> {
        self.http.send_raw(HttpMethod::Put, &format!("/users/{user_id}"), Some(user))
    }

    pub fn patch_user(&self, user_id: impl Display, user: &Value) -> Result<Envelope, ClientError> {
        self.http.send_raw(HttpMethod::Patch, &format!("/users/{user_id}"), Some(user))
    }

    pub fn delete_user(&self, user_id: impl Display) -> Result<Envelope, ClientError> {
        self.http.send_raw(HttpMethod::Delete, &format!("/users/{user_id}"), None)
    }
}
