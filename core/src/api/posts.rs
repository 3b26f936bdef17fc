//! Posts façade: collection, item, owner filter, and full CRUD through the
//! retrying verbs.

use std::fmt::Display;

use serde_json::Value;

use crate::error::ClientError;
use crate::http::{Envelope, HttpClient};

#[derive(Clone)]
pub struct PostsClient {
    http: HttpClient,
}

impl PostsClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn get_posts(&self) -> Result<Envelope, ClientError> {
        self.http.get("/posts", &[])
    }

    pub fn get_post_by_id(&self, post_id: impl Display) -> Result<Envelope, ClientError> {
        self.http.get(&format!("/posts/{post_id}"), &[])
    }

    pub fn get_posts_by_user(&self, user_id: i64) -> Result<Envelope, ClientError> {
        self.http.get("/posts", &[("userId", &user_id.to_string())])
    }

    pub fn create_post(&self, post: &Value) -> Result<Envelope, ClientError> {
        self.http.post("/posts", post)
    }

    pub fn update_post(&self, post_id: impl Display, post: &Value) -> Result<Envelope, ClientError> {
        self.http.put(&format!("/posts/{post_id}"), post)
    }

    pub fn patch_post(&self, post_id: impl Display, post: &Value) -> Result<Envelope, ClientError> {
        self.http.patch(&format!("/posts/{post_id}"), post)
    }

    pub fn delete_post(&self, post_id: impl Display) -> Result<Envelope, ClientError> {
        self.http.delete(&format!("/posts/{post_id}"))
    }
}
