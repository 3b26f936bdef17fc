//! Comments façade: collection, post filter, and full CRUD through the
//! retrying verbs.

use std::fmt::Display;

use serde_json::Value;

use crate::error::ClientError;
use crate::http::{Envelope, HttpClient};

#[derive(Clone)]
pub struct CommentsClient {
    http: HttpClient,
}

impl CommentsClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn get_comments(&self) -> Result<Envelope, ClientError> {
        self.http.get("/comments", &[])
    }

    pub fn get_comments_by_post(&self, post_id: i64) -> Result<Envelope, ClientError> {
        self.http.get("/comments", &[("postId", &post_id.to_string())])
    }

    pub fn create_comment(&self, comment: &Value) -> Result<Envelope, ClientError> {
        self.http.post("/comments", comment)
    }

    pub fn update_comment(
        &self,
        comment_id: impl Display,
        comment: &Value,
    ) -> Result<Envelope, ClientError> {
        self.http.put(&format!("/comments/{comment_id}"), comment)
    }

    pub fn patch_comment(
        &self,
        comment_id: impl Display,
        comment: &Value,
    ) -> Result<Envelope, ClientError> {
        self.http.patch(&format!("/comments/{comment_id}"), comment)
    }

    pub fn delete_comment(&self, comment_id: impl Display) -> Result<Envelope, ClientError> {
        self.http.delete(&format!("/comments/{comment_id}"))
    }
}
