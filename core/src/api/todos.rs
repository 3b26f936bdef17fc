//! Todos façade. The façade itself only reads; todo mutations in the suite
//! go straight through the transport handle (`http()`), single-attempt.

use std::fmt::Display;

use crate::error::ClientError;
use crate::http::{Envelope, HttpClient};

#[derive(Clone)]
pub struct TodosClient {
    http: HttpClient,
}

impl TodosClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn get_todos(&self) -> Result<Envelope, ClientError> {
        self.http.get("/todos", &[])
    }

    pub fn get_todo_by_id(&self, todo_id: impl Display) -> Result<Envelope, ClientError> {
        self.http.get(&format!("/todos/{todo_id}"), &[])
    }

    pub fn get_todos_by_user(&self, user_id: i64) -> Result<Envelope, ClientError> {
        self.http.get("/todos", &[("userId", &user_id.to_string())])
    }
}
