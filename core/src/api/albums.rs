//! Albums façade. Read-only: the suite only fetches albums.

use std::fmt::Display;

use crate::error::ClientError;
use crate::http::{Envelope, HttpClient};

#[derive(Clone)]
pub struct AlbumsClient {
    http: HttpClient,
}

impl AlbumsClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn get_albums(&self) -> Result<Envelope, ClientError> {
        self.http.get("/albums", &[])
    }

    pub fn get_album_by_id(&self, album_id: impl Display) -> Result<Envelope, ClientError> {
        self.http.get(&format!("/albums/{album_id}"), &[])
    }

    pub fn get_albums_by_user(&self, user_id: i64) -> Result<Envelope, ClientError> {
        self.http.get("/albums", &[("userId", &user_id.to_string())])
    }
}
