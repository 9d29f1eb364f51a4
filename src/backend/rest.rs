//! Blocking REST client for the persistence service.

use super::BackendApi;
use crate::config::BackendSettings;
use crate::models::{ActorId, Blik, BlikId, Comment};
use crate::store::OtherEntity;
use crate::{Error, Result};
use std::time::Duration;

/// Blocking `reqwest` client for the CRUD service.
pub struct RestClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl RestClient {
    /// Creates a client from backend settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Backend`] if the underlying client cannot be built.
    pub fn new(settings: &BackendSettings) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| Error::Backend {
                operation: "client init".to_string(),
                cause: e.to_string(),
            })?;
        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn backend_err(operation: &str, e: &reqwest::Error) -> Error {
        Error::Backend {
            operation: operation.to_string(),
            cause: e.to_string(),
        }
    }
}

impl BackendApi for RestClient {
    fn fetch_entity(&self, id: &ActorId) -> Result<OtherEntity> {
        let operation = format!("GET /entities/{id}");
        let url = format!("{}/entities/{id}", self.base_url);
        self.http
            .get(&url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(|r| r.json())
            .map_err(|e| Self::backend_err(&operation, &e))
    }

    fn fetch_bliks(&self, superpower: &str, owner: &ActorId) -> Result<Vec<Blik>> {
        let operation = "GET /bliks".to_string();
        let url = format!("{}/bliks", self.base_url);
        self.http
            .get(&url)
            .query(&[("superpower", superpower), ("owner", owner.as_str())])
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(|r| r.json())
            .map_err(|e| Self::backend_err(&operation, &e))
    }

    fn like_blik(&self, id: &BlikId) -> Result<()> {
        let operation = format!("POST /bliks/{id}/like");
        let url = format!("{}/bliks/{id}/like", self.base_url);
        self.http
            .post(&url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map(|_| ())
            .map_err(|e| Self::backend_err(&operation, &e))
    }

    fn post_comment(&self, id: &BlikId, comment: &Comment) -> Result<()> {
        let operation = format!("POST /bliks/{id}/comments");
        let url = format!("{}/bliks/{id}/comments", self.base_url);
        self.http
            .post(&url)
            .json(comment)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map(|_| ())
            .map_err(|e| Self::backend_err(&operation, &e))
    }
}
