//! HTTP document store backend
//!
//! Talks to the JSON document API with fetch-style requests. Collections are
//! department-scoped via a query parameter; documents are addressed by id.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use shared::{AuditRecord, Department, Recipe, Schedule, Staff};

use super::{DocumentStore, StoreError, StoreResult};

/// JSON document API client
#[derive(Clone)]
pub struct HttpStore {
    client: Client,
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> StoreResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| StoreError::Request(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        department: Department,
    ) -> StoreResult<Vec<T>> {
        let url = self.url(path);
        let response = self
            .client
            .get(&url)
            .query(&[("department", department.as_str())])
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        Self::decode(url, response).await
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> StoreResult<T> {
        let url = self.url(path);
        let response = self
            .client
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        Self::decode(url, response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> StoreResult<T> {
        let url = self.url(path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        Self::decode(url, response).await
    }

    async fn decode<T: DeserializeOwned>(
        url: String,
        response: reqwest::Response,
    ) -> StoreResult<T> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(format!("document at {}", url)));
        }
        if !status.is_success() {
            return Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn delete(&self, path: &str) -> StoreResult<()> {
        let url = self.url(path);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(format!("document at {}", url)));
        }
        if !status.is_success() {
            return Err(StoreError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for HttpStore {
    async fn fetch_schedules(&self, department: Department) -> StoreResult<Vec<Schedule>> {
        self.get_list("/schedules", department).await
    }

    async fn save_schedule(
        &self,
        department: Department,
        schedule: Schedule,
    ) -> StoreResult<Schedule> {
        if schedule.id.is_empty() {
            let url = self.url("/schedules");
            let response = self
                .client
                .post(&url)
                .query(&[("department", department.as_str())])
                .json(&schedule)
                .send()
                .await
                .map_err(|e| StoreError::Request(e.to_string()))?;
            Self::decode(url, response).await
        } else {
            self.put_json(&format!("/schedules/{}", schedule.id), &schedule)
                .await
        }
    }

    async fn delete_schedule(&self, schedule_id: &str) -> StoreResult<()> {
        self.delete(&format!("/schedules/{}", schedule_id)).await
    }

    async fn fetch_audits(&self, department: Department) -> StoreResult<Vec<AuditRecord>> {
        self.get_list("/audits", department).await
    }

    async fn save_audit(&self, audit: AuditRecord) -> StoreResult<AuditRecord> {
        // Upsert by uid: update first, create on 404
        match self
            .put_json(&format!("/audits/{}", audit.uid), &audit)
            .await
        {
            Err(StoreError::NotFound(_)) => self.post_json("/audits", &audit).await,
            other => other,
        }
    }

    async fn delete_audit(&self, audit_uid: &str) -> StoreResult<()> {
        self.delete(&format!("/audits/{}", audit_uid)).await
    }

    async fn fetch_recipes(&self, department: Department) -> StoreResult<Vec<Recipe>> {
        self.get_list("/recipes", department).await
    }

    async fn fetch_handlers(&self, department: Department) -> StoreResult<Vec<Staff>> {
        self.get_list("/staff", department).await
    }
}
