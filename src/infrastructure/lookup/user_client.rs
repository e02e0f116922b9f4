//! HTTP user directory client

use async_trait::async_trait;

use super::http_client::{LookupConfig, LookupHttpClient};
use crate::domain::lookup::{User, UserLookup};
use crate::domain::DomainError;

/// User lookup backed by the user service HTTP API
#[derive(Debug, Clone)]
pub struct HttpUserClient {
    http: LookupHttpClient,
}

impl HttpUserClient {
    pub fn new(config: &LookupConfig) -> Result<Self, DomainError> {
        Ok(Self {
            http: LookupHttpClient::new(config, "users", "users")?,
        })
    }
}

#[async_trait]
impl UserLookup for HttpUserClient {
    async fn get(&self, id: &str) -> Result<User, DomainError> {
        self.http
            .fetch::<User>(id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))
    }
}
