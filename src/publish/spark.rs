//! Spark (Webex) messages API client

use super::{MessagePoster, RemoteResponse};
use crate::config::{Config, Secret, SparkCredentials};
use crate::error::Error;
use crate::http::create_client;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde::Serialize;

/// Content type the messages endpoint is sent
pub const JSON_UTF8: &str = "application/json; charset=utf-8";

pub struct SparkClient {
    client: Client,
    url: String,
    room_id: String,
    token: Secret,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RoomMessage<'a> {
    room_id: &'a str,
    markdown: &'a str,
}

impl SparkClient {
    pub fn new(client: Client, url: impl Into<String>, credentials: SparkCredentials) -> Self {
        Self {
            client,
            url: url.into(),
            room_id: credentials.room_id,
            token: credentials.token,
        }
    }

    /// Client for the configured room; fails when room id or token is missing
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let credentials = config.spark_credentials()?;
        let client = create_client(&config.network)?;
        Ok(Self::new(client, config.messages_url(), credentials))
    }

    fn network_error(&self, source: reqwest::Error) -> Error {
        Error::Network {
            url: self.url.clone(),
            source,
        }
    }
}

#[async_trait]
impl MessagePoster for SparkClient {
    async fn post(&self, markdown: &str) -> Result<RemoteResponse, Error> {
        let payload = RoomMessage {
            room_id: &self.room_id,
            markdown,
        };

        tracing::debug!(
            url = %self.url,
            room = %self.room_id,
            bytes = markdown.len(),
            "posting message"
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(self.token.expose())
            .header(CONTENT_TYPE, JSON_UTF8)
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.network_error(e))?;

        tracing::debug!(status = status.as_u16(), "messages API responded");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(Error::Auth {
                status: status.as_u16(),
                body,
            });
        }

        Ok(RemoteResponse {
            status: status.as_u16(),
            body,
        })
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}
