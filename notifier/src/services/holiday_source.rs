use async_trait::async_trait;
use reqwest::Client;

use crate::{error::NotifierError, models::holiday::Holiday};

const API_KEY_HEADER: &str = "x-api-key";

/// Yearly holiday calendar provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HolidaySource: Send + Sync {
    async fn fetch_holidays(&self, year: i32) -> Result<Vec<Holiday>, NotifierError>;
}

/// Reads `GET {url}?year=YYYY` authenticated with an `x-api-key` header.
#[derive(Clone)]
pub struct HttpHolidaySource {
    client: Client,
    url: String,
    api_key: String,
}

impl HttpHolidaySource {
    pub fn new(client: Client, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl HolidaySource for HttpHolidaySource {
    async fn fetch_holidays(&self, year: i32) -> Result<Vec<Holiday>, NotifierError> {
        let mut request = self.client.get(&self.url).query(&[("year", year)]);
        if !self.api_key.is_empty() {
            request = request.header(API_KEY_HEADER, &self.api_key);
        }

        let records = request
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(NotifierError::HolidayFetch)?
            .json::<Vec<serde_json::Value>>()
            .await
            .map_err(NotifierError::HolidayFetch)?;

        Ok(decode_holidays(records))
    }
}

/// Decodes each record on its own; a malformed entry is logged and skipped.
pub fn decode_holidays(records: Vec<serde_json::Value>) -> Vec<Holiday> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Holiday>(record) {
            Ok(holiday) => Some(holiday),
            Err(err) => {
                tracing::warn!(index, error = %err, "Skipping malformed holiday record");
                None
            }
        })
        .collect()
}
