use async_trait::async_trait;
use reqwest::Client;

use crate::{error::NotifierError, models::weekend::Preference};

/// Lists the email addresses subscribed to a reminder preference.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubscriberSource: Send + Sync {
    async fn fetch_subscribers(&self, preference: Preference)
        -> Result<Vec<String>, NotifierError>;
}

/// Reads `GET {url}?preference=irctc|upcoming`.
#[derive(Clone)]
pub struct HttpSubscriberSource {
    client: Client,
    url: String,
}

impl HttpSubscriberSource {
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl SubscriberSource for HttpSubscriberSource {
    async fn fetch_subscribers(
        &self,
        preference: Preference,
    ) -> Result<Vec<String>, NotifierError> {
        self.client
            .get(&self.url)
            .query(&[("preference", preference.as_str())])
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(NotifierError::SubscriberFetch)?
            .json::<Vec<String>>()
            .await
            .map_err(NotifierError::SubscriberFetch)
    }
}
