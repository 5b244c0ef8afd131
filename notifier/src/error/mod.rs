use lettre::address::AddressError;
use thiserror::Error;

/// Problems rendering the reminder template.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown template placeholder `{0}`")]
    UnknownPlaceholder(String),
}

/// Everything that can abort an invocation before the reminder goes out.
#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("failed to fetch holidays: {0}")]
    HolidayFetch(#[source] reqwest::Error),
    #[error("failed to fetch subscribers: {0}")]
    SubscriberFetch(#[source] reqwest::Error),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("invalid recipient address {address}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: AddressError,
    },
    #[error("failed to build reminder message: {0}")]
    MessageBuild(#[from] lettre::error::Error),
    #[error("failed to deliver reminder: {0}")]
    Delivery(#[from] lettre::transport::smtp::Error),
}

impl NotifierError {
    pub fn kind(&self) -> &'static str {
        match self {
            NotifierError::HolidayFetch(_) => "holiday_fetch",
            NotifierError::SubscriberFetch(_) => "subscriber_fetch",
            NotifierError::Template(_) => "template",
            NotifierError::InvalidAddress { .. } => "invalid_address",
            NotifierError::MessageBuild(_) => "message_build",
            NotifierError::Delivery(_) => "delivery",
        }
    }
}
