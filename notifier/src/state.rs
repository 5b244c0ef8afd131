use std::sync::Arc;

use crate::{config::Config, services::notifier::NotificationOrchestrator};

#[derive(Clone)]
pub struct AppState {
    pub notifier: Arc<NotificationOrchestrator>,
    pub config: Config,
}

impl AppState {
    pub fn new(notifier: NotificationOrchestrator, config: Config) -> Self {
        Self {
            notifier: Arc::new(notifier),
            config,
        }
    }
}
