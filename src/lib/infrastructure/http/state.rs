//! Application state module

use std::fmt;
use std::sync::Arc;

use crate::domain::contact::service::ContactService;

/// Application configuration
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Label describing the runtime environment
    pub environment: String,
}

/// Global application state
pub struct AppState<C: ContactService> {
    /// The application configuration
    pub config: AppConfig,

    /// Contact relay service
    pub contact: Arc<C>,
}

impl<C: ContactService> AppState<C> {
    /// Create a new application state
    pub fn new(config: AppConfig, contact: C) -> Self {
        Self {
            config,
            contact: Arc::new(contact),
        }
    }
}

impl<C: ContactService> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            contact: Arc::clone(&self.contact),
        }
    }
}

impl<C: ContactService> fmt::Debug for AppState<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("contact", &"ContactService")
            .finish()
    }
}

#[cfg(test)]
use crate::domain::contact::service::MockContactService;

#[cfg(test)]
pub fn test_state(contact: Option<MockContactService>) -> AppState<MockContactService> {
    let contact = contact.unwrap_or_default();

    let config = AppConfig {
        environment: "test".to_string(),
    };

    AppState {
        config,
        contact: Arc::new(contact),
    }
}
