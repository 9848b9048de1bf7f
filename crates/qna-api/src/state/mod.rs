//! Shared handler state
//!
//! Cloned into every request; both halves sit behind `Arc`.

use std::sync::Arc;

use qna_common::{AppConfig, JwtService};
use qna_service::ServiceContext;

/// Repositories, token service and configuration for the handlers
#[derive(Clone)]
pub struct AppState {
    services: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(services: ServiceContext, config: AppConfig) -> Self {
        Self {
            services: Arc::new(services),
            config: Arc::new(config),
        }
    }

    /// Context the `*Service` types borrow
    pub fn service_context(&self) -> &ServiceContext {
        &self.services
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Token service used by the bearer extractors
    pub fn jwt_service(&self) -> &JwtService {
        self.services.jwt_service()
    }

    /// Largest raw body the upload route accepts
    pub fn max_upload_bytes(&self) -> usize {
        self.config.storage.max_file_size_bytes()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("services", &self.services)
            .field("env", &self.config.app.env)
            .finish()
    }
}
