//! Health service
//!
//! Liveness and readiness probes.

use tracing::{instrument, warn};

use crate::dto::{HealthResponse, ReadinessResponse};

use super::context::ServiceContext;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The process is up
    pub fn liveness(&self) -> HealthResponse {
        HealthResponse::healthy()
    }

    /// The database answers a trivial query
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        let database_healthy = match sqlx::query("SELECT 1").execute(self.ctx.pool()).await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Database readiness check failed");
                false
            }
        };
        ReadinessResponse::ready(database_healthy)
    }
}
