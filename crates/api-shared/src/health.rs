use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Simple health service used by both draft services
///
/// Each service reports its own name so a shared load balancer can tell them apart.
#[derive(Debug, Clone)]
pub struct HealthService {
    service_name: &'static str,
}

impl HealthService {
    /// Creates a new instance of HealthService for the named service.
    pub fn new(service_name: &'static str) -> Self {
        Self { service_name }
    }

    /// Returns a `HealthRes` indicating the service is healthy.
    pub fn check_health(&self) -> HealthRes {
        HealthRes {
            ok: true,
            message: format!("{} is alive", self.service_name),
        }
    }
}
