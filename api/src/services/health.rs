// Health check service implementation

use crate::handlers::AppState;

pub struct HealthChecker<'a> {
    state: &'a AppState,
}

impl<'a> HealthChecker<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// True when the application store answers a ping
    pub async fn check(&self) -> bool {
        match self.state.repositories.application.ping().await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Health check failed: {}", err);
                false
            }
        }
    }
}
