use crate::domain::model::{EstateLookupResult, ReservationRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The two calls a reservation is made of. Implementations must not retry.
#[async_trait]
pub trait ParkingApi: Send + Sync {
    /// Resolves a portal short id to its estate record.
    async fn lookup(&self, short_id: &str) -> Result<EstateLookupResult>;

    /// Creates the listing and returns the service response as decoded.
    async fn reserve(
        &self,
        estate: &EstateLookupResult,
        request: &ReservationRequest,
    ) -> Result<serde_json::Value>;
}

pub trait SettingsProvider: Send + Sync {
    fn service_url(&self) -> &str;
    fn user_agent(&self) -> &str;
}
