use crate::core::{ParkingApi, ReservationRequest};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Runs one reservation: validate, resolve the short id, then create the listing.
pub struct ReservationEngine<A: ParkingApi> {
    api: A,
}

impl<A: ParkingApi> ReservationEngine<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn run(&self, request: &ReservationRequest) -> Result<serde_json::Value> {
        // 驗證請求，失敗時不發送任何請求
        request.validate()?;

        // 解析 short ID
        tracing::info!("Resolving short ID {}", request.short_id);
        let estate = self.api.lookup(&request.short_id).await?;
        tracing::debug!(
            "Short ID {} resolved to estate {} (portal {})",
            request.short_id,
            estate.estate_id,
            estate.id
        );

        // 申請停車位
        tracing::info!(
            "Requesting parking spot for {} from {} for {} hours",
            request.vehicle_number,
            request.start,
            request.hours
        );
        let response = self.api.reserve(&estate, request).await?;
        tracing::info!("Parking spot request answered");

        Ok(response)
    }
}
