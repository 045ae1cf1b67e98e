use crate::domain::model::{EstateLookupResult, ListingPayload, ReservationRequest};
use crate::domain::ports::{ParkingApi, SettingsProvider};
use crate::utils::error::{ParkonError, Result};
use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use url::Url;

pub const LOOKUP_PATH: &str = "EstatePortal/GetByShortId";
pub const LISTING_PATH: &str = "VehicleListing/CreateOrUpdateVehicleListing";
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// HTTP implementation of [`ParkingApi`] against the parkon web API.
pub struct ParkonClient<C: SettingsProvider> {
    settings: C,
    client: Client,
}

impl<C: SettingsProvider> ParkonClient<C> {
    pub fn new(settings: C) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        let client = Client::builder()
            .user_agent(settings.user_agent())
            .default_headers(headers)
            .build()
            .map_err(|e| ParkonError::ConfigError {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let base = Url::parse(self.settings.service_url()).map_err(|e| {
            ParkonError::ConfigError {
                message: format!("invalid service URL '{}': {}", self.settings.service_url(), e),
            }
        })?;
        base.join(path).map_err(|e| ParkonError::ConfigError {
            message: format!("invalid endpoint path '{}': {}", path, e),
        })
    }

    /// Lookup URL with `timestamp` as the cache-busting `_` parameter.
    pub fn lookup_url(&self, short_id: &str, timestamp: i64) -> Result<Url> {
        let mut url = self.endpoint(LOOKUP_PATH)?;
        url.query_pairs_mut()
            .append_pair("shortId", short_id)
            .append_pair("_", &timestamp.to_string());
        Ok(url)
    }

    pub fn listing_url(&self) -> Result<Url> {
        self.endpoint(LISTING_PATH)
    }
}

async fn send_for_body(request: RequestBuilder) -> reqwest::Result<String> {
    let response = request.send().await?;
    tracing::debug!("Response status: {}", response.status());
    response.error_for_status()?.text().await
}

#[async_trait::async_trait]
impl<C: SettingsProvider> ParkingApi for ParkonClient<C> {
    async fn lookup(&self, short_id: &str) -> Result<EstateLookupResult> {
        let url = self.lookup_url(short_id, Utc::now().timestamp())?;
        tracing::debug!("GET {}", url);

        let body = send_for_body(self.client.get(url))
            .await
            .map_err(ParkonError::LookupError)?;

        serde_json::from_str(&body).map_err(ParkonError::LookupDecodeError)
    }

    async fn reserve(
        &self,
        estate: &EstateLookupResult,
        request: &ReservationRequest,
    ) -> Result<serde_json::Value> {
        let url = self.listing_url()?;
        let payload = ListingPayload::new(estate, request);
        let body = serde_json::to_vec(&payload)?;
        tracing::debug!("POST {} ({} bytes)", url, body.len());

        let response = send_for_body(self.client.post(url).body(body))
            .await
            .map_err(ParkonError::ReservationError)?;

        serde_json::from_str(&response).map_err(ParkonError::ReservationDecodeError)
    }
}
