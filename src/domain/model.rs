use crate::utils::error::{ParkonError, Result};
use crate::utils::validation::{parse_email, validate_non_empty_string, Validate};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wall-clock time with a literal `Z`, the way the listing endpoint reads it.
pub const LISTING_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub const LISTING_DTO_TYPE: &str = "Parkon.Shared.Dto.VehicleListingDto, Parkon.Bridge";

/// Nil id asks the service to create a new listing.
pub const NEW_LISTING_ID: &str = "00000000-0000-0000-0000-000000000000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReservationHours {
    #[default]
    Two,
    Four,
    Eight,
    Twelve,
    TwentyFour,
    SeventyTwo,
}

impl ReservationHours {
    pub const ALL: [ReservationHours; 6] = [
        ReservationHours::Two,
        ReservationHours::Four,
        ReservationHours::Eight,
        ReservationHours::Twelve,
        ReservationHours::TwentyFour,
        ReservationHours::SeventyTwo,
    ];

    pub fn hours(self) -> u32 {
        match self {
            ReservationHours::Two => 2,
            ReservationHours::Four => 4,
            ReservationHours::Eight => 8,
            ReservationHours::Twelve => 12,
            ReservationHours::TwentyFour => 24,
            ReservationHours::SeventyTwo => 72,
        }
    }

    pub fn duration(self) -> Duration {
        Duration::hours(i64::from(self.hours()))
    }
}

impl TryFrom<u32> for ReservationHours {
    type Error = ParkonError;

    fn try_from(value: u32) -> Result<Self> {
        ReservationHours::ALL
            .into_iter()
            .find(|h| h.hours() == value)
            .ok_or_else(|| {
                ParkonError::validation(
                    "hours",
                    &value.to_string(),
                    "must be one of 2, 4, 8, 12, 24, 72",
                )
            })
    }
}

impl fmt::Display for ReservationHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hours())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    pub short_id: String,
    pub vehicle_number: String,
    pub email: String,
    pub start: NaiveDateTime,
    pub hours: ReservationHours,
}

impl ReservationRequest {
    pub fn new(
        short_id: impl Into<String>,
        vehicle_number: impl Into<String>,
        email: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        hours: ReservationHours,
    ) -> Self {
        Self {
            short_id: short_id.into(),
            vehicle_number: vehicle_number.into(),
            email: email.into(),
            start: date.and_time(time),
            hours,
        }
    }

    pub fn end(&self) -> NaiveDateTime {
        self.start + self.hours.duration()
    }
}

impl Validate for ReservationRequest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("short_id", &self.short_id)?;
        validate_non_empty_string("vehicle_number", &self.vehicle_number)?;
        let address = parse_email(&self.email)?;
        if address != self.email {
            return Err(ParkonError::validation(
                "email",
                &self.email,
                "expected a bare address without display name",
            ));
        }
        Ok(())
    }
}

/// Identifiers resolved from a short id. Both are passed through untouched.
/// Only a JSON object decodes into this; arrays and scalars are rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
pub struct EstateLookupResult {
    pub estate_id: serde_json::Value,
    pub id: serde_json::Value,
}

impl TryFrom<serde_json::Map<String, serde_json::Value>> for EstateLookupResult {
    type Error = String;

    fn try_from(
        mut record: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<Self, Self::Error> {
        let mut take = |key: &str| {
            record
                .remove(key)
                .ok_or_else(|| format!("missing field `{}`", key))
        };

        Ok(Self {
            estate_id: take("EstateId")?,
            id: take("Id")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListingPayload {
    #[serde(rename = "$type")]
    pub dto_type: String,
    pub email_to_send_confirmation: String,
    pub estate_id: serde_json::Value,
    pub notes: String,
    pub source: Option<String>,
    pub source_portal_id: serde_json::Value,
    pub source_portal_public_title: Option<String>,
    #[serde(rename = "Type")]
    pub kind: u8,
    pub valid_from: String,
    pub valid_until: String,
    pub vehicle_canton: Option<String>,
    pub vehicle_full_plate: String,
    pub vehicle_id: Option<String>,
    pub vehicle_number: Option<String>,
    pub vehicle_owner_address_city: Option<String>,
    pub vehicle_owner_address_street: Option<String>,
    pub vehicle_owner_address_zip: Option<String>,
    pub vehicle_owner_name: Option<String>,
    pub id: String,
}

impl ListingPayload {
    pub fn new(estate: &EstateLookupResult, request: &ReservationRequest) -> Self {
        Self {
            dto_type: LISTING_DTO_TYPE.to_string(),
            email_to_send_confirmation: request.email.clone(),
            estate_id: estate.estate_id.clone(),
            notes: String::new(),
            source: None,
            source_portal_id: estate.id.clone(),
            source_portal_public_title: None,
            kind: 0,
            valid_from: request.start.format(LISTING_TIMESTAMP_FORMAT).to_string(),
            valid_until: request.end().format(LISTING_TIMESTAMP_FORMAT).to_string(),
            vehicle_canton: None,
            vehicle_full_plate: request.vehicle_number.clone(),
            vehicle_id: None,
            vehicle_number: None,
            vehicle_owner_address_city: None,
            vehicle_owner_address_street: None,
            vehicle_owner_address_zip: None,
            vehicle_owner_name: None,
            id: NEW_LISTING_ID.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(hours: ReservationHours) -> ReservationRequest {
        ReservationRequest::new(
            "abc123",
            "AG-123456",
            "name@example.com",
            NaiveDate::from_ymd_opt(2022, 12, 31).unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            hours,
        )
    }

    fn estate() -> EstateLookupResult {
        serde_json::from_value(json!({
            "EstateId": 4711,
            "Id": "5d2f1c3e-0000-4000-8000-000000000001",
            "PublicTitle": "Garage Nord"
        }))
        .unwrap()
    }

    #[test]
    fn test_hours_try_from() {
        assert_eq!(ReservationHours::try_from(24u32).unwrap(), ReservationHours::TwentyFour);
        assert!(ReservationHours::try_from(1u32).is_err());
        assert!(ReservationHours::try_from(48u32).is_err());
        assert_eq!(ReservationHours::default().hours(), 2);
        assert_eq!(ReservationHours::SeventyTwo.to_string(), "72");
    }

    #[test]
    fn test_validity_window_matches_hours() {
        for hours in ReservationHours::ALL {
            let payload = ListingPayload::new(&estate(), &request(hours));
            let from =
                NaiveDateTime::parse_from_str(&payload.valid_from, LISTING_TIMESTAMP_FORMAT)
                    .unwrap();
            let until =
                NaiveDateTime::parse_from_str(&payload.valid_until, LISTING_TIMESTAMP_FORMAT)
                    .unwrap();
            assert_eq!(until - from, Duration::hours(i64::from(hours.hours())));
        }
    }

    #[test]
    fn test_window_crosses_midnight_and_year() {
        let payload = ListingPayload::new(&estate(), &request(ReservationHours::Twelve));
        assert_eq!(payload.valid_from, "2022-12-31T14:30:00Z");
        assert_eq!(payload.valid_until, "2023-01-01T02:30:00Z");
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = ListingPayload::new(&estate(), &request(ReservationHours::Two));
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "$type": "Parkon.Shared.Dto.VehicleListingDto, Parkon.Bridge",
                "EmailToSendConfirmation": "name@example.com",
                "EstateId": 4711,
                "Notes": "",
                "Source": null,
                "SourcePortalId": "5d2f1c3e-0000-4000-8000-000000000001",
                "SourcePortalPublicTitle": null,
                "Type": 0,
                "ValidFrom": "2022-12-31T14:30:00Z",
                "ValidUntil": "2022-12-31T16:30:00Z",
                "VehicleCanton": null,
                "VehicleFullPlate": "AG-123456",
                "VehicleId": null,
                "VehicleNumber": null,
                "VehicleOwnerAddressCity": null,
                "VehicleOwnerAddressStreet": null,
                "VehicleOwnerAddressZip": null,
                "VehicleOwnerName": null,
                "Id": "00000000-0000-0000-0000-000000000000"
            })
        );
    }

    #[test]
    fn test_lookup_requires_both_ids() {
        let missing = serde_json::from_value::<EstateLookupResult>(json!({"EstateId": 1}));
        assert!(missing.is_err());
    }

    #[test]
    fn test_lookup_rejects_non_objects() {
        let positional = serde_json::from_str::<EstateLookupResult>(r#"[4711, "portal-1"]"#);
        assert!(positional.is_err());
        assert!(serde_json::from_str::<EstateLookupResult>("4711").is_err());
        assert!(serde_json::from_str::<EstateLookupResult>("null").is_err());
    }

    #[test]
    fn test_request_validation() {
        assert!(request(ReservationHours::Two).validate().is_ok());

        let mut bad = request(ReservationHours::Two);
        bad.email = "name.example.com".to_string();
        assert!(bad.validate().is_err());

        let mut bad = request(ReservationHours::Two);
        bad.short_id = "  ".to_string();
        assert!(bad.validate().is_err());

        let mut bad = request(ReservationHours::Two);
        bad.vehicle_number = String::new();
        assert!(bad.validate().is_err());
    }
}
