pub mod client;
pub mod reservation;

pub use crate::domain::model::{
    EstateLookupResult, ListingPayload, ReservationHours, ReservationRequest,
};
pub use crate::domain::ports::{ParkingApi, SettingsProvider};
pub use crate::utils::error::Result;
