pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::ClientSettings;
pub use crate::core::{client::ParkonClient, reservation::ReservationEngine};
pub use crate::domain::model::{
    EstateLookupResult, ListingPayload, ReservationHours, ReservationRequest,
};
pub use crate::utils::error::{ParkonError, Result};
