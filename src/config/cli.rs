use crate::config::settings::ClientSettings;
use crate::domain::model::{ReservationHours, ReservationRequest};
use crate::utils::error::Result;
use crate::utils::validation::{parse_date, parse_email, parse_hours, parse_time};
use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "parkon-client")]
#[command(about = "Requests a parking spot in parkon.")]
#[command(version)]
pub struct CliConfig {
    /// Short ID as displayed in the parkon URL, i.e. https://app.parkon.ch/Portal/<ShortId>
    pub short_id: String,

    /// Full vehicle plate number with cantonal acronym, separated by dash, i.e. AG-123456
    pub vehicle_number: String,

    /// Email address to send the confirmation to, i.e. name@example.com
    #[arg(value_parser = parse_email)]
    pub email: String,

    /// Start date of the reservation in ISO date format, i.e. 2022-12-31
    #[arg(value_parser = parse_date)]
    pub date: NaiveDate,

    /// Start time of the reservation in 24 hour HH:MM format, i.e. 14:30
    #[arg(value_parser = parse_time)]
    pub time: NaiveTime,

    /// Hours to reserve the parking spot for: 2, 4, 8, 12, 24 or 72
    #[arg(value_parser = parse_hours, default_value = "2")]
    pub hours: ReservationHours,

    #[arg(long, env = "PARKON_SERVICE_URL", help = "Base URL of the parkon API")]
    pub service_url: Option<String>,

    #[arg(long, env = "PARKON_CONFIG", help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn reservation_request(&self) -> ReservationRequest {
        ReservationRequest::new(
            self.short_id.clone(),
            self.vehicle_number.clone(),
            self.email.clone(),
            self.date,
            self.time,
            self.hours,
        )
    }

    /// Settings file first, then `--service-url` on top.
    pub fn client_settings(&self) -> Result<ClientSettings> {
        let settings = match &self.config {
            Some(path) => ClientSettings::from_file(path)?,
            None => ClientSettings::default(),
        };
        Ok(settings.with_service_url(self.service_url.clone()))
    }
}
