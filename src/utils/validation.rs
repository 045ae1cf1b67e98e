use crate::domain::model::ReservationHours;
use crate::utils::error::{ParkonError, Result};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

static ANGLE_ADDR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<([^<>]*)>").unwrap());
static COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^()]*\)").unwrap());

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Extracts the address part of `Display Name <user@host>` or
/// `user@host (comment)` and requires it to contain an `@`.
pub fn parse_email(value: &str) -> Result<String> {
    let address = match ANGLE_ADDR.captures(value) {
        Some(caps) => COMMENT.replace_all(&caps[1], "").trim().to_string(),
        None => COMMENT.replace_all(value, "").trim().to_string(),
    };

    if !address.contains('@') {
        return Err(ParkonError::validation(
            "email",
            value,
            "expected an address like name@example.com",
        ));
    }

    Ok(address)
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        ParkonError::validation("date", value, format!("expected YYYY-MM-DD ({})", e))
    })
}

pub fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|e| ParkonError::validation("time", value, format!("expected HH:MM ({})", e)))
}

pub fn parse_hours(value: &str) -> Result<ReservationHours> {
    let hours: u32 = value
        .trim()
        .parse()
        .map_err(|_| ParkonError::validation("hours", value, "not an integer"))?;
    ReservationHours::try_from(hours)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ParkonError::validation(
            field_name,
            url_str,
            "URL cannot be empty",
        ));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ParkonError::validation(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(ParkonError::validation(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ParkonError::validation(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}
