use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AirportCode;

/// Top-level shape of a response from the FlightStats flex schedules API.
///
/// `appendix` and `scheduledFlights` are required; a body missing either key
/// is a decode failure rather than an empty result.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub appendix: Appendix,
    pub scheduled_flights: Vec<ScheduledFlight>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appendix {
    pub airports: Vec<Airport>,
}

/// Airport metadata from a schedule response appendix. The list is
/// authoritative only for the airports referenced by the same response's
/// flights.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    pub fs: AirportCode,
    pub utc_offset_hours: f64,
    pub city: Option<String>,
    pub country_code: Option<String>,
}

/// A single scheduled flight.
///
/// `departure_time` and `arrival_time` are local wall-clock readings at the
/// respective airports. The UTC fields are absent on the wire and set by the
/// engine during normalization; the local fields are retained unmodified.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledFlight {
    pub carrier_fs_code: Option<String>,
    pub flight_number: Option<String>,
    pub departure_airport_fs_code: AirportCode,
    pub arrival_airport_fs_code: AirportCode,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub stops: Option<u32>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub departure_time_utc: Option<DateTime<Utc>>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub arrival_time_utc: Option<DateTime<Utc>>,
}

impl Airport {
    pub fn test_default(fs: &str, utc_offset_hours: f64) -> Self {
        Self {
            fs: AirportCode::new_unchecked(fs.into()),
            utc_offset_hours,
            city: None,
            country_code: None,
        }
    }
}

impl ScheduledFlight {
    pub fn test_default() -> Self {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        Self {
            carrier_fs_code: Some("AA".into()),
            flight_number: Some("100".into()),
            departure_airport_fs_code: AirportCode::new_unchecked("LAX".into()),
            arrival_airport_fs_code: AirportCode::new_unchecked("JFK".into()),
            departure_time: date.and_hms_opt(0, 30, 0).unwrap(),
            arrival_time: date.and_hms_opt(3, 0, 0).unwrap(),
            stops: Some(0),
            departure_time_utc: None,
            arrival_time_utc: None,
        }
    }
}
