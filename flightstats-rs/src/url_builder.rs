use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::AirportCode;

/// Production endpoint of the FlightStats flex schedules REST service.
pub const DEFAULT_BASE_URL: &str = "https://api.flightstats.com/flex/schedules/rest/v1/json";

/// Builds request URLs for the schedules-by-route-and-date endpoints.
///
/// `from`, `to` and `date` must all be set before a terminal accessor is
/// called. Rebinding `date` on an already configured builder yields the URL
/// for a shifted search day.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base: String,
    from: Option<AirportCode>,
    to: Option<AirportCode>,
    date: Option<NaiveDate>,
}

impl UrlBuilder {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            from: None,
            to: None,
            date: None,
        }
    }

    pub fn from(mut self, code: &AirportCode) -> Self {
        self.from = Some(code.clone());
        self
    }

    pub fn to(mut self, code: &AirportCode) -> Self {
        self.to = Some(code.clone());
        self
    }

    /// Only the UTC calendar date of `date` is used.
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date.date_naive());
        self
    }

    pub fn schedule_arriving_url(&self) -> String {
        self.schedule_url("arriving")
    }

    pub fn schedule_departing_url(&self) -> String {
        self.schedule_url("departing")
    }

    fn schedule_url(&self, direction: &str) -> String {
        let from = self.from.as_ref().expect("`from` must be set");
        let to = self.to.as_ref().expect("`to` must be set");
        let date = self.date.expect("`date` must be set");

        format!(
            "{}/from/{from}/to/{to}/{direction}/{}/{}/{}",
            self.base,
            date.year(),
            date.month(),
            date.day(),
        )
    }
}
