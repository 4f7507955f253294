use std::collections::HashMap;

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, Utc};
use http_client::HttpClient;
use serde::Deserialize;
use snafu::{OptionExt, ResultExt, ensure};
use tracing::{Level, event, instrument};

use crate::{
    Airport, AirportCode, DEFAULT_BASE_URL, ScheduleResponse, ScheduledFlight, UrlBuilder,
    error::{
        Result,
        error::{DecodeSnafu, HttpSnafu, InvalidOffsetSnafu, PastTimeSnafu, UnknownAirportSnafu},
    },
};

const APP_ID_HEADER: &str = "appId";
const APP_KEY_HEADER: &str = "appKey";

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    pub url: String,
    pub app_id: String,
    pub app_key: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BASE_URL.into(),
            app_id: "89cd457c".into(),
            app_key: "be2705cf426fe89bd49cbf1534d10978".into(),
        }
    }
}

/// Queries scheduled flights by route and date and returns them with their
/// local timestamps normalized to UTC.
///
/// The airport list and offset cache are instance-scoped: each fetch
/// overwrites the airport list, and an offset cached once is reused for the
/// lifetime of the instance. Both public operations take `&mut self`, so a
/// single instance cannot interleave fetches.
pub struct ScheduleApi {
    client: HttpClient,
    config: ScheduleConfig,
    airports: Vec<Airport>,
    airport_offsets: HashMap<AirportCode, String>,
}

impl ScheduleApi {
    pub fn new(config: ScheduleConfig) -> Self {
        let client = HttpClient::builder()
            .timeout(std::time::Duration::new(60, 0))
            .accept_invalid_certs(true)
            .build();

        Self {
            client,
            config,
            airports: Vec::new(),
            airport_offsets: HashMap::new(),
        }
    }

    /// Flights from `from` to `to` whose UTC arrival time is strictly before
    /// `time`.
    ///
    /// If the requested calendar day yields no qualifying flights, the
    /// search day shifts one day back and the query is retried once, still
    /// filtered against the original `time`. The shifted day must also lie
    /// in the future relative to `now`. Production callers pass `Utc::now()`
    /// as `now`.
    #[instrument(skip(self))]
    pub fn flights_arriving_before(
        &mut self,
        time: DateTime<Utc>,
        from: &AirportCode,
        to: &AirportCode,
        now: DateTime<Utc>,
    ) -> Result<Vec<ScheduledFlight>> {
        check_for_past_time(time, now)?;

        let builder = UrlBuilder::new(self.config.url.as_str())
            .from(from)
            .to(to)
            .date(time);
        let mut flights = self.arriving_flights(&builder.schedule_arriving_url(), time)?;

        if flights.is_empty() {
            let earlier_time = time - Duration::days(1);
            check_for_past_time(earlier_time, now)?;

            event!(
                Level::INFO,
                "no flights arriving before {}, retrying on {}",
                time,
                earlier_time.date_naive(),
            );

            let builder = builder.date(earlier_time);
            flights = self.arriving_flights(&builder.schedule_arriving_url(), time)?;
        }

        Ok(flights)
    }

    /// Flights from `from` to `to` whose UTC departure time is strictly
    /// after `time`.
    ///
    /// The mirror of [`flights_arriving_before`]: an empty first result
    /// shifts the search day one day forward and retries once against the
    /// original `time`. The shifted day is validated like the backward one,
    /// which for a forward shift always holds.
    ///
    /// [`flights_arriving_before`]: Self::flights_arriving_before
    #[instrument(skip(self))]
    pub fn flights_departing_after(
        &mut self,
        time: DateTime<Utc>,
        from: &AirportCode,
        to: &AirportCode,
        now: DateTime<Utc>,
    ) -> Result<Vec<ScheduledFlight>> {
        check_for_past_time(time, now)?;

        let builder = UrlBuilder::new(self.config.url.as_str())
            .from(from)
            .to(to)
            .date(time);
        let mut flights = self.departing_flights(&builder.schedule_departing_url(), time)?;

        if flights.is_empty() {
            let later_time = time + Duration::days(1);
            check_for_past_time(later_time, now)?;

            event!(
                Level::INFO,
                "no flights departing after {}, retrying on {}",
                time,
                later_time.date_naive(),
            );

            let builder = builder.date(later_time);
            flights = self.departing_flights(&builder.schedule_departing_url(), time)?;
        }

        Ok(flights)
    }

    fn arriving_flights(&mut self, url: &str, before: DateTime<Utc>) -> Result<Vec<ScheduledFlight>> {
        let mut flights = self.scheduled_flights(url)?;
        flights.retain(|f| f.arrival_time_utc.is_some_and(|t| t < before));
        Ok(flights)
    }

    fn departing_flights(&mut self, url: &str, after: DateTime<Utc>) -> Result<Vec<ScheduledFlight>> {
        let mut flights = self.scheduled_flights(url)?;
        flights.retain(|f| f.departure_time_utc.is_some_and(|t| t > after));
        Ok(flights)
    }

    /// Fetches one schedule response and returns its flights annotated with
    /// UTC timestamps. Overwrites the current airport list, which subsequent
    /// offset lookups resolve against.
    fn scheduled_flights(&mut self, url: &str) -> Result<Vec<ScheduledFlight>> {
        let body = self
            .client
            .get(url)
            .header(APP_ID_HEADER, self.config.app_id.as_str())
            .header(APP_KEY_HEADER, self.config.app_key.as_str())
            .send()
            .context(HttpSnafu)?
            .text()
            .context(HttpSnafu)?;

        let response: ScheduleResponse = serde_json::from_str(&body).context(DecodeSnafu)?;

        self.airports = response.appendix.airports;

        let mut flights = response.scheduled_flights;
        self.add_utc_time(&mut flights)?;
        Ok(flights)
    }

    fn add_utc_time(&mut self, flights: &mut [ScheduledFlight]) -> Result<()> {
        for flight in flights {
            flight.arrival_time_utc =
                Some(self.to_utc(flight.arrival_time, &flight.arrival_airport_fs_code)?);
            flight.departure_time_utc =
                Some(self.to_utc(flight.departure_time, &flight.departure_airport_fs_code)?);
        }
        Ok(())
    }

    /// Reinterprets a local wall-clock reading at the airport's fixed offset
    /// and re-expresses the instant in UTC.
    fn to_utc(&mut self, local: NaiveDateTime, code: &AirportCode) -> Result<DateTime<Utc>> {
        let offset = self.tz_offset(code)?;
        let offset = parse_offset(&offset)?;
        Ok((local - Duration::seconds(i64::from(offset.local_minus_utc()))).and_utc())
    }

    /// Resolves an airport's offset string, `+0550` or `-0800` style, from
    /// the cache or the current airport list. The first matching airport
    /// record wins; a cached offset is never recomputed for the lifetime of
    /// the instance.
    fn tz_offset(&mut self, code: &AirportCode) -> Result<String> {
        if let Some(offset) = self.airport_offsets.get(code) {
            return Ok(offset.clone());
        }

        let airport = self
            .airports
            .iter()
            .find(|a| &a.fs == code)
            .context(UnknownAirportSnafu { code: code.clone() })?;

        let offset = format!("{:+05.0}", airport.utc_offset_hours * 100.0);
        self.airport_offsets.insert(code.clone(), offset.clone());
        Ok(offset)
    }
}

fn check_for_past_time(time: DateTime<Utc>, now: DateTime<Utc>) -> Result<()> {
    ensure!(
        time > now,
        PastTimeSnafu {
            requested: time,
            now,
        }
    );
    Ok(())
}

/// Parses an offset string produced by `tz_offset` into a fixed offset of
/// `HH` hours and `MM` minutes.
fn parse_offset(value: &str) -> Result<FixedOffset> {
    let context = || InvalidOffsetSnafu { value };

    let (sign, digits) = match value.split_at_checked(1) {
        Some(("+", digits)) => (1, digits),
        Some(("-", digits)) => (-1, digits),
        _ => return context().fail(),
    };
    let (hours, minutes) = digits
        .split_at_checked(digits.len().wrapping_sub(2))
        .with_context(context)?;

    let hours: i32 = hours.parse().ok().with_context(context)?;
    let minutes: i32 = minutes.parse().ok().with_context(context)?;

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).with_context(context)
}
