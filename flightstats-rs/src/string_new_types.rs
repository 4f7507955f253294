use std::{fmt::Display, ops::Deref, str::FromStr};

use serde::{
    Deserialize, Serialize,
    de::{self, Visitor},
};

use crate::error::{ParseStringError, parse_string_error::EmptySnafu};

/// An airport identifier in FlightStats' `fs` code namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Ord, PartialOrd)]
pub struct AirportCode(String);

impl AirportCode {
    pub fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for AirportCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for AirportCode {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_ref()
    }
}

impl FromStr for AirportCode {
    type Err = ParseStringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            EmptySnafu.fail()
        } else {
            Ok(Self(value.into()))
        }
    }
}

impl TryFrom<String> for AirportCode {
    type Error = ParseStringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl PartialEq<AirportCode> for String {
    fn eq(&self, other: &AirportCode) -> bool {
        other.as_ref().eq(self)
    }
}

impl<'de> Deserialize<'de> for AirportCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(AirportCodeVisitor)
    }
}

struct AirportCodeVisitor;
impl Visitor<'_> for AirportCodeVisitor {
    type Value = AirportCode;

    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("a non-empty airport fs code")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value
            .parse()
            .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(value), &self))
    }
}

impl Display for AirportCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
