use std::str::FromStr;

use chrono::{DateTime, LocalResult, TimeZone, Utc};
use ordered_float::NotNan;
use serde::{Deserialize, Serialize, Serializer};

/// JSON numeric value representing the number of seconds from
/// 1970-01-01T00:00:00Z UTC until the specified UTC date/time, ignoring leap
/// seconds.
///
/// Fractional seconds are preserved.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc7519#section-2>
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumericDate(#[serde(serialize_with = "interop_serialize")] NotNan<f64>);

/// Serializes a date as an integer if it does not have fractional seconds.
fn interop_serialize<S>(x: &NotNan<f64>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if x.fract() != 0.0 {
        s.serialize_f64(**x)
    } else {
        s.serialize_i64(**x as i64)
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericDateConversionError {
    #[error("Not a number")]
    Nan,

    #[error("Invalid float literal")]
    InvalidFloatLiteral,
}

impl From<ordered_float::FloatIsNan> for NumericDateConversionError {
    fn from(_: ordered_float::FloatIsNan) -> Self {
        Self::Nan
    }
}

impl NumericDate {
    /// Return the f64-valued number of seconds represented by this NumericDate.
    pub fn as_seconds(self) -> f64 {
        *self.0
    }

    /// Try to create NumericDate from a f64 value, returning error upon NaN.
    pub fn try_from_seconds(seconds: f64) -> Result<Self, NumericDateConversionError> {
        let seconds = NotNan::new(seconds)?;
        Ok(NumericDate(seconds))
    }

    /// Converts this date into a UTC date-time.
    ///
    /// Returns `None` if the date is infinite or out of the range supported
    /// by `chrono`.
    pub fn to_date_time(self) -> Option<DateTime<Utc>> {
        match LocalResult::from(self) {
            LocalResult::Single(dt) => Some(dt),
            _ => None,
        }
    }

    /// Decompose NumericDate for use in Utc.timestamp_opt
    fn into_whole_seconds_and_fractional_nanoseconds(self) -> Option<(i64, u32)> {
        if !self.0.is_finite() {
            return None;
        }

        let floor = self.0.floor();
        if floor < i64::MIN as f64 || floor >= i64::MAX as f64 {
            return None;
        }

        let fractional_nanoseconds = ((*self.0 - floor) * 1_000_000_000.0).floor() as u32;
        Some((floor as i64, fractional_nanoseconds.min(999_999_999)))
    }
}

impl From<i32> for NumericDate {
    fn from(value: i32) -> Self {
        // UNWRAP SAFETY: an integer is never NaN.
        Self::try_from_seconds(value as f64).unwrap()
    }
}

impl TryFrom<i64> for NumericDate {
    type Error = NumericDateConversionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_from_seconds(value as f64)
    }
}

impl TryFrom<f64> for NumericDate {
    type Error = NumericDateConversionError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_from_seconds(value)
    }
}

impl From<DateTime<Utc>> for NumericDate {
    fn from(dtu: DateTime<Utc>) -> Self {
        // Have to take seconds and nanoseconds separately in order to get the full allowable
        // range of microsecond-precision values.
        let whole_seconds = dtu.timestamp() as f64;
        let fractional_seconds = dtu.timestamp_subsec_nanos() as f64 * 1.0e-9;

        Self::try_from_seconds(whole_seconds + fractional_seconds)
            // UNWRAP SAFETY: input value can't be NaN nor infinite.
            .unwrap()
    }
}

impl From<NumericDate> for LocalResult<DateTime<Utc>> {
    fn from(nd: NumericDate) -> Self {
        match nd.into_whole_seconds_and_fractional_nanoseconds() {
            Some((whole_seconds, fractional_nanoseconds)) => {
                Utc.timestamp_opt(whole_seconds, fractional_nanoseconds)
            }
            None => LocalResult::None,
        }
    }
}

impl PartialEq<DateTime<Utc>> for NumericDate {
    fn eq(&self, other: &DateTime<Utc>) -> bool {
        *self == NumericDate::from(*other)
    }
}

impl FromStr for NumericDate {
    type Err = NumericDateConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let f: NotNan<f64> = s
            .parse()
            .map_err(|_| NumericDateConversionError::InvalidFloatLiteral)?;
        Ok(Self(f))
    }
}
