use chrono::{DateTime, Utc};

/// Source of the current date and time.
///
/// Time-dependent checks such as [`Token::expired_at`](crate::Token::expired_at)
/// take a provider so that "now" can be pinned in tests.
pub trait DateTimeProvider {
    fn date_time(&self) -> DateTime<Utc>;
}

/// Fixed instant.
impl DateTimeProvider for DateTime<Utc> {
    fn date_time(&self) -> DateTime<Utc> {
        *self
    }
}

impl<T: DateTimeProvider + ?Sized> DateTimeProvider for &T {
    fn date_time(&self) -> DateTime<Utc> {
        T::date_time(*self)
    }
}

/// System clock, backed by [`Utc::now`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock;

impl DateTimeProvider for SystemClock {
    fn date_time(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
