use chrono::{DateTime, Utc};

/// A port that provides the **current instant** for the application.
///
/// Abstracting "now" keeps lead timestamps out of the system clock's hands
/// during tests: the lead repository takes a `Clock`, so tests can pin
/// `created_at` to a fixed value.
///
/// # Typical Implementations
/// - [`SystemClock`](crate::time::system_clock::SystemClock): the OS clock
/// - `FixedClock`: a constant instant (tests)
pub trait Clock: Send + Sync {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current instant as epoch milliseconds.
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}
