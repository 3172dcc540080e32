//! Time sources and timezone rendering.

pub mod clock;
pub mod local;
pub mod system_clock;

pub use clock::Clock;
pub use system_clock::SystemClock;
