//! Sources of the current instant.
//!
//! Chronologies never read the time themselves: `Chronology::date_now`
//! asks a `Clock` for it, so tests can pin “now” to a known instant.

use tracing::trace;

use crate::instant::Instant;
use crate::system::sys_time;


/// Anything that can tell what the time is right now.
pub trait Clock {

    /// Returns the current instant, according to this clock.
    fn instant(&self) -> Instant;

    /// Returns the current day, as a count of days since 1st January 1970.
    fn epoch_day(&self) -> i64 {
        self.instant().epoch_day()
    }
}


/// The operating system’s real-time clock.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg_attr(target_os = "redox", allow(unused_unsafe))]
    fn instant(&self) -> Instant {
        let (seconds, nanoseconds) = unsafe { sys_time() };
        trace!(seconds = seconds, nanoseconds = nanoseconds, "read system clock");
        Instant::at_nanos(seconds, nanoseconds)
    }
}


/// A clock stuck at one instant.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct FixedClock(pub Instant);

impl Clock for FixedClock {
    fn instant(&self) -> Instant {
        self.0
    }
}
