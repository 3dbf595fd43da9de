//! 64-bit timestamps
//!
//! A date travels as a `u64` whose low 62 bits count 100-nanosecond ticks
//! since 0001-01-01T00:00:00 UTC and whose top two bits carry a kind marker
//! (`1` = UTC). The raw value is preserved across decode/encode so that
//! foreign kind markers survive a round trip.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

const TICKS_MASK: u64 = 0x3FFF_FFFF_FFFF_FFFF;
const KIND_SHIFT: u32 = 62;
const KIND_UTC: u64 = 1 << KIND_SHIFT;
const TICKS_PER_SECOND: u64 = 10_000_000;
const NANOS_PER_TICK: u64 = 100;

/// Ticks between 0001-01-01 and 1970-01-01
pub(crate) const UNIX_EPOCH_TICKS: u64 = 621_355_968_000_000_000;

/// Timestamp with 100 ns resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Date(u64);

impl Date {
    /// Build a UTC date from a tick count
    pub const fn from_ticks(ticks: u64) -> Self {
        Self((ticks & TICKS_MASK) | KIND_UTC)
    }

    /// Wrap a raw wire value, keeping its kind bits
    pub const fn from_wire(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw wire value including kind bits
    pub const fn to_wire(self) -> u64 {
        self.0
    }

    /// Ticks since 0001-01-01, without kind bits
    pub const fn ticks(self) -> u64 {
        self.0 & TICKS_MASK
    }

    /// The two-bit kind marker
    pub const fn kind(self) -> u8 {
        (self.0 >> KIND_SHIFT) as u8
    }

    /// Convert from a system timestamp, truncating to 100 ns
    pub fn from_system_time(time: SystemTime) -> Self {
        let ticks = match time.duration_since(UNIX_EPOCH) {
            Ok(after) => UNIX_EPOCH_TICKS.saturating_add(duration_to_ticks(after)),
            Err(before) => UNIX_EPOCH_TICKS.saturating_sub(duration_to_ticks(before.duration())),
        };
        Self::from_ticks(ticks)
    }

    /// Convert to a system timestamp. Returns `None` when the platform cannot
    /// represent the instant.
    pub fn to_system_time(self) -> Option<SystemTime> {
        let ticks = self.ticks();
        if ticks >= UNIX_EPOCH_TICKS {
            UNIX_EPOCH.checked_add(ticks_to_duration(ticks - UNIX_EPOCH_TICKS))
        } else {
            UNIX_EPOCH.checked_sub(ticks_to_duration(UNIX_EPOCH_TICKS - ticks))
        }
    }
}

impl From<SystemTime> for Date {
    fn from(time: SystemTime) -> Self {
        Self::from_system_time(time)
    }
}

fn duration_to_ticks(duration: Duration) -> u64 {
    duration
        .as_secs()
        .saturating_mul(TICKS_PER_SECOND)
        .saturating_add(u64::from(duration.subsec_nanos()) / NANOS_PER_TICK)
}

fn ticks_to_duration(ticks: u64) -> Duration {
    let secs = ticks / TICKS_PER_SECOND;
    let nanos = (ticks % TICKS_PER_SECOND) * NANOS_PER_TICK;
    Duration::new(secs, nanos as u32)
}
