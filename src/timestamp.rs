//! PTP timestamp representation and arithmetic.
//!
//! IEEE 1588 timestamps are 80 bits on the wire: 48-bit seconds plus
//! 32-bit nanoseconds, both big-endian. Addition and subtraction keep the
//! nanosecond field normalized to `0..1_000_000_000`, carrying into or
//! borrowing from the seconds field.

use std::ops::{Add, Sub};

/// IEEE 1588 PTP timestamp: 48-bit seconds + 32-bit nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PtpTimestamp {
    /// Seconds since the PTP epoch. Only the lower 48 bits are encoded.
    pub seconds: u64,
    /// Nanoseconds within the current second (`0..999_999_999`).
    pub nanoseconds: u32,
}

impl PtpTimestamp {
    /// Nanoseconds in one second.
    pub const NANOS_PER_SEC: u32 = 1_000_000_000;

    /// Maximum seconds representable in 48 bits.
    pub const MAX_SECONDS_48BIT: u64 = (1u64 << 48) - 1;

    /// Encoded size in bytes.
    pub const SIZE: usize = 10;

    /// Zero timestamp.
    pub const ZERO: Self = Self {
        seconds: 0,
        nanoseconds: 0,
    };

    /// Create a new timestamp, clamping nanoseconds to the valid range.
    #[must_use]
    pub fn new(seconds: u64, nanoseconds: u32) -> Self {
        Self {
            seconds,
            nanoseconds: nanoseconds.min(Self::NANOS_PER_SEC - 1),
        }
    }

    /// Encode as wire format: 6-byte seconds (BE) + 4-byte nanoseconds (BE).
    ///
    /// Seconds are masked to 48 bits.
    #[must_use]
    pub fn encode(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        let sec_bytes = (self.seconds & Self::MAX_SECONDS_48BIT).to_be_bytes();
        // 48-bit seconds: lower 6 bytes of the 8-byte u64
        buf[0..6].copy_from_slice(&sec_bytes[2..8]);
        buf[6..10].copy_from_slice(&self.nanoseconds.to_be_bytes());
        buf
    }

    /// Decode from wire format: 6-byte seconds (BE) + 4-byte nanoseconds (BE).
    ///
    /// Returns `None` if the slice is too short.
    #[must_use]
    pub fn decode(data: &[u8]) -> Option<Self> {
        if data.len() < Self::SIZE {
            return None;
        }
        let seconds =
            u64::from_be_bytes([0, 0, data[0], data[1], data[2], data[3], data[4], data[5]]);
        let nanoseconds = u32::from_be_bytes([data[6], data[7], data[8], data[9]]);
        Some(Self {
            seconds,
            nanoseconds,
        })
    }
}

impl Add for PtpTimestamp {
    type Output = Self;

    /// Sum with a single carry step.
    ///
    /// Two normalized nanosecond fields sum to at most `2 * (10^9 - 1)`, so
    /// one conditional carry is enough. Seconds overflow wraps.
    fn add(self, rhs: Self) -> Self {
        let mut seconds = self.seconds.wrapping_add(rhs.seconds);
        let mut nanoseconds = self.nanoseconds + rhs.nanoseconds;
        if nanoseconds >= Self::NANOS_PER_SEC {
            nanoseconds -= Self::NANOS_PER_SEC;
            seconds = seconds.wrapping_add(1);
        }
        Self {
            seconds,
            nanoseconds,
        }
    }
}

impl Sub for PtpTimestamp {
    type Output = Self;

    /// Difference with a borrow loop.
    ///
    /// Loops rather than testing once so that denormalized operands still
    /// come out with `nanoseconds` in range. Seconds underflow wraps.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "The borrow loop exits with 0 <= nanoseconds < 10^9"
    )]
    fn sub(self, rhs: Self) -> Self {
        let mut seconds = self.seconds.wrapping_sub(rhs.seconds);
        let mut nanoseconds = i64::from(self.nanoseconds) - i64::from(rhs.nanoseconds);
        while nanoseconds < 0 {
            seconds = seconds.wrapping_sub(1);
            nanoseconds += i64::from(Self::NANOS_PER_SEC);
        }
        Self {
            seconds,
            nanoseconds: nanoseconds as u32,
        }
    }
}

impl std::fmt::Display for PtpTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:09}", self.seconds, self.nanoseconds)
    }
}
