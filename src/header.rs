//! The 34-byte common PTP message header.
//!
//! Every PTP message starts with the same fixed header; the `messageType`
//! nibble then selects the payload codec. Three fields (`messageType`,
//! `messageLength`, `controlField`) may be left unset when building a
//! message, in which case the encode pass derives them from the payload —
//! see [`crate::message::PtpMessage::encode`].

use crate::error::PtpError;

/// 64-bit value uniquely identifying a clock.
///
/// Derivation from a host address is the caller's business; the codec
/// treats it as opaque.
pub type ClockIdentity = u64;

/// The 16-bit header flags field.
///
/// Bit 15 (SECURITY) gates the presence of the variable-length security
/// blob in Follow_Up and Announce payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PtpFlags(pub u16);

impl PtpFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Security extension present (bit 15).
    pub const SECURITY: Self = Self(1 << 15);
    /// Profile specific 2 (bit 14).
    pub const PROFILE_SPECIFIC_2: Self = Self(1 << 14);
    /// Profile specific 1 (bit 13).
    pub const PROFILE_SPECIFIC_1: Self = Self(1 << 13);
    /// Reserved (bit 12).
    pub const RESERVED_0: Self = Self(1 << 12);
    /// Reserved (bit 11).
    pub const RESERVED_1: Self = Self(1 << 11);
    /// Unicast transmission (bit 10).
    pub const UNICAST: Self = Self(1 << 10);
    /// Two-step clock (bit 9).
    pub const TWO_STEP: Self = Self(1 << 9);
    /// Alternate master (bit 8).
    pub const ALTERNATE_MASTER: Self = Self(1 << 8);
    /// Reserved (bit 7).
    pub const RESERVED_2: Self = Self(1 << 7);
    /// Reserved (bit 6).
    pub const RESERVED_3: Self = Self(1 << 6);
    /// Frequency traceable (bit 5).
    pub const FREQUENCY_TRACEABLE: Self = Self(1 << 5);
    /// Time traceable (bit 4).
    pub const TIME_TRACEABLE: Self = Self(1 << 4);
    /// PTP timescale (bit 3).
    pub const TIMESCALE: Self = Self(1 << 3);
    /// Current UTC offset valid (bit 2).
    pub const UTC_REASONABLE: Self = Self(1 << 2);
    /// Leap 59 (bit 1).
    pub const L1_59: Self = Self(1 << 1);
    /// Leap 61 (bit 0).
    pub const L1_61: Self = Self(1 << 0);

    /// Flag names, MSB to LSB.
    const NAMES: [&'static str; 16] = [
        "Security",
        "Profile Specific 2",
        "Profile Specific 1",
        "Reserved 0",
        "Reserved 1",
        "Unicast",
        "Two Step",
        "Alternate Master",
        "Reserved 2",
        "Reserved 3",
        "Frequency Traceable",
        "Time Traceable",
        "Timescale",
        "UTC Reasonable",
        "L1 59",
        "L1 61",
    ];

    /// Whether every bit in `other` is set in `self`.
    #[must_use]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether the SECURITY bit is set.
    #[must_use]
    pub fn security(self) -> bool {
        self.contains(Self::SECURITY)
    }
}

impl std::ops::BitOr for PtpFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for PtpFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::fmt::Display for PtpFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (i, name) in Self::NAMES.iter().enumerate() {
            if self.0 & (1 << (15 - i)) != 0 {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        if first {
            write!(f, "(none)")?;
        }
        Ok(())
    }
}

/// Full IEEE 1588 PTP message header (34 bytes).
///
/// `message_type`, `message_length` and `control_field` are `None` when the
/// caller wants them derived during encoding; decoding always fills them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PtpHeader {
    /// Transport-specific nibble (upper 4 bits of byte 0), opaque.
    pub transport_specific: u8,
    /// Raw messageType nibble (lower 4 bits of byte 0).
    pub message_type: Option<u8>,
    /// Reserved nibble (upper 4 bits of byte 1); round-trips unchanged.
    pub reserved0: u8,
    /// PTP version (lower 4 bits of byte 1, typically 2).
    pub version: u8,
    /// Total message length, header included.
    pub message_length: Option<u16>,
    /// Domain number.
    pub domain_number: u8,
    /// Reserved byte 5; round-trips unchanged.
    pub reserved1: u8,
    /// Flags field.
    pub flags: PtpFlags,
    /// Correction field (signed fixed-point offset, opaque to this codec).
    pub correction_field: i64,
    /// Reserved bytes 16..20; round-trip unchanged.
    pub reserved2: u32,
    /// Source clock identity.
    pub source_clock_identity: ClockIdentity,
    /// Source port number.
    pub port_identity: u16,
    /// Sequence ID.
    pub sequence_id: u16,
    /// Legacy control field, redundant with messageType.
    pub control_field: Option<u8>,
    /// Log message interval.
    pub log_message_interval: u8,
}

impl PtpHeader {
    /// Header size in bytes.
    pub const SIZE: usize = 34;

    /// Default PTP version.
    pub const PTP_VERSION_2: u8 = 2;

    /// Byte offset of the 16-bit messageLength field.
    pub(crate) const MESSAGE_LENGTH_OFFSET: usize = 2;

    /// Byte offset of the controlField byte.
    pub(crate) const CONTROL_FIELD_OFFSET: usize = 32;

    /// Create a header with the standard defaults and derived fields unset.
    #[must_use]
    pub fn new(source_clock_identity: ClockIdentity, sequence_id: u16) -> Self {
        Self {
            transport_specific: 0,
            message_type: None,
            reserved0: 0,
            version: Self::PTP_VERSION_2,
            message_length: None,
            domain_number: 0,
            reserved1: 0,
            flags: PtpFlags::NONE,
            correction_field: 0,
            reserved2: 0,
            source_clock_identity,
            port_identity: 1,
            sequence_id,
            control_field: None,
            log_message_interval: 0,
        }
    }

    /// Encode to 34 bytes.
    ///
    /// Unset derived fields are written as zero; [`crate::message::PtpMessage::encode`]
    /// patches them in place afterwards. Nibble fields are masked to 4 bits.
    #[must_use]
    pub fn encode(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[0] = ((self.transport_specific & 0x0F) << 4) | (self.message_type.unwrap_or(0) & 0x0F);
        buf[1] = ((self.reserved0 & 0x0F) << 4) | (self.version & 0x0F);
        buf[2..4].copy_from_slice(&self.message_length.unwrap_or(0).to_be_bytes());
        buf[4] = self.domain_number;
        buf[5] = self.reserved1;
        buf[6..8].copy_from_slice(&self.flags.0.to_be_bytes());
        buf[8..16].copy_from_slice(&self.correction_field.to_be_bytes());
        buf[16..20].copy_from_slice(&self.reserved2.to_be_bytes());
        buf[20..28].copy_from_slice(&self.source_clock_identity.to_be_bytes());
        buf[28..30].copy_from_slice(&self.port_identity.to_be_bytes());
        buf[30..32].copy_from_slice(&self.sequence_id.to_be_bytes());
        buf[32] = self.control_field.unwrap_or(0);
        buf[33] = self.log_message_interval;
        buf
    }

    /// Decode the fixed header, returning it and the remaining payload bytes.
    ///
    /// Succeeds for any messageType nibble; payload dispatch is where an
    /// unknown type is reported.
    ///
    /// # Errors
    /// [`PtpError::TruncatedInput`] if fewer than 34 bytes are available.
    pub fn decode(data: &[u8]) -> Result<(Self, &[u8]), PtpError> {
        if data.len() < Self::SIZE {
            return Err(PtpError::TruncatedInput {
                needed: Self::SIZE,
                have: data.len(),
            });
        }
        let header = Self {
            transport_specific: data[0] >> 4,
            message_type: Some(data[0] & 0x0F),
            reserved0: data[1] >> 4,
            version: data[1] & 0x0F,
            message_length: Some(u16::from_be_bytes([data[2], data[3]])),
            domain_number: data[4],
            reserved1: data[5],
            flags: PtpFlags(u16::from_be_bytes([data[6], data[7]])),
            correction_field: i64::from_be_bytes([
                data[8], data[9], data[10], data[11], data[12], data[13], data[14], data[15],
            ]),
            reserved2: u32::from_be_bytes([data[16], data[17], data[18], data[19]]),
            source_clock_identity: u64::from_be_bytes([
                data[20], data[21], data[22], data[23], data[24], data[25], data[26], data[27],
            ]),
            port_identity: u16::from_be_bytes([data[28], data[29]]),
            sequence_id: u16::from_be_bytes([data[30], data[31]]),
            control_field: Some(data[32]),
            log_message_interval: data[33],
        };
        Ok((header, &data[Self::SIZE..]))
    }
}

impl Default for PtpHeader {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
