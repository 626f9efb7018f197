//! PTP message types, payload codecs, and whole-message encode/decode.
//!
//! A message is the 34-byte common header followed by a payload variant
//! selected by the header's messageType nibble. Follow_Up and Announce may
//! additionally carry a trailing security blob when the header's SECURITY
//! flag is set; the blob has no length prefix and consumes the rest of the
//! buffer.
//!
//! Encoding runs payload-first: the payload is serialized, the header is
//! wrapped around it, and any derived fields (messageLength, messageType,
//! controlField) are patched into the finished buffer at their fixed
//! offsets.

use bytes::Bytes;

use crate::error::PtpError;
use crate::header::{ClockIdentity, PtpHeader};
use crate::security::{Certificate, Signature};
use crate::timestamp::PtpTimestamp;

/// PTP message type identifiers (IEEE 1588 Section 13.3.2.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PtpMessageType {
    /// Sync (master → slave), carries T1.
    Sync = 0x00,
    /// Delay request (slave → master), sent at T3.
    DelayReq = 0x01,
    /// Peer delay request.
    PDelayReq = 0x02,
    /// Peer delay response.
    PDelayResp = 0x03,
    /// Follow-up (master → slave), carries precise T1.
    FollowUp = 0x08,
    /// Delay response (master → slave), carries T4.
    DelayResp = 0x09,
    /// Peer delay response follow-up.
    PDelayRespFollowUp = 0x0A,
    /// Announce (master → slave), clock properties.
    Announce = 0x0B,
    /// Signaling. Header-only in this codec; no payload codec registered.
    Signaling = 0x0C,
    /// Management. Header-only in this codec; no payload codec registered.
    Management = 0x0D,
}

impl PtpMessageType {
    /// Parse from the lower 4 bits of a byte.
    #[must_use]
    pub fn from_nibble(value: u8) -> Option<Self> {
        match value & 0x0F {
            0x00 => Some(Self::Sync),
            0x01 => Some(Self::DelayReq),
            0x02 => Some(Self::PDelayReq),
            0x03 => Some(Self::PDelayResp),
            0x08 => Some(Self::FollowUp),
            0x09 => Some(Self::DelayResp),
            0x0A => Some(Self::PDelayRespFollowUp),
            0x0B => Some(Self::Announce),
            0x0C => Some(Self::Signaling),
            0x0D => Some(Self::Management),
            _ => None,
        }
    }

    /// Whether this message type is an event message (requires timestamping).
    #[must_use]
    pub fn is_event(self) -> bool {
        matches!(
            self,
            Self::Sync | Self::DelayReq | Self::PDelayReq | Self::PDelayResp
        )
    }

    /// Whether this message type is a general message.
    #[must_use]
    pub fn is_general(self) -> bool {
        !self.is_event()
    }

    /// Whether a payload codec is registered for this type.
    ///
    /// Signaling and Management decode at most the header here.
    #[must_use]
    pub fn has_body_codec(self) -> bool {
        !matches!(self, Self::Signaling | Self::Management)
    }

    /// Legacy controlField value for this type.
    #[must_use]
    pub fn control_field(self) -> u8 {
        match self {
            Self::Sync => 0x00,
            Self::DelayReq => 0x01,
            Self::FollowUp => 0x02,
            Self::DelayResp => 0x03,
            _ => 0x05,
        }
    }
}

impl std::fmt::Display for PtpMessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sync => "Sync",
            Self::DelayReq => "Delay_Req",
            Self::PDelayReq => "PDelay_Req",
            Self::PDelayResp => "PDelay_Resp",
            Self::FollowUp => "Follow_Up",
            Self::DelayResp => "Delay_Resp",
            Self::PDelayRespFollowUp => "PDelay_Resp_FU",
            Self::Announce => "Announce",
            Self::Signaling => "Signaling",
            Self::Management => "Management",
        };
        write!(f, "{name}")
    }
}

/// Announce timeSource field: an 8-bit code, decoded without validation.
///
/// Unknown values pass through opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSource(pub u8);

impl TimeSource {
    /// Atomic clock.
    pub const ATOMIC_CLOCK: Self = Self(0x10);
    /// GPS.
    pub const GPS: Self = Self(0x20);
    /// Terrestrial radio.
    pub const TERRESTRIAL_RADIO: Self = Self(0x30);
    /// Another PTP domain.
    pub const PTP: Self = Self(0x40);
    /// NTP.
    pub const NTP: Self = Self(0x50);
    /// Hand set.
    pub const HAND_SET: Self = Self(0x60);
    /// Other.
    pub const OTHER: Self = Self(0x90);
    /// Internal oscillator.
    pub const INTERNAL_OSCILLATOR: Self = Self(0xA0);
}

impl std::fmt::Display for TimeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::ATOMIC_CLOCK => write!(f, "Atomic Clock"),
            Self::GPS => write!(f, "GPS"),
            Self::TERRESTRIAL_RADIO => write!(f, "Terrestrial Radio"),
            Self::PTP => write!(f, "PTP"),
            Self::NTP => write!(f, "NTP"),
            Self::HAND_SET => write!(f, "Hand Set"),
            Self::OTHER => write!(f, "Other"),
            Self::INTERNAL_OSCILLATOR => write!(f, "Internal Oscillator"),
            Self(other) => write!(f, "0x{other:02X}"),
        }
    }
}

/// Default Announce clockQuality word (class/accuracy/variance packed).
pub const DEFAULT_CLOCK_QUALITY: u32 = 0x80FE_7060;

/// Default Announce priority value.
pub const DEFAULT_PRIORITY: u8 = 128;

/// PTP message payload variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PtpMessageBody {
    /// Sync: origin timestamp (T1, approximate if two-step).
    Sync {
        /// Origin timestamp.
        origin_timestamp: PtpTimestamp,
    },
    /// Delay request: origin timestamp (T3).
    DelayReq {
        /// Origin timestamp.
        origin_timestamp: PtpTimestamp,
    },
    /// Peer delay request: origin timestamp plus a reserved tail.
    PDelayReq {
        /// Origin timestamp.
        origin_timestamp: PtpTimestamp,
        /// Reserved 10 bytes; round-trip unchanged.
        reserved: [u8; 10],
    },
    /// Follow-up: precise origin timestamp (T1), optionally signed.
    FollowUp {
        /// Precise origin timestamp from the associated Sync.
        precise_origin_timestamp: PtpTimestamp,
        /// Signature blob, present iff the header's SECURITY flag is set.
        signature: Option<Signature>,
    },
    /// Delay response: receive timestamp (T4) and the requester's identity.
    DelayResp {
        /// Receive timestamp (when the master received the Delay_Req).
        receive_timestamp: PtpTimestamp,
        /// Clock identity of the requester.
        requesting_clock_identity: ClockIdentity,
        /// Port number of the requester.
        requesting_port_identity: u16,
    },
    /// Peer delay response.
    PDelayResp {
        /// Receipt timestamp of the peer delay request.
        receive_receipt_timestamp: PtpTimestamp,
        /// Clock identity of the requester.
        requesting_clock_identity: ClockIdentity,
        /// Port number of the requester.
        requesting_port_identity: u16,
    },
    /// Peer delay response follow-up.
    PDelayRespFollowUp {
        /// Origin timestamp of the peer delay response.
        response_origin_timestamp: PtpTimestamp,
        /// Clock identity of the requester.
        requesting_clock_identity: ClockIdentity,
        /// Port number of the requester.
        requesting_port_identity: u16,
    },
    /// Announce: clock properties, optionally certified.
    Announce {
        /// Origin timestamp.
        origin_timestamp: PtpTimestamp,
        /// Current UTC offset.
        current_utc_offset: u16,
        /// Reserved byte; round-trips unchanged.
        reserved: u8,
        /// Grandmaster priority 1.
        priority1: u8,
        /// Grandmaster clock quality word, opaque to this codec.
        clock_quality: u32,
        /// Grandmaster priority 2.
        priority2: u8,
        /// Grandmaster clock identity.
        grandmaster_identity: ClockIdentity,
        /// Steps removed from the grandmaster.
        steps_removed: u16,
        /// Time source code.
        time_source: TimeSource,
        /// Certificate blob, present iff the header's SECURITY flag is set.
        certificate: Option<Certificate>,
    },
    /// Raw body bytes with no recognized variant.
    ///
    /// Never produced by decoding; lets callers carry bodies this codec does
    /// not model. Encoding one with an unset messageType triggers the
    /// Sync/0x05 fallback.
    Opaque {
        /// Raw body bytes.
        data: Bytes,
    },
}

impl PtpMessageBody {
    /// Fixed body size for Sync, Delay_Req and Follow_Up (one timestamp).
    const TIMESTAMP_BODY_SIZE: usize = PtpTimestamp::SIZE;
    /// Fixed body size for PDelay_Req (timestamp + 10 reserved bytes).
    const PDELAY_REQ_BODY_SIZE: usize = PtpTimestamp::SIZE + 10;
    /// Fixed body size for the three *_Resp variants (timestamp + identity).
    const RESP_BODY_SIZE: usize = PtpTimestamp::SIZE + 8 + 2;
    /// Fixed body size for Announce.
    const ANNOUNCE_BODY_SIZE: usize = PtpTimestamp::SIZE + 20;

    /// Decode the payload for `kind` from `data`.
    ///
    /// `security` is the enclosing header's SECURITY flag; when set, the
    /// gated variants consume every remaining byte as their blob. Returns
    /// the body and whatever bytes it did not consume — those belong to the
    /// outer framing, never to a field.
    ///
    /// # Errors
    /// [`PtpError::TruncatedInput`] if `data` is shorter than the fixed
    /// fields require; [`PtpError::UnknownMessageType`] for types with no
    /// payload codec (Signaling, Management).
    pub fn decode(
        kind: PtpMessageType,
        data: &[u8],
        security: bool,
    ) -> Result<(Self, &[u8]), PtpError> {
        match kind {
            PtpMessageType::Sync => {
                let ts = Self::decode_timestamp(data, Self::TIMESTAMP_BODY_SIZE)?;
                Ok((
                    Self::Sync {
                        origin_timestamp: ts,
                    },
                    &data[Self::TIMESTAMP_BODY_SIZE..],
                ))
            }
            PtpMessageType::DelayReq => {
                let ts = Self::decode_timestamp(data, Self::TIMESTAMP_BODY_SIZE)?;
                Ok((
                    Self::DelayReq {
                        origin_timestamp: ts,
                    },
                    &data[Self::TIMESTAMP_BODY_SIZE..],
                ))
            }
            PtpMessageType::PDelayReq => {
                let ts = Self::decode_timestamp(data, Self::PDELAY_REQ_BODY_SIZE)?;
                let mut reserved = [0u8; 10];
                reserved.copy_from_slice(&data[10..20]);
                Ok((
                    Self::PDelayReq {
                        origin_timestamp: ts,
                        reserved,
                    },
                    &data[Self::PDELAY_REQ_BODY_SIZE..],
                ))
            }
            PtpMessageType::FollowUp => {
                let ts = Self::decode_timestamp(data, Self::TIMESTAMP_BODY_SIZE)?;
                let rest = &data[Self::TIMESTAMP_BODY_SIZE..];
                let (signature, rest) = if security {
                    (Some(Signature::from(rest)), &rest[rest.len()..])
                } else {
                    (None, rest)
                };
                Ok((
                    Self::FollowUp {
                        precise_origin_timestamp: ts,
                        signature,
                    },
                    rest,
                ))
            }
            PtpMessageType::DelayResp => {
                let (ts, identity, port) = Self::decode_resp_fields(data)?;
                Ok((
                    Self::DelayResp {
                        receive_timestamp: ts,
                        requesting_clock_identity: identity,
                        requesting_port_identity: port,
                    },
                    &data[Self::RESP_BODY_SIZE..],
                ))
            }
            PtpMessageType::PDelayResp => {
                let (ts, identity, port) = Self::decode_resp_fields(data)?;
                Ok((
                    Self::PDelayResp {
                        receive_receipt_timestamp: ts,
                        requesting_clock_identity: identity,
                        requesting_port_identity: port,
                    },
                    &data[Self::RESP_BODY_SIZE..],
                ))
            }
            PtpMessageType::PDelayRespFollowUp => {
                let (ts, identity, port) = Self::decode_resp_fields(data)?;
                Ok((
                    Self::PDelayRespFollowUp {
                        response_origin_timestamp: ts,
                        requesting_clock_identity: identity,
                        requesting_port_identity: port,
                    },
                    &data[Self::RESP_BODY_SIZE..],
                ))
            }
            PtpMessageType::Announce => {
                let ts = Self::decode_timestamp(data, Self::ANNOUNCE_BODY_SIZE)?;
                let rest = &data[Self::ANNOUNCE_BODY_SIZE..];
                let (certificate, rest) = if security {
                    (Some(Certificate::from(rest)), &rest[rest.len()..])
                } else {
                    (None, rest)
                };
                Ok((
                    Self::Announce {
                        origin_timestamp: ts,
                        current_utc_offset: u16::from_be_bytes([data[10], data[11]]),
                        reserved: data[12],
                        priority1: data[13],
                        clock_quality: u32::from_be_bytes([
                            data[14], data[15], data[16], data[17],
                        ]),
                        priority2: data[18],
                        grandmaster_identity: u64::from_be_bytes([
                            data[19], data[20], data[21], data[22], data[23], data[24], data[25],
                            data[26],
                        ]),
                        steps_removed: u16::from_be_bytes([data[27], data[28]]),
                        time_source: TimeSource(data[29]),
                        certificate,
                    },
                    rest,
                ))
            }
            PtpMessageType::Signaling | PtpMessageType::Management => {
                Err(PtpError::UnknownMessageType(kind as u8))
            }
        }
    }

    /// Serialize the body. Blob bytes, when present, go last.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Sync { origin_timestamp } | Self::DelayReq { origin_timestamp } => {
                origin_timestamp.encode().to_vec()
            }
            Self::PDelayReq {
                origin_timestamp,
                reserved,
            } => {
                let mut buf = Vec::with_capacity(Self::PDELAY_REQ_BODY_SIZE);
                buf.extend_from_slice(&origin_timestamp.encode());
                buf.extend_from_slice(reserved);
                buf
            }
            Self::FollowUp {
                precise_origin_timestamp,
                signature,
            } => {
                let blob_len = signature.as_ref().map_or(0, Signature::len);
                let mut buf = Vec::with_capacity(Self::TIMESTAMP_BODY_SIZE + blob_len);
                buf.extend_from_slice(&precise_origin_timestamp.encode());
                if let Some(signature) = signature {
                    buf.extend_from_slice(signature.as_bytes());
                }
                buf
            }
            Self::DelayResp {
                receive_timestamp: ts,
                requesting_clock_identity,
                requesting_port_identity,
            }
            | Self::PDelayResp {
                receive_receipt_timestamp: ts,
                requesting_clock_identity,
                requesting_port_identity,
            }
            | Self::PDelayRespFollowUp {
                response_origin_timestamp: ts,
                requesting_clock_identity,
                requesting_port_identity,
            } => {
                let mut buf = Vec::with_capacity(Self::RESP_BODY_SIZE);
                buf.extend_from_slice(&ts.encode());
                buf.extend_from_slice(&requesting_clock_identity.to_be_bytes());
                buf.extend_from_slice(&requesting_port_identity.to_be_bytes());
                buf
            }
            Self::Announce {
                origin_timestamp,
                current_utc_offset,
                reserved,
                priority1,
                clock_quality,
                priority2,
                grandmaster_identity,
                steps_removed,
                time_source,
                certificate,
            } => {
                let blob_len = certificate.as_ref().map_or(0, Certificate::len);
                let mut buf = Vec::with_capacity(Self::ANNOUNCE_BODY_SIZE + blob_len);
                buf.extend_from_slice(&origin_timestamp.encode());
                buf.extend_from_slice(&current_utc_offset.to_be_bytes());
                buf.push(*reserved);
                buf.push(*priority1);
                buf.extend_from_slice(&clock_quality.to_be_bytes());
                buf.push(*priority2);
                buf.extend_from_slice(&grandmaster_identity.to_be_bytes());
                buf.extend_from_slice(&steps_removed.to_be_bytes());
                buf.push(time_source.0);
                if let Some(certificate) = certificate {
                    buf.extend_from_slice(certificate.as_bytes());
                }
                buf
            }
            Self::Opaque { data } => data.to_vec(),
        }
    }

    /// (messageType, controlField) derived from the variant.
    ///
    /// The `Opaque` arm is the documented fallback: warn and default to
    /// Sync with control 0x05.
    fn derived_wire_type(&self) -> (PtpMessageType, u8) {
        match self {
            Self::Sync { .. } => (PtpMessageType::Sync, 0x00),
            Self::DelayReq { .. } => (PtpMessageType::DelayReq, 0x01),
            Self::PDelayReq { .. } => (PtpMessageType::PDelayReq, 0x05),
            Self::PDelayResp { .. } => (PtpMessageType::PDelayResp, 0x05),
            Self::FollowUp { .. } => (PtpMessageType::FollowUp, 0x02),
            Self::DelayResp { .. } => (PtpMessageType::DelayResp, 0x03),
            Self::PDelayRespFollowUp { .. } => (PtpMessageType::PDelayRespFollowUp, 0x05),
            Self::Announce { .. } => (PtpMessageType::Announce, 0x05),
            Self::Opaque { .. } => {
                tracing::warn!("cannot derive messageType from the payload, defaulting to Sync (0x00)");
                (PtpMessageType::Sync, 0x05)
            }
        }
    }

    /// The blob field, for the two gated variants.
    ///
    /// `None` means the variant has no security field at all; `Some(bool)`
    /// reports whether the blob is populated.
    fn security_blob_presence(&self) -> Option<bool> {
        match self {
            Self::FollowUp { signature, .. } => Some(signature.is_some()),
            Self::Announce { certificate, .. } => Some(certificate.is_some()),
            _ => None,
        }
    }

    fn decode_timestamp(data: &[u8], needed: usize) -> Result<PtpTimestamp, PtpError> {
        if data.len() < needed {
            return Err(PtpError::TruncatedInput {
                needed,
                have: data.len(),
            });
        }
        PtpTimestamp::decode(data).ok_or(PtpError::TruncatedInput {
            needed,
            have: data.len(),
        })
    }

    fn decode_resp_fields(data: &[u8]) -> Result<(PtpTimestamp, ClockIdentity, u16), PtpError> {
        let ts = Self::decode_timestamp(data, Self::RESP_BODY_SIZE)?;
        let identity = u64::from_be_bytes([
            data[10], data[11], data[12], data[13], data[14], data[15], data[16], data[17],
        ]);
        let port = u16::from_be_bytes([data[18], data[19]]);
        Ok((ts, identity, port))
    }
}

/// A PTP message: common header plus one payload variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PtpMessage {
    /// Message header.
    pub header: PtpHeader,
    /// Message payload.
    pub body: PtpMessageBody,
}

impl PtpMessage {
    /// Parse a complete PTP message.
    ///
    /// Returns the message and any trailing bytes the payload did not
    /// consume. With the SECURITY flag set, a gated payload's blob takes
    /// the whole remainder and the trailing slice is empty; with it clear,
    /// extra bytes stay in the trailing slice rather than being absorbed.
    ///
    /// # Errors
    /// [`PtpError::TruncatedInput`] for short input,
    /// [`PtpError::UnknownMessageType`] when the messageType nibble has no
    /// payload codec.
    pub fn decode(data: &[u8]) -> Result<(Self, &[u8]), PtpError> {
        let (header, rest) = PtpHeader::decode(data)?;
        let raw = header.message_type.unwrap_or(0);
        let kind = PtpMessageType::from_nibble(raw).ok_or(PtpError::UnknownMessageType(raw))?;
        let (body, trailing) = PtpMessageBody::decode(kind, rest, header.flags.security())?;
        Ok((Self { header, body }, trailing))
    }

    /// Encode to bytes: payload first, header around it, derived fields
    /// patched in place.
    ///
    /// When `header.message_length` is unset it becomes the total encoded
    /// length. When `header.message_type` is unset, the type nibble and the
    /// controlField byte are both derived from the payload variant; an
    /// `Opaque` payload falls back to Sync/0x05 with a non-fatal warning.
    ///
    /// # Errors
    /// [`PtpError::SecurityMismatch`] if the payload is a gated variant and
    /// blob presence disagrees with the header's SECURITY flag.
    pub fn encode(&self) -> Result<Vec<u8>, PtpError> {
        let flag_set = self.header.flags.security();
        if let Some(blob_present) = self.body.security_blob_presence() {
            if blob_present != flag_set {
                return Err(PtpError::SecurityMismatch {
                    flag_set,
                    blob_present,
                });
            }
        }

        let body_bytes = self.body.encode();
        let mut buf = Vec::with_capacity(PtpHeader::SIZE + body_bytes.len());
        buf.extend_from_slice(&self.header.encode());
        buf.extend_from_slice(&body_bytes);

        if self.header.message_length.is_none() {
            // Saturates if a blob pushes the message past 64 KiB.
            let total = u16::try_from(buf.len()).unwrap_or(u16::MAX);
            buf[PtpHeader::MESSAGE_LENGTH_OFFSET..PtpHeader::MESSAGE_LENGTH_OFFSET + 2]
                .copy_from_slice(&total.to_be_bytes());
        }
        if self.header.message_type.is_none() {
            let (kind, control) = self.body.derived_wire_type();
            buf[0] = (buf[0] & 0xF0) | (kind as u8);
            buf[PtpHeader::CONTROL_FIELD_OFFSET] = control;
        }
        Ok(buf)
    }

    /// Create a Sync message.
    #[must_use]
    pub fn sync(
        source: ClockIdentity,
        sequence_id: u16,
        origin_timestamp: PtpTimestamp,
    ) -> Self {
        Self {
            header: PtpHeader::new(source, sequence_id),
            body: PtpMessageBody::Sync { origin_timestamp },
        }
    }

    /// Create a Delay_Req message.
    #[must_use]
    pub fn delay_req(
        source: ClockIdentity,
        sequence_id: u16,
        origin_timestamp: PtpTimestamp,
    ) -> Self {
        Self {
            header: PtpHeader::new(source, sequence_id),
            body: PtpMessageBody::DelayReq { origin_timestamp },
        }
    }

    /// Create a PDelay_Req message.
    #[must_use]
    pub fn pdelay_req(
        source: ClockIdentity,
        sequence_id: u16,
        origin_timestamp: PtpTimestamp,
    ) -> Self {
        Self {
            header: PtpHeader::new(source, sequence_id),
            body: PtpMessageBody::PDelayReq {
                origin_timestamp,
                reserved: [0u8; 10],
            },
        }
    }

    /// Create a Follow_Up message.
    #[must_use]
    pub fn follow_up(
        source: ClockIdentity,
        sequence_id: u16,
        precise_origin_timestamp: PtpTimestamp,
    ) -> Self {
        Self {
            header: PtpHeader::new(source, sequence_id),
            body: PtpMessageBody::FollowUp {
                precise_origin_timestamp,
                signature: None,
            },
        }
    }

    /// Create a signed Follow_Up message.
    ///
    /// Sets the SECURITY flag and attaches the signature together, keeping
    /// the two consistent.
    #[must_use]
    pub fn follow_up_signed(
        source: ClockIdentity,
        sequence_id: u16,
        precise_origin_timestamp: PtpTimestamp,
        signature: Signature,
    ) -> Self {
        let mut header = PtpHeader::new(source, sequence_id);
        header.flags |= crate::header::PtpFlags::SECURITY;
        Self {
            header,
            body: PtpMessageBody::FollowUp {
                precise_origin_timestamp,
                signature: Some(signature),
            },
        }
    }

    /// Create a Delay_Resp message.
    #[must_use]
    pub fn delay_resp(
        source: ClockIdentity,
        sequence_id: u16,
        receive_timestamp: PtpTimestamp,
        requesting_clock_identity: ClockIdentity,
        requesting_port_identity: u16,
    ) -> Self {
        Self {
            header: PtpHeader::new(source, sequence_id),
            body: PtpMessageBody::DelayResp {
                receive_timestamp,
                requesting_clock_identity,
                requesting_port_identity,
            },
        }
    }

    /// Create a PDelay_Resp message.
    #[must_use]
    pub fn pdelay_resp(
        source: ClockIdentity,
        sequence_id: u16,
        receive_receipt_timestamp: PtpTimestamp,
        requesting_clock_identity: ClockIdentity,
        requesting_port_identity: u16,
    ) -> Self {
        Self {
            header: PtpHeader::new(source, sequence_id),
            body: PtpMessageBody::PDelayResp {
                receive_receipt_timestamp,
                requesting_clock_identity,
                requesting_port_identity,
            },
        }
    }

    /// Create a PDelay_Resp_Follow_Up message.
    #[must_use]
    pub fn pdelay_resp_follow_up(
        source: ClockIdentity,
        sequence_id: u16,
        response_origin_timestamp: PtpTimestamp,
        requesting_clock_identity: ClockIdentity,
        requesting_port_identity: u16,
    ) -> Self {
        Self {
            header: PtpHeader::new(source, sequence_id),
            body: PtpMessageBody::PDelayRespFollowUp {
                response_origin_timestamp,
                requesting_clock_identity,
                requesting_port_identity,
            },
        }
    }

    /// Create an Announce message with the standard defaults.
    #[must_use]
    pub fn announce(
        source: ClockIdentity,
        sequence_id: u16,
        origin_timestamp: PtpTimestamp,
        grandmaster_identity: ClockIdentity,
    ) -> Self {
        Self {
            header: PtpHeader::new(source, sequence_id),
            body: PtpMessageBody::Announce {
                origin_timestamp,
                current_utc_offset: 0,
                reserved: 0,
                priority1: DEFAULT_PRIORITY,
                clock_quality: DEFAULT_CLOCK_QUALITY,
                priority2: DEFAULT_PRIORITY,
                grandmaster_identity,
                steps_removed: 0,
                time_source: TimeSource::INTERNAL_OSCILLATOR,
                certificate: None,
            },
        }
    }

    /// Create an Announce message carrying a certificate.
    ///
    /// Sets the SECURITY flag and attaches the certificate together.
    #[must_use]
    pub fn announce_certified(
        source: ClockIdentity,
        sequence_id: u16,
        origin_timestamp: PtpTimestamp,
        grandmaster_identity: ClockIdentity,
        certificate: Certificate,
    ) -> Self {
        let mut message = Self::announce(source, sequence_id, origin_timestamp, grandmaster_identity);
        message.header.flags |= crate::header::PtpFlags::SECURITY;
        if let PtpMessageBody::Announce {
            certificate: slot, ..
        } = &mut message.body
        {
            *slot = Some(certificate);
        }
        message
    }
}
