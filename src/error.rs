use thiserror::Error;

/// Errors from PTP message decoding and encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PtpError {
    /// Input ended before the current field or variant was complete.
    #[error("truncated input: need {needed} bytes, have {have}")]
    TruncatedInput {
        /// Minimum bytes needed.
        needed: usize,
        /// Bytes actually available.
        have: usize,
    },

    /// The header's messageType nibble has no registered payload codec.
    ///
    /// The header itself decodes fine; only the payload dispatch fails.
    #[error("no payload codec for message type 0x{0:02X}")]
    UnknownMessageType(u8),

    /// The SECURITY flag and security-blob presence disagree at encode time.
    #[error(
        "SECURITY flag and blob presence disagree (flag set: {flag_set}, blob present: {blob_present})"
    )]
    SecurityMismatch {
        /// Whether the header's SECURITY bit is set.
        flag_set: bool,
        /// Whether the payload carries a security blob.
        blob_present: bool,
    },
}
