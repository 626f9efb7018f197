//! # ptp-wire
//!
//! IEEE 1588 Precision Time Protocol message codec with a non-standard
//! security extension that carries signatures, public keys, and
//! certificates alongside selected message kinds.
//!
//! The crate is a pure wire codec: decode takes bytes and produces
//! immutable values, encode does the reverse. There is no transport, no
//! cryptography, and no clock servo here — signatures and certificates are
//! opaque byte blobs, and delivery belongs to whatever stack hands the
//! datagrams over.
//!
//! ## Example
//!
//! ```rust
//! use ptp_wire::{PtpMessage, PtpMessageType, PtpTimestamp};
//!
//! # fn example() -> Result<(), ptp_wire::PtpError> {
//! let ts = PtpTimestamp::new(1_600_000_000, 250_000_000);
//! let sync = PtpMessage::sync(0x001B_19FF_FE00_0001, 42, ts);
//!
//! let bytes = sync.encode()?;
//! let (decoded, trailing) = PtpMessage::decode(&bytes)?;
//! assert!(trailing.is_empty());
//! assert_eq!(decoded.header.message_type, Some(PtpMessageType::Sync as u8));
//! # Ok(())
//! # }
//! ```
//!
//! ## Security extension
//!
//! Follow_Up messages may carry a [`Signature`] and Announce messages a
//! [`Certificate`], gated by the header's SECURITY flag (bit 15). A blob
//! has no length prefix: it is the remainder of the message. Encoding
//! enforces that the flag and blob presence agree for those two variants.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod header;
pub mod message;
pub mod security;
pub mod timestamp;
pub mod transport;

#[cfg(test)]
mod tests;

// Re-exports for convenient access.
pub use error::PtpError;
pub use header::{ClockIdentity, PtpFlags, PtpHeader};
pub use message::{
    DEFAULT_CLOCK_QUALITY, DEFAULT_PRIORITY, PtpMessage, PtpMessageBody, PtpMessageType,
    TimeSource,
};
pub use security::{Certificate, PublicKey, Signature};
pub use timestamp::PtpTimestamp;
pub use transport::{
    PTP_ETHERTYPE, PTP_EVENT_PORT, PTP_GENERAL_PORT, TransportContext, demux,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
