//! Transport demultiplexing.
//!
//! PTP messages arrive either directly in Ethernet frames (ethertype
//! 0x88F7) or in UDP datagrams on port 319 (event messages) or 320
//! (general messages). The mapping is fixed and stateless; the codec never
//! touches sockets or frames itself.

use crate::error::PtpError;
use crate::message::PtpMessage;

/// Ethertype for PTP over raw Ethernet.
pub const PTP_ETHERTYPE: u16 = 0x88F7;

/// UDP port for PTP event messages (Sync, Delay_Req, PDelay_Req/Resp).
pub const PTP_EVENT_PORT: u16 = 319;

/// UDP port for PTP general messages (Follow_Up, Delay_Resp, Announce).
pub const PTP_GENERAL_PORT: u16 = 320;

/// Outer framing context a byte buffer arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportContext {
    /// Direct Ethernet framing, identified by ethertype.
    Ethernet {
        /// Frame ethertype.
        ethertype: u16,
    },
    /// UDP framing, identified by destination port.
    Udp {
        /// Datagram destination port.
        destination_port: u16,
    },
}

impl TransportContext {
    /// Whether this context demultiplexes to the PTP layer.
    #[must_use]
    pub fn carries_ptp(self) -> bool {
        match self {
            Self::Ethernet { ethertype } => ethertype == PTP_ETHERTYPE,
            Self::Udp { destination_port } => {
                matches!(destination_port, PTP_EVENT_PORT | PTP_GENERAL_PORT)
            }
        }
    }
}

/// Decode `data` as a PTP message when `context` selects the PTP layer.
///
/// Returns `None` for contexts that do not carry PTP; otherwise the result
/// of [`PtpMessage::decode`], message plus unconsumed trailing bytes.
pub fn demux(
    context: TransportContext,
    data: &[u8],
) -> Option<Result<(PtpMessage, &[u8]), PtpError>> {
    context.carries_ptp().then(|| PtpMessage::decode(data))
}
