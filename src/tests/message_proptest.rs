use proptest::prelude::*;

use crate::header::{PtpFlags, PtpHeader};
use crate::message::{PtpMessage, PtpMessageBody};
use crate::timestamp::PtpTimestamp;

proptest! {
    #[test]
    fn test_decode_any_bytes_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        // Must return Ok or Err, never panic.
        let _ = PtpMessage::decode(&bytes);
    }

    #[test]
    fn test_header_roundtrip_within_field_widths(
        transport_specific in 0u8..16,
        reserved0 in 0u8..16,
        version in 0u8..16,
        domain_number in any::<u8>(),
        reserved1 in any::<u8>(),
        flags in any::<u16>(),
        correction_field in any::<i64>(),
        reserved2 in any::<u32>(),
        source_clock_identity in any::<u64>(),
        port_identity in any::<u16>(),
        sequence_id in any::<u16>(),
        control_field in any::<u8>(),
        log_message_interval in any::<u8>(),
    ) {
        let header = PtpHeader {
            transport_specific,
            message_type: Some(0x00),
            reserved0,
            version,
            message_length: Some(34),
            domain_number,
            reserved1,
            flags: PtpFlags(flags),
            correction_field,
            reserved2,
            source_clock_identity,
            port_identity,
            sequence_id,
            control_field: Some(control_field),
            log_message_interval,
        };
        let buf = header.encode();
        let (decoded, rest) = PtpHeader::decode(&buf).expect("Decode failed");
        prop_assert_eq!(decoded, header);
        prop_assert!(rest.is_empty());
    }

    #[test]
    fn test_timestamp_add_sub_roundtrip(
        a_secs in 0u64..(1 << 47),
        a_nanos in 0u32..1_000_000_000,
        b_secs in 0u64..(1 << 47),
        b_nanos in 0u32..1_000_000_000,
    ) {
        let a = PtpTimestamp::new(a_secs, a_nanos);
        let b = PtpTimestamp::new(b_secs, b_nanos);
        let back = (a + b) - b;
        prop_assert_eq!(back, a);
    }

    #[test]
    fn test_timestamp_sub_stays_normalized(
        a_secs in 0u64..(1 << 48),
        a_nanos in 0u32..1_000_000_000,
        b_secs in 0u64..(1 << 48),
        b_nanos in 0u32..1_000_000_000,
    ) {
        let diff = PtpTimestamp::new(a_secs, a_nanos) - PtpTimestamp::new(b_secs, b_nanos);
        prop_assert!(diff.nanoseconds < PtpTimestamp::NANOS_PER_SEC);
    }

    #[test]
    fn test_delay_resp_roundtrip_any_fields(
        source in any::<u64>(),
        sequence_id in any::<u16>(),
        secs in 0u64..(1 << 48),
        nanos in 0u32..1_000_000_000,
        requesting_clock in any::<u64>(),
        requesting_port in any::<u16>(),
    ) {
        let ts = PtpTimestamp::new(secs, nanos);
        let msg = PtpMessage::delay_resp(source, sequence_id, ts, requesting_clock, requesting_port);
        let encoded = msg.encode().expect("Encode failed");
        let (decoded, trailing) = PtpMessage::decode(&encoded).expect("Decode failed");

        prop_assert!(trailing.is_empty());
        prop_assert_eq!(decoded.header.source_clock_identity, source);
        prop_assert_eq!(decoded.header.sequence_id, sequence_id);
        prop_assert_eq!(decoded.header.message_type, Some(0x09));
        prop_assert_eq!(decoded.header.control_field, Some(0x03));
        match decoded.body {
            PtpMessageBody::DelayResp {
                receive_timestamp,
                requesting_clock_identity,
                requesting_port_identity,
            } => {
                prop_assert_eq!(receive_timestamp, ts);
                prop_assert_eq!(requesting_clock_identity, requesting_clock);
                prop_assert_eq!(requesting_port_identity, requesting_port);
            }
            _ => prop_assert!(false, "Expected DelayResp body"),
        }
    }

    #[test]
    fn test_announce_roundtrip_any_fields(
        secs in 0u64..(1 << 48),
        nanos in 0u32..1_000_000_000,
        current_utc_offset in any::<u16>(),
        reserved in any::<u8>(),
        priority1 in any::<u8>(),
        clock_quality in any::<u32>(),
        priority2 in any::<u8>(),
        grandmaster_identity in any::<u64>(),
        steps_removed in any::<u16>(),
        time_source in any::<u8>(),
    ) {
        let body = PtpMessageBody::Announce {
            origin_timestamp: PtpTimestamp::new(secs, nanos),
            current_utc_offset,
            reserved,
            priority1,
            clock_quality,
            priority2,
            grandmaster_identity,
            steps_removed,
            time_source: crate::message::TimeSource(time_source),
            certificate: None,
        };
        let msg = PtpMessage { header: PtpHeader::new(0, 0), body: body.clone() };
        let encoded = msg.encode().expect("Encode failed");
        let (decoded, _) = PtpMessage::decode(&encoded).expect("Decode failed");
        prop_assert_eq!(decoded.body, body);
    }
}
