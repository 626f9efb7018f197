use crate::error::PtpError;
use crate::header::{PtpFlags, PtpHeader};

fn sample_header() -> PtpHeader {
    PtpHeader {
        transport_specific: 0x05,
        message_type: Some(0x09),
        reserved0: 0x0A,
        version: 2,
        message_length: Some(54),
        domain_number: 3,
        reserved1: 0x7F,
        flags: PtpFlags::TWO_STEP | PtpFlags::UNICAST,
        correction_field: -42,
        reserved2: 0xDEAD_BEEF,
        source_clock_identity: 0x0102_0304_0506_0708,
        port_identity: 9,
        sequence_id: 777,
        control_field: Some(0x03),
        log_message_interval: 0x7E,
    }
}

// ===== PtpFlags =====

#[test]
fn test_flags_security_bit_is_msb() {
    assert_eq!(PtpFlags::SECURITY.0, 0x8000);
}

#[test]
fn test_flags_bit_positions() {
    assert_eq!(PtpFlags::TWO_STEP.0, 1 << 9);
    assert_eq!(PtpFlags::UNICAST.0, 1 << 10);
    assert_eq!(PtpFlags::L1_61.0, 1);
    assert_eq!(PtpFlags::L1_59.0, 1 << 1);
    assert_eq!(PtpFlags::TIMESCALE.0, 1 << 3);
}

#[test]
fn test_flags_contains() {
    let flags = PtpFlags::SECURITY | PtpFlags::TWO_STEP;
    assert!(flags.contains(PtpFlags::SECURITY));
    assert!(flags.contains(PtpFlags::TWO_STEP));
    assert!(!flags.contains(PtpFlags::UNICAST));
    assert!(flags.security());
}

#[test]
fn test_flags_display_names() {
    let flags = PtpFlags::SECURITY | PtpFlags::TWO_STEP;
    assert_eq!(format!("{flags}"), "Security|Two Step");
}

#[test]
fn test_flags_display_empty() {
    assert_eq!(format!("{}", PtpFlags::NONE), "(none)");
}

// ===== Defaults =====

#[test]
fn test_new_defaults() {
    let header = PtpHeader::new(0xAABB, 5);
    assert_eq!(header.version, PtpHeader::PTP_VERSION_2);
    assert_eq!(header.port_identity, 1);
    assert_eq!(header.sequence_id, 5);
    assert_eq!(header.source_clock_identity, 0xAABB);
    assert!(header.message_type.is_none());
    assert!(header.message_length.is_none());
    assert!(header.control_field.is_none());
}

// ===== Encode / decode =====

#[test]
fn test_encode_size() {
    assert_eq!(sample_header().encode().len(), PtpHeader::SIZE);
}

#[test]
fn test_roundtrip_preserves_every_field() {
    let header = sample_header();
    let buf = header.encode();
    let (decoded, rest) = PtpHeader::decode(&buf).unwrap();
    assert_eq!(decoded, header);
    assert!(rest.is_empty());
}

#[test]
fn test_reserved_fields_roundtrip() {
    let header = sample_header();
    let buf = header.encode();
    let (decoded, _) = PtpHeader::decode(&buf).unwrap();
    assert_eq!(decoded.reserved0, 0x0A);
    assert_eq!(decoded.reserved1, 0x7F);
    assert_eq!(decoded.reserved2, 0xDEAD_BEEF);
}

#[test]
fn test_decode_returns_payload_remainder() {
    let mut data = sample_header().encode().to_vec();
    data.extend_from_slice(&[1, 2, 3, 4]);
    let (_, rest) = PtpHeader::decode(&data).unwrap();
    assert_eq!(rest, &[1, 2, 3, 4]);
}

#[test]
fn test_decode_truncated() {
    let buf = [0u8; 10];
    assert_eq!(
        PtpHeader::decode(&buf),
        Err(PtpError::TruncatedInput {
            needed: PtpHeader::SIZE,
            have: 10
        })
    );
}

#[test]
fn test_decode_accepts_any_message_type_nibble() {
    // Header decoding never rejects a nibble; that is payload dispatch's job.
    let mut buf = sample_header().encode();
    buf[0] = (buf[0] & 0xF0) | 0x0F;
    let (decoded, _) = PtpHeader::decode(&buf).unwrap();
    assert_eq!(decoded.message_type, Some(0x0F));
}

#[test]
fn test_encode_writes_unset_derived_fields_as_zero() {
    let header = PtpHeader::new(0, 0);
    let buf = header.encode();
    assert_eq!(buf[0] & 0x0F, 0); // messageType nibble
    assert_eq!(&buf[2..4], &[0, 0]); // messageLength
    assert_eq!(buf[32], 0); // controlField
}

#[test]
fn test_encode_masks_nibbles() {
    let mut header = sample_header();
    header.transport_specific = 0xFF;
    header.version = 0x12;
    let buf = header.encode();
    assert_eq!(buf[0] >> 4, 0x0F);
    assert_eq!(buf[1] & 0x0F, 0x02);
}

#[test]
fn test_correction_field_sign_roundtrip() {
    let mut header = sample_header();
    header.correction_field = -1;
    let (decoded, _) = PtpHeader::decode(&header.encode()).unwrap();
    assert_eq!(decoded.correction_field, -1);
}
