use bytes::Bytes;

use crate::security::{Certificate, PublicKey, Signature};

#[test]
fn test_signature_from_vec() {
    let sig = Signature::new(vec![1, 2, 3]);
    assert_eq!(sig.as_bytes(), &[1, 2, 3]);
    assert_eq!(sig.len(), 3);
    assert!(!sig.is_empty());
}

#[test]
fn test_signature_from_slice() {
    let raw: &[u8] = &[0xAA, 0xBB];
    let sig = Signature::from(raw);
    assert_eq!(sig.as_bytes(), raw);
}

#[test]
fn test_signature_empty() {
    let sig = Signature::new(Bytes::new());
    assert!(sig.is_empty());
    assert_eq!(sig.len(), 0);
}

#[test]
fn test_public_key_holds_bytes() {
    let key = PublicKey::new(vec![0x04; 65]);
    assert_eq!(key.len(), 65);
    assert_eq!(key.as_bytes()[0], 0x04);
}

#[test]
fn test_certificate_equality() {
    let a = Certificate::new(vec![0x30, 0x82]);
    let b = Certificate::from(&[0x30, 0x82][..]);
    assert_eq!(a, b);
}

#[test]
fn test_certificate_clone_is_cheap_and_equal() {
    let cert = Certificate::new(vec![7; 1024]);
    let clone = cert.clone();
    assert_eq!(cert, clone);
}
