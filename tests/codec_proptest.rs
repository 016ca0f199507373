//! Property-based tests for the codec round-trip laws.
//!
//! Three laws hold by construction and are pinned here:
//! - full names: decompose(compose(n, t, d)) == (n, t, d) for arbitrary
//!   instance bytes and well-formed type/domain,
//! - text records: decode(encode(m)) == m for maps with valid keys and
//!   entries within the length limit,
//! - record data: decode(type, encode(v)) == v for every structured variant.

use std::net::Ipv4Addr;
use std::net::Ipv6Addr;

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

use dnssd_codec::RecordData;
use dnssd_codec::ServiceName;
use dnssd_codec::TextRecord;

/// Arbitrary instance-name bytes, including dots, spaces, and control bytes.
fn arbitrary_instance() -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), 1..48)
}

/// Well-formed two-label service types such as `_http._tcp`.
fn arbitrary_service_type() -> impl Strategy<Value = String> {
    "_[a-z][a-z0-9-]{0,12}\\._(tcp|udp)"
}

/// Well-formed escaped domains with a trailing dot, one to four labels.
fn arbitrary_domain() -> impl Strategy<Value = String> {
    "([a-z][a-z0-9-]{0,10}\\.){1,4}"
}

/// TXT keys: non-empty bytes free of `=`, small enough that any entry fits
/// the 255-byte limit together with the values below.
fn arbitrary_txt_key() -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>().prop_filter("no separator", |b| *b != b'='), 1..30)
}

/// Optional TXT values; `None` is a key-only flag.
fn arbitrary_txt_value() -> impl Strategy<Value = Option<Vec<u8>>> {
    option::of(vec(any::<u8>(), 0..100))
}

/// Domain names in presentation form, as the record decoder produces them.
fn arbitrary_target_name() -> impl Strategy<Value = String> {
    "([a-z][a-z0-9-]{0,14}\\.){1,4}"
}

proptest! {
    #[test]
    fn full_name_round_trips(
        instance in arbitrary_instance(),
        service_type in arbitrary_service_type(),
        domain in arbitrary_domain(),
    ) {
        let name = ServiceName::new(instance, service_type, domain);
        let composed = name.to_string();
        let parsed = ServiceName::parse(&composed).unwrap();
        prop_assert_eq!(parsed, name);
    }

    #[test]
    fn full_name_compose_is_stable(
        instance in arbitrary_instance(),
        service_type in arbitrary_service_type(),
        domain in arbitrary_domain(),
    ) {
        // Composing, parsing, and composing again must not drift.
        let composed = ServiceName::new(instance, service_type, domain).to_string();
        let recomposed = ServiceName::parse(&composed).unwrap().to_string();
        prop_assert_eq!(recomposed, composed);
    }

    #[test]
    fn text_record_round_trips(
        entries in vec((arbitrary_txt_key(), arbitrary_txt_value()), 0..12),
    ) {
        let txt: TextRecord = entries.into_iter().collect();
        let bytes = txt.encode().unwrap();
        prop_assert_eq!(TextRecord::decode(&bytes).unwrap(), txt);
    }

    #[test]
    fn text_record_encode_is_deterministic(
        entries in vec((arbitrary_txt_key(), arbitrary_txt_value()), 0..12),
    ) {
        let forward: TextRecord = entries.into_iter().collect();
        let reversed: TextRecord = forward.clone().into_iter().rev().collect();
        // Same contents in any insertion order, same bytes.
        prop_assert_eq!(forward.encode().unwrap(), reversed.encode().unwrap());
    }

    #[test]
    fn a_record_round_trips(octets in any::<[u8; 4]>()) {
        let data = RecordData::a(Ipv4Addr::from(octets));
        let bytes = data.encode().unwrap();
        prop_assert_eq!(RecordData::decode(data.record_type(), &bytes).unwrap(), data);
    }

    #[test]
    fn aaaa_record_round_trips(octets in any::<[u8; 16]>()) {
        let data = RecordData::aaaa(Ipv6Addr::from(octets));
        let bytes = data.encode().unwrap();
        prop_assert_eq!(RecordData::decode(data.record_type(), &bytes).unwrap(), data);
    }

    #[test]
    fn ptr_record_round_trips(target in arbitrary_target_name()) {
        let data = RecordData::ptr(target);
        let bytes = data.encode().unwrap();
        prop_assert_eq!(RecordData::decode(data.record_type(), &bytes).unwrap(), data);
    }

    #[test]
    fn mx_record_round_trips(
        preference in any::<u16>(),
        exchange in arbitrary_target_name(),
    ) {
        let data = RecordData::mx(preference, exchange);
        let bytes = data.encode().unwrap();
        prop_assert_eq!(RecordData::decode(data.record_type(), &bytes).unwrap(), data);
    }

    #[test]
    fn srv_record_round_trips(
        priority in any::<u16>(),
        weight in any::<u16>(),
        port in any::<u16>(),
        target in arbitrary_target_name(),
    ) {
        let data = RecordData::srv(priority, weight, port, target);
        let bytes = data.encode().unwrap();
        prop_assert_eq!(RecordData::decode(data.record_type(), &bytes).unwrap(), data);
    }

    #[test]
    fn soa_record_round_trips(
        mname in arbitrary_target_name(),
        rname in arbitrary_target_name(),
        values in any::<[u32; 5]>(),
    ) {
        let data = RecordData::soa(
            mname, rname, values[0], values[1], values[2], values[3], values[4],
        );
        let bytes = data.encode().unwrap();
        prop_assert_eq!(RecordData::decode(data.record_type(), &bytes).unwrap(), data);
    }

    #[test]
    fn txt_record_data_round_trips(
        strings in vec(vec(any::<u8>(), 0..64), 0..8),
    ) {
        let data = RecordData::txt(strings);
        let bytes = data.encode().unwrap();
        prop_assert_eq!(RecordData::decode(data.record_type(), &bytes).unwrap(), data);
    }

    #[test]
    fn truncated_text_record_never_panics(bytes in vec(any::<u8>(), 0..64)) {
        // Arbitrary bytes must decode cleanly or fail with a typed error.
        let _ = TextRecord::decode(&bytes);
    }

    #[test]
    fn arbitrary_rdata_never_panics(
        code in any::<u16>(),
        bytes in vec(any::<u8>(), 0..64),
    ) {
        let record_type = dnssd_codec::RecordType::from_code(code);
        let _ = RecordData::decode(record_type, &bytes);
    }
}
