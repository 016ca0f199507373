//! Wire-format vectors for the record codecs.
//!
//! The byte blobs here are the canonical fixtures for each record shape:
//! known addresses, a known label sequence, and the composite MX/SOA/SRV/TXT
//! layouts built from them. Each vector is checked in both directions.

use std::net::IpAddr;

use dnssd_codec::reply::QueryRecord;
use dnssd_codec::CodecError;
use dnssd_codec::Interface;
use dnssd_codec::RecordData;
use dnssd_codec::RecordType;
use dnssd_codec::ServiceName;

const IPV4: &[u8] = &[0xC0, 0x00, 0x02, 0x01];
const IPV6: &[u8] = &[
    0x20, 0x01, 0x0D, 0xB8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x01,
];
const NOWHERE: &[u8] = b"\x07nowhere\x07example\x00";
const FULLNAME: &str = "blackjack._blackjack._tcp.test.";

fn qr(record_type: u16, rdata: &[u8]) -> QueryRecord {
    QueryRecord::new(0, Interface::Any, FULLNAME, record_type, 1, rdata, 120).unwrap()
}

#[test]
fn a_record_data() {
    let reply = qr(1, IPV4);
    assert_eq!(reply.data, RecordData::A("192.0.2.1".parse().unwrap()));
}

#[test]
fn aaaa_record_data() {
    let reply = qr(28, IPV6);
    assert_eq!(reply.data, RecordData::Aaaa("2001:db8::1".parse().unwrap()));
}

#[test]
fn cname_record_data() {
    let reply = qr(5, NOWHERE);
    assert_eq!(reply.data, RecordData::cname("nowhere.example."));
}

#[test]
fn ns_record_data() {
    let reply = qr(2, NOWHERE);
    assert_eq!(reply.data, RecordData::ns("nowhere.example."));
}

#[test]
fn ptr_record_data() {
    let reply = qr(12, NOWHERE);
    assert_eq!(reply.data, RecordData::ptr("nowhere.example."));
}

#[test]
fn mx_record_data() {
    let mut data = vec![0x00, 0x08];
    data.extend_from_slice(NOWHERE);
    let reply = qr(15, &data);
    assert_eq!(reply.data, RecordData::mx(8, "nowhere.example."));
}

#[test]
fn soa_record_data() {
    let serial = 1u32;
    let refresh = 86_400u32;
    let retry = 3_600u32;
    let expire = 86_400u32 * 2;
    let minimum = 3_600u32 * 12;

    let mut data = NOWHERE.to_vec();
    data.extend_from_slice(b"\x02me");
    data.extend_from_slice(NOWHERE);
    for value in [serial, refresh, retry, expire, minimum] {
        data.extend_from_slice(&value.to_be_bytes());
    }

    let reply = qr(6, &data);
    assert_eq!(
        reply.data,
        RecordData::soa(
            "nowhere.example.",
            "me.nowhere.example.",
            serial,
            refresh,
            retry,
            expire,
            minimum,
        )
    );
    assert_eq!(reply.data.encode().unwrap(), data);
}

#[test]
fn srv_record_data() {
    let mut data = Vec::new();
    for value in [1u16, 5, 1025] {
        data.extend_from_slice(&value.to_be_bytes());
    }
    data.extend_from_slice(NOWHERE);

    let reply = qr(33, &data);
    assert_eq!(reply.data, RecordData::srv(1, 5, 1025, "nowhere.example."));
    assert_eq!(reply.data.encode().unwrap(), data);
}

#[test]
fn txt_record_data() {
    let reply = qr(16, b"\x05Hello\x06World!");
    assert_eq!(reply.data, RecordData::txt(["Hello", "World!"]));
    assert_eq!(reply.data.encode().unwrap(), b"\x05Hello\x06World!");
}

#[test]
fn txt_record_keeps_raw_bytes() {
    // Character-strings carry bytes, not key=value pairs.
    let reply = qr(16, b"\x03a=b");
    assert_eq!(reply.data, RecordData::txt(["a=b"]));
}

#[test]
fn unknown_type_round_trips_raw() {
    let reply = qr(62347, &[0xDE, 0xAD, 0xBE, 0xEF]);
    assert_eq!(reply.record_type, RecordType::Other(62347));
    assert_eq!(
        reply.data,
        RecordData::Opaque {
            record_type: RecordType::Other(62347),
            data: vec![0xDE, 0xAD, 0xBE, 0xEF],
        }
    );
    assert!(matches!(
        reply.data.encode(),
        Err(CodecError::UnsupportedRecordType { .. })
    ));
}

#[test]
fn encode_a_from_parsed_address() {
    let addr: IpAddr = "192.0.2.1".parse().unwrap();
    let data = RecordData::address(RecordType::A, addr).unwrap();
    assert_eq!(data.encode().unwrap(), IPV4);
}

#[test]
fn encode_aaaa_from_parsed_address() {
    let addr: IpAddr = "2001:db8::1".parse().unwrap();
    let data = RecordData::address(RecordType::AAAA, addr).unwrap();
    assert_eq!(data.encode().unwrap(), IPV6);
}

#[test]
fn encode_a_rejects_ipv6_literal() {
    let addr: IpAddr = "2001:db8::1".parse().unwrap();
    assert!(matches!(
        RecordData::address(RecordType::A, addr),
        Err(CodecError::AddressFamily {
            record_type: RecordType::A,
            ..
        })
    ));
}

#[test]
fn encode_aaaa_rejects_ipv4_literal() {
    let addr: IpAddr = "192.0.2.1".parse().unwrap();
    assert!(matches!(
        RecordData::address(RecordType::AAAA, addr),
        Err(CodecError::AddressFamily {
            record_type: RecordType::AAAA,
            ..
        })
    ));
}

#[test]
fn root_only_name_decodes_to_dot() {
    let reply = qr(12, &[0x00]);
    assert_eq!(reply.data, RecordData::ptr("."));
}

#[test]
fn reply_owner_name_is_decomposed() {
    let reply = qr(16, b"\x00");
    assert_eq!(reply.service, ServiceName::new("blackjack", "_blackjack._tcp", "test."));
    assert_eq!(reply.full_name(), FULLNAME);
    assert_eq!(reply.service.service(), "blackjack");
    assert_eq!(reply.service.protocol(), "tcp");
}

#[test]
fn query_record_display_is_bind_like() {
    let mut data = vec![0x00, 0x01, 0x00, 0x05, 0x04, 0x01];
    data.extend_from_slice(NOWHERE);
    let reply = qr(33, &data);
    assert_eq!(
        reply.to_string(),
        "blackjack._blackjack._tcp.test. IN SRV 1 5 1025 nowhere.example."
    );
}
