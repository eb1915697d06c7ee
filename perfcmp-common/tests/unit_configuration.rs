use perfcmp_common::{Configuration, Deployment, Tracing, Transport};
use std::collections::HashSet;

#[test]
fn test_catalog_order_and_labels() {
    let expected = [
        ("cmp_grpc_zipkin_micro", "gRPC + Zipkin + Micro"),
        ("cmp_thrift_zipkin_micro", "Thrift + Zipkin + Micro"),
        ("cmp_grpc_nozipkin_micro", "gRPC + NoTrace + Micro"),
        ("cmp_thrift_nozipkin_micro", "Thrift + NoTrace + Micro"),
        ("cmp_grpc_zipkin_mono", "gRPC + Zipkin + Mono"),
        ("cmp_thrift_zipkin_mono", "Thrift + Zipkin + Mono"),
        ("cmp_grpc_nozipkin_mono", "gRPC + NoTrace + Mono"),
        ("cmp_thrift_nozipkin_mono", "Thrift + NoTrace + Mono"),
    ];
    assert_eq!(Configuration::ALL.len(), expected.len());
    for (config, (key, label)) in Configuration::ALL.iter().zip(expected) {
        assert_eq!(config.key(), key);
        assert_eq!(config.label(), label);
        assert_eq!(config.file_name(), format!("{key}.txt"));
    }
}

#[test]
fn test_catalog_covers_full_grid() {
    let distinct: HashSet<Configuration> = Configuration::ALL.iter().copied().collect();
    assert_eq!(distinct.len(), 8, "catalog must contain 8 distinct configurations");
}

#[test]
fn test_from_key_roundtrip() {
    for config in Configuration::ALL {
        let key = config.key();
        assert_eq!(Configuration::from_key(&key), Some(config), "from_key({key:?}) failed");
    }
}

#[test]
fn test_from_key_rejects_unknown() {
    assert!(Configuration::from_key("grpc_zipkin_micro").is_none());
    assert!(Configuration::from_key("cmp_http_zipkin_micro").is_none());
    assert!(Configuration::from_key("cmp_grpc_zipkin").is_none());
    assert!(Configuration::from_key("cmp_grpc_zipkin_micro_extra").is_none());
    assert!(Configuration::from_key("").is_none());
}

#[test]
fn test_descriptions() {
    let c = Configuration::new(Transport::Grpc, Tracing::Zipkin, Deployment::Micro);
    assert_eq!(c.description(), "Microservices with gRPC and Zipkin tracing");

    let c = Configuration::new(Transport::Thrift, Tracing::NoTrace, Deployment::Micro);
    assert_eq!(c.description(), "Microservices with Thrift, no tracing");

    let c = Configuration::new(Transport::Thrift, Tracing::NoTrace, Deployment::Mono);
    assert_eq!(c.description(), "Monolith with Thrift, no tracing");
}
