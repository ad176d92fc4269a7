use super::*;
use serde_json::json;

#[test]
fn url_and_data_uri_classification() {
    assert!(is_http_url("http://example.com/a.mp3"));
    assert!(is_http_url("HTTPS://example.com/a.mp3"));
    assert!(!is_http_url("https://"));
    assert!(!is_http_url("ftp://example.com/a.mp3"));
    assert!(!is_http_url("/tmp/http.wav"));

    assert!(is_data_uri("data:audio/wav;base64,AAAA"));
    assert!(is_data_uri("DATA:audio/wav;base64,AAAA"));
    assert!(!is_data_uri("dat"));
}

#[test]
fn json_strings_and_number_arrays_are_accepted() {
    let s = AudioSource::try_from(json!("song.wav")).unwrap();
    assert!(matches!(s, AudioSource::Text(ref t) if t == "song.wav"));

    let s = AudioSource::try_from(json!([0.0, 0.5, -1])).unwrap();
    match s {
        AudioSource::Samples(v) => assert_eq!(v, vec![0.0, 0.5, -1.0]),
        other => panic!("expected samples, got {other:?}"),
    }
}

#[test]
fn other_json_shapes_are_unsupported() {
    for v in [json!(3), json!(true), json!({"path": "a.wav"}), json!(["a"])] {
        let err = AudioSource::try_from(v).unwrap_err();
        assert!(matches!(err, WidgetError::UnsupportedType(_)), "{err}");
    }
    let err = AudioSource::try_from(serde_json::Value::Null).unwrap_err();
    assert!(matches!(err, WidgetError::InvalidSource(_)));
}

#[test]
fn debug_does_not_dump_payloads() {
    let long = format!("data:audio/wav;base64,{}", "A".repeat(500));
    let dbg = format!("{:?}", AudioSource::from(long));
    assert!(dbg.len() < 120);

    let dbg = format!("{:?}", AudioSource::bytes(vec![0u8; 4096], Some("a.mp3")));
    assert!(dbg.contains("len: 4096"));
    assert!(dbg.contains("a.mp3"));
}
