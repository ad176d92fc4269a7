use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WidgetError::invalid_source("x")
            .to_string()
            .contains("invalid source:")
    );
    assert!(
        WidgetError::SourceNotFound(PathBuf::from("missing.wav"))
            .to_string()
            .contains("source not found: 'missing.wav'")
    );
    assert!(
        WidgetError::download("http://a/b.wav", "status 404")
            .to_string()
            .contains("download error: 'http://a/b.wav': status 404")
    );
    assert!(
        WidgetError::unsupported("x")
            .to_string()
            .contains("unsupported type:")
    );
    assert!(
        WidgetError::UnknownPlugin("karaoke".to_string())
            .to_string()
            .contains("unknown plugin: 'karaoke'")
    );
    assert!(
        WidgetError::malformed_region(2, "missing start")
            .to_string()
            .contains("malformed region at index 2:")
    );
    assert!(
        WidgetError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WidgetError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: WidgetError = serde_json::from_str::<u32>("\"nope\"").unwrap_err().into();
    assert!(matches!(err, WidgetError::Serde(_)));
}
