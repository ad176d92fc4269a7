use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "wavesurfer_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn release_defaults_on_and_requires_build_dir() {
    let tmp = temp_dir("config_missing_dist");
    std::fs::create_dir_all(&tmp).unwrap();

    let err = ComponentConfig::from_vars(None, None, &tmp).unwrap_err();
    assert!(matches!(err, WidgetError::Config(_)));
    assert!(err.to_string().contains("does not exist"));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn release_points_at_absolute_dist() {
    let tmp = temp_dir("config_dist");
    std::fs::create_dir_all(tmp.join("frontend").join("dist")).unwrap();

    let cfg = ComponentConfig::from_vars(Some("True"), None, &tmp).unwrap();
    assert!(cfg.is_release());
    assert_eq!(cfg.name, COMPONENT_NAME);
    match cfg.source {
        ComponentSource::BuildDir(p) => {
            assert!(p.is_absolute());
            assert!(p.ends_with("frontend/dist"));
        }
        other => panic!("expected build dir, got {other:?}"),
    }

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn anything_but_exact_true_selects_dev_url() {
    for flag in ["False", "true", "1", ""] {
        let cfg = ComponentConfig::from_vars(Some(flag), None, "/nonexistent").unwrap();
        assert_eq!(
            cfg.source,
            ComponentSource::DevUrl(DEFAULT_DEV_URL.to_string())
        );
    }

    let cfg =
        ComponentConfig::from_vars(Some("False"), Some("http://127.0.0.1:3001"), "/x").unwrap();
    assert_eq!(
        cfg.source,
        ComponentSource::DevUrl("http://127.0.0.1:3001".to_string())
    );
}

#[test]
fn resolver_defaults_keep_fixed_array_rate() {
    let cfg = ResolverConfig::default();
    assert_eq!(cfg.array_sample_rate, 16_000);
    assert_eq!(cfg.fetch_timeout, Some(Duration::from_secs(30)));
}
