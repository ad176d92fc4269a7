use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::audio::serve::{HostSession, StaticSession};

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

#[derive(Default)]
struct FakeFetch {
    calls: AtomicUsize,
    body: Vec<u8>,
    fail: bool,
}

impl HttpFetch for FakeFetch {
    fn fetch(&self, url: &str) -> WidgetResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(WidgetError::download(url, "status 404 Not Found"))
        } else {
            Ok(self.body.clone())
        }
    }
}

#[derive(Default)]
struct FakeMedia {
    registered: Mutex<Vec<(usize, String, Option<String>)>>,
}

impl MediaStore for FakeMedia {
    fn register(&self, bytes: &[u8], mime: &str, name_hint: Option<&str>) -> WidgetResult<String> {
        let mut reg = self.registered.lock().unwrap();
        reg.push((bytes.len(), mime.to_string(), name_hint.map(str::to_string)));
        Ok(format!("/media/{}.bin", reg.len()))
    }
}

struct NoSession;

impl SessionLocator for NoSession {
    fn current_session(&self) -> Option<HostSession> {
        None
    }
}

fn inline_with(fetch: Arc<FakeFetch>) -> AudioResolver {
    AudioResolver::new().with_fetcher(fetch)
}

#[test]
fn local_files_inline_with_suffix_mime_and_exact_bytes() {
    let tmp = temp_dir("resolve_local");
    std::fs::create_dir_all(&tmp).unwrap();
    let payload: Vec<u8> = (0..=255u8).cycle().take(1000).collect();

    for (name, mime) in [
        ("a.wav", "audio/wav"),
        ("b.mp3", "audio/mpeg"),
        ("c.ogg", "audio/ogg"),
        ("d.m4a", "audio/mp4"),
        ("e.flac", "audio/flac"),
        ("f.webm", "audio/webm"),
        ("g.unknown", "audio/wav"),
    ] {
        let path = tmp.join(name);
        std::fs::write(&path, &payload).unwrap();

        let resolver = AudioResolver::new();
        let out = resolver
            .resolve(Some(AudioSource::from(path.to_str().unwrap())))
            .unwrap();
        assert!(out.as_str().starts_with(&format!("data:{mime};base64,")));
        let (got_mime, bytes) = out.decode_data_uri().unwrap();
        assert_eq!(got_mime, mime);
        assert_eq!(bytes, payload);

        let via_path = resolver.resolve(Some(AudioSource::from(path))).unwrap();
        assert_eq!(via_path, out);
    }

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn missing_paths_fail_without_network() {
    let fetch = Arc::new(FakeFetch::default());
    let resolver = inline_with(fetch.clone());

    let err = resolver
        .resolve(Some(AudioSource::from("/definitely/not/here.wav")))
        .unwrap_err();
    assert!(matches!(err, WidgetError::SourceNotFound(ref p) if p.ends_with("here.wav")));

    let err = resolver
        .resolve(Some(AudioSource::from(PathBuf::from("nope/also-missing.mp3"))))
        .unwrap_err();
    assert!(matches!(err, WidgetError::SourceNotFound(_)));

    assert_eq!(fetch.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn absent_source_is_invalid() {
    let err = AudioResolver::new().resolve(None).unwrap_err();
    assert!(matches!(err, WidgetError::InvalidSource(_)));
}

#[test]
fn data_uris_pass_through_unchanged() {
    let fetch = Arc::new(FakeFetch::default());
    let uri = "data:audio/ogg;base64,T2dnUw==";
    let out = inline_with(fetch.clone())
        .resolve(Some(AudioSource::from(uri)))
        .unwrap();
    assert_eq!(out.as_str(), uri);
    assert_eq!(fetch.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn urls_are_downloaded_and_always_labelled_wav() {
    // The response could be mp3; the envelope still says audio/wav.
    let fetch = Arc::new(FakeFetch {
        body: b"ID3\x03fake-mp3".to_vec(),
        ..Default::default()
    });
    let out = inline_with(fetch.clone())
        .resolve(Some(AudioSource::from("https://example.com/song.mp3")))
        .unwrap();
    assert!(out.as_str().starts_with("data:audio/wav;base64,"));
    assert_eq!(out.decode_data_uri().unwrap().1, b"ID3\x03fake-mp3");
    assert_eq!(fetch.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn download_failures_surface_as_errors() {
    let fetch = Arc::new(FakeFetch {
        fail: true,
        ..Default::default()
    });
    let err = inline_with(fetch)
        .resolve(Some(AudioSource::from("http://example.com/missing.wav")))
        .unwrap_err();
    assert!(matches!(err, WidgetError::Download { .. }));
}

#[test]
fn samples_encode_at_fixed_rate() {
    let out = AudioResolver::new()
        .resolve(Some(AudioSource::from(vec![0.0f32, 0.25, -0.25])))
        .unwrap();
    let (mime, bytes) = out.decode_data_uri().unwrap();
    assert_eq!(mime, "audio/wav");
    let reader = hound::WavReader::new(std::io::Cursor::new(bytes)).unwrap();
    assert_eq!(reader.spec().sample_rate, 16_000);
    assert_eq!(reader.len(), 3);
}

#[test]
fn bytes_and_streams_use_file_name_for_mime() {
    let resolver = AudioResolver::new();

    let out = resolver
        .resolve(Some(AudioSource::bytes(b"flac".to_vec(), Some("x.flac"))))
        .unwrap();
    assert_eq!(out.decode_data_uri().unwrap().0, "audio/flac");

    let out = resolver
        .resolve(Some(AudioSource::from(b"raw".to_vec())))
        .unwrap();
    assert_eq!(out.decode_data_uri().unwrap(), ("audio/wav", b"raw".to_vec()));

    let out = resolver
        .resolve(Some(AudioSource::stream(
            std::io::Cursor::new(b"oggdata".to_vec()),
            Some("take.ogg"),
        )))
        .unwrap();
    assert_eq!(
        out.decode_data_uri().unwrap(),
        ("audio/ogg", b"oggdata".to_vec())
    );
}

#[test]
fn served_mode_registers_media_and_builds_origin_url() {
    let tmp = temp_dir("resolve_served");
    std::fs::create_dir_all(&tmp).unwrap();
    let path = tmp.join("clip.mp3");
    std::fs::write(&path, b"mp3bytes").unwrap();

    let media = Arc::new(FakeMedia::default());
    let fetch = Arc::new(FakeFetch::default());
    let resolver = inline_with(fetch.clone()).with_mode(ResolveMode::Served {
        session: Arc::new(StaticSession(HostSession::new("https", "dash.example.com"))),
        media: media.clone(),
    });

    let out = resolver.resolve(Some(AudioSource::from(path))).unwrap();
    assert_eq!(out.as_str(), "https://dash.example.com/media/1.bin");
    {
        let reg = media.registered.lock().unwrap();
        assert_eq!(
            reg[0],
            (8, "audio/mpeg".to_string(), Some("clip.mp3".to_string()))
        );
    }

    let url = "https://cdn.example.com/a.wav";
    let out = resolver.resolve(Some(AudioSource::from(url))).unwrap();
    assert_eq!(out.as_str(), url);
    assert_eq!(fetch.calls.load(Ordering::SeqCst), 0);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn served_mode_without_session_fails() {
    let resolver = AudioResolver::new().with_mode(ResolveMode::Served {
        session: Arc::new(NoSession),
        media: Arc::new(FakeMedia::default()),
    });
    let err = resolver
        .resolve(Some(AudioSource::from(vec![0.0f32; 4])))
        .unwrap_err();
    assert!(matches!(err, WidgetError::NoActiveSession));
}

#[test]
fn dev_server_mode_points_at_file_name() {
    let tmp = temp_dir("resolve_dev");
    std::fs::create_dir_all(&tmp).unwrap();
    let path = tmp.join("because.mp3");
    std::fs::write(&path, b"x").unwrap();

    let resolver = AudioResolver::new().with_mode(ResolveMode::DevServer {
        base_url: "http://localhost:8000/".to_string(),
    });
    let out = resolver.resolve(Some(AudioSource::from(path))).unwrap();
    assert_eq!(out.as_str(), "http://localhost:8000/because.mp3");

    let out = resolver
        .resolve(Some(AudioSource::bytes(b"abc".to_vec(), None)))
        .unwrap();
    assert!(out.is_data_uri());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn images_use_image_table_and_reject_samples() {
    let resolver = AudioResolver::new();
    let out = resolver
        .resolve_image(Some(AudioSource::bytes(b"\x89PNG".to_vec(), Some("wave.png"))))
        .unwrap();
    assert!(out.starts_with("data:image/png;base64,"));

    let out = resolver
        .resolve_image(Some(AudioSource::bytes(b"jpg".to_vec(), Some("cover.jpg"))))
        .unwrap();
    assert!(out.starts_with("data:image/jpeg;base64,"));

    let err = resolver
        .resolve_image(Some(AudioSource::from(vec![0.0f32])))
        .unwrap_err();
    assert!(matches!(err, WidgetError::UnsupportedType(_)));
}

#[test]
fn memoized_resolver_reuses_results() {
    let tmp = temp_dir("resolve_memo");
    std::fs::create_dir_all(&tmp).unwrap();
    let path = tmp.join("a.wav");
    std::fs::write(&path, b"first").unwrap();

    let memo = MemoizedResolver::new(AudioResolver::new());
    let first = memo.resolve(Some(AudioSource::from(path.clone()))).unwrap();
    std::fs::write(&path, b"second").unwrap();
    let again = memo.resolve(Some(AudioSource::from(path.clone()))).unwrap();
    assert_eq!(first, again);
    assert_eq!(memo.len(), 1);

    let plain = AudioResolver::new()
        .resolve(Some(AudioSource::from(path)))
        .unwrap();
    assert_ne!(plain, first);

    memo.resolve(Some(AudioSource::stream(std::io::Cursor::new(vec![1u8]), None)))
        .unwrap();
    assert_eq!(memo.len(), 1);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn memoized_resolver_does_not_cache_failures() {
    let memo = MemoizedResolver::new(AudioResolver::new());
    assert!(memo.resolve(Some(AudioSource::from("missing.wav"))).is_err());
    assert!(memo.is_empty());
}

#[test]
fn host_session_joins_paths() {
    let s = HostSession::new("http", "localhost:8501/");
    assert_eq!(s.url_for("/media/a.wav"), "http://localhost:8501/media/a.wav");
    assert_eq!(s.url_for("media/a.wav"), "http://localhost:8501/media/a.wav");
    assert_eq!(
        HostSession::new("https://", "h").url_for("/x"),
        "https://h/x"
    );
}
