use super::*;

#[test]
fn audio_suffix_table_matches_widget_expectations() {
    assert_eq!(mime_for_name("a.wav", MediaKind::Audio), "audio/wav");
    assert_eq!(mime_for_name("a.mp3", MediaKind::Audio), "audio/mpeg");
    assert_eq!(mime_for_name("a.ogg", MediaKind::Audio), "audio/ogg");
    assert_eq!(mime_for_name("a.m4a", MediaKind::Audio), "audio/mp4");
    assert_eq!(mime_for_name("a.flac", MediaKind::Audio), "audio/flac");
    assert_eq!(mime_for_name("dir/a.webm", MediaKind::Audio), "audio/webm");
}

#[test]
fn unknown_or_missing_suffix_falls_back() {
    assert_eq!(mime_for_name("a.aiff", MediaKind::Audio), DEFAULT_AUDIO_MIME);
    assert_eq!(mime_for_name("noext", MediaKind::Audio), DEFAULT_AUDIO_MIME);
    assert_eq!(mime_for_name("a.bmp", MediaKind::Image), DEFAULT_IMAGE_MIME);
}

#[test]
fn suffix_lookup_ignores_case() {
    assert_eq!(mime_for_name("LOUD.MP3", MediaKind::Audio), "audio/mpeg");
    assert_eq!(mime_for_name("Cover.JPeG", MediaKind::Image), "image/jpeg");
}
