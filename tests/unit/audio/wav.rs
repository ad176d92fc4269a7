use super::*;

#[test]
fn header_carries_rate_and_format() {
    let bytes = encode_wav_mono_i16(&[0.0, 0.5, -0.5, 1.0], 16_000).unwrap();
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(&bytes[8..12], b"WAVE");
    assert_eq!(bytes.len(), 44 + 4 * 2);

    let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.sample_rate, 16_000);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.bits_per_sample, 16);
}

#[test]
fn samples_are_clamped_and_quantized() {
    let bytes = encode_wav_mono_i16(&[2.0, -3.0, 0.5, f32::NAN], 8_000).unwrap();
    let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
    let got: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(got, vec![32767, -32767, 16383, 0]);
}

#[test]
fn empty_input_is_a_valid_header_only_file() {
    let bytes = encode_wav_mono_i16(&[], 16_000).unwrap();
    assert_eq!(bytes.len(), 44);
}
