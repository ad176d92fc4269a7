use std::io::Cursor;

use anyhow::Context;

use crate::foundation::error::WidgetResult;

/// Encode mono `f32` samples as a 16-bit PCM WAV file in memory.
///
/// Samples are clamped to `[-1, 1]` before quantization.
pub fn encode_wav_mono_i16(samples: &[f32], sample_rate: u32) -> WidgetResult<Vec<u8>> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut buf = Cursor::new(Vec::with_capacity(44 + samples.len() * 2));
    {
        let mut writer = hound::WavWriter::new(&mut buf, spec).context("create wav writer")?;
        for &sample in samples {
            let clamped = if sample.is_finite() {
                sample.clamp(-1.0, 1.0)
            } else {
                0.0
            };
            writer
                .write_sample((clamped * 32767.0) as i16)
                .context("write wav sample")?;
        }
        writer.finalize().context("finalize wav")?;
    }

    Ok(buf.into_inner())
}

#[cfg(test)]
#[path = "../../tests/unit/audio/wav.rs"]
mod tests;
