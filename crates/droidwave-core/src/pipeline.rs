//! Stateless render pipeline.
//!
//! Composes the stages end to end: encode text to PCM, lift into the float
//! domain, apply the droid effect, splice personality chirps, then hand the
//! result to a playback sink or serialize it to WAV bytes. Every call is a
//! deterministic function of its inputs; nothing is cached between calls.

use crate::encoder::{Encoder, PlaybackSink};
use crate::error::DroidResult;
use crate::personality::mix_personality;
use crate::processor::DroidEffectProcessor;
use crate::settings::EffectSettings;
use crate::wav::WavResult;

/// A rendered float waveform plus the rate it was rendered at.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// Mono samples in [-1, 1] (scaled by the settings volume).
    pub samples: Vec<f64>,
    /// Sample rate in Hz, as chosen by the encoder.
    pub sample_rate: u32,
}

impl RenderResult {
    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Converts encoder PCM into the normalized float processing domain.
pub fn pcm16_to_samples(pcm: &[i16]) -> Vec<f64> {
    pcm.iter().map(|&s| f64::from(s) / 32768.0).collect()
}

/// Renders a message through the full effect pipeline.
///
/// Configuration is validated before the encoder is invoked, so an invalid
/// duty cycle or sample rate never reaches the collaborator. An encoder
/// producing an empty buffer short-circuits to an empty success.
///
/// # Errors
/// [`crate::DroidError::InvalidConfiguration`] for a zero encoder sample
/// rate or non-positive duty cycle; [`crate::DroidError::Encoding`] as
/// propagated from the collaborator.
pub fn render<E: Encoder + ?Sized>(
    encoder: &E,
    text: &str,
    settings: &EffectSettings,
) -> DroidResult<RenderResult> {
    let sample_rate = encoder.sample_rate();
    let processor = DroidEffectProcessor::new(*settings, sample_rate)?;

    let pcm = encoder.encode(text)?;
    if pcm.is_empty() {
        return Ok(RenderResult {
            samples: Vec::new(),
            sample_rate,
        });
    }

    let payload = processor.process(&pcm16_to_samples(&pcm));
    let samples = mix_personality(payload, settings, sample_rate);

    Ok(RenderResult {
        samples,
        sample_rate,
    })
}

/// Renders a message and serializes it to WAV bytes.
pub fn render_wav<E: Encoder + ?Sized>(
    encoder: &E,
    text: &str,
    settings: &EffectSettings,
) -> DroidResult<WavResult> {
    let rendered = render(encoder, text, settings)?;
    Ok(WavResult::from_mono(&rendered.samples, rendered.sample_rate))
}

/// Renders a message and hands it to a playback sink.
pub fn render_to_sink<E: Encoder + ?Sized, S: PlaybackSink + ?Sized>(
    encoder: &E,
    sink: &mut S,
    text: &str,
    settings: &EffectSettings,
) -> DroidResult<()> {
    let rendered = render(encoder, text, settings)?;
    sink.play(&rendered.samples, rendered.sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DroidError;

    /// Fixed-output encoder for exercising the pipeline in isolation.
    struct StubEncoder {
        sample_rate: u32,
        pcm: Vec<i16>,
    }

    impl Encoder for StubEncoder {
        fn sample_rate(&self) -> u32 {
            self.sample_rate
        }

        fn encode(&self, _text: &str) -> DroidResult<Vec<i16>> {
            Ok(self.pcm.clone())
        }
    }

    struct FailingEncoder;

    impl Encoder for FailingEncoder {
        fn sample_rate(&self) -> u32 {
            48000
        }

        fn encode(&self, _text: &str) -> DroidResult<Vec<i16>> {
            Err(DroidError::encoding("transport went away"))
        }
    }

    struct CapturingSink {
        samples: Vec<f64>,
        sample_rate: u32,
    }

    impl PlaybackSink for CapturingSink {
        fn play(&mut self, samples: &[f64], sample_rate: u32) -> DroidResult<()> {
            self.samples = samples.to_vec();
            self.sample_rate = sample_rate;
            Ok(())
        }
    }

    fn sine_pcm(num_samples: usize, sample_rate: f64) -> Vec<i16> {
        (0..num_samples)
            .map(|i| {
                let s = (std::f64::consts::TAU * 440.0 * i as f64 / sample_rate).sin();
                (s * 30000.0) as i16
            })
            .collect()
    }

    #[test]
    fn test_pcm16_to_samples_scale() {
        let samples = pcm16_to_samples(&[-32768, 0, 16384, 32767]);
        assert_eq!(samples[0], -1.0);
        assert_eq!(samples[1], 0.0);
        assert_eq!(samples[2], 0.5);
        assert!((samples[3] - 32767.0 / 32768.0).abs() < 1e-12);
    }

    #[test]
    fn test_render_preserves_length_without_personality() {
        let encoder = StubEncoder {
            sample_rate: 48000,
            pcm: sine_pcm(4800, 48000.0),
        };
        let rendered = render(&encoder, "ignored", &EffectSettings::default()).unwrap();
        assert_eq!(rendered.samples.len(), 4800);
        assert_eq!(rendered.sample_rate, 48000);
    }

    #[test]
    fn test_render_adds_personality_framing() {
        let encoder = StubEncoder {
            sample_rate: 48000,
            pcm: sine_pcm(4800, 48000.0),
        };
        let mut settings = EffectSettings::default();
        settings.add_personality = true;

        let rendered = render(&encoder, "ignored", &settings).unwrap();
        // intro 0.5 s + pause 0.1 s + payload 0.1 s + pause 0.1 s + outro 0.3 s
        assert_eq!(rendered.samples.len(), 24000 + 4800 + 4800 + 4800 + 14400);
        assert!((rendered.duration_seconds() - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_render_empty_pcm_short_circuits() {
        let encoder = StubEncoder {
            sample_rate: 48000,
            pcm: Vec::new(),
        };
        let mut settings = EffectSettings::default();
        settings.add_personality = true; // no framing around an empty payload

        let rendered = render(&encoder, "", &settings).unwrap();
        assert!(rendered.samples.is_empty());

        let wav = render_wav(&encoder, "", &settings).unwrap();
        assert_eq!(wav.num_samples, 0);
        assert_eq!(wav.wav_data.len(), 44);
    }

    #[test]
    fn test_invalid_settings_fail_before_encode() {
        // FailingEncoder errors on encode; an invalid duty cycle must win
        // because validation happens first.
        let mut settings = EffectSettings::default();
        settings.duty_cycle = 0.0;
        let err = render(&FailingEncoder, "x", &settings).unwrap_err();
        assert!(matches!(err, DroidError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_zero_sample_rate_rejected() {
        let encoder = StubEncoder {
            sample_rate: 0,
            pcm: vec![1, 2, 3],
        };
        let err = render(&encoder, "x", &EffectSettings::default()).unwrap_err();
        assert!(matches!(err, DroidError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_encoder_failure_propagates() {
        let err = render(&FailingEncoder, "x", &EffectSettings::default()).unwrap_err();
        assert!(matches!(err, DroidError::Encoding { .. }));
        assert!(err.to_string().contains("transport went away"));
    }

    #[test]
    fn test_render_to_sink_passes_rendered_buffer() {
        let encoder = StubEncoder {
            sample_rate: 44100,
            pcm: sine_pcm(441, 44100.0),
        };
        let mut sink = CapturingSink {
            samples: Vec::new(),
            sample_rate: 0,
        };
        render_to_sink(&encoder, &mut sink, "ignored", &EffectSettings::default()).unwrap();

        let direct = render(&encoder, "ignored", &EffectSettings::default()).unwrap();
        assert_eq!(sink.samples, direct.samples);
        assert_eq!(sink.sample_rate, 44100);
    }
}
