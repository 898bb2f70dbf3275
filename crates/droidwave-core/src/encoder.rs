//! Collaborator interfaces and the built-in tone encoder.
//!
//! The numeric pipeline never goes looking for an encoder; it is handed one
//! through the [`Encoder`] trait and treats whatever comes back as opaque
//! PCM. [`ToneEncoder`] is a self-contained implementation that maps each
//! character of a message to a droid-flavored square-wave burst, so the
//! repository works end-to-end without an external data-over-audio library.

use crate::error::DroidResult;
use crate::wav::quantize_sample;

/// Text-to-PCM encoder collaborator.
///
/// The implementation chooses its own sample rate; output is always mono.
/// The pipeline performs no protocol validation on the result.
pub trait Encoder {
    /// Sample rate of the buffers this encoder produces, in Hz.
    fn sample_rate(&self) -> u32;

    /// Encodes a message into 16-bit PCM samples.
    ///
    /// # Errors
    /// [`crate::DroidError::Encoding`] on any collaborator failure; the
    /// pipeline propagates it unchanged and never retries.
    fn encode(&self, text: &str) -> DroidResult<Vec<i16>>;
}

/// Playback sink collaborator.
///
/// Accepts a mono float buffer and a sample rate. Completion and
/// cancellation of in-flight playback are the sink's business, not the
/// pipeline's.
pub trait PlaybackSink {
    /// Plays (or queues) a mono float buffer.
    fn play(&mut self, samples: &[f64], sample_rate: u32) -> DroidResult<()>;
}

/// Audible droid carrier frequencies in Hz, one per character class.
pub const DROID_CARRIERS: [f64; 5] = [300.0, 800.0, 1500.0, 2200.0, 3000.0];

/// Ultrasound carrier set for near-inaudible transmission.
pub const ULTRASOUND_CARRIERS: [f64; 5] = [17500.0, 18000.0, 18500.0, 19000.0, 19500.0];

/// Seconds of tone per character.
const CHAR_SECS: f64 = 0.1;
/// Inter-character gap as a fraction of the per-character duration.
const GAP_FRACTION: f64 = 0.2;
/// Edge fade applied to each character burst, in seconds.
const EDGE_FADE_SECS: f64 = 0.01;
/// Rate of the slow duty-cycle wobble within a burst, in Hz.
const DUTY_WOBBLE_HZ: f64 = 0.5;
/// Amplitude of the duty-cycle wobble.
const DUTY_WOBBLE: f64 = 0.1;

/// Built-in per-character square-wave encoder.
///
/// Each byte of the message selects a carrier from the table (`byte % 5`)
/// plus a small per-character detune (`(byte % 10) * 20` Hz), producing a
/// 0.1 s burst with a slowly wobbling duty cycle, 10 ms edge fades, and a
/// 20 ms gap before the next character.
#[derive(Debug, Clone)]
pub struct ToneEncoder {
    sample_rate: u32,
    carriers: [f64; 5],
    duty_cycle: f64,
}

impl ToneEncoder {
    /// Creates an audible-range encoder.
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            carriers: DROID_CARRIERS,
            duty_cycle: 0.5,
        }
    }

    /// Switches to the ultrasound carrier set.
    pub fn ultrasound(mut self) -> Self {
        self.carriers = ULTRASOUND_CARRIERS;
        self
    }

    /// Sets the base duty cycle for the character bursts.
    pub fn with_duty_cycle(mut self, duty_cycle: f64) -> Self {
        self.duty_cycle = duty_cycle;
        self
    }

    /// Synthesizes one character burst as floats in [-1, 1].
    fn character_burst(&self, byte: u8) -> Vec<f64> {
        let base = self.carriers[(byte % 5) as usize];
        let freq = base + f64::from(byte % 10) * 20.0;

        let sample_rate = self.sample_rate as f64;
        let num_samples = (CHAR_SECS * sample_rate) as usize;
        let mut burst = Vec::with_capacity(num_samples);

        for i in 0..num_samples {
            let t = i as f64 / sample_rate;
            let duty = self.duty_cycle
                + DUTY_WOBBLE * (std::f64::consts::TAU * DUTY_WOBBLE_HZ * t).sin();
            let phase = (freq * t).fract();
            burst.push(if phase < duty { 1.0 } else { -1.0 });
        }

        // 10 ms linear fades keep the burst edges from clicking.
        let fade_len = ((EDGE_FADE_SECS * sample_rate) as usize).min(num_samples / 2);
        let len = burst.len();
        for i in 0..fade_len {
            let ramp = i as f64 / fade_len as f64;
            burst[i] *= ramp;
            burst[len - 1 - i] *= ramp;
        }

        burst
    }

    /// Samples of tone per character at this encoder's rate.
    pub fn samples_per_char(&self) -> usize {
        (CHAR_SECS * self.sample_rate as f64) as usize
    }

    /// Samples of silence between characters at this encoder's rate.
    pub fn gap_samples(&self) -> usize {
        (CHAR_SECS * GAP_FRACTION * self.sample_rate as f64) as usize
    }
}

impl Encoder for ToneEncoder {
    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn encode(&self, text: &str) -> DroidResult<Vec<i16>> {
        let bytes = text.as_bytes();
        if bytes.is_empty() {
            return Ok(Vec::new());
        }

        let gap = self.gap_samples();
        let per_char = self.samples_per_char();
        let mut output = Vec::with_capacity(bytes.len() * per_char + (bytes.len() - 1) * gap);

        for (i, &byte) in bytes.iter().enumerate() {
            for sample in self.character_burst(byte) {
                output.push(quantize_sample(sample));
            }
            if i + 1 < bytes.len() {
                output.extend(std::iter::repeat(0i16).take(gap));
            }
        }

        Ok(output)
    }
}
