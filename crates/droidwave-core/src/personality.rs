//! Personality chirps and splicing.
//!
//! A personality segment is a short frequency-modulated tone burst spliced
//! before (intro) and after (outro) the payload, separated from it by 0.1 s
//! of silence. The chirp deliberately reuses the instantaneous-frequency
//! formula directly as an angular phase instead of integrating it; the
//! resulting waveform is part of the external contract and must not be
//! "corrected" to the true FM integral.

use std::f64::consts::TAU;

use crate::settings::EffectSettings;

/// Intro chirp duration in seconds.
pub const INTRO_SECS: f64 = 0.5;
/// Outro chirp duration in seconds.
pub const OUTRO_SECS: f64 = 0.3;
/// Silence between each chirp and the payload, in seconds.
pub const PAUSE_SECS: f64 = 0.1;

/// Fraction of a segment faded linearly at each edge.
const FADE_FRACTION: f64 = 0.05;

/// Which end of the payload a segment sits at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentRole {
    /// Greeting chirp before the payload.
    Intro,
    /// Sign-off chirp after the payload.
    Outro,
}

/// Synthesis parameters for one personality segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonalitySegment {
    /// Placement relative to the payload.
    pub role: SegmentRole,
    /// Segment length in seconds.
    pub duration_secs: f64,
    /// Carrier center frequency in Hz.
    pub base_freq_hz: f64,
    /// Frequency modulation depth in Hz.
    pub mod_depth_hz: f64,
    /// Frequency modulation rate in Hz.
    pub mod_rate_hz: f64,
    /// Comparator threshold; its sign sets the square-wave asymmetry.
    pub threshold: f64,
}

impl PersonalitySegment {
    /// The standard intro segment.
    pub fn intro() -> Self {
        Self {
            role: SegmentRole::Intro,
            duration_secs: INTRO_SECS,
            base_freq_hz: 800.0,
            mod_depth_hz: 400.0,
            mod_rate_hz: 10.0,
            threshold: -0.2,
        }
    }

    /// The standard outro segment.
    pub fn outro() -> Self {
        Self {
            role: SegmentRole::Outro,
            duration_secs: OUTRO_SECS,
            base_freq_hz: 1200.0,
            mod_depth_hz: 300.0,
            mod_rate_hz: 5.0,
            threshold: 0.2,
        }
    }

    /// Synthesizes the segment at the given sample rate.
    ///
    /// Output is an asymmetric square-like wave in [-1, 1] with a linear
    /// fade over the first and last 5% of its samples.
    pub fn synthesize(&self, sample_rate: u32) -> Vec<f64> {
        let num_samples = (self.duration_secs * sample_rate as f64) as usize;
        let mut output = Vec::with_capacity(num_samples);

        for i in 0..num_samples {
            let t = i as f64 / sample_rate as f64;

            let instant_freq =
                self.base_freq_hz + self.mod_depth_hz * (TAU * self.mod_rate_hz * t).sin();
            // As-observed approximation: the instantaneous frequency is used
            // directly as if it were a phase, not integrated.
            let phase = TAU * instant_freq * t;

            let sample = if phase.sin() > self.threshold { 1.0 } else { -1.0 };
            output.push(sample);
        }

        apply_edge_fade(&mut output);
        output
    }
}

/// Linear fade over the first and last 5% of the buffer.
fn apply_edge_fade(samples: &mut [f64]) {
    let fade_len = (samples.len() as f64 * FADE_FRACTION) as usize;
    if fade_len == 0 {
        return;
    }

    let len = samples.len();
    for i in 0..fade_len {
        let ramp = i as f64 / fade_len as f64;
        samples[i] *= ramp;
        samples[len - 1 - i] *= ramp;
    }
}

/// Number of silence samples between a chirp and the payload.
pub fn pause_samples(sample_rate: u32) -> usize {
    (PAUSE_SECS * sample_rate as f64) as usize
}

/// Splices personality chirps around a processed payload.
///
/// With `add_personality` off, the payload is returned unchanged. Otherwise
/// the output is intro, pause, payload, pause, outro. The chirps are scaled
/// by the settings volume here; the payload keeps the volume scaling the
/// effect processor already applied. The intro/outro therefore see the
/// volume twice relative to the payload path, which is the observed
/// behavior of the reference pipeline and is kept as-is.
pub fn mix_personality(
    payload: Vec<f64>,
    settings: &EffectSettings,
    sample_rate: u32,
) -> Vec<f64> {
    if !settings.add_personality {
        return payload;
    }

    let intro = PersonalitySegment::intro().synthesize(sample_rate);
    let outro = PersonalitySegment::outro().synthesize(sample_rate);
    let pause = pause_samples(sample_rate);

    let total = intro.len() + pause + payload.len() + pause + outro.len();
    let mut output = Vec::with_capacity(total);

    output.extend(intro.iter().map(|&s| s * settings.volume));
    output.extend(std::iter::repeat(0.0).take(pause));
    output.extend_from_slice(&payload);
    output.extend(std::iter::repeat(0.0).take(pause));
    output.extend(outro.iter().map(|&s| s * settings.volume));

    debug_assert_eq!(output.len(), total);
    output
}
