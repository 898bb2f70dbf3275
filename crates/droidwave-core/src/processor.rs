//! Droid effect processor.
//!
//! Applies duty-cycle waveshaping and the selected modulation profile to a
//! normalized float waveform, then peak-normalizes and scales by volume.
//! The processor is a pure function of its inputs: same buffer, same
//! settings, same sample rate, bit-identical output.

use crate::error::{DroidError, DroidResult};
use crate::profile::{base_lfo, effect_multiplier};
use crate::settings::EffectSettings;

/// Peaks at or below this are treated as silence during normalization, so a
/// near-silent buffer is not amplified into noise and a zero buffer never
/// divides by zero.
const SILENCE_PEAK: f64 = 1e-4;

/// Per-sample waveshaper and amplitude modulator.
#[derive(Debug, Clone)]
pub struct DroidEffectProcessor {
    settings: EffectSettings,
    sample_rate: u32,
}

impl DroidEffectProcessor {
    /// Creates a processor, failing fast on configuration the numeric pass
    /// cannot run with.
    ///
    /// # Errors
    /// [`DroidError::InvalidConfiguration`] if the sample rate is zero or the
    /// duty cycle is non-positive.
    pub fn new(settings: EffectSettings, sample_rate: u32) -> DroidResult<Self> {
        if sample_rate == 0 {
            return Err(DroidError::invalid_configuration(
                "sample rate must be positive",
            ));
        }
        settings.validate()?;
        Ok(Self {
            settings,
            sample_rate,
        })
    }

    /// The settings this processor was built with.
    pub fn settings(&self) -> &EffectSettings {
        &self.settings
    }

    /// Processes a waveform in [-1, 1], producing a new buffer of identical
    /// length. The input is never mutated. A zero-length input yields a
    /// zero-length output.
    pub fn process(&self, input: &[f64]) -> Vec<f64> {
        if input.is_empty() {
            return Vec::new();
        }

        let sample_rate = self.sample_rate as f64;
        let total_secs = input.len() as f64 / sample_rate;
        let duty = self.settings.duty_cycle;

        let mut output = Vec::with_capacity(input.len());
        for (i, &sample) in input.iter().enumerate() {
            let t = i as f64 / sample_rate;

            let lfo = base_lfo(t, self.settings.lfo_rate_hz)
                * effect_multiplier(
                    self.settings.effect,
                    t,
                    self.settings.exaggeration,
                    total_secs,
                );

            // Asymmetric clipping toward a square-wave texture: everything
            // past the duty threshold saturates, everything inside is scaled
            // up to meet it.
            let shaped = if sample > 0.0 {
                if sample > duty {
                    1.0
                } else {
                    sample / duty
                }
            } else if sample < -duty {
                -1.0
            } else {
                sample / duty
            };

            output.push(shaped * lfo);
        }

        // Peak-normalize, then scale to the requested volume. The silence
        // guard keeps zero and near-zero buffers from blowing up.
        let mut peak = output.iter().fold(0.0_f64, |a, &s| a.max(s.abs()));
        if peak <= SILENCE_PEAK {
            peak = 1.0;
        }
        let gain = self.settings.volume / peak;
        for sample in output.iter_mut() {
            *sample *= gain;
        }

        output
    }
}
