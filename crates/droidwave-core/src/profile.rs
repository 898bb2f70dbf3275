//! Effect profile registry.
//!
//! Each effect kind maps to a pure, time-varying modulation function that
//! multiplies the base warble LFO. All profiles are deterministic functions
//! of elapsed time and the exaggeration scalar; nothing here holds state.

use std::f64::consts::TAU;

/// Base warble LFO envelope.
///
/// Oscillates in [0.8, 1.0] so the warble stays subtle even at full depth.
///
/// # Arguments
/// * `t` - Elapsed time in seconds
/// * `rate_hz` - LFO rate in Hz
pub fn base_lfo(t: f64, rate_hz: f64) -> f64 {
    0.8 + 0.2 * (0.5 + 0.5 * (TAU * rate_hz * t).sin())
}

/// Effect-specific modulation multiplier at time `t`.
///
/// Applied multiplicatively on top of [`base_lfo`]. `exaggeration` scales how
/// far the profile deviates from the neutral 1.0; at 0.0 every profile
/// collapses to the neutral multiplier.
///
/// # Arguments
/// * `kind` - Selected effect
/// * `t` - Elapsed time in seconds
/// * `exaggeration` - Deviation scalar, documented range 0.0-1.0
/// * `total_secs` - Total buffer duration (only the rising `question`
///   profile depends on it)
pub fn effect_multiplier(
    kind: crate::settings::EffectKind,
    t: f64,
    exaggeration: f64,
    total_secs: f64,
) -> f64 {
    use crate::settings::EffectKind;

    match kind {
        // `random` never had an audio profile of its own; it is resolved as
        // identical to `normal` in the sample path.
        EffectKind::Normal | EffectKind::Random => 1.0,

        // Harsh raspberry: a 30 Hz square that drops to -0.5 on the low half.
        EffectKind::Blatt => {
            let square = if (TAU * 30.0 * t).sin() > 0.0 { 1.0 } else { -0.5 };
            0.8 + 0.5 * exaggeration * square
        }

        EffectKind::Trill => 1.0 + 0.5 * exaggeration * (TAU * 20.0 * t).sin(),

        // Three incommensurate oscillators stacked for a chaotic envelope,
        // then pulled toward neutral by the exaggeration scalar.
        EffectKind::Scream => {
            let chaos = (0.8 + 0.2 * (TAU * 13.0 * t).sin())
                * (0.9 + 0.1 * (TAU * 27.0 * t).sin())
                * (0.95 + 0.05 * (TAU * 41.0 * t).sin());
            1.0 + (chaos - 1.0) * exaggeration
        }

        EffectKind::Whistle => 1.0 + 0.3 * exaggeration * (TAU * 8.0 * t).sin(),

        EffectKind::Happy => 1.0 + 0.3 * exaggeration * (TAU * 6.0 * t).sin(),

        EffectKind::Sad => 1.0 + 0.4 * exaggeration * (TAU * 3.0 * t).sin(),

        // Modulation rate rises from 4 Hz toward 8 Hz across the buffer,
        // like an upward inflection.
        EffectKind::Question => {
            let progress = if total_secs > 0.0 { t / total_secs } else { 0.0 };
            let rate = 4.0 + 4.0 * progress;
            1.0 + 0.3 * exaggeration * (TAU * rate * t).sin()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::EffectKind;

    #[test]
    fn test_base_lfo_range() {
        for i in 0..1000 {
            let t = i as f64 / 100.0;
            let v = base_lfo(t, 12.0);
            assert!((0.8..=1.0).contains(&v), "lfo out of range at t={t}: {v}");
        }
    }

    #[test]
    fn test_base_lfo_peaks_at_quarter_period() {
        // sin peaks at rate*t = 0.25 cycles.
        let v = base_lfo(0.25 / 12.0, 12.0);
        assert!((v - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_exaggeration_is_neutral() {
        for kind in EffectKind::ALL {
            for i in 0..100 {
                let t = i as f64 / 50.0;
                assert_eq!(effect_multiplier(kind, t, 0.0, 2.0), 1.0, "{kind} at t={t}");
            }
        }
    }

    #[test]
    fn test_random_matches_normal() {
        for i in 0..500 {
            let t = i as f64 / 250.0;
            assert_eq!(
                effect_multiplier(EffectKind::Random, t, 1.0, 2.0),
                effect_multiplier(EffectKind::Normal, t, 1.0, 2.0),
            );
        }
    }

    #[test]
    fn test_trill_formula() {
        let t = 0.0125; // sin(2*pi*20*t) = 1 at t = 1/80
        let v = effect_multiplier(EffectKind::Trill, t, 1.0, 1.0);
        assert!((v - 1.5).abs() < 1e-12);

        let t = 0.0375; // sin = -1
        let v = effect_multiplier(EffectKind::Trill, t, 1.0, 1.0);
        assert!((v - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_blatt_is_two_valued() {
        // Away from the square-wave transitions, blatt at full exaggeration
        // only takes the values 1.3 and 0.55.
        for i in 0..400 {
            let t = 0.0001 + i as f64 / 400.0;
            let v = effect_multiplier(EffectKind::Blatt, t, 1.0, 1.0);
            let hi = (v - 1.3).abs() < 1e-9;
            let lo = (v - 0.55).abs() < 1e-9;
            assert!(hi || lo, "unexpected blatt value {v} at t={t}");
        }
    }

    #[test]
    fn test_scream_stays_near_unity_bounds() {
        // chaos is a product of three factors bounded by [0.6*0.8*0.9, 1.0],
        // so the full-exaggeration multiplier stays within those bounds too.
        for i in 0..2000 {
            let t = i as f64 / 1000.0;
            let v = effect_multiplier(EffectKind::Scream, t, 1.0, 2.0);
            assert!(v <= 1.0 + 1e-9);
            assert!(v >= 0.6 * 0.8 * 0.9 - 1e-9);
        }
    }

    #[test]
    fn test_question_rate_rises() {
        // At the start of the buffer the profile matches a fixed 4 Hz
        // modulation; by the end it does not.
        let total = 2.0;
        let early = effect_multiplier(EffectKind::Question, 0.01, 1.0, total);
        let fixed_4hz = 1.0 + 0.3 * (std::f64::consts::TAU * 4.0 * 0.01).sin();
        assert!((early - fixed_4hz).abs() < 1e-3);

        let late_t = 1.9;
        let late = effect_multiplier(EffectKind::Question, late_t, 1.0, total);
        let rate = 4.0 + 4.0 * (late_t / total);
        let expected = 1.0 + 0.3 * (std::f64::consts::TAU * rate * late_t).sin();
        assert!((late - expected).abs() < 1e-12);
    }

    #[test]
    fn test_question_with_zero_duration_buffer() {
        // Degenerate total duration must not divide by zero.
        let v = effect_multiplier(EffectKind::Question, 0.0, 1.0, 0.0);
        assert!(v.is_finite());
    }
}
