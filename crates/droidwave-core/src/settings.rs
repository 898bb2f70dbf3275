//! Effect settings and effect kind selection.
//!
//! `EffectSettings` is the single configuration object the pipeline consumes.
//! Documented ranges are exactly that: documentation. Out-of-range values are
//! passed through and produce distorted output rather than being rejected;
//! the only fail-fast checks are positivity of the duty cycle (here) and the
//! sample rate (at the pipeline boundary).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DroidError, DroidResult};

/// Available droid voice effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    /// Neutral warble: base LFO only.
    Normal,
    /// Rude 30 Hz raspberry.
    Blatt,
    /// 20 Hz amplitude flutter.
    Trill,
    /// Smooth 8 Hz wobble.
    Whistle,
    /// Chaotic stacked oscillations.
    Scream,
    /// Bouncy 6 Hz modulation.
    Happy,
    /// Slow 3 Hz droop.
    Sad,
    /// Rising modulation rate over the buffer.
    Question,
    /// Audio-identical to [`EffectKind::Normal`]; only external display
    /// styling ever varied with this kind.
    Random,
}

impl EffectKind {
    /// All kinds, in presentation order.
    pub const ALL: [EffectKind; 9] = [
        EffectKind::Normal,
        EffectKind::Blatt,
        EffectKind::Trill,
        EffectKind::Whistle,
        EffectKind::Scream,
        EffectKind::Happy,
        EffectKind::Sad,
        EffectKind::Question,
        EffectKind::Random,
    ];

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            EffectKind::Normal => "normal",
            EffectKind::Blatt => "blatt",
            EffectKind::Trill => "trill",
            EffectKind::Whistle => "whistle",
            EffectKind::Scream => "scream",
            EffectKind::Happy => "happy",
            EffectKind::Sad => "sad",
            EffectKind::Question => "question",
            EffectKind::Random => "random",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EffectKind {
    type Err = DroidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EffectKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| DroidError::invalid_configuration(format!("unknown effect: {s}")))
    }
}

/// Settings for one render of droid speech.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectSettings {
    /// Output volume. Documented range 0.0-1.0; values above 1.0 simply
    /// produce louder-than-unity output.
    #[serde(default = "default_volume")]
    pub volume: f64,
    /// Duty cycle for waveshaping. Documented range (0, 1); must be positive.
    #[serde(default = "default_duty_cycle")]
    pub duty_cycle: f64,
    /// Base warble LFO rate in Hz.
    #[serde(default = "default_lfo_rate")]
    pub lfo_rate_hz: f64,
    /// How strongly the selected effect deviates from the neutral warble
    /// (0.0 = none).
    #[serde(default = "default_exaggeration")]
    pub exaggeration: f64,
    /// Selected effect.
    #[serde(default = "default_effect")]
    pub effect: EffectKind,
    /// Whether to splice intro/outro chirps around the payload.
    #[serde(default)]
    pub add_personality: bool,
}

fn default_volume() -> f64 {
    0.5
}

fn default_duty_cycle() -> f64 {
    0.5
}

fn default_lfo_rate() -> f64 {
    12.0
}

fn default_exaggeration() -> f64 {
    0.6
}

fn default_effect() -> EffectKind {
    EffectKind::Normal
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            duty_cycle: default_duty_cycle(),
            lfo_rate_hz: default_lfo_rate(),
            exaggeration: default_exaggeration(),
            effect: default_effect(),
            add_personality: false,
        }
    }
}

impl EffectSettings {
    /// Checks the settings the pipeline cannot proceed without.
    ///
    /// A non-positive duty cycle would divide every sample by zero or flip
    /// its sign, so it is rejected before any numeric work. Nothing else is
    /// clamped or rejected.
    pub fn validate(&self) -> DroidResult<()> {
        if self.duty_cycle <= 0.0 {
            return Err(DroidError::invalid_configuration(format!(
                "duty cycle must be positive, got {}",
                self.duty_cycle
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let settings = EffectSettings::default();
        assert_eq!(settings.volume, 0.5);
        assert_eq!(settings.duty_cycle, 0.5);
        assert_eq!(settings.lfo_rate_hz, 12.0);
        assert_eq!(settings.exaggeration, 0.6);
        assert_eq!(settings.effect, EffectKind::Normal);
        assert!(!settings.add_personality);
    }

    #[test]
    fn test_validate_rejects_non_positive_duty_cycle() {
        let mut settings = EffectSettings::default();
        settings.duty_cycle = 0.0;
        assert!(settings.validate().is_err());

        settings.duty_cycle = -0.3;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_passes_out_of_range_volume_through() {
        // Volume above 1.0 is documented-out-of-range but not an error.
        let mut settings = EffectSettings::default();
        settings.volume = 2.5;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_effect_kind_from_str() {
        assert_eq!("trill".parse::<EffectKind>().unwrap(), EffectKind::Trill);
        assert_eq!("random".parse::<EffectKind>().unwrap(), EffectKind::Random);
        assert!("robotic".parse::<EffectKind>().is_err());
    }

    #[test]
    fn test_effect_kind_round_trips_through_name() {
        for kind in EffectKind::ALL {
            assert_eq!(kind.name().parse::<EffectKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_settings_json_round_trip() {
        let settings = EffectSettings {
            volume: 0.7,
            duty_cycle: 0.4,
            lfo_rate_hz: 15.0,
            exaggeration: 0.9,
            effect: EffectKind::Scream,
            add_personality: true,
        };

        let json = serde_json::to_string(&settings).unwrap();
        let parsed: EffectSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_settings_json_defaults_for_missing_fields() {
        let parsed: EffectSettings = serde_json::from_str(r#"{"effect": "sad"}"#).unwrap();
        assert_eq!(parsed.effect, EffectKind::Sad);
        assert_eq!(parsed.volume, 0.5);
        assert_eq!(parsed.duty_cycle, 0.5);
    }
}
