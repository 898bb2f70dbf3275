//! Argument types for the `droidwave` binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use droidwave_core::{EffectKind, EffectSettings};

/// Arguments for the `say` command.
#[derive(Debug, Args)]
pub struct SayArgs {
    /// Message to render
    pub message: String,

    /// Output WAV file path
    #[arg(short, long, default_value = "droid.wav")]
    pub output: PathBuf,

    /// Settings JSON file; flags below override individual fields
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Output volume (documented range 0.0-1.0)
    #[arg(short, long)]
    pub volume: Option<f64>,

    /// Duty cycle for waveshaping (must be positive)
    #[arg(short, long)]
    pub duty: Option<f64>,

    /// Warble LFO rate in Hz
    #[arg(short, long)]
    pub lfo_rate: Option<f64>,

    /// Effect exaggeration (0.0-1.0)
    #[arg(short = 'x', long)]
    pub exaggeration: Option<f64>,

    /// Effect kind (normal, blatt, trill, whistle, scream, happy, sad,
    /// question, random)
    #[arg(short, long)]
    pub effect: Option<String>,

    /// Splice intro/outro personality chirps around the payload
    #[arg(short, long)]
    pub personality: bool,

    /// Encoder sample rate in Hz
    #[arg(long, default_value_t = 48000)]
    pub sample_rate: u32,

    /// Use the near-inaudible ultrasound carrier set
    #[arg(long)]
    pub ultrasound: bool,
}

impl SayArgs {
    /// Resolves effect settings: defaults, then the JSON settings file if
    /// given, then individual flag overrides.
    pub fn resolve_settings(&self) -> Result<EffectSettings> {
        let mut settings = match &self.settings {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read settings file: {}", path.display()))?;
                serde_json::from_str(&json)
                    .with_context(|| format!("invalid settings file: {}", path.display()))?
            }
            None => EffectSettings::default(),
        };

        if let Some(volume) = self.volume {
            settings.volume = volume;
        }
        if let Some(duty) = self.duty {
            settings.duty_cycle = duty;
        }
        if let Some(rate) = self.lfo_rate {
            settings.lfo_rate_hz = rate;
        }
        if let Some(exaggeration) = self.exaggeration {
            settings.exaggeration = exaggeration;
        }
        if let Some(effect) = &self.effect {
            settings.effect = effect.parse::<EffectKind>()?;
        }
        if self.personality {
            settings.add_personality = true;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bare_args(message: &str) -> SayArgs {
        SayArgs {
            message: message.to_string(),
            output: PathBuf::from("droid.wav"),
            settings: None,
            volume: None,
            duty: None,
            lfo_rate: None,
            exaggeration: None,
            effect: None,
            personality: false,
            sample_rate: 48000,
            ultrasound: false,
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = bare_args("hi").resolve_settings().unwrap();
        assert_eq!(settings, EffectSettings::default());
    }

    #[test]
    fn test_flag_overrides() {
        let mut args = bare_args("hi");
        args.volume = Some(0.9);
        args.effect = Some("trill".to_string());
        args.personality = true;

        let settings = args.resolve_settings().unwrap();
        assert_eq!(settings.volume, 0.9);
        assert_eq!(settings.effect, EffectKind::Trill);
        assert!(settings.add_personality);
        // Untouched fields keep their defaults.
        assert_eq!(settings.duty_cycle, 0.5);
    }

    #[test]
    fn test_unknown_effect_is_an_error() {
        let mut args = bare_args("hi");
        args.effect = Some("stoic".to_string());
        assert!(args.resolve_settings().is_err());
    }

    #[test]
    fn test_settings_file_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"volume": 0.8, "effect": "sad"}"#).unwrap();

        let mut args = bare_args("hi");
        args.settings = Some(path);
        args.volume = Some(0.3);

        let settings = args.resolve_settings().unwrap();
        assert_eq!(settings.volume, 0.3); // flag wins over file
        assert_eq!(settings.effect, EffectKind::Sad); // file wins over default
    }
}
