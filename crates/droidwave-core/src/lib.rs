//! Droidwave Core
//!
//! This crate implements the deterministic droid-voice signal pipeline:
//! it decorates an externally produced data-over-audio waveform with droid
//! speech characteristics and serializes the result to a byte-exact WAV
//! file.
//!
//! # Overview
//!
//! Data flows linearly through pure stages, each consuming one waveform and
//! producing a new one:
//!
//! ```text
//! Encoder -> DroidEffectProcessor -> personality mixer -> { sink | WAV }
//! ```
//!
//! - **Effect processing** - duty-cycle waveshaping plus a per-effect
//!   amplitude modulation profile, then guarded peak normalization.
//! - **Personality** - synthesized FM chirps spliced before and after the
//!   payload with fixed pauses.
//! - **WAV output** - mono 16-bit PCM with a fixed 44-byte header.
//!
//! # Determinism
//!
//! Every stage is a pure function of its inputs: same buffer, same settings,
//! same sample rate, byte-identical output across calls. There is no hidden
//! clock or random state anywhere in the audio path (the `random` effect
//! kind is audio-identical to `normal`). WAV results carry a BLAKE3 hash of
//! their PCM payload so determinism can be asserted cheaply.
//!
//! # Example
//!
//! ```
//! use droidwave_core::{render_wav, EffectKind, EffectSettings, ToneEncoder};
//!
//! let encoder = ToneEncoder::new(48000);
//! let mut settings = EffectSettings::default();
//! settings.effect = EffectKind::Trill;
//! settings.add_personality = true;
//!
//! let wav = render_wav(&encoder, "beep boop", &settings).unwrap();
//! assert_eq!(&wav.wav_data[0..4], b"RIFF");
//! ```
//!
//! # Crate Structure
//!
//! - [`pipeline`] - stage composition and the [`render`]/[`render_wav`]
//!   entry points
//! - [`processor`] - the droid effect processor
//! - [`profile`] - effect modulation profiles
//! - [`personality`] - chirp synthesis and splicing
//! - [`encoder`] - collaborator traits and the built-in tone encoder
//! - [`settings`] - effect settings and kinds
//! - [`wav`] - byte-exact WAV writer

pub mod encoder;
pub mod error;
pub mod personality;
pub mod pipeline;
pub mod processor;
pub mod profile;
pub mod settings;
pub mod wav;

// Re-export main types at crate root
pub use encoder::{Encoder, PlaybackSink, ToneEncoder};
pub use error::{DroidError, DroidResult};
pub use pipeline::{render, render_to_sink, render_wav, RenderResult};
pub use processor::DroidEffectProcessor;
pub use settings::{EffectKind, EffectSettings};
pub use wav::WavResult;
