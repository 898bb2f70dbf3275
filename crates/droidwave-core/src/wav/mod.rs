//! Byte-exact WAV serialization.
//!
//! Writes mono 16-bit PCM WAV files with no timestamps or variable metadata,
//! so identical samples always produce identical bytes. The 44-byte header
//! layout is an external contract, including its one historical quirk: the
//! RIFF chunk size field holds `32 + data_size` rather than the canonical
//! `36 + data_size` (see `tests.rs`, which pins both the observed value and
//! its distance from the canonical one).

mod format;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use format::WavFormat;
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{quantize_sample, samples_to_pcm16, write_wav, write_wav_to_vec};
