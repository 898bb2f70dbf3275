//! `effects` command: list the available effect kinds.

use std::process::ExitCode;

use colored::Colorize;
use droidwave_core::EffectKind;

/// One-line description for each effect kind.
fn describe(kind: EffectKind) -> &'static str {
    match kind {
        EffectKind::Normal => "neutral warble, base LFO only",
        EffectKind::Blatt => "rude 30 Hz raspberry",
        EffectKind::Trill => "20 Hz amplitude flutter",
        EffectKind::Whistle => "smooth 8 Hz wobble",
        EffectKind::Scream => "chaotic stacked oscillations",
        EffectKind::Happy => "bouncy 6 Hz modulation",
        EffectKind::Sad => "slow 3 Hz droop",
        EffectKind::Question => "rising inflection over the message",
        EffectKind::Random => "audio-identical to normal",
    }
}

/// Runs the `effects` command.
pub fn run() -> ExitCode {
    println!("{}", "Available effects:".cyan().bold());
    for kind in EffectKind::ALL {
        println!("  {:<10} {}", kind.name().green(), describe(kind).dimmed());
    }
    ExitCode::SUCCESS
}
