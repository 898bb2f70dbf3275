//! `say` command: render a message to a WAV file.

use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use droidwave_core::{render_wav, ToneEncoder};

use crate::cli_args::SayArgs;

/// Runs the `say` command.
pub fn run(args: &SayArgs) -> Result<ExitCode> {
    let settings = args.resolve_settings()?;

    let mut encoder = ToneEncoder::new(args.sample_rate).with_duty_cycle(settings.duty_cycle);
    if args.ultrasound {
        encoder = encoder.ultrasound();
    }

    println!("{} {}", "Message:".cyan().bold(), args.message);
    println!(
        "{} {} (exaggeration {:.2}, volume {:.2})",
        "Effect:".cyan().bold(),
        settings.effect,
        settings.exaggeration,
        settings.volume
    );
    if settings.add_personality {
        println!("{} {}", "Personality:".cyan().bold(), "enabled".green());
    }

    let result = render_wav(&encoder, &args.message, &settings)
        .with_context(|| format!("failed to render message: {:?}", args.message))?;

    std::fs::write(&args.output, &result.wav_data)
        .with_context(|| format!("failed to write WAV file: {}", args.output.display()))?;

    println!(
        "{} {} ({:.2} s, {} Hz)",
        "Wrote:".green().bold(),
        args.output.display(),
        result.duration_seconds(),
        result.sample_rate
    );
    println!("{} {}", "PCM hash:".dimmed(), &result.pcm_hash[..16]);

    Ok(ExitCode::SUCCESS)
}
