//! Field extraction harness
//!
//! Feeds a transcript (argument or stdin) through the extraction
//! dispatcher and prints the extracted value. Stands in for the ASR
//! collaborator during development: what a backend would hand over is
//! typed or piped in instead.

use std::io::Read;

use clap::Parser;
use voice_form_config::{load_settings, Settings};
use voice_form_core::{Error, Field, Result, TranscriptResult, TranscriptSource};
use voice_form_extraction::extract_from_transcript;

#[derive(Parser, Debug)]
#[command(name = "voice-form", about = "Extract structured form fields from ASR transcripts")]
struct Args {
    /// Field to extract (candidate_name, years_of_experience,
    /// current_designation, address, email)
    #[arg(short, long)]
    field: Field,

    /// Language tag reported by the ASR backend
    #[arg(short, long)]
    language: Option<String>,

    /// Transcript text; read from stdin when omitted
    transcript: Option<String>,

    /// Configuration environment (e.g. "production")
    #[arg(long)]
    env: Option<String>,
}

/// Transcript source backed by an argument or stdin
struct TextSource {
    text: Option<String>,
    language: String,
}

impl TranscriptSource for TextSource {
    fn next_transcript(&mut self) -> Result<TranscriptResult> {
        let text = match self.text.take() {
            Some(text) => text,
            None => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .map_err(|e| Error::Capture(e.to_string()))?;
                buffer.trim_end_matches('\n').to_string()
            }
        };
        Ok(TranscriptResult::new(text).with_language(self.language.clone()))
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let settings = match load_settings(args.env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}. Using defaults.");
            Settings::default()
        }
    };

    init_tracing(&settings);

    let language = args
        .language
        .unwrap_or_else(|| settings.extraction.default_language.clone());

    let mut source = TextSource {
        text: args.transcript,
        language,
    };

    let transcript = source.next_transcript()?;
    tracing::debug!(
        field = %args.field,
        language = transcript.language.as_deref().unwrap_or(""),
        "extracting from transcript"
    );

    let value = extract_from_transcript(&transcript, args.field);
    println!("{value}");

    Ok(())
}

fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("voice_form={}", settings.observability.log_level).into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    if settings.observability.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}
