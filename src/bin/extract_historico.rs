//! Extract structured records from a SIGAA transcript dump
//!
//! Reads either a JSON array of positioned text fragments (as produced by an
//! external PDF renderer) or a plain-text dump, runs the extraction pipeline,
//! and prints the result as JSON.
//!
//! Usage:
//!   cargo run --release --bin extract_historico -- fragments.json
//!   cargo run --release --bin extract_historico -- --text historico.txt
//!   cargo run --release --bin extract_historico -- fragments.json --output result.json

use std::fs;
use std::path::PathBuf;

use sigaa_historico::{ExtractionConfig, PositionedFragment, TranscriptPipeline};

struct CliConfig {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    text_mode: bool,
    top_down: bool,
}

impl CliConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut output = None;
        let mut text_mode = false;
        let mut top_down = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--text" | "-t" => {
                    text_mode = true;
                },
                "--top-down" => {
                    top_down = true;
                },
                "--output" | "-o" => {
                    i += 1;
                    if i < args.len() {
                        output = Some(PathBuf::from(&args[i]));
                    }
                },
                arg if !arg.starts_with('-') => {
                    input = Some(PathBuf::from(arg));
                },
                _ => {},
            }
            i += 1;
        }

        Self {
            input,
            output,
            text_mode,
            top_down,
        }
    }
}

fn extract(config: &CliConfig) -> Result<String, Box<dyn std::error::Error>> {
    let input = config.input.as_ref().ok_or("no input file given")?;
    let raw = fs::read_to_string(input)?;

    let extraction_config = if config.top_down {
        ExtractionConfig::top_down()
    } else {
        ExtractionConfig::default()
    };
    let pipeline = TranscriptPipeline::with_config(extraction_config);

    // A .txt input is treated as pre-assembled text even without --text.
    let is_text = config.text_mode
        || input.extension().is_some_and(|ext| ext == "txt");

    let result = if is_text {
        pipeline.extract_text(&raw)?
    } else {
        let fragments: Vec<PositionedFragment> = serde_json::from_str(&raw)?;
        pipeline.extract_fragments(&fragments)?
    };

    Ok(serde_json::to_string_pretty(&result)?)
}

fn main() {
    env_logger::init();

    let config = CliConfig::from_args();
    if config.input.is_none() {
        eprintln!("Usage: extract_historico [--text] [--top-down] [--output FILE] INPUT");
        std::process::exit(2);
    }

    match extract(&config) {
        Ok(json) => match &config.output {
            Some(path) => {
                if let Err(e) = fs::write(path, &json) {
                    eprintln!("Error writing {}: {}", path.display(), e);
                    std::process::exit(1);
                }
                println!("Wrote {}", path.display());
            },
            None => println!("{}", json),
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        },
    }
}
