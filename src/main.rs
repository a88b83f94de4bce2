//! mixtrack Command Line Interface
//!
//! Identifies the tracks of a DJ mix and writes the listing as JSON.

use clap::{Parser, Subcommand};
use log::{error, info};
use mixtrack::encoder::{WavFormat, export_segment};
use mixtrack::error::MixError;
use mixtrack::{HttpIdentifier, Pipeline, Settings, decoder, processor};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mixtrack")]
#[command(about = "Identify the tracks of a DJ mix", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: Option<Commands>,

    /// SoundCloud or YouTube URL, or a local audio file
    #[arg(value_name = "URL")]
    url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Split audio into WAV chunks without recognizing them
    Split {
        /// Input audio file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        /// Window length in seconds
        #[arg(short, long, default_value_t = processor::DEFAULT_WINDOW_SECONDS)]
        window: u32,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        cli.settings.logging_level.to_level_filter()
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    info!("mixtrack {}", mixtrack::VERSION);

    match cli.command {
        Some(Commands::Split {
            input,
            output,
            window,
        }) => split(input, output, window).inspect_err(|e| error!("{}", e))?,
        None => {
            let url = match cli.url {
                Some(url) => url,
                None => prompt_url()?,
            };
            identify(cli.settings, &url).await?;
        }
    }

    Ok(())
}

async fn identify(settings: Settings, url: &str) -> Result<(), MixError> {
    let identifier = HttpIdentifier::new(
        settings.endpoint.clone(),
        settings.api_token.clone(),
        settings.timeout(),
    )
    .map_err(|e| MixError::ConfigError(e.to_string()))
    .inspect_err(|e| error!("{}", e))?;

    let pipeline = Pipeline::new(settings, identifier).inspect_err(|e| error!("{}", e))?;
    let report = pipeline.run(url).await?;

    for track in &report.listing {
        println!("{}", track);
    }
    println!("Listing written to {}", report.output_path.display());
    Ok(())
}

fn split(input: PathBuf, output: PathBuf, window: u32) -> Result<(), MixError> {
    let asset = decoder::load(&input)?;
    let segments = processor::segment(asset, window)?;

    std::fs::create_dir_all(&output)?;
    for segment in &segments {
        let path = export_segment(segment, &output, WavFormat::Float32)?;
        info!("Wrote {}", path.display());
    }

    println!("{} chunks written to {}", segments.len(), output.display());
    Ok(())
}

fn prompt_url() -> io::Result<String> {
    print!("Enter SoundCloud or YouTube URL: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{SampleFormat, WavSpec, WavWriter};
    use tempfile::tempdir;

    #[test]
    fn test_split_writes_chunks() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("mix.wav");
        let spec = WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(&input, spec).unwrap();
        for _ in 0..8000 * 5 {
            writer.write_sample(1000i16).unwrap();
        }
        writer.finalize().unwrap();

        let output = dir.path().join("chunks");
        split(input, output.clone(), 2).unwrap();

        let mut names: Vec<String> = std::fs::read_dir(&output)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["chunk_0000.wav", "chunk_0001.wav", "chunk_0002.wav"]);
    }

    #[test]
    fn test_split_errors_are_returned() {
        let dir = tempdir().unwrap();

        let missing = split(dir.path().join("missing.wav"), dir.path().join("out"), 20);
        assert!(matches!(missing, Err(MixError::Io(_))));
        assert!(!dir.path().join("out").exists());
    }
}
