//! Temporal Check Tool
//!
//! Decodes a JSON document as a temporal schema model and prints the
//! normalised mapping. Reads from a file argument or stdin.

use anyhow::{Context, Result};
use flexschema_core::{deserialize_value, logging, DecodeConfig, Model};
use flexschema_domain::{TemporalType, TemporalValue};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Value,
    Wrapped,
}

#[derive(Debug)]
struct Options {
    config: Option<PathBuf>,
    target: Target,
    json_logs: bool,
    input: Option<PathBuf>,
}

fn print_usage() {
    println!("Usage: temporal-check [OPTIONS] [FILE]");
    println!();
    println!("Options:");
    println!("  --config, -c <FILE>     Decoder configuration (TOML, [decode] table)");
    println!("  --model, -m <NAME>      temporal (default) or temporal-type");
    println!("  --json                  Emit logs as JSON");
    println!("  --help, -h              Show this message");
    println!();
    println!("Reads stdin when FILE is omitted.");
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        config: None,
        target: Target::Value,
        json_logs: false,
        input: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                let path = args.get(i).ok_or("Missing value for --config")?;
                options.config = Some(PathBuf::from(path));
            }
            "--model" | "-m" => {
                i += 1;
                options.target = match args.get(i).map(String::as_str) {
                    Some("temporal") => Target::Value,
                    Some("temporal-type") => Target::Wrapped,
                    Some(other) => return Err(format!("Unknown model: {}", other)),
                    None => return Err("Missing value for --model".to_string()),
                };
            }
            "--json" => options.json_logs = true,
            flag if flag.starts_with('-') => return Err(format!("Unknown option: {}", flag)),
            path => {
                if options.input.is_some() {
                    return Err("Only one input file is accepted".to_string());
                }
                options.input = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    Ok(options)
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn run(options: &Options) -> Result<String> {
    let config = match &options.config {
        Some(path) => DecodeConfig::from_file(path)?,
        None => DecodeConfig::default(),
    };

    let content = read_input(options.input.as_ref())?;
    let document: serde_json::Value =
        serde_json::from_str(&content).context("Input is not valid JSON")?;

    let rendered = match options.target {
        Target::Value => deserialize_value::<TemporalValue>(&document, &config)?.to_str(),
        Target::Wrapped => deserialize_value::<TemporalType>(&document, &config)?.to_str(),
    };
    tracing::info!(model = ?options.target, "document decoded");
    Ok(rendered)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            println!();
            print_usage();
            process::exit(2);
        }
    };

    if options.json_logs {
        logging::init_json();
    } else {
        logging::init();
    }

    match run(&options) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
