// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::RunOptions;
use crate::core::net::{CacheOptions, Client};
use crate::progress::Progress;
use crate::runner;

/// Prints runner status straight to stdout.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let opts = parse_cli()?;

    let cache = if opts.use_cache {
        Some(CacheOptions::default())
    } else {
        None
    };
    let client = Client::new(cache)?;

    let mut progress = ConsoleProgress;
    let summary = runner::run(&opts, &client, Some(&mut progress))?;

    if !summary.skipped {
        for path in &summary.files_written {
            logd!("wrote {}", path.display());
        }
        println!(
            "Wrote {} records across {} file(s)",
            summary.records,
            summary.files_written.len()
        );
    }
    Ok(())
}

fn parse_cli() -> Result<RunOptions, Box<dyn std::error::Error>> {
    let mut opts = RunOptions::default();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output directory for --out")?;
                opts.out = Some(PathBuf::from(v));
            }
            "--single" => opts.single_file = true,
            "--force" => opts.force = true,
            "--no-cache" => opts.use_cache = false,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(opts)
}
