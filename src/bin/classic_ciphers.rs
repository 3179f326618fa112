// src/bin/classic_ciphers.rs
//! Terminal front end — prompts like the old web form, or pipes JSON requests
//!
//!   classic-ciphers            interactive prompts until EOF or `q`
//!   classic-ciphers --json     one JSON request per stdin line → one JSON response per line

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use classic_ciphers::config;
use classic_ciphers::consts::DEFAULT_LOG_LEVEL;
use classic_ciphers::{
    handle, load_config, Algorithm, DispatchOptions, Operation, Request, Response,
};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter};

const USAGE: &str = "\
usage: classic-ciphers [--json | --help]

  (no flag)  interactive mode: pick encrypt/decrypt, algorithm, key and text
  --json     read one JSON request per line from stdin, e.g.
             {\"operation\":\"encrypt\",\"algorithm\":\"caesar\",\"text\":\"ABC\",\"key\":\"1\"}

algorithms: transposition (key optional, default from config), caesar (numeric key), vigenere";

fn main() -> Result<()> {
    // Must be installed before load_config(), which logs its fallbacks
    let from_env = EnvFilter::try_from_default_env().ok();
    let has_env_filter = from_env.is_some();
    let (filter, filter_handle) =
        reload::Layer::new(from_env.unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL)));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let conf = load_config();
    if !has_env_filter {
        let level =
            EnvFilter::try_new(&conf.logging.level).context("invalid log level in config")?;
        filter_handle
            .reload(level)
            .context("failed to apply configured log level")?;
    }

    debug!(path = %config::source_path().display(), "config source");
    let opts = DispatchOptions::from(conf);
    debug!(default_key = %opts.default_transposition_key, "dispatch options");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] => interactive(&opts),
        ["--json"] => json_lines(&opts),
        ["-h"] | ["--help"] => {
            println!("{USAGE}");
            Ok(())
        }
        other => bail!("unexpected arguments {other:?}\n\n{USAGE}"),
    }
}

fn json_lines(opts: &DispatchOptions) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut handled = 0usize;
    let mut failed = 0usize;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let response = match serde_json::from_str::<Request>(&line) {
            Ok(req) => handle(&req, opts),
            Err(err) => {
                warn!("malformed request: {err}");
                Response::bad_request(format!("malformed request: {err}"))
            }
        };
        handled += 1;
        if !response.is_ok() {
            failed += 1;
        }
        serde_json::to_writer(&mut stdout, &response).context("failed to encode response")?;
        writeln!(stdout)?;
    }

    info!("processed {handled} request(s), {failed} failed");
    Ok(())
}

fn interactive(opts: &DispatchOptions) -> Result<()> {
    info!("Classic Ciphers — transposition | caesar | vigenere");
    info!("Enter q at the first prompt to quit\n");

    loop {
        let Some(op) = prompt("Encrypt or decrypt? [E/d/q] ")? else {
            break;
        };
        if op.trim().eq_ignore_ascii_case("q") {
            break;
        }
        let operation = if op.trim().is_empty() {
            Operation::Encrypt
        } else {
            match op.parse::<Operation>() {
                Ok(operation) => operation,
                Err(err) => {
                    println!("  → {err}");
                    continue;
                }
            }
        };

        let names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.as_str()).collect();
        let Some(algorithm) = prompt(&format!("Algorithm [{}]: ", names.join("/")))? else {
            break;
        };
        let Some(key) = prompt("Key (blank for default transposition key): ")? else {
            break;
        };
        let Some(text) = prompt("Text: ")? else {
            break;
        };

        let req = Request::new(operation, algorithm, text, Some(key.as_str()));
        match handle(&req, opts) {
            Response::Ok { result } => println!("{result}\n"),
            Response::Err { error, .. } => println!("  → {error}\n"),
        }
    }

    println!("Bye!");
    Ok(())
}

/// Print `label`, read one line without its terminator. `None` on EOF.
fn prompt(label: &str) -> Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\r', '\n']).to_owned()))
}
