mod args;
mod render;

use anyhow::{Context, Result};
use args::{Command, Invocation};
use richtext_facets_config::Config;
use richtext_facets_engine::{RichText, decode, encode_with, segments};
use std::{
    env,
    io::{self, Read, Write},
    path::PathBuf,
    process,
};

fn explicit_path(inv: &Invocation) -> Option<PathBuf> {
    inv.config_path
        .as_ref()
        .map(|path| Config::expand_path(path).unwrap_or_else(|| path.clone()))
}

fn load_config(inv: &Invocation) -> Result<Config> {
    let loaded = match explicit_path(inv) {
        Some(path) => match Config::load_from_path(&path)? {
            Some(config) => Some(config),
            None => anyhow::bail!("config file '{}' not found", path.display()),
        },
        None => Config::load()?,
    };

    match loaded {
        Some(config) => {
            log::debug!("Loaded config: {config:?}");
            Ok(config)
        }
        None => {
            log::debug!(
                "No config file at {}, using defaults",
                Config::config_path().display()
            );
            Ok(Config::default())
        }
    }
}

/// Writes a default config, refusing to overwrite an existing one.
fn init_config(inv: &Invocation) -> Result<PathBuf> {
    let explicit = explicit_path(inv);
    let path = explicit.clone().unwrap_or_else(Config::config_path);
    if path.exists() {
        anyhow::bail!("config file '{}' already exists", path.display());
    }

    let config = Config::default();
    match explicit {
        Some(path) => config.save_to_path(path)?,
        None => config.save()?,
    }
    log::info!("Wrote default config to {}", path.display());
    Ok(path)
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("stdin is not valid UTF-8")?;
    Ok(input)
}

fn read_rich_text(input: &str) -> Result<RichText> {
    serde_json::from_str(input).context("expected {\"text\": ..., \"facets\": [...]} JSON")
}

fn write_json<T: serde::Serialize>(out: &mut impl Write, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn run(inv: &Invocation) -> Result<()> {
    let mut stdout = io::stdout().lock();

    if inv.command == Command::Init {
        let path = init_config(inv)?;
        writeln!(stdout, "{}", path.display())?;
        return Ok(());
    }

    let config = load_config(inv)?;
    let pretty = inv.pretty || config.pretty;
    let resolve = |handle: &str| config.mention_id(handle);
    let input = read_stdin()?;

    match inv.command {
        Command::Encode => {
            let rt = encode_with(&input, &resolve);
            log::info!("Encoded {} bytes into {} facets", input.len(), rt.facets.len());
            write_json(&mut stdout, &rt, pretty)?;
        }
        Command::Decode => {
            let rt = read_rich_text(&input)?;
            let markup = decode(&rt.text, &rt.facets);
            stdout.write_all(markup.as_bytes())?;
        }
        Command::Segments => {
            let rt = read_rich_text(&input)?;
            let segs = segments(&rt.text, &rt.facets);
            let out: Vec<render::SegmentOut<'_>> =
                segs.iter().map(render::SegmentOut::from).collect();
            write_json(&mut stdout, &out, pretty)?;
        }
        Command::Preview => {
            let rt = encode_with(&input, &resolve);
            let segs = segments(&rt.text, &rt.facets);
            render::preview(&mut stdout, &segs)?;
        }
        // already handled above
        Command::Init => {}
    }

    stdout.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("richtext-facets", String::as_str);

    let inv = match args::parse(args.iter().skip(1)) {
        Ok(inv) => inv,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", args::usage(program));
            process::exit(2);
        }
    };

    run(&inv)
}
