use anyhow::{Result, bail};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Markup on stdin to `{text, facets}` JSON.
    Encode,
    /// `{text, facets}` JSON on stdin to markup.
    Decode,
    /// `{text, facets}` JSON on stdin to segment JSON.
    Segments,
    /// Markup on stdin rendered with terminal styles.
    Preview,
    /// Writes a default config file if none exists.
    Init,
}

impl Command {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "encode" => Some(Command::Encode),
            "decode" => Some(Command::Decode),
            "segments" => Some(Command::Segments),
            "preview" => Some(Command::Preview),
            "init" => Some(Command::Init),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub config_path: Option<PathBuf>,
    pub pretty: bool,
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} [--config <path>] [--pretty] <encode|decode|segments|preview|init>\n\
         Reads from stdin and writes to stdout. `init` writes a default config file."
    )
}

/// Parses `args` (without the program name).
pub fn parse<I, S>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut command = None;
    let mut config_path = None;
    let mut pretty = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--config" => match args.next() {
                Some(path) => config_path = Some(PathBuf::from(path.as_ref())),
                None => bail!("--config needs a path"),
            },
            "--pretty" => pretty = true,
            other => match (Command::parse(other), command) {
                (Some(cmd), None) => command = Some(cmd),
                (Some(_), Some(_)) => bail!("only one command may be given"),
                (None, _) => bail!("unknown argument '{other}'"),
            },
        }
    }

    let Some(command) = command else {
        bail!("no command given");
    };
    Ok(Invocation {
        command,
        config_path,
        pretty,
    })
}
