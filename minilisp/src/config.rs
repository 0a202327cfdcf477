use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "usage: minilisp [-f script | expression...]";
pub const DEFAULT_PROMPT: &str = "~> ";

#[derive(PartialEq, Debug)]
pub enum Mode {
    Interactive,
    Script(PathBuf),
    Expr(String),
}

#[derive(Error, PartialEq, Debug)]
pub enum UsageError {
    #[error("-f requires a script path")]
    MissingScript,
    #[error("unexpected argument '{0}' after script path")]
    TrailingArg(String),
}

#[derive(Debug)]
pub struct Config {
    pub mode: Mode,
    pub prompt: String,
    pub history: Option<PathBuf>,
}

impl Config {
    /// Build from command line arguments, program name excluded.
    pub fn from_args<I: IntoIterator<Item=String>>(args: I) -> Result<Config, UsageError> {
        let mut args = args.into_iter();
        let mode = match args.next() {
            None => Mode::Interactive,
            Some(flag) if flag == "-f" => {
                let path = args.next().ok_or(UsageError::MissingScript)?;
                if let Some(extra) = args.next() {
                    return Err(UsageError::TrailingArg(extra));
                }
                Mode::Script(PathBuf::from(path))
            },
            Some(first) => Mode::Expr(
                std::iter::once(first).chain(args).collect::<Vec<_>>().join(" ")),
        };
        Ok(Config{mode, prompt: DEFAULT_PROMPT.to_string(), history: history_path()})
    }
}

// MINILISP_HISTORY wins over ~/.minilisp_history
fn history_path() -> Option<PathBuf> {
    env::var_os("MINILISP_HISTORY")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".minilisp_history")))
}

///////////////////////////////////////////////////////////////////////////////
