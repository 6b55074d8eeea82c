use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

/// Ask a language model a question and keep the answer in a local store.
#[derive(Debug, Default, Parser)]
#[command(name = "gogpt", version)]
pub struct Cli {
    /// Question to ask
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub question: Option<String>,

    /// Print all debug messages
    #[arg(long)]
    pub debug: bool,

    /// File with an example prompt shown to the model before the question
    #[arg(
        long = "example_prompt",
        visible_alias = "example-prompt",
        value_name = "FILE",
        allow_hyphen_values = true,
        requires = "example_response"
    )]
    pub example_prompt: Option<PathBuf>,

    /// File with the answer expected for the example prompt
    #[arg(
        long = "example_response",
        visible_alias = "example-response",
        value_name = "FILE",
        allow_hyphen_values = true,
        requires = "example_prompt"
    )]
    pub example_response: Option<PathBuf>,

    /// File whose contents are appended to the question
    #[arg(
        long = "file_to_analyze",
        visible_alias = "file-to-analyze",
        value_name = "FILE",
        allow_hyphen_values = true
    )]
    pub file_to_analyze: Option<PathBuf>,
}

/// Long flag names known to `Cli`, split by whether they take a value.
struct FlagNames {
    all: Vec<String>,
    valued: Vec<String>,
}

impl FlagNames {
    fn from_cli() -> Self {
        let command = Cli::command();
        let mut all = Vec::new();
        let mut valued = Vec::new();

        for arg in command.get_arguments() {
            let names: Vec<String> = arg
                .get_long_and_visible_aliases()
                .unwrap_or_default()
                .into_iter()
                .map(str::to_string)
                .collect();
            if arg.get_action().takes_values() {
                valued.extend(names.iter().cloned());
            }
            all.extend(names);
        }
        all.extend(["help".to_string(), "version".to_string()]);

        Self { all, valued }
    }

    /// Returns the token in `--name` form and whether the next token is its
    /// value, or `None` when `text` is not a known long flag.
    fn classify(&self, text: &str) -> Option<(String, bool)> {
        let (body, single_dash) = match text.strip_prefix("--") {
            Some(body) => (body, false),
            None => (text.strip_prefix('-')?, true),
        };
        let (flag, inline_value) = match body.split_once('=') {
            Some((flag, _)) => (flag, true),
            None => (body, false),
        };
        if !self.all.iter().any(|known| known == flag) {
            return None;
        }

        let takes_next = !inline_value && self.valued.iter().any(|known| known == flag);
        let normalized = if single_dash {
            format!("-{}", text)
        } else {
            text.to_string()
        };
        Some((normalized, takes_next))
    }
}

/// Rewrites single-dash long flags (`-question`, `-debug=true`) into the
/// `--question` form clap understands.
///
/// Only tokens in flag position are rewritten: the token following a flag
/// that takes a value is passed through as that value, even when it looks
/// like a flag. Everything after `--` is left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let names = FlagNames::from_cli();

    let mut normalized = Vec::new();
    let mut passthrough = false;
    let mut expects_value = false;

    for (index, arg) in args.into_iter().enumerate() {
        if index == 0 || passthrough {
            normalized.push(arg);
            continue;
        }
        if expects_value {
            expects_value = false;
            normalized.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }

        match arg.to_str().and_then(|text| names.classify(text)) {
            Some((flag, takes_next)) => {
                expects_value = takes_next;
                normalized.push(OsString::from(flag));
            }
            None => normalized.push(arg),
        }
    }

    normalized
}

/// Writes the usage text shown when the tool is run without arguments.
pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    Cli::command().write_help(out)?;
    writeln!(out)
}
