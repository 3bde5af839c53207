use crate::config::DEFAULT_WORD_COUNTER_CONFIG;
use crate::models::{Error, InputSource, WordCounterConfig};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Arg, Command, CommandFactory, Parser};
use log::debug;
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::PathBuf;

const NOT_A_NUMBER: &str = "Must be a number.";

/// Count the occurrences of each word in a text file
#[derive(Parser, Debug)]
#[command(name = "word-tally-cli", version)]
#[command(after_help = "Example: word-tally-cli sample.txt --top 10 --ignore-common")]
pub struct Cli {
    /// Text file to analyze. `-` reads standard input; `.gz` files are decompressed
    #[arg(value_name = "TEXT_FILE")]
    pub file_path: Option<PathBuf>,

    /// Treat words as case sensitive
    #[arg(long)]
    pub case_sensitive: bool,

    /// Ignore common words (the, and, etc.)
    #[arg(long)]
    pub ignore_common: bool,

    /// Show only the top N most frequent words
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub top: Option<i64>,

    /// Show only words with at least N occurrences
    #[arg(long, value_name = "N", allow_negative_numbers = true,
          default_value_t = DEFAULT_WORD_COUNTER_CONFIG.min_count)]
    pub min_count: i64,
}

/// What the binary should do for a given command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print this text and exit without touching any file.
    ShowUsage(String),

    /// Count words in `input` using `config`.
    Run {
        input: InputSource,
        config: WordCounterConfig,
    },
}

impl Cli {
    /// Parses a full command line, program name included.
    ///
    /// Parsing never accesses the file system, so a bad parameter is reported before the
    /// input is opened. Unknown `--` flags and extra positionals are ignored, and the first
    /// occurrence of a repeated option wins.
    pub fn try_parse_args<I, T>(args: I) -> Result<CliCommand, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let cli = match Cli::try_parse_from(Self::retain_declared_args(args)?) {
            Ok(cli) => cli,
            Err(err) => return Self::classify_parse_error(err),
        };

        Ok(cli.into_command())
    }

    /// The full help text.
    pub fn usage() -> String {
        Self::terminate_line(Cli::command().render_help().to_string())
    }

    /// Rewrites a raw command line into one holding only declared options and a single path.
    ///
    /// Options are passed on as `--name=value` and the path is passed after `--`, so a path
    /// such as `-notes.txt` is never mistaken for a flag.
    fn retain_declared_args<I, T>(args: I) -> Result<Vec<OsString>, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut command = Cli::command();
        command.build();

        let mut args = args.into_iter().map(Into::into);
        let mut retained: Vec<OsString> = args.next().into_iter().collect();
        let mut seen: HashSet<String> = HashSet::new();
        let mut file_path: Option<OsString> = None;

        while let Some(raw) = args.next() {
            let token = raw.to_string_lossy().into_owned();
            let (name, inline_value) = match token.split_once('=') {
                Some((name, value)) if name.starts_with("--") => (name, Some(value.to_string())),
                _ => (token.as_str(), None),
            };

            let Some(arg) = Self::find_declared(&command, name) else {
                if name.len() > 2 && name.starts_with("--") {
                    debug!("Ignoring unknown argument '{}'", token);
                } else if file_path.is_none() {
                    file_path = Some(raw);
                } else {
                    debug!("Ignoring extra argument '{}'", token);
                }
                continue;
            };

            let takes_value = arg.get_action().takes_values();
            let value = match inline_value {
                Some(value) if takes_value => Some(value),
                _ if takes_value => args.next().map(|v| v.to_string_lossy().into_owned()),
                _ => None,
            };

            if !seen.insert(arg.get_id().as_str().to_string()) {
                debug!("Ignoring repeated argument '{}'", name);
                continue;
            }

            match value {
                Some(value) => retained.push(format!("{}={}", name, value).into()),
                None if takes_value => {
                    return Err(Error::InvalidParameter {
                        parameter: name.to_string(),
                        reason: NOT_A_NUMBER.to_string(),
                    })
                }
                None => retained.push(name.into()),
            }
        }

        if let Some(file_path) = file_path {
            retained.push("--".into());
            retained.push(file_path);
        }

        Ok(retained)
    }

    /// The declared argument spelled `name`, either `--long` or `-s`.
    fn find_declared<'a>(command: &'a Command, name: &str) -> Option<&'a Arg> {
        if let Some(long) = name.strip_prefix("--") {
            return command.get_arguments().find(|arg| arg.get_long() == Some(long));
        }

        let mut chars = name.strip_prefix('-')?.chars();
        match (chars.next(), chars.next()) {
            (Some(short), None) => command
                .get_arguments()
                .find(|arg| arg.get_short() == Some(short)),
            _ => None,
        }
    }

    fn into_command(self) -> CliCommand {
        let Some(file_path) = self.file_path else {
            return CliCommand::ShowUsage(Self::usage());
        };

        CliCommand::Run {
            input: InputSource::from_path(file_path),
            config: WordCounterConfig {
                case_sensitive: self.case_sensitive,
                ignore_common_words: self.ignore_common,
                min_count: self.min_count,
                top_n: self.top,
            },
        }
    }

    fn classify_parse_error(err: clap::Error) -> Result<CliCommand, Error> {
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Ok(CliCommand::ShowUsage(Self::terminate_line(err.render().to_string())))
            }
            // A non-numeric value for `--top` or `--min-count`
            ErrorKind::ValueValidation | ErrorKind::InvalidValue => {
                Err(Error::InvalidParameter {
                    parameter: Self::invalid_flag(&err).unwrap_or_else(|| "argument".to_string()),
                    reason: NOT_A_NUMBER.to_string(),
                })
            }
            _ => Err(Error::InvalidParameter {
                parameter: Self::invalid_flag(&err).unwrap_or_else(|| "argument".to_string()),
                reason: Self::summarize(&err),
            }),
        }
    }

    fn terminate_line(mut text: String) -> String {
        if !text.ends_with('\n') {
            text.push('\n');
        }
        text
    }

    /// The offending flag, e.g. `--top` out of `--top <N>`.
    fn invalid_flag(err: &clap::Error) -> Option<String> {
        match err.get(ContextKind::InvalidArg) {
            Some(ContextValue::String(arg)) => arg
                .split_whitespace()
                .next()
                .filter(|flag| flag.starts_with("--"))
                .map(str::to_string),
            _ => None,
        }
    }

    /// First line of clap's message, without its `error: ` prefix.
    fn summarize(err: &clap::Error) -> String {
        let rendered = err.render().to_string();
        let first_line = rendered.lines().next().unwrap_or_default();

        first_line
            .strip_prefix("error: ")
            .unwrap_or(first_line)
            .to_string()
    }
}
