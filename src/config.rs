use std::env;
use std::ffi::OsStr;

use clap::ValueEnum;

use crate::constants;
use crate::terminal::{self, Sink};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns, colored on terminals
    #[default]
    Table,
    /// Table drawn by comfy-table
    Pretty,
    /// Machine readable JSON
    Json,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when writing to a terminal and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolves the mode against `sink` and the `NO_COLOR` environment variable.
    pub fn colorize<S: Sink + ?Sized>(self, sink: &S) -> bool {
        self.colorize_with(sink, env::var_os("NO_COLOR").as_deref())
    }

    /// `no_color` only matters in `Auto` mode, and only when non-empty.
    pub fn colorize_with<S: Sink + ?Sized>(self, sink: &S, no_color: Option<&OsStr>) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                !no_color.is_some_and(|v| !v.is_empty()) && terminal::is_interactive(sink)
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub verbs: Vec<String>,
    pub output: OutputFormat,
    pub color: ColorMode,
    pub hide_forbidden: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbs: constants::DEFAULT_VERBS
                .iter()
                .map(|v| v.to_string())
                .collect(),
            output: OutputFormat::default(),
            color: ColorMode::default(),
            hide_forbidden: false,
        }
    }
}

/// Lower-cases `verbs` and drops repeated entries, keeping the first occurrence.
pub fn normalize_verbs<I, S>(verbs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut normalized: Vec<String> = Vec::new();
    for verb in verbs {
        let verb = verb.as_ref().trim().to_ascii_lowercase();
        if verb.is_empty() {
            continue;
        }
        if normalized.contains(&verb) {
            tracing::warn!(%verb, "ignoring duplicate verb");
            continue;
        }
        if !constants::ALL_VERBS.contains(&verb.as_str()) {
            tracing::warn!(%verb, "verb is not a known kubernetes verb");
        }
        normalized.push(verb);
    }
    normalized
}
