use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use access_matrix::config::{self, ColorMode, Config, OutputFormat};
use access_matrix::constants;
use access_matrix::formatter::Formatter;
use access_matrix::types::FullResult;

/// Render access-check results as a resource × verb table
#[derive(Parser, Debug)]
#[command(name = "access-matrix")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON document with the check results, `-` for stdin
    #[arg(short, long, env = "ACCESS_MATRIX_FILE")]
    file: Option<PathBuf>,

    /// Verbs to display, in column order
    #[arg(
        long,
        env = "ACCESS_MATRIX_VERBS",
        value_delimiter = ',',
        default_values_t = constants::DEFAULT_VERBS.map(String::from)
    )]
    verbs: Vec<String>,

    /// Output format
    #[arg(short, long, env = "ACCESS_MATRIX_OUTPUT", value_enum, default_value_t)]
    output: OutputFormat,

    /// When to color the outcomes
    #[arg(long, env = "ACCESS_MATRIX_COLOR", value_enum, default_value_t)]
    color: ColorMode,

    /// Only show resources with at least one allowed verb
    #[arg(long)]
    hide_forbidden: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "ACCESS_MATRIX_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            verbs: config::normalize_verbs(&args.verbs),
            output: args.output,
            color: args.color,
            hide_forbidden: args.hide_forbidden,
        }
    }
}

/// File to read the results from, `None` meaning stdin.
fn input_path(file: Option<&Path>) -> Option<&Path> {
    file.filter(|path| path.as_os_str() != "-")
}

fn load(file: Option<&Path>) -> Result<FullResult> {
    let reader: Box<dyn Read> = match input_path(file) {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Unable to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    serde_json::from_reader(reader).context("Unable to decode the check results")
}

fn log_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("Invalid log level '{}'", level))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = log_filter(&args.log_level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let file = args.file.clone();
    let config: Config = args.into();
    tracing::debug!(?config, "starting");

    let mut result = load(file.as_deref())?;
    if config.hide_forbidden {
        result.hide_forbidden(&config.verbs);
    }

    let formatter = Formatter::new(config.output, config.verbs.clone(), result);
    let mut stdout = io::stdout().lock();
    match formatter.write(&mut stdout, |sink| config.color.colorize(sink)) {
        Err(e) if e.is_broken_pipe() => Ok(()),
        res => res.context("Unable to render the check results"),
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use clap::CommandFactory;
    use serial_test::serial;

    use super::*;

    const ENV_VARS: [&str; 5] = [
        "ACCESS_MATRIX_FILE",
        "ACCESS_MATRIX_VERBS",
        "ACCESS_MATRIX_OUTPUT",
        "ACCESS_MATRIX_COLOR",
        "ACCESS_MATRIX_LOG_LEVEL",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            env::remove_var(var);
        }
    }

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("access-matrix").chain(argv.iter().copied()))
            .unwrap()
    }

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    #[serial]
    fn defaults() {
        clear_env();
        let args = parse(&[]);
        assert_eq!(args.file, None);
        assert_eq!(args.verbs, vec!["list", "create", "update", "delete"]);
        assert_eq!(args.output, OutputFormat::Table);
        assert_eq!(args.color, ColorMode::Auto);
        assert!(!args.hide_forbidden);
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    #[serial]
    fn verbs_are_comma_separated() {
        clear_env();
        let config: Config = parse(&["--verbs", "Get,list,get", "--hide-forbidden"]).into();
        assert_eq!(config.verbs, vec!["get", "list"]);
        assert!(config.hide_forbidden);
    }

    #[test]
    #[serial]
    fn flags_select_format_and_color() {
        clear_env();
        let args = parse(&["-o", "json", "--color", "never", "-f", "results.json"]);
        assert_eq!(args.output, OutputFormat::Json);
        assert_eq!(args.color, ColorMode::Never);
        assert_eq!(args.file, Some(PathBuf::from("results.json")));
    }

    #[test]
    #[serial]
    fn environment_fallbacks() {
        clear_env();
        env::set_var("ACCESS_MATRIX_FILE", "-");
        env::set_var("ACCESS_MATRIX_VERBS", "get,watch");
        env::set_var("ACCESS_MATRIX_OUTPUT", "pretty");
        env::set_var("ACCESS_MATRIX_COLOR", "always");
        env::set_var("ACCESS_MATRIX_LOG_LEVEL", "debug");
        let args = parse(&[]);
        clear_env();

        assert_eq!(args.file, Some(PathBuf::from("-")));
        assert_eq!(args.verbs, vec!["get", "watch"]);
        assert_eq!(args.output, OutputFormat::Pretty);
        assert_eq!(args.color, ColorMode::Always);
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    #[serial]
    fn flags_override_environment() {
        clear_env();
        env::set_var("ACCESS_MATRIX_OUTPUT", "pretty");
        let args = parse(&["--output", "table"]);
        clear_env();
        assert_eq!(args.output, OutputFormat::Table);
    }

    #[test]
    #[serial]
    fn rejects_unknown_output() {
        clear_env();
        let res = Args::try_parse_from(["access-matrix", "--output", "yaml"]);
        assert!(res.is_err());
    }

    #[test]
    fn dash_reads_stdin() {
        assert_eq!(input_path(None), None);
        assert_eq!(input_path(Some(Path::new("-"))), None);
        assert_eq!(
            input_path(Some(Path::new("results.json"))),
            Some(Path::new("results.json"))
        );
    }

    #[test]
    fn invalid_log_level_is_an_error() {
        assert!(log_filter("bogus[[").is_err());
        assert!(log_filter("warn").is_ok());
        assert!(log_filter("access_matrix=debug").is_ok());
    }

    #[test]
    fn missing_input_file_is_reported() {
        let err = load(Some(Path::new("/nonexistent/results.json"))).unwrap_err();
        assert!(err.to_string().contains("Unable to open"));
    }

    #[test]
    fn loads_results_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            br#"{"items":[{"name":"pods","access":{"get":"allowed"}}]}"#,
        )
        .unwrap();
        let result = load(Some(file.path())).unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].name, "pods");
    }
}
