//! Argument parsing and command dispatch for the `folio` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use folio_config::PaginationSettings;
use folio_core::{WindowPolicy, WindowRequest, page_count};
use folio_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};
use crate::output::{render_page_count, render_window};

/// Parses CLI arguments, executes the requested command, and reports
/// failures on stderr. Returns the process exit code.
#[must_use]
pub fn run() -> i32 {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli
            .log_format
            .as_deref()
            .map_or_else(LogFormat::infer, LogFormat::parse),
        build_sha: option_env!("FOLIO_BUILD_SHA").unwrap_or("dev"),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err}");
    }
    info!(build_sha = build_sha(), "folio starting");

    match dispatch(cli) {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

fn dispatch(cli: Cli) -> CliResult<String> {
    let settings = folio_config::load(cli.config.as_deref())?;
    debug!(?settings, "resolved pagination settings");

    match cli.command {
        Command::Window(args) => handle_window(&settings, &args, cli.format),
        Command::Pages(args) => handle_pages(&settings, &args, cli.format),
    }
}

fn handle_window(
    settings: &PaginationSettings,
    args: &WindowArgs,
    format: OutputFormat,
) -> CliResult<String> {
    let last = match (args.last, args.total_items) {
        (Some(last), _) => last,
        (None, Some(total_items)) => page_count(total_items, settings.page_size),
        (None, None) => {
            return Err(CliError::validation(
                "either --last or --total-items is required",
            ));
        }
    };
    let max_length = args.max_length.unwrap_or(settings.max_length);
    let policy = args.policy.map_or(settings.policy, WindowPolicy::from);

    let mut request = WindowRequest::new(args.current, last, max_length);
    if matches!(policy, WindowPolicy::Clamp) {
        request = request.clamped();
    }
    let markers = request.compute_with(policy)?;
    render_window(&markers, request.current_page, format)
}

fn handle_pages(
    settings: &PaginationSettings,
    args: &PagesArgs,
    format: OutputFormat,
) -> CliResult<String> {
    let page_size = args.page_size.unwrap_or(settings.page_size);
    if page_size == 0 {
        return Err(CliError::validation("--page-size must be greater than zero"));
    }
    let pages = page_count(args.total_items, page_size);
    render_page_count(args.total_items, page_size, pages, format)
}

#[derive(Parser, Debug)]
#[command(name = "folio", about = "Inspect pagination windows", version)]
struct Cli {
    #[arg(long, global = true, env = "FOLIO_CONFIG", help = "JSON settings file")]
    config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        env = "FOLIO_LOG",
        default_value = DEFAULT_LOG_LEVEL,
        help = "Log level or filter directive"
    )]
    log_level: String,
    #[arg(long, global = true, help = "Log output format (pretty or json)")]
    log_format: Option<String>,
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the page-marker window for a position.
    Window(WindowArgs),
    /// Print the page count for a collection.
    Pages(PagesArgs),
}

#[derive(Args, Debug)]
struct WindowArgs {
    #[arg(long, help = "Current page, 1-based")]
    current: usize,
    #[arg(
        long,
        conflicts_with = "total_items",
        required_unless_present = "total_items",
        help = "Last page (the page count)"
    )]
    last: Option<usize>,
    #[arg(long, help = "Derive the last page from an item count and the page size")]
    total_items: Option<usize>,
    #[arg(long, help = "Maximum markers, ellipses included")]
    max_length: Option<usize>,
    #[arg(long, value_enum, help = "Validation policy for the request")]
    policy: Option<PolicyArg>,
}

#[derive(Args, Debug)]
struct PagesArgs {
    #[arg(long)]
    total_items: usize,
    #[arg(long)]
    page_size: Option<usize>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PolicyArg {
    Permissive,
    Strict,
    Clamp,
}

impl From<PolicyArg> for WindowPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Permissive => Self::Permissive,
            PolicyArg::Strict => Self::Strict,
            PolicyArg::Clamp => Self::Clamp,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("folio").chain(args.iter().copied()))
    }

    fn window_args(cli: Cli) -> Option<WindowArgs> {
        match cli.command {
            Command::Window(args) => Some(args),
            Command::Pages(_) => None,
        }
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn window_requires_exactly_one_page_source() {
        assert!(parse(&["window", "--current", "2"]).is_err());
        assert!(
            parse(&[
                "window",
                "--current",
                "2",
                "--last",
                "9",
                "--total-items",
                "90"
            ])
            .is_err()
        );
        assert!(parse(&["window", "--current", "2", "--last", "9"]).is_ok());
    }

    #[test]
    fn window_uses_settings_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let cli = parse(&["window", "--current", "10", "--last", "20"])?;
        let args = window_args(cli).ok_or("expected window command")?;
        let output = handle_window(&PaginationSettings::default(), &args, OutputFormat::Table)
            .map_err(|err| err.display_message())?;
        assert_eq!(output, "1 … 9 [10] 11 … 20");
        Ok(())
    }

    #[test]
    fn window_derives_last_page_from_items() -> Result<(), Box<dyn std::error::Error>> {
        let cli = parse(&[
            "--format",
            "json",
            "window",
            "--current",
            "1",
            "--total-items",
            "500",
        ])?;
        let format = cli.format;
        let args = window_args(cli).ok_or("expected window command")?;
        let output = handle_window(&PaginationSettings::default(), &args, format)
            .map_err(|err| err.display_message())?;
        assert_eq!(output, "[1,2,3,null,18,19,20]");
        Ok(())
    }

    #[test]
    fn strict_policy_maps_to_validation_exit_code() -> Result<(), Box<dyn std::error::Error>> {
        let cli = parse(&[
            "window",
            "--current",
            "30",
            "--last",
            "20",
            "--policy",
            "strict",
        ])?;
        let args = window_args(cli).ok_or("expected window command")?;
        let result = handle_window(&PaginationSettings::default(), &args, OutputFormat::Table);
        assert!(matches!(result, Err(ref err) if err.exit_code() == 2));
        Ok(())
    }

    #[test]
    fn clamp_policy_marks_the_clamped_page() -> Result<(), Box<dyn std::error::Error>> {
        for (current, expected) in [("99", "1 2 3 … 18 19 [20]"), ("0", "[1] 2 3 … 18 19 20")] {
            let cli = parse(&[
                "window",
                "--current",
                current,
                "--last",
                "20",
                "--policy",
                "clamp",
            ])?;
            let args = window_args(cli).ok_or("expected window command")?;
            let output = handle_window(&PaginationSettings::default(), &args, OutputFormat::Table)
                .map_err(|err| err.display_message())?;
            assert_eq!(output, expected);
        }
        Ok(())
    }

    #[test]
    fn pages_rejects_zero_page_size() {
        let args = PagesArgs {
            total_items: 10,
            page_size: Some(0),
        };
        let result = handle_pages(&PaginationSettings::default(), &args, OutputFormat::Table);
        assert!(matches!(result, Err(CliError::Validation(_))));
    }

    #[test]
    fn pages_falls_back_to_configured_page_size() {
        let args = PagesArgs {
            total_items: 51,
            page_size: None,
        };
        let output = handle_pages(&PaginationSettings::default(), &args, OutputFormat::Table)
            .map_err(|err| err.display_message());
        assert_eq!(output.as_deref(), Ok("3"));
    }
}
