mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile};
use pip_chill::adapters::outbound::console::StderrProgressReporter;
use pip_chill::adapters::outbound::filesystem::{EggLinkReader, SitePackagesRegistry};
use pip_chill::adapters::outbound::python::{PythonInterpreter, SearchPaths};
use pip_chill::application::dto::{ChillRequest, OutputFormat};
use pip_chill::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use pip_chill::application::use_cases::ChillUseCase;
use pip_chill::ports::outbound::RenderOptions;
use pip_chill::shared::error::ExitCode;
use pip_chill::shared::Result;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `PIP_CHILL_LOG=debug`)
const LOG_ENV: &str = "PIP_CHILL_LOG";

fn main() {
    init_tracing();

    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    let exit_code = match run(args) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Effective settings after merging the config file into the CLI arguments
#[derive(Debug, PartialEq)]
struct Settings {
    format: OutputFormat,
    render: RenderOptions,
    request: ChillRequest,
    output: Option<PathBuf>,
    paths: Vec<PathBuf>,
    python: Option<PathBuf>,
}

impl Settings {
    /// CLI switches are OR-ed with the config file; CLI values win over config values
    fn resolve(args: Args, config: Option<ConfigFile>) -> Self {
        let config = config.unwrap_or_default();
        let config_format = config.output_format();

        let flag = |cli: bool, configured: Option<bool>| cli || configured.unwrap_or(false);

        let paths = if args.paths.is_empty() {
            config.paths.unwrap_or_default()
        } else {
            args.paths
        };

        Self {
            format: args.format.or(config_format).unwrap_or_default(),
            render: RenderOptions {
                no_version: flag(args.no_version, config.no_version),
                verbose: flag(args.verbose, config.verbose),
            },
            request: ChillRequest::new(
                flag(args.show_all, config.show_all),
                flag(args.no_chill, config.no_chill),
                config.ignore_packages.unwrap_or_default(),
            ),
            output: args.output,
            paths,
            python: args.python.or(config.python),
        }
    }
}

fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(&std::env::current_dir()?),
    }
}

fn locate_environment(settings: &Settings) -> Result<SearchPaths> {
    if !settings.paths.is_empty() {
        return SearchPaths::explicit(settings.paths.clone());
    }

    let interpreter = PythonInterpreter::locate(settings.python.as_deref());
    debug!("Locating environment through {}", interpreter.program().display());
    SearchPaths::discover(&interpreter)
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let settings = Settings::resolve(args, config);
    debug!(?settings, "Resolved settings");

    let search_paths = locate_environment(&settings)?;

    // Create adapters (Dependency Injection)
    let registry = SitePackagesRegistry::new(search_paths.registry_dirs);
    let legacy_reader = EggLinkReader::new(search_paths.legacy_dirs);
    let progress_reporter = StderrProgressReporter::new(settings.output.is_some());

    let use_case = ChillUseCase::new(registry, legacy_reader, progress_reporter);
    let response = use_case.execute(settings.request)?;

    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response, settings.render)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(settings.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("pip-chill").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_resolve_without_config() {
        let settings = Settings::resolve(args(&["--no-version", "-v"]), None);

        assert_eq!(settings.format, OutputFormat::Text);
        assert!(settings.render.no_version);
        assert!(settings.render.verbose);
        assert_eq!(settings.request, ChillRequest::default());
        assert!(settings.paths.is_empty());
        assert!(settings.python.is_none());
    }

    #[test]
    fn test_resolve_config_enables_flags() {
        let config = ConfigFile {
            format: Some("json".to_string()),
            no_chill: Some(true),
            show_all: Some(true),
            ignore_packages: Some(vec!["black".to_string()]),
            python: Some(PathBuf::from("/opt/python3")),
            ..ConfigFile::default()
        };

        let settings = Settings::resolve(args(&[]), Some(config));

        assert_eq!(settings.format, OutputFormat::Json);
        assert!(settings.request.show_all);
        assert!(settings.request.omit_self);
        assert_eq!(settings.request.extra_ignored, vec!["black".to_string()]);
        assert_eq!(settings.python.as_deref(), Some(Path::new("/opt/python3")));
    }

    #[test]
    fn test_resolve_cli_values_win() {
        let config = ConfigFile {
            format: Some("json".to_string()),
            verbose: Some(false),
            python: Some(PathBuf::from("/opt/python3")),
            paths: Some(vec![PathBuf::from("/config/site-packages")]),
            ..ConfigFile::default()
        };

        let settings = Settings::resolve(
            args(&[
                "-f",
                "text",
                "-v",
                "--python",
                "/usr/bin/python3",
                "-p",
                "/cli/site-packages",
            ]),
            Some(config),
        );

        assert_eq!(settings.format, OutputFormat::Text);
        assert!(settings.render.verbose);
        assert_eq!(settings.python.as_deref(), Some(Path::new("/usr/bin/python3")));
        assert_eq!(settings.paths, vec![PathBuf::from("/cli/site-packages")]);
    }

    #[test]
    fn test_resolve_config_paths_used_when_cli_has_none() {
        let config = ConfigFile {
            paths: Some(vec![PathBuf::from("/config/site-packages")]),
            ..ConfigFile::default()
        };

        let settings = Settings::resolve(args(&[]), Some(config));
        assert_eq!(settings.paths, vec![PathBuf::from("/config/site-packages")]);
    }

    #[test]
    fn test_locate_environment_with_explicit_path() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let settings = Settings::resolve(
            args(&["-p", temp_dir.path().to_str().unwrap()]),
            None,
        );

        let paths = locate_environment(&settings).unwrap();
        assert_eq!(paths.registry_dirs, vec![temp_dir.path().to_path_buf()]);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 1);
    }
}
