mod cli;

use cli::Args;
use file_roundtrip::adapters::outbound::console::StderrProgressReporter;
use file_roundtrip::adapters::outbound::filesystem::{FileSystemStore, StdoutPresenter};
use file_roundtrip::application::dto::RoundTripRequest;
use file_roundtrip::application::use_cases::RoundTripUseCase;
use file_roundtrip::config::{self, ConfigFile};
use file_roundtrip::file_lifecycle::domain::Scenario;
use file_roundtrip::ports::outbound::ProgressReporter;
use file_roundtrip::shared::error::ExitCode;
use file_roundtrip::shared::security::validate_working_directory;
use file_roundtrip::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    let work_dir = PathBuf::from(args.dir.as_deref().unwrap_or("."));
    validate_working_directory(&work_dir)?;

    let config = load_config(args.config.as_deref(), &work_dir, &progress_reporter)?;

    // CLI flag > config file > default
    let cleanup_on_failure = args.cleanup_on_failure || config.cleanup_on_failure.unwrap_or(false);
    let scenario = config.scenario()?.unwrap_or_else(Scenario::demo);

    // Create use case with injected dependencies
    let use_case = RoundTripUseCase::new(
        FileSystemStore::new(work_dir),
        StdoutPresenter::new(),
        progress_reporter,
    );

    use_case.execute(RoundTripRequest::new(scenario, cleanup_on_failure))?;

    Ok(())
}

/// Explicit `--config` must exist; otherwise the working directory is searched.
fn load_config(
    explicit: Option<&str>,
    work_dir: &Path,
    reporter: &impl ProgressReporter,
) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        return config::load_config_from_path(Path::new(path));
    }

    match config::discover_config(work_dir)? {
        Some(found) => {
            reporter.report(&format!(
                "📄 Auto-discovered config file: {}",
                work_dir.join(config::CONFIG_FILENAME).display()
            ));
            Ok(found)
        }
        None => Ok(ConfigFile::default()),
    }
}
