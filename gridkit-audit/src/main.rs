use std::path::{Path, PathBuf};
use std::process::ExitCode;

use log::{error, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

const REPORT_PATH: &str = "validation-report.json";

/// Prefer a `strategies/` directory next to the current working directory,
/// falling back to the one bundled with the crate.
fn strategies_dir() -> PathBuf {
    let local = Path::new("strategies");
    if local.is_dir() {
        return local.to_path_buf();
    }
    Path::new(env!("CARGO_MANIFEST_DIR")).join("strategies")
}

fn main() -> ExitCode {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    let dir = strategies_dir();
    let report = match gridkit_audit::run_audit(&dir) {
        Ok(report) => report,
        Err(err) => {
            error!("audit failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    print!("{}", report.summary());

    if let Err(err) = report.write_json(Path::new(REPORT_PATH)) {
        error!("{err}");
        return ExitCode::FAILURE;
    }
    println!("\nDetailed results written to {REPORT_PATH}");

    if report.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
