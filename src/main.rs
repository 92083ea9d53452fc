use chname::cli::{usage_text, Action, Args};
use chname::error::{AppError, ExitCode};
use chname::rename::{compute_destinations, execute};
use chname::{logging, ui};
use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, info, warn};

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => exit_on_parse_error(e),
    };

    logging::init(args.mode.verbose);

    if let Err(e) = ctrlc::set_handler(|| std::process::exit(ExitCode::GeneralError.into())) {
        warn!("Failed to install interrupt handler: {}", e);
    }

    if let Err(e) = run(args) {
        debug!(error = ?e, "Aborting");
        ui::print_error(&e);
        std::process::exit(e.exit_code().into());
    }
}

/// Help and version go to stdout with success; anything else is a usage error
fn exit_on_parse_error(e: clap::Error) -> ! {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            std::process::exit(ExitCode::Success.into());
        }
        _ => {
            eprintln!("{}", e);
            eprintln!("{}", usage_text());
            std::process::exit(ExitCode::GeneralError.into());
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    match args.into_action() {
        Action::Usage => {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{}", usage_text()).map_err(AppError::Output)?;
        }
        Action::Rename(parsed) => {
            info!(
                command = parsed.command.name(),
                files = parsed.files.len(),
                dry_run = parsed.mode.dry_run,
                "Starting batch"
            );

            let operations = compute_destinations(&parsed.command, &parsed.files)?;

            let mut stdout = io::stdout().lock();
            let mut stderr = io::stderr().lock();
            execute(&operations, parsed.mode, &mut stdout, &mut stderr)?;
        }
    }

    Ok(())
}
