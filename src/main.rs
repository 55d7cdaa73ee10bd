use anyhow::Context;
use clap::Parser;
use spendcycle::args::{Args, Command, PinAction};
use spendcycle::{commands, Tracker};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

pub async fn main_inner(args: Args) -> anyhow::Result<()> {
    trace!("{args:?}");
    let home = args.common().home().path();
    let mut tracker = Tracker::open(home).await?;

    // Route to appropriate command handler. Everything except PIN creation
    // requires unlocking first.
    let _: () = match args.command() {
        Command::Pin(pin_args) => match pin_args.action() {
            PinAction::Set(set_args) => {
                commands::set_pin(&mut tracker, set_args.pin(), set_args.confirm())
                    .await?
                    .print()
            }
        },

        Command::Add(add_args) => {
            unlock(&mut tracker, args.common().pin()).await?;
            commands::add_entry(
                &mut tracker,
                add_args.date(),
                add_args.amount(),
                add_args.overwrite(),
            )
            .await?
            .print()
        }

        Command::Reset(reset_args) => {
            unlock(&mut tracker, args.common().pin()).await?;
            commands::reset(&mut tracker, reset_args.yes()).await?.print()
        }

        Command::Status => {
            unlock(&mut tracker, args.common().pin()).await?;
            commands::status(&tracker)?.print()
        }

        Command::History => {
            unlock(&mut tracker, args.common().pin()).await?;
            commands::history(&tracker)?.print()
        }

        Command::Export(export_args) => {
            unlock(&mut tracker, args.common().pin()).await?;
            commands::export(&tracker, export_args.format(), export_args.out())
                .await?
                .print()
        }
    };
    Ok(())
}

/// Gets the tracker past the PIN gate using the `--pin` flag (or the
/// SPENDCYCLE_PIN environment variable).
async fn unlock(tracker: &mut Tracker, pin: Option<&str>) -> anyhow::Result<()> {
    let pin = pin.context(
        "a PIN is required: pass --pin or set SPENDCYCLE_PIN (create one with 'spendcycle pin set')",
    )?;
    tracker.unlock(pin).await?;
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_CRATE_NAME"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
