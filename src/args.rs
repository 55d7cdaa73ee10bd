//! These structs provide the CLI interface for the spendcycle CLI.

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// spendcycle: a PIN-locked personal budget tracker.
///
/// Record the remaining balance of your budget each day and spendcycle works
/// out what you spent by differencing consecutive balances. When a budget
/// period ends, reset the cycle: its statistics are archived into history and
/// the all-time records are kept up to date.
///
/// All data lives in a single local file inside the data directory; nothing
/// ever leaves your machine. The data is gated behind a 4-6 digit PIN which
/// you create on first use.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Manage the PIN that locks the tracker.
    Pin(PinArgs),
    /// Record the remaining balance for a date (defaults to today).
    Add(AddArgs),
    /// Archive the current cycle into history and start a fresh one.
    Reset(ResetArgs),
    /// Show the current cycle's entries, statistics and all-time records.
    Status,
    /// List archived cycles, newest first.
    History,
    /// Print the full tracker data as JSON, or the cycle history as CSV.
    Export(ExportArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where spendcycle data is held. Defaults to
    /// ~/.spendcycle
    #[arg(long, env = "SPENDCYCLE_HOME", default_value_t = default_home())]
    home: DisplayPath,

    /// The PIN that unlocks the tracker. Required by every command except
    /// PIN creation.
    #[arg(long, env = "SPENDCYCLE_PIN")]
    pin: Option<String>,
}

impl Common {
    pub fn new(log_level: LevelFilter, home: PathBuf, pin: Option<String>) -> Self {
        Self {
            log_level,
            home: home.into(),
            pin,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn home(&self) -> &DisplayPath {
        &self.home
    }

    pub fn pin(&self) -> Option<&str> {
        self.pin.as_deref()
    }
}

#[derive(Debug, Parser, Clone)]
pub struct PinArgs {
    #[command(subcommand)]
    action: PinAction,
}

impl PinArgs {
    pub fn action(&self) -> &PinAction {
        &self.action
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum PinAction {
    /// Create the 4-6 digit PIN. Only possible while no PIN exists.
    Set(SetPinArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct SetPinArgs {
    /// The new PIN: 4 to 6 digits.
    #[arg(long)]
    pin: String,

    /// The new PIN again, to guard against typos.
    #[arg(long)]
    confirm: String,
}

impl SetPinArgs {
    pub fn new(pin: impl Into<String>, confirm: impl Into<String>) -> Self {
        Self {
            pin: pin.into(),
            confirm: confirm.into(),
        }
    }

    pub fn pin(&self) -> &str {
        &self.pin
    }

    pub fn confirm(&self) -> &str {
        &self.confirm
    }
}

#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// The remaining balance of the budget on that date.
    #[arg(long)]
    amount: String,

    /// The entry date, YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    date: Option<String>,

    /// Replace the stored amount when the date already has an entry.
    #[arg(long)]
    overwrite: bool,
}

impl AddArgs {
    pub fn new(amount: impl Into<String>, date: Option<String>, overwrite: bool) -> Self {
        Self {
            amount: amount.into(),
            date,
            overwrite,
        }
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn overwrite(&self) -> bool {
        self.overwrite
    }
}

#[derive(Debug, Parser, Clone)]
pub struct ResetArgs {
    /// Confirm that the current cycle should be archived and cleared.
    #[arg(long)]
    yes: bool,
}

impl ResetArgs {
    pub fn new(yes: bool) -> Self {
        Self { yes }
    }

    pub fn yes(&self) -> bool {
        self.yes
    }
}

#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

serde_plain::derive_display_from_serialize!(ExportFormat);
serde_plain::derive_fromstr_from_deserialize!(ExportFormat);

#[derive(Debug, Parser, Clone)]
pub struct ExportArgs {
    /// The export format: "json" or "csv"
    format: ExportFormat,

    /// Write the export to a file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

impl ExportArgs {
    pub fn new(format: ExportFormat, out: Option<PathBuf>) -> Self {
        Self { format, out }
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn out(&self) -> Option<&Path> {
        self.out.as_deref()
    }
}

fn default_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join(".spendcycle"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --home or SPENDCYCLE_HOME instead of relying on the default \
                data directory. If you continue using the program right now, you may have \
                problems!",
            );
            PathBuf::from(".spendcycle")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
