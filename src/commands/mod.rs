//! Command handlers for the spendcycle CLI.
//!
//! This module contains implementations for all CLI subcommands. The
//! handlers are presentation glue: they obtain the user's confirmation
//! decisions from flags, hand raw input to the tracker core and format what
//! comes back.

use crate::model::Amount;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::fmt::Debug;
use tracing::{debug, info};

mod cycle;
mod entry;
mod export;
mod history;
mod pin;

pub use cycle::{reset, status};
pub use entry::add_entry;
pub use export::export;
pub use history::history;
pub use pin::set_pin;

/// The output type for a command: a printable message and, optionally, the
/// structured data behind it.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of
    /// the command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T, S> From<S> for Out<T>
where
    T: Debug + Clone + Serialize,
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Out::new_message(value)
    }
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Print the message to `info!` and the structured data (if it exists)
    /// as JSON to `debug!`.
    pub fn print(&self) {
        info!("{}", self.message);
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
    }
}

/// Formats an amount for humans, e.g. `Rs 1,234.50`.
pub(crate) fn currency(amount: Amount) -> String {
    format!(
        "Rs {}",
        format_num::format_num!(",.2", amount.value().to_f64().unwrap_or_default())
    )
}

/// Like [`currency`] but with a leading `+` on positive values, used for the
/// expenditure column where negative means the balance went up.
pub(crate) fn signed_currency(amount: Amount) -> String {
    if amount.is_positive() {
        format!("+{}", currency(amount))
    } else {
        currency(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn test_currency_format() {
        assert_eq!(currency(amount("1234.5")), "Rs 1,234.50");
        assert_eq!(currency(amount("0")), "Rs 0.00");
    }

    #[test]
    fn test_signed_currency_marks_positive_only() {
        assert_eq!(signed_currency(amount("30")), "+Rs 30.00");
        assert_eq!(signed_currency(amount("0")), "Rs 0.00");
        assert_eq!(signed_currency(amount("-12.25")), "Rs -12.25");
    }

    #[test]
    fn test_out_message_only() {
        let out: Out<()> = "all done".into();
        assert_eq!(out.message(), "all done");
        assert!(out.structure().is_none());
    }
}
