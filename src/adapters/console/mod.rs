//! Line-oriented console driver: commands in, rendered views out.

mod command;
mod presenter;

pub use command::{parse_command, CommandParseError, ConsoleCommand, HELP_TEXT};
pub use presenter::{format_view, ConsolePresenter};
