use sf_core::{Checkbox, FieldId, TextField};

pub const HELP_TEXT: &str = "\
commands:
  set <name|email|password|confirm> <value>   type into a field
  blur <name|email|password|confirm|terms>    leave a field
  check <terms|newsletter>                    tick a checkbox
  uncheck <terms|newsletter>                  untick a checkbox
  submit                                      create the account
  retry                                       back to the form after an error
  reset                                       start over with an empty form
  wait                                        wait for pending checks and submissions
  show                                        print the current form
  help                                        print this help
  quit                                        exit
values may be quoted: set name \"Jane Smith\"";

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Set { field: TextField, value: String },
    Blur(FieldId),
    Check(Checkbox),
    Uncheck(Checkbox),
    Submit,
    Retry,
    Reset,
    Wait,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,
    #[error("malformed command line: {0}")]
    Malformed(String),
    #[error("unknown command '{0}', type 'help'")]
    UnknownCommand(String),
    #[error("'{command}' needs a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("'{command}' does not take '{argument}'")]
    UnexpectedArgument {
        command: &'static str,
        argument: String,
    },
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("unknown checkbox '{0}'")]
    UnknownCheckbox(String),
}

/// Parse one input line.
///
/// The line is split with shell quoting rules, so `set name "Jane Smith"`
/// and backslash escapes behave as in a POSIX shell. For `set`, every word after
/// the field name is joined with single spaces into the value; quote a value
/// to keep its exact spacing, or pass `""` to clear a field.
pub fn parse_command(line: &str) -> Result<ConsoleCommand, CommandParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let words = shell_words::split(line)
        .map_err(|err| CommandParseError::Malformed(err.to_string()))?;
    let Some((command, args)) = words.split_first() else {
        return Err(CommandParseError::Empty);
    };

    match command.as_str() {
        "set" => {
            let Some((field, value)) = args.split_first() else {
                return Err(CommandParseError::MissingArgument {
                    command: "set",
                    argument: "field",
                });
            };
            Ok(ConsoleCommand::Set {
                field: parse_text_field(field)?,
                value: value.join(" "),
            })
        }
        "blur" => {
            let field = single_argument("blur", "field", args)?;
            Ok(ConsoleCommand::Blur(parse_field(field)?))
        }
        "check" => {
            let checkbox = single_argument("check", "checkbox", args)?;
            Ok(ConsoleCommand::Check(parse_checkbox(checkbox)?))
        }
        "uncheck" => {
            let checkbox = single_argument("uncheck", "checkbox", args)?;
            Ok(ConsoleCommand::Uncheck(parse_checkbox(checkbox)?))
        }
        "submit" => no_arguments("submit", args).map(|_| ConsoleCommand::Submit),
        "retry" => no_arguments("retry", args).map(|_| ConsoleCommand::Retry),
        "reset" => no_arguments("reset", args).map(|_| ConsoleCommand::Reset),
        "wait" => no_arguments("wait", args).map(|_| ConsoleCommand::Wait),
        "show" => no_arguments("show", args).map(|_| ConsoleCommand::Show),
        "help" | "?" => Ok(ConsoleCommand::Help),
        "quit" | "exit" => Ok(ConsoleCommand::Quit),
        other => Err(CommandParseError::UnknownCommand(other.to_string())),
    }
}

fn single_argument<'a>(
    command: &'static str,
    argument: &'static str,
    args: &'a [String],
) -> Result<&'a str, CommandParseError> {
    match args {
        [] => Err(CommandParseError::MissingArgument { command, argument }),
        [word] => Ok(word.as_str()),
        [_, extra, ..] => Err(CommandParseError::UnexpectedArgument {
            command,
            argument: extra.clone(),
        }),
    }
}

fn no_arguments(command: &'static str, args: &[String]) -> Result<(), CommandParseError> {
    match args.first() {
        None => Ok(()),
        Some(extra) => Err(CommandParseError::UnexpectedArgument {
            command,
            argument: extra.clone(),
        }),
    }
}

fn parse_text_field(name: &str) -> Result<TextField, CommandParseError> {
    match name {
        "name" => Ok(TextField::Name),
        "email" => Ok(TextField::Email),
        "password" => Ok(TextField::Password),
        "confirm" | "confirm_password" => Ok(TextField::ConfirmPassword),
        other => Err(CommandParseError::UnknownField(other.to_string())),
    }
}

fn parse_field(name: &str) -> Result<FieldId, CommandParseError> {
    match name {
        "terms" => Ok(FieldId::Terms),
        other => parse_text_field(other).map(FieldId::from),
    }
}

fn parse_checkbox(name: &str) -> Result<Checkbox, CommandParseError> {
    match name {
        "terms" => Ok(Checkbox::Terms),
        "newsletter" => Ok(Checkbox::Newsletter),
        other => Err(CommandParseError::UnknownCheckbox(other.to_string())),
    }
}
