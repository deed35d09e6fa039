use crate::{form::Field, models::Gender, submission::Action};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (type 'help')")] Unknown(String),
    #[error("'{0}' needs a value")] MissingValue(&'static str),
    #[error("{0}")] Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary { Colors, Items, Styles }

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Item(String),
    Color(String),
    Gender(Gender),
    /// Set the pending style and add it, like pressing Enter in the style box.
    Style(String),
    Pending(String),
    Add,
    Remove(String),
    Submit,
    Show,
    Suggest(Vocabulary, String),
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  item <text>              clothing item (required)
  color <text>             specific color
  gender <men|women>
  style <text>             add a style tag (up to 3)
  pending <text>           type into the style box without adding
  add                      add the pending style
  remove <tag>             remove a style tag
  submit                   get style recommendations
  show                     redraw the page
  suggest <colors|items|styles> [text]
  help | quit";

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim_end_matches(['\r', '\n'])),
            None => (line.trim_end(), ""),
        };
        let required = |name: &'static str| -> Result<String, CommandError> {
            if rest.trim().is_empty() { Err(CommandError::MissingValue(name)) } else { Ok(rest.to_string()) }
        };
        match word.to_ascii_lowercase().as_str() {
            // field values are taken as typed; only the form decides what trimming means
            "item" => Ok(Command::Item(rest.to_string())),
            "color" => Ok(Command::Color(rest.to_string())),
            "gender" => required("gender")?.parse().map(Command::Gender).map_err(CommandError::Invalid),
            "style" => Ok(Command::Style(required("style")?)),
            "pending" => Ok(Command::Pending(rest.to_string())),
            "add" => Ok(Command::Add),
            "remove" => Ok(Command::Remove(required("remove")?.trim().to_string())),
            "submit" => Ok(Command::Submit),
            "show" | "" => Ok(Command::Show),
            "suggest" => {
                let (which, prefix) = rest.trim().split_once(char::is_whitespace).unwrap_or((rest.trim(), ""));
                let vocab = match which.to_ascii_lowercase().as_str() {
                    "colors" | "color" => Vocabulary::Colors,
                    "items" | "item" => Vocabulary::Items,
                    "styles" | "style" => Vocabulary::Styles,
                    "" => return Err(CommandError::MissingValue("suggest")),
                    other => return Err(CommandError::Invalid(format!("no suggestions for '{other}'"))),
                };
                Ok(Command::Suggest(vocab, prefix.trim().to_string()))
            }
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }

    /// Actions this command feeds into the page reducer, in order.
    pub fn into_actions(self) -> Vec<Action> {
        match self {
            Command::Item(v) => vec![Action::SetField(Field::ClothingItem, v)],
            Command::Color(v) => vec![Action::SetField(Field::Color, v)],
            Command::Gender(g) => vec![Action::SetGender(g)],
            Command::Style(v) => vec![Action::SetField(Field::PendingStyle, v), Action::AddPendingStyle],
            Command::Pending(v) => vec![Action::SetField(Field::PendingStyle, v)],
            Command::Add => vec![Action::AddPendingStyle],
            Command::Remove(tag) => vec![Action::RemoveStyle(tag)],
            Command::Submit => vec![Action::SubmitStart],
            Command::Show | Command::Suggest(..) | Command::Help | Command::Quit => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_field_commands() {
        assert_eq!(Command::parse("item polo shirt"), Ok(Command::Item("polo shirt".into())));
        assert_eq!(Command::parse("Color  olive green\n"), Ok(Command::Color(" olive green".into())));
        assert_eq!(Command::parse("item"), Ok(Command::Item(String::new())));
        assert_eq!(Command::parse("gender Women"), Ok(Command::Gender(Gender::Women)));
        assert_eq!(Command::parse("style date night"), Ok(Command::Style("date night".into())));
        assert_eq!(Command::parse("remove  casual "), Ok(Command::Remove("casual".into())));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(Command::parse("gender"), Err(CommandError::MissingValue("gender")));
        assert!(matches!(Command::parse("gender other"), Err(CommandError::Invalid(_))));
        assert_eq!(Command::parse("style   "), Err(CommandError::MissingValue("style")));
        assert_eq!(Command::parse("dance"), Err(CommandError::Unknown("dance".into())));
        assert!(matches!(Command::parse("suggest shoes"), Err(CommandError::Invalid(_))));
    }

    #[test]
    fn parses_suggest_and_control() {
        assert_eq!(Command::parse("suggest colors bl"), Ok(Command::Suggest(Vocabulary::Colors, "bl".into())));
        assert_eq!(Command::parse("suggest styles"), Ok(Command::Suggest(Vocabulary::Styles, String::new())));
        assert_eq!(Command::parse(""), Ok(Command::Show));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn style_command_sets_pending_then_adds() {
        let actions = Command::Style("casual".into()).into_actions();
        assert!(matches!(actions.as_slice(), [Action::SetField(Field::PendingStyle, v), Action::AddPendingStyle] if v == "casual"));
        assert!(Command::Help.into_actions().is_empty());
    }
}
