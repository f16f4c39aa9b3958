//! Line-oriented command parsing for the terminal front end.

use thiserror::Error;
use wizard_core::{ContentType, ExportFormat, KeywordView, Msg, ParseChoiceError, Tone};

pub const HELP: &str = "\
Commands:
  desc <text>            campaign description
  audience <text>        target audience
  tone <name>            professional | casual | technical | enthusiastic | authoritative
  type <name>            article | linkedin | twitter | case-study
  submit                 generate keyword suggestions
  add <keyword>          add a custom keyword
  remove <keyword|#>     remove a keyword
  toggle <keyword|#>     select or deselect a keyword
  all | none             select every keyword or none
  generate               generate content from the selection
  regenerate             generate again from the same selection
  edit <text>            replace the body; write \\n for a line break
  back | resume          move between steps
  export md|txt|html     write the content to the output directory
  dismiss                hide the error banner
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command '{0}', type 'help' for the list")]
    UnknownCommand(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error(transparent)]
    BadChoice(#[from] ParseChoiceError),
    #[error("unknown export format '{0}', use md, txt or html")]
    UnknownFormat(String),
    #[error("no keyword #{0}")]
    NoSuchKeyword(usize),
}

/// Parses one input line. Numeric keyword arguments refer to the 1-based
/// positions shown on the keyword screen.
pub fn parse_command(line: &str, keywords: &[KeywordView]) -> Result<Command, InputError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let msg = match word.to_ascii_lowercase().as_str() {
        "" => Msg::NoOp,
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        "desc" => Msg::DescriptionChanged(rest.to_string()),
        "audience" => Msg::AudienceChanged(rest.to_string()),
        "tone" => Msg::ToneSelected(required("tone", rest)?.parse::<Tone>()?),
        "type" => Msg::ContentTypeSelected(required("type", rest)?.parse::<ContentType>()?),
        "submit" => Msg::CampaignSubmitted,
        "add" => Msg::KeywordAdded(required("add", rest)?.to_string()),
        "remove" => Msg::KeywordRemoved(keyword_arg("remove", rest, keywords)?),
        "toggle" => Msg::KeywordToggled(keyword_arg("toggle", rest, keywords)?),
        "all" => Msg::SelectAllKeywords,
        "none" => Msg::SelectNoKeywords,
        "generate" => Msg::GenerateClicked,
        "regenerate" => Msg::RegenerateClicked,
        "edit" => Msg::DraftEdited(rest.replace("\\n", "\n")),
        "back" => Msg::BackClicked,
        "resume" => Msg::ResumeClicked,
        "export" => Msg::ExportRequested(export_format(required("export", rest)?)?),
        "dismiss" => Msg::ErrorDismissed,
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };
    Ok(Command::Dispatch(msg))
}

fn required<'a>(command: &'static str, rest: &'a str) -> Result<&'a str, InputError> {
    if rest.is_empty() {
        Err(InputError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

fn keyword_arg(
    command: &'static str,
    rest: &str,
    keywords: &[KeywordView],
) -> Result<String, InputError> {
    let arg = required(command, rest)?;
    match arg.parse::<usize>() {
        Ok(index) => index
            .checked_sub(1)
            .and_then(|i| keywords.get(i))
            .map(|keyword| keyword.text.clone())
            .ok_or(InputError::NoSuchKeyword(index)),
        Err(_) => Ok(arg.to_string()),
    }
}

fn export_format(arg: &str) -> Result<ExportFormat, InputError> {
    match arg.to_ascii_lowercase().as_str() {
        "md" | "markdown" => Ok(ExportFormat::Markdown),
        "txt" | "text" => Ok(ExportFormat::PlainText),
        "html" | "pdf" | "print" => Ok(ExportFormat::PrintableHtml),
        _ => Err(InputError::UnknownFormat(arg.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords() -> Vec<KeywordView> {
        ["seo", "growth"]
            .into_iter()
            .map(|text| KeywordView {
                text: text.to_string(),
                selected: false,
            })
            .collect()
    }

    fn dispatched(line: &str) -> Msg {
        match parse_command(line, &keywords()) {
            Ok(Command::Dispatch(msg)) => msg,
            other => panic!("expected a message for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn text_arguments_keep_inner_spacing() {
        assert_eq!(
            dispatched("desc   Launch our  new app "),
            Msg::DescriptionChanged("Launch our  new app".to_string())
        );
        assert_eq!(dispatched("audience"), Msg::AudienceChanged(String::new()));
    }

    #[test]
    fn choices_parse_case_insensitively() {
        assert_eq!(dispatched("tone Casual"), Msg::ToneSelected(Tone::Casual));
        assert_eq!(
            dispatched("TYPE case-study"),
            Msg::ContentTypeSelected(ContentType::CaseStudy)
        );
        assert!(matches!(
            parse_command("tone grumpy", &[]),
            Err(InputError::BadChoice(_))
        ));
    }

    #[test]
    fn keyword_numbers_resolve_against_the_list() {
        assert_eq!(dispatched("toggle 2"), Msg::KeywordToggled("growth".to_string()));
        assert_eq!(dispatched("remove seo"), Msg::KeywordRemoved("seo".to_string()));
        assert_eq!(
            parse_command("toggle 3", &keywords()),
            Err(InputError::NoSuchKeyword(3))
        );
        assert_eq!(
            parse_command("toggle 0", &keywords()),
            Err(InputError::NoSuchKeyword(0))
        );
    }

    #[test]
    fn edit_expands_escaped_newlines() {
        assert_eq!(
            dispatched(r"edit first tweet\n\nsecond tweet"),
            Msg::DraftEdited("first tweet\n\nsecond tweet".to_string())
        );
    }

    #[test]
    fn export_formats_and_errors() {
        assert_eq!(
            dispatched("export md"),
            Msg::ExportRequested(ExportFormat::Markdown)
        );
        assert_eq!(
            dispatched("export HTML"),
            Msg::ExportRequested(ExportFormat::PrintableHtml)
        );
        assert_eq!(
            parse_command("export", &[]),
            Err(InputError::MissingArgument("export"))
        );
        assert_eq!(
            parse_command("export docx", &[]),
            Err(InputError::UnknownFormat("docx".to_string()))
        );
    }

    #[test]
    fn control_commands() {
        assert_eq!(parse_command("quit", &[]), Ok(Command::Quit));
        assert_eq!(parse_command("help", &[]), Ok(Command::Help));
        assert_eq!(parse_command("   ", &[]), Ok(Command::Dispatch(Msg::NoOp)));
        assert_eq!(
            parse_command("launch", &[]),
            Err(InputError::UnknownCommand("launch".to_string()))
        );
    }
}
