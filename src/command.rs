//! Ribbon command tags
//!
//! Every ribbon control names the action it triggers either through its tag
//! (`action_id` or `action_id:parameter`) or, without a tag, through its
//! control id. One action class therefore serves many buttons, for example
//! `align_guide:left` and `align_guide:right`.

use miette::NamedSource;
use pest::Parser;
use pest::error::InputLocation;
use pest_derive::Parser;

use crate::errors::CommandError;

#[derive(Parser)]
#[grammar = "command.pest"]
pub struct CommandParser;

/// A resolved control: which action to run and with what parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Command {
    pub action_id: String,
    /// Empty when the tag has none
    pub parameter: String,
}

impl Command {
    pub fn new(action_id: impl Into<String>, parameter: impl Into<String>) -> Self {
        Command { action_id: action_id.into(), parameter: parameter.into() }
    }

    /// Parse a tag such as `duplicate_shape:right`
    pub fn parse(tag: &str) -> Result<Command, CommandError> {
        let mut pairs = CommandParser::parse(Rule::tag, tag).map_err(|e| malformed(tag, e))?;

        let mut command = Command::new("", "");
        if let Some(pair) = pairs.next() {
            for inner in pair.into_inner() {
                match inner.as_rule() {
                    Rule::action_id => command.action_id = inner.as_str().to_string(),
                    Rule::parameter => command.parameter = inner.as_str().to_string(),
                    _ => {}
                }
            }
        }
        Ok(command)
    }

    /// The command of a control: its tag when it has one, otherwise its id
    pub fn resolve(control_id: &str, tag: Option<&str>) -> Result<Command, CommandError> {
        match tag {
            Some(tag) if !tag.is_empty() => Command::parse(tag),
            _ => Ok(Command::new(control_id, "")),
        }
    }
}

fn malformed(tag: &str, err: pest::error::Error<Rule>) -> CommandError {
    let (offset, len) = match err.location {
        InputLocation::Pos(pos) => (pos, 0),
        InputLocation::Span((start, end)) => (start, end.saturating_sub(start)),
    };
    CommandError::MalformedTag {
        src: NamedSource::new("tag", tag.to_string()),
        span: (offset, len).into(),
        message: err.variant.message().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_id() {
        assert_eq!(Command::parse("swap_text").unwrap(), Command::new("swap_text", ""));
    }

    #[test]
    fn parse_with_parameter() {
        let command = Command::parse("change_shape_type:RoundedRectangle").unwrap();
        assert_eq!(command.action_id, "change_shape_type");
        assert_eq!(command.parameter, "RoundedRectangle");
    }

    #[test]
    fn parameter_keeps_colons() {
        assert_eq!(Command::parse("change_language:en:US").unwrap().parameter, "en:US");
    }

    #[test]
    fn uppercase_id_is_malformed() {
        let err = Command::parse("Swap").unwrap_err();
        match err {
            CommandError::MalformedTag { span, .. } => assert_eq!(span.offset(), 0),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_parameter_is_malformed() {
        match Command::parse("align_guide:").unwrap_err() {
            CommandError::MalformedTag { span, .. } => assert!(span.offset() >= 11),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn control_id_without_tag() {
        assert_eq!(Command::resolve("clear_text", None).unwrap(), Command::new("clear_text", ""));
        assert_eq!(Command::resolve("clear_text", Some("")).unwrap(), Command::new("clear_text", ""));
        assert_eq!(
            Command::resolve("align_left_button", Some("align_guide:left")).unwrap(),
            Command::new("align_guide", "left")
        );
    }
}
