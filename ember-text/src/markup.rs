//! Construction of click events from markup tag arguments, e.g.
//! `<click:run_command:/help>`.

use thiserror::Error;

use crate::click::{ClickActionNames, ClickEvent};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TagError {
    #[error("Don't know how to turn {args:?} into a click event")]
    MalformedTag { args: Vec<String> },
    #[error("Unknown click event action '{0}'")]
    UnknownAction(String),
}

/// Builds a click event from the ordered arguments of a `click` markup tag.
///
/// Exactly two arguments are expected: the action name, matched
/// case-insensitively against `names`, and the value, taken verbatim.
pub fn build_click_event(names: &ClickActionNames, args: &[&str]) -> Result<ClickEvent, TagError> {
    let [action, value] = args else {
        return Err(TagError::MalformedTag {
            args: args.iter().map(|arg| arg.to_string()).collect(),
        });
    };
    let Some(action) = names.get(action) else {
        return Err(TagError::UnknownAction(action.to_string()));
    };
    Ok(ClickEvent::new(action, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::click::ClickAction;

    #[test]
    fn builds_from_two_arguments() {
        let names = ClickActionNames::default();
        let event = build_click_event(&names, &["run_command", "/help"]).unwrap();
        assert_eq!(event, ClickEvent::new(ClickAction::RunCommand, "/help".to_string()));
    }

    #[test]
    fn action_name_matching_ignores_case() {
        let names = ClickActionNames::default();
        let event = build_click_event(&names, &["Open_URL", "https://example.com"]).unwrap();
        assert_eq!(event.action, ClickAction::OpenUrl);
        assert_eq!(event.value, "https://example.com");
    }

    #[test]
    fn value_is_taken_verbatim() {
        let names = ClickActionNames::default();
        let event = build_click_event(&names, &["suggest_command", "  /msg Herobrine  "]).unwrap();
        assert_eq!(event.value, "  /msg Herobrine  ");
    }

    #[test]
    fn wrong_arity_is_a_malformed_tag() {
        let names = ClickActionNames::default();
        assert_eq!(
            build_click_event(&names, &["run_command"]),
            Err(TagError::MalformedTag {
                args: vec!["run_command".to_string()]
            })
        );
        assert_eq!(
            build_click_event(&names, &["run_command", "/a", "/b"]),
            Err(TagError::MalformedTag {
                args: vec!["run_command".to_string(), "/a".to_string(), "/b".to_string()]
            })
        );
        assert!(matches!(
            build_click_event(&names, &[]),
            Err(TagError::MalformedTag { .. })
        ));
    }

    #[test]
    fn unknown_action_keeps_the_original_token() {
        let names = ClickActionNames::default();
        assert_eq!(
            build_click_event(&names, &["TelePort", "here"]),
            Err(TagError::UnknownAction("TelePort".to_string()))
        );
    }

    #[test]
    fn same_input_builds_an_equal_event() {
        let names = ClickActionNames::default();
        let a = build_click_event(&names, &["copy_to_clipboard", "secret"]).unwrap();
        let b = build_click_event(&names, &["copy_to_clipboard", "secret"]).unwrap();
        assert_eq!(a, b);
    }
}
