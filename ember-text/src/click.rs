use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Action to take on click of the text.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ClickAction {
    /// Opens a URL
    OpenUrl,
    /// Opens a File
    OpenFile,
    /// Works in signs, but only on the root text component
    RunCommand,
    /// Replaces the contents of the chat box with the text, not necessarily a
    /// command.
    SuggestCommand,
    /// Only usable within written books. Changes the page of the book. Indexing
    /// starts at 1.
    ChangePage,
    /// Copies the given text to system clipboard
    CopyToClipboard,
}

impl ClickAction {
    /// The canonical lowercase name of this action.
    pub fn name(&self) -> &'static str {
        match self {
            ClickAction::OpenUrl => "open_url",
            ClickAction::OpenFile => "open_file",
            ClickAction::RunCommand => "run_command",
            ClickAction::SuggestCommand => "suggest_command",
            ClickAction::ChangePage => "change_page",
            ClickAction::CopyToClipboard => "copy_to_clipboard",
        }
    }

    const ALL: [ClickAction; 6] = [
        ClickAction::OpenUrl,
        ClickAction::OpenFile,
        ClickAction::RunCommand,
        ClickAction::SuggestCommand,
        ClickAction::ChangePage,
        ClickAction::CopyToClipboard,
    ];
}

/// The action-name table. Built once at startup and shared; lookup is
/// case-insensitive on the input token.
#[derive(Clone, Debug)]
pub struct ClickActionNames {
    names: HashMap<String, ClickAction>,
}

impl Default for ClickActionNames {
    fn default() -> Self {
        Self {
            names: ClickAction::ALL
                .iter()
                .map(|action| (action.name().to_string(), *action))
                .collect(),
        }
    }
}

impl ClickActionNames {
    pub fn get(&self, name: &str) -> Option<ClickAction> {
        self.names.get(&name.to_lowercase()).copied()
    }
}

/// An action attached to text, triggered when the text is clicked.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClickEvent {
    pub action: ClickAction,
    pub value: String,
}

impl ClickEvent {
    pub fn new(action: ClickAction, value: String) -> Self {
        Self { action, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let names = ClickActionNames::default();
        assert_eq!(names.get("run_command"), Some(ClickAction::RunCommand));
        assert_eq!(names.get("RUN_COMMAND"), Some(ClickAction::RunCommand));
        assert_eq!(names.get("Open_Url"), Some(ClickAction::OpenUrl));
        assert_eq!(names.get("teleport"), None);
    }

    #[test]
    fn every_action_has_a_unique_name() {
        let names = ClickActionNames::default();
        assert_eq!(names.names.len(), ClickAction::ALL.len());
        for action in ClickAction::ALL {
            assert_eq!(names.get(action.name()), Some(action));
        }
    }
}
