use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use click::ClickEvent;
use color::Color;
use hover::HoverEvent;
use style::Style;

pub mod click;
pub mod color;
pub mod hover;
pub mod identifier;
pub mod legacy;
pub mod markup;
pub mod style;

/// Represents a Text component
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TextComponent {
    /// The actual text
    #[serde(flatten)]
    pub content: TextContent,
    /// Style of the text. Bold, Italic, underline, Color...
    /// Also has `ClickEvent
    #[serde(flatten)]
    pub style: Style,
    /// Extra text components
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<TextComponent>,
}

impl TextComponent {
    pub fn text(text: &str) -> Self {
        Self {
            content: TextContent::Text {
                text: text.to_string().into(),
            },
            style: Style::default(),
            extra: vec![],
        }
    }

    pub fn text_string(text: String) -> Self {
        Self {
            content: TextContent::Text { text: text.into() },
            style: Style::default(),
            extra: vec![],
        }
    }

    pub fn add_child(mut self, child: TextComponent) -> Self {
        self.extra.push(child);
        self
    }

    /// The literal content of this component, if it is a plain text node
    /// with no children. Legacy-encoded events are carried in exactly this
    /// shape; anything else is not a valid legacy carrier.
    pub fn as_plain_text(&self) -> Option<&str> {
        if !self.extra.is_empty() {
            return None;
        }
        match &self.content {
            TextContent::Text { text } => Some(text),
            _ => None,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.style.color = Some(color);
        self
    }

    pub fn color_named(mut self, color: color::NamedColor) -> Self {
        self.style.color = Some(Color::Named(color));
        self
    }

    pub fn color_rgb(mut self, color: color::RGBColor) -> Self {
        self.style.color = Some(Color::Rgb(color));
        self
    }

    /// Makes the text bold
    pub fn bold(mut self) -> Self {
        self.style.bold = Some(true);
        self
    }

    /// Makes the text italic
    pub fn italic(mut self) -> Self {
        self.style.italic = Some(true);
        self
    }

    /// Makes the text underlined
    pub fn underlined(mut self) -> Self {
        self.style.underlined = Some(true);
        self
    }

    /// Makes the text strikethrough
    pub fn strikethrough(mut self) -> Self {
        self.style.strikethrough = Some(true);
        self
    }

    /// Makes the text obfuscated
    pub fn obfuscated(mut self) -> Self {
        self.style.obfuscated = Some(true);
        self
    }

    /// When the text is shift-clicked by a player, this string is inserted in their chat input. It does not overwrite any existing text the player was writing. This only works in chat messages
    pub fn insertion(mut self, text: String) -> Self {
        self.style.insertion = Some(text);
        self
    }

    /// Allows for events to occur when the player clicks on text. Only work in chat.
    pub fn click_event(mut self, event: ClickEvent) -> Self {
        self.style.click_event = Some(event);
        self
    }

    /// Allows for a tooltip to be displayed when the player hovers their mouse over text.
    pub fn hover_event(mut self, event: HoverEvent) -> Self {
        self.style.hover_event = Some(event);
        self
    }

    /// Allows you to change the font of the text.
    /// Default fonts: `minecraft:default`, `minecraft:uniform`, `minecraft:alt`, `minecraft:illageralt`
    pub fn font(mut self, identifier: String) -> Self {
        self.style.font = Some(identifier);
        self
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum TextContent {
    /// Raw Text
    Text { text: Cow<'static, str> },
    /// Translated text
    Translate {
        translate: Cow<'static, str>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        with: Vec<TextComponent>,
    },
    /// Displays the name of one or more entities found by a selector.
    EntityNames {
        selector: Cow<'static, str>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        separator: Option<Cow<'static, str>>,
    },
    /// A keybind identifier
    /// https://minecraft.wiki/w/Controls#Configurable_controls
    Keybind { keybind: Cow<'static, str> },
}

impl Default for TextContent {
    fn default() -> Self {
        Self::Text { text: "".into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_requires_text_content_and_no_children() {
        assert_eq!(TextComponent::text("hello").as_plain_text(), Some("hello"));

        let with_child = TextComponent::text("hello").add_child(TextComponent::text("world"));
        assert_eq!(with_child.as_plain_text(), None);

        let keybind = TextComponent {
            content: TextContent::Keybind {
                keybind: "key.jump".into(),
            },
            style: Style::default(),
            extra: vec![],
        };
        assert_eq!(keybind.as_plain_text(), None);
    }

    #[test]
    fn styling_does_not_break_the_plain_text_shape() {
        let styled = TextComponent::text("hi").bold().color_named(color::NamedColor::Gold);
        assert_eq!(styled.as_plain_text(), Some("hi"));
    }
}
