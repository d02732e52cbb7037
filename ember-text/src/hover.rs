use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{identifier::Identifier, TextComponent};

/// Shows an item when the text is hovered.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ShowItem {
    /// Resource identifier of the item
    pub id: Identifier,
    /// Number of the items in the stack
    pub count: i32,
    /// NBT information about the item (sNBT format)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbt: Option<String>,
}

/// Shows an entity when the text is hovered.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ShowEntity {
    /// Resource identifier of the entity
    #[serde(rename = "type")]
    pub kind: Identifier,
    /// The entity's UUID
    pub id: Uuid,
    /// Optional custom name for the entity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Box<TextComponent>>,
}

/// Content displayed in a tooltip when the player hovers over the text.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "action", content = "contents", rename_all = "snake_case")]
pub enum HoverEvent {
    /// Displays a tooltip with the given text.
    ShowText(Cow<'static, str>),
    /// Shows an item.
    ShowItem(ShowItem),
    /// Shows an entity.
    ShowEntity(ShowEntity),
}
