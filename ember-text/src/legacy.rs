//! The legacy string form of hover events: the whole payload is one sNBT
//! document carried as the literal content of a single text component.
//! Pre-structured-JSON clients both produce and expect this shape.

use thiserror::Error;
use uuid::Uuid;

use ember_nbt::{from_snbt, to_snbt, NbtCompound, SnbtError};

use crate::hover::{ShowEntity, ShowItem};
use crate::identifier::Identifier;
use crate::TextComponent;

const ITEM_TYPE: &str = "id";
const ITEM_COUNT: &str = "Count";
const ITEM_TAG: &str = "tag";

const ENTITY_NAME: &str = "name";
const ENTITY_TYPE: &str = "type";
const ENTITY_ID: &str = "id";

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum LegacyEventError {
    #[error("Legacy events must be a single text component")]
    InvalidEventShape,
    #[error("Malformed sNBT payload: {0}")]
    MalformedDocument(#[from] SnbtError),
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),
    #[error("Malformed entity id: {0}")]
    MalformedIdentifier(#[from] uuid::Error),
    #[error("Failed to decode the display name: {0}")]
    NameDecoding(#[source] BoxedError),
    #[error("Failed to encode: {0}")]
    Serialization(#[source] BoxedError),
}

/// Decodes a legacy show-item payload from a single text component.
///
/// `Count` defaults to 1 when absent. A missing `tag` key and an explicit
/// empty `tag` compound both decode to no NBT; the latter shape is produced
/// by some legacy writers and must stay accepted.
pub fn decode_show_item(input: &TextComponent) -> Result<ShowItem, LegacyEventError> {
    let content = assert_plain_text(input)?;
    let contents = from_snbt(content)?;
    let id = contents
        .get_string(ITEM_TYPE)
        .ok_or(LegacyEventError::MissingField(ITEM_TYPE))?;
    let nbt = match contents.get_compound(ITEM_TAG) {
        Some(tag) if !tag.is_empty() => Some(to_snbt(tag)),
        _ => None,
    };
    Ok(ShowItem {
        id: Identifier::from(id.as_str()),
        count: i32::from(contents.get_byte(ITEM_COUNT).unwrap_or(1)),
        nbt,
    })
}

/// Encodes a show-item payload into its legacy single-component form.
///
/// An absent `nbt` omits the `tag` key entirely; it is never written as an
/// empty compound.
pub fn encode_show_item(input: &ShowItem) -> Result<TextComponent, LegacyEventError> {
    let mut contents = NbtCompound::new();
    contents.put(ITEM_TYPE.to_string(), input.id.to_string());
    contents.put(ITEM_COUNT.to_string(), input.count as i8);
    if let Some(nbt) = &input.nbt {
        contents.put(ITEM_TAG.to_string(), from_snbt(nbt)?);
    }
    Ok(TextComponent::text_string(to_snbt(&contents)))
}

/// Decodes a legacy show-entity payload. The nested display name is itself
/// a serialized component; `decode_name` is the caller's codec for it and
/// is only invoked when a `name` key is present.
pub fn decode_show_entity<F, E>(
    input: &TextComponent,
    decode_name: F,
) -> Result<ShowEntity, LegacyEventError>
where
    F: FnOnce(&str) -> Result<TextComponent, E>,
    E: Into<BoxedError>,
{
    let content = assert_plain_text(input)?;
    let contents = from_snbt(content)?;
    let kind = contents
        .get_string(ENTITY_TYPE)
        .ok_or(LegacyEventError::MissingField(ENTITY_TYPE))?;
    let id = contents
        .get_string(ENTITY_ID)
        .ok_or(LegacyEventError::MissingField(ENTITY_ID))?
        .parse::<Uuid>()?;
    let name = match contents.get_string(ENTITY_NAME) {
        Some(name) => Some(Box::new(
            decode_name(name).map_err(|error| LegacyEventError::NameDecoding(error.into()))?,
        )),
        None => None,
    };
    Ok(ShowEntity {
        kind: Identifier::from(kind.as_str()),
        id,
        name,
    })
}

/// Encodes a show-entity payload into its legacy single-component form,
/// serializing the display name through `encode_name` when present.
pub fn encode_show_entity<F, E>(
    input: &ShowEntity,
    encode_name: F,
) -> Result<TextComponent, LegacyEventError>
where
    F: FnOnce(&TextComponent) -> Result<String, E>,
    E: Into<BoxedError>,
{
    let mut contents = NbtCompound::new();
    contents.put(ENTITY_ID.to_string(), input.id.to_string());
    contents.put(ENTITY_TYPE.to_string(), input.kind.to_string());
    if let Some(name) = &input.name {
        let name = encode_name(name.as_ref())
            .map_err(|error| LegacyEventError::Serialization(error.into()))?;
        contents.put(ENTITY_NAME.to_string(), name);
    }
    Ok(TextComponent::text_string(to_snbt(&contents)))
}

fn assert_plain_text(input: &TextComponent) -> Result<&str, LegacyEventError> {
    input
        .as_plain_text()
        .ok_or(LegacyEventError::InvalidEventShape)
}
