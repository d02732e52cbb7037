pub mod compound;
pub mod snbt;
pub mod tag;

pub use compound::NbtCompound;
pub use snbt::{from_snbt, to_snbt, SnbtError};
pub use tag::NbtTag;
