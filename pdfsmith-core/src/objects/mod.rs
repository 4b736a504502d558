//! PDF value model: primitives, containers, stream payloads and their syntax.

mod array;
mod dictionary;
mod primitive;
pub mod serializer;
mod stream;

pub use array::Array;
pub use dictionary::Dictionary;
pub use primitive::{Object, ObjectId};
pub use serializer::{ObjectSerializer, ResolveReference};
pub use stream::Stream;
