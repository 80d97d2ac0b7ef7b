mod embeddable;
mod entity;
mod field;
mod index;
mod relation;

pub use embeddable::*;
pub use entity::*;
pub use field::*;
pub use index::*;
pub use relation::*;
