pub mod field;
pub mod pointer;

pub use field::wire_field_change;
pub use pointer::{wire_pointer_handlers, KnobWiring};
