pub mod keyboard;
pub mod keys;
pub mod pointer;

pub use keyboard::wire_keydown;
pub use pointer::{wire_pointer_handlers, PointerWiring};
