//! Decoding of raw HID keyboard report bytes into text tokens.

mod codes;
mod modifiers;
mod record;
mod resolver;

pub use codes::*;
pub use modifiers::*;
pub use record::*;
pub use resolver::*;
