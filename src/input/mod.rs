//! Keyboard input decoding.

pub mod keyboard;
