//! Best-effort reconstruction of typed text from raw USB HID keyboard report
//! captures.
//!
//! A capture is treated as a flat sequence of two-byte records, each holding a
//! keycode and a modifier bitmask. Because the byte order within a record is
//! not known up front, the capture is decoded under both orderings (see
//! [`Layout`]) and both results are rendered side by side.
//!
//! ```
//! use ::keyscribe::{input::keyboard::Layout, render::Transcript};
//!
//! let transcript = Transcript::new(&[0x04, 0x02, 0x05, 0x00, 0x1E, 0x02], Layout::KeyFirst);
//! assert_eq!(transcript.reconstructed(), "Ab!");
//! ```
//!
//! [`Layout`]: crate::input::keyboard::Layout

pub mod capture;
pub mod cli;
pub mod errors;
pub mod input;
pub mod render;

pub use errors::{Error, Result};
