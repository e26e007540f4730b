//! hexpick provides the color value, hex codec and input state behind a
//! hexadecimal color field.
//!
//! ```rust
//! use hexpick::Color;
//! let c: Color = "ff0000".parse().unwrap();
//! assert_eq!(c.to_string(), "f00");
//! ```

#![deny(missing_docs)]

mod color;
pub mod hex;
mod input;
mod normalized;
#[cfg(feature = "serde")]
mod serde_support;

pub use color::{ChannelDetails, Color, Component, Components, Flags};
pub use hex::DecodeError;
pub use input::{Edit, HexInput};
