//! Convert a [`Color`] to its canonical hexadecimal form and back.
//!
//! Hex strings carry no leading `#` and are 3, 6 or 8 digits long:
//!
//! ```rust
//! use hexpick::{hex, Color};
//! assert_eq!(hex::encode(&Color::rgb(255, 0, 0)), "f00");
//! assert_eq!(hex::decode("ff0000"), Ok(Color::rgb(255, 0, 0)));
//! assert!(hex::decode("ff00").unwrap_err().is_incomplete());
//! ```

use std::fmt::{self, Write};
use std::str::FromStr;

use thiserror::Error;

use crate::Color;

/// Length of the shorthand form, one digit per channel.
pub const SHORT_LEN: usize = 3;
/// Length of the full form without alpha.
pub const RGB_LEN: usize = 6;
/// Length of the full form with alpha. No valid hex string is longer.
pub const RGBA_LEN: usize = 8;

/// Reasons a piece of text does not decode to a [`Color`].
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The text is not 3, 6 or 8 characters long. While typing this is
    /// expected to resolve once more digits arrive.
    #[error("incomplete hex color: {len} digits, expected 3, 6 or 8")]
    Incomplete {
        /// Number of characters in the text.
        len: usize,
    },
    /// The text has a valid length but contains a non hex character.
    #[error("malformed hex color: {found:?} at position {position} is not a hex digit")]
    Malformed {
        /// Character index of the first offending character.
        position: usize,
        /// The offending character.
        found: char,
    },
}

impl DecodeError {
    /// True when the text may still become valid with more input.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete { .. })
    }

    /// True when the text contains characters that are not hex digits.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. })
    }
}

/// Encode a color into its canonical hex form.
///
/// Every channel is written as two lowercase digits. Colors without alpha
/// whose channels all have two identical digits collapse into the 3 digit
/// shorthand. Colors with alpha always use all 8 digits, because a 4 digit
/// form is not a valid hex string.
pub fn encode(color: &Color) -> String {
    let mut out = String::with_capacity(RGBA_LEN);
    // Writing into a String never fails.
    let _ = write_canonical(&mut out, color);
    out
}

fn is_doubled(channel: u8) -> bool {
    channel >> 4 == channel & 0x0f
}

fn write_canonical(w: &mut impl Write, color: &Color) -> fmt::Result {
    if color.alpha().is_none() && color.channels().all(is_doubled) {
        for channel in color.channels() {
            write!(w, "{:x}", channel & 0x0f)?;
        }
    } else {
        for channel in color.channels() {
            write!(w, "{:02x}", channel)?;
        }
    }
    Ok(())
}

/// Decode hex text into a color.
///
/// The length is checked first, so `"zz"` is [`DecodeError::Incomplete`]
/// rather than malformed. Upper and lower case digits are accepted. Only an
/// 8 digit text sets the alpha channel.
pub fn decode(text: &str) -> Result<Color, DecodeError> {
    let len = text.chars().count();
    if !matches!(len, SHORT_LEN | RGB_LEN | RGBA_LEN) {
        return Err(DecodeError::Incomplete { len });
    }

    let mut digits = [0_u8; RGBA_LEN];
    for (position, found) in text.chars().enumerate() {
        let digit = found
            .to_digit(16)
            .ok_or(DecodeError::Malformed { position, found })?;
        digits[position] = digit as u8;
    }

    if len == SHORT_LEN {
        let [r, g, b, ..] = digits;
        return Ok(Color::rgb(r * 0x11, g * 0x11, b * 0x11));
    }

    let byte = |i: usize| (digits[i * 2] << 4) | digits[i * 2 + 1];
    let alpha = (len == RGBA_LEN).then(|| byte(3));
    Ok(Color::new(byte(0), byte(1), byte(2), alpha))
}

/// Return true if `text` decodes and is already the canonical form of the
/// color it decodes to.
pub fn is_canonical(text: &str) -> bool {
    decode(text).is_ok_and(|color| encode(&color) == text)
}

impl Color {
    /// Return the canonical hex form of this color.
    pub fn to_hex(&self) -> String {
        encode(self)
    }

    /// Parse a color from hex text. See [`decode`].
    pub fn from_hex(text: &str) -> Result<Self, DecodeError> {
        decode(text)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_canonical(f, self)
    }
}

impl FromStr for Color {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}
