//! A [`Color`] holds the 8-bit red, green and blue channels of a color and an
//! optional alpha channel.

use std::hash::{Hash, Hasher};

use bitflags::bitflags;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that normalized components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that normalized components are stored as.
pub type Component = f64;

/// Represent the red, green and blue components of a color, normalized to the
/// range `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

bitflags! {
    /// Flags to mark any missing channels on a [`Color`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags : u8 {
        /// Set when the alpha channel of a [`Color`] is missing.
        const ALPHA_IS_NONE = 1 << 0;
    }
}

/// An 8-bit RGB color with an optional alpha channel.
///
/// A missing alpha channel means the color is fully opaque and the alpha is
/// not part of its hex form. The raw `alpha` field is meaningless while
/// [`Flags::ALPHA_IS_NONE`] is set, use [`Color::alpha`] to read it.
#[derive(Clone, Copy, Debug)]
pub struct Color {
    /// The red channel of the color.
    pub red: u8,
    /// The green channel of the color.
    pub green: u8,
    /// The blue channel of the color.
    pub blue: u8,
    /// The alpha channel of the color.
    pub alpha: u8,
    /// Holds any flags that might be enabled for this color.
    pub flags: Flags,
}

impl Color {
    /// Create a new [`Color`]. The alpha channel can take any value that can
    /// be converted into a [`ChannelDetails`], so a missing alpha is set with
    /// `None`:
    /// ```rust
    /// use hexpick::Color;
    /// let c = Color::new(255, 0, 0, None);
    /// assert_eq!(c.alpha(), None);
    /// let c = Color::new(255, 0, 0, 128);
    /// assert_eq!(c.alpha(), Some(128));
    /// ```
    pub fn new(red: u8, green: u8, blue: u8, alpha: impl Into<ChannelDetails>) -> Self {
        let mut flags = Flags::empty();
        let alpha = alpha
            .into()
            .value_and_flag(&mut flags, Flags::ALPHA_IS_NONE);

        Self {
            red,
            green,
            blue,
            alpha,
            flags,
        }
    }

    /// Create a color without an alpha channel.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 0,
            flags: Flags::ALPHA_IS_NONE,
        }
    }

    /// Create a color with an alpha channel.
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
            flags: Flags::empty(),
        }
    }

    /// Return the alpha channel of the color.
    pub fn alpha(&self) -> Option<u8> {
        if self.flags.contains(Flags::ALPHA_IS_NONE) {
            None
        } else {
            Some(self.alpha)
        }
    }

    /// Return a copy of this color with the alpha channel replaced.
    pub fn with_alpha(self, alpha: impl Into<ChannelDetails>) -> Self {
        Self::new(self.red, self.green, self.blue, alpha)
    }

    /// Iterate over the channels present in this color, in `r, g, b, a`
    /// order.
    pub fn channels(&self) -> impl Iterator<Item = u8> {
        [self.red, self.green, self.blue]
            .into_iter()
            .chain(self.alpha())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.red == other.red
            && self.green == other.green
            && self.blue == other.blue
            && self.alpha() == other.alpha()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.red.hash(state);
        self.green.hash(state);
        self.blue.hash(state);
        self.alpha().hash(state);
    }
}

/// A struct that holds details about a channel passed to [`Color::new`].
/// Any channel that can be passed implements a `From<?> for ChannelDetails`.
pub struct ChannelDetails {
    value: u8,
    is_none: bool,
}

impl ChannelDetails {
    /// Extract the value and set the given flag if the channel is none.
    pub fn value_and_flag(&self, flags: &mut Flags, flag: Flags) -> u8 {
        if self.is_none {
            *flags |= flag;
        }
        self.value
    }
}

impl From<u8> for ChannelDetails {
    fn from(value: u8) -> Self {
        Self {
            value,
            is_none: false,
        }
    }
}

impl From<Option<u8>> for ChannelDetails {
    fn from(value: Option<u8>) -> Self {
        if let Some(value) = value {
            Self::from(value)
        } else {
            Self {
                value: 0,
                is_none: true,
            }
        }
    }
}
