//! Conversion between 8-bit channels and normalized [`Components`].
//!
//! NOTE: Passing NaN as a component converts it to 0. Values outside of
//!       `[0, 1]` are clamped.

use num_traits::Float;

use crate::{Color, Component, Components};

fn to_unit<T: Float>(channel: u8) -> T {
    T::from(channel).unwrap_or_else(T::zero) / T::from(u8::MAX).unwrap_or_else(T::one)
}

fn from_unit<T: Float>(value: T) -> u8 {
    if value.is_nan() {
        return 0;
    }

    let max = T::from(u8::MAX).unwrap_or_else(T::one);
    let scaled = (value.max(T::zero()).min(T::one()) * max).round();
    scaled.to_u8().unwrap_or(u8::MAX)
}

impl Color {
    /// Return the red, green and blue channels normalized to `[0, 1]`.
    pub fn to_components(&self) -> Components {
        Components(to_unit(self.red), to_unit(self.green), to_unit(self.blue))
    }

    /// Return the alpha channel normalized to `[0, 1]`, if present.
    pub fn normalized_alpha(&self) -> Option<Component> {
        self.alpha().map(to_unit)
    }

    /// Create a color from normalized components and an optional normalized
    /// alpha.
    /// ```rust
    /// use hexpick::{Color, Components};
    /// let c = Color::from_components(Components(1.0, 0.5, 0.0), None);
    /// assert_eq!(c, Color::rgb(255, 128, 0));
    /// ```
    pub fn from_components(components: Components, alpha: Option<Component>) -> Self {
        let Components(red, green, blue) = components;
        Self::new(
            from_unit(red),
            from_unit(green),
            from_unit(blue),
            alpha.map(from_unit),
        )
    }
}
