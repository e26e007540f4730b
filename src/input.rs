//! State behind a hex text input bound to a [`Color`].
//!
//! The text buffer is kept apart from the committed color so partial input
//! can be typed without disturbing the color. A color is only pushed to the
//! update callback when its canonical hex actually changes, which keeps a
//! bidirectional binding between the owner of the color and the input from
//! looping.

use log::{debug, trace};

use crate::hex::{self, DecodeError, RGBA_LEN};
use crate::Color;

/// What a call to [`HexInput::set_text`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    /// The text was longer than a hex string can be and was ignored.
    Rejected,
    /// The buffer was updated but needs more digits.
    Incomplete,
    /// The buffer holds characters that are not hex digits.
    Malformed,
    /// The buffer decodes to the color that is already committed.
    Unchanged,
    /// The buffer decodes to a new color which was committed and passed to
    /// the update callback.
    Committed(Color),
}

/// A hex text input for a color.
///
/// ```rust
/// use hexpick::{Color, Edit, HexInput};
/// let mut seen = vec![];
/// let mut input = HexInput::new(Color::rgb(255, 0, 0), |c: &Color| seen.push(*c));
/// assert_eq!(input.text(), "f00");
/// assert_eq!(input.set_text("00"), Edit::Incomplete);
/// assert_eq!(input.set_text("00f"), Edit::Committed(Color::rgb(0, 0, 255)));
/// drop(input);
/// assert_eq!(seen, vec![Color::rgb(0, 0, 255)]);
/// ```
pub struct HexInput<F: FnMut(&Color)> {
    text: String,
    error: bool,
    color: Color,
    hex: String,
    on_change: F,
}

impl<F: FnMut(&Color)> HexInput<F> {
    /// Create an input showing the canonical hex of `color`. `on_change` is
    /// called every time an edit commits a new color.
    pub fn new(color: Color, on_change: F) -> Self {
        let hex = hex::encode(&color);

        Self {
            text: hex.clone(),
            error: false,
            color,
            hex,
            on_change,
        }
    }

    /// The current contents of the text buffer.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when the buffer does not hold a valid hex string.
    pub fn has_error(&self) -> bool {
        self.error
    }

    /// The last committed color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The canonical hex of the last committed color.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Replace the buffer with `text`, as after a keystroke.
    pub fn set_text(&mut self, text: &str) -> Edit {
        if text.chars().count() > RGBA_LEN {
            trace!("Ignoring over-length hex input {text:?}");
            return Edit::Rejected;
        }

        self.text.clear();
        self.text.push_str(text);

        let color = match hex::decode(text) {
            Ok(color) => color,
            Err(err) => {
                trace!("Hex input {text:?} not committed: {err}");
                self.error = true;
                return match err {
                    DecodeError::Incomplete { .. } => Edit::Incomplete,
                    DecodeError::Malformed { .. } => Edit::Malformed,
                };
            }
        };

        self.error = false;

        let hex = hex::encode(&color);
        if hex == self.hex {
            return Edit::Unchanged;
        }

        debug!("Committing color #{hex} from hex input");
        self.color = color;
        self.hex = hex;
        (self.on_change)(&self.color);

        Edit::Committed(color)
    }

    /// Sync the input with a color changed by its owner. The buffer is only
    /// reset when the canonical hex differs from the committed one, so text
    /// that already means `color` is left as typed. The update callback is
    /// not called.
    pub fn set_color(&mut self, color: Color) {
        let hex = hex::encode(&color);
        if hex == self.hex {
            return;
        }

        debug!("Syncing hex input to #{hex}");
        self.text.clone_from(&hex);
        self.color = color;
        self.hex = hex;
        self.error = false;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// An input starting at red that records every committed color.
    fn input() -> (HexInput<impl FnMut(&Color)>, Rc<RefCell<Vec<Color>>>) {
        let seen = Rc::new(RefCell::new(vec![]));
        let sink = Rc::clone(&seen);
        let input = HexInput::new(Color::rgb(255, 0, 0), move |c: &Color| {
            sink.borrow_mut().push(*c)
        });
        (input, seen)
    }

    #[test_log::test]
    fn starts_with_canonical_text() {
        let (input, seen) = input();
        assert_eq!(input.text(), "f00");
        assert_eq!(input.hex(), "f00");
        assert_eq!(input.color(), Color::rgb(255, 0, 0));
        assert!(!input.has_error());
        assert!(seen.borrow().is_empty());
    }

    #[test_log::test]
    fn typing_commits_once_complete() {
        let (mut input, seen) = input();

        assert_eq!(input.set_text(""), Edit::Incomplete);
        assert!(input.has_error());
        assert_eq!(input.set_text("1"), Edit::Incomplete);
        assert_eq!(input.set_text("12"), Edit::Incomplete);
        assert_eq!(
            input.set_text("123"),
            Edit::Committed(Color::rgb(0x11, 0x22, 0x33))
        );
        assert!(!input.has_error());
        assert_eq!(input.set_text("1234"), Edit::Incomplete);
        assert_eq!(input.set_text("12345"), Edit::Incomplete);
        assert_eq!(
            input.set_text("123456"),
            Edit::Committed(Color::rgb(0x12, 0x34, 0x56))
        );

        assert_eq!(input.text(), "123456");
        assert_eq!(input.hex(), "123456");
        assert_eq!(
            *seen.borrow(),
            vec![Color::rgb(0x11, 0x22, 0x33), Color::rgb(0x12, 0x34, 0x56)]
        );
    }

    #[test_log::test]
    fn incomplete_keeps_committed_color() {
        let (mut input, seen) = input();
        assert_eq!(input.set_text("ab"), Edit::Incomplete);
        assert_eq!(input.text(), "ab");
        assert_eq!(input.color(), Color::rgb(255, 0, 0));
        assert!(seen.borrow().is_empty());
    }

    #[test_log::test]
    fn malformed_keeps_committed_color() {
        let (mut input, seen) = input();
        assert_eq!(input.set_text("zz0000"), Edit::Malformed);
        assert!(input.has_error());
        assert_eq!(input.text(), "zz0000");
        assert_eq!(input.color(), Color::rgb(255, 0, 0));
        assert!(seen.borrow().is_empty());
    }

    #[test_log::test]
    fn same_canonical_form_is_not_propagated() {
        let (mut input, seen) = input();
        input.set_text("f0");
        assert_eq!(input.set_text("ff0000"), Edit::Unchanged);
        assert!(!input.has_error());
        assert_eq!(input.text(), "ff0000");
        assert_eq!(input.set_text("F00"), Edit::Unchanged);
        assert!(seen.borrow().is_empty());
    }

    #[test_log::test]
    fn over_length_edit_is_ignored() {
        let (mut input, seen) = input();
        assert_eq!(
            input.set_text("12345678"),
            Edit::Committed(Color::rgba(0x12, 0x34, 0x56, 0x78))
        );
        assert_eq!(input.set_text("123456789"), Edit::Rejected);
        assert_eq!(input.text(), "12345678");
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test_log::test]
    fn external_color_resets_buffer_without_callback() {
        let (mut input, seen) = input();
        input.set_text("zz");
        assert!(input.has_error());

        input.set_color(Color::rgb(0, 0x80, 0));
        assert_eq!(input.text(), "008000");
        assert_eq!(input.hex(), "008000");
        assert!(!input.has_error());
        assert!(seen.borrow().is_empty());
    }

    #[test_log::test]
    fn external_sync_of_committed_color_keeps_text() {
        let (mut input, seen) = input();
        let Edit::Committed(color) = input.set_text("00ff00") else {
            panic!("expected a commit");
        };

        // The owner echoes the committed color back.
        input.set_color(color);
        assert_eq!(input.text(), "00ff00");
        assert_eq!(input.hex(), "0f0");
        assert_eq!(*seen.borrow(), vec![Color::rgb(0, 255, 0)]);
    }
}
