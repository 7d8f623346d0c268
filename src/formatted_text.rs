/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;

use crate::{Directive, SgrCode, find_directive_tokens, visible_len};

/// The main struct that we have to consider is `FormattedText`. It has two fields:
/// - `content` - the fully expanded string, with every shorthand markup directive
///   replaced by its real escape sequence and a trailing reset appended.
/// - `display_len` - how many character cells `content` occupies in a terminal, ie, its
///   length with the escape sequences ignored.
///
/// The value is immutable once constructed: `display_len` is computed exactly once, at
/// construction time, from the expanded content. Both fields are reachable only through
/// the read accessors, so the two can never drift apart.
///
/// Writing the value to an output sink shows only the expanded content; the [Display]
/// impl never leaks the struct shape.
///
/// # Example usage:
///
/// ```rust
/// use r3bl_ansi_markup::expand;
///
/// let formatted = expand("[[208mHello, world!");
/// assert_eq!(formatted.display_len(), 13);
/// assert!(formatted.content().ends_with("\x1b[0m"));
/// println!("{formatted}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedText {
    content: String,
    display_len: usize,
}

pub mod sizing {
    /// Inline buffer size for [super::FormattedText::to_small_str]. Larger strings
    /// spill to the heap.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;
}

/// Expand every shorthand markup directive in `arg_text` into its real escape sequence
/// and append a trailing reset, so no color state leaks past the end of this string
/// into whatever is printed next.
///
/// Replacement is literal and whole-string: each scanned token is replaced everywhere
/// it occurs in the working copy, in scan order. Expansion is a pure function of the
/// token text, so two identical tokens always expand identically. Malformed tokens (out
/// of range numbers, bad separators) are removed without a trace; this is the only
/// error-like condition and it is silent, so this function always succeeds. A debug
/// event is emitted per removed token for anyone running with a tracing subscriber.
pub fn expand(arg_text: &str) -> FormattedText {
    let mut acc = String::from(arg_text);

    for token in find_directive_tokens(arg_text) {
        match Directive::classify(token) {
            Some(directive) => {
                acc = acc.replace(token, &directive.to_string());
            }
            None => {
                tracing::debug!(
                    message = "Removing malformed color markup directive",
                    token = %token
                );
                acc = acc.replace(token, "");
            }
        }
    }

    acc.push_str(&SgrCode::Reset.to_string());

    let display_len = visible_len(&acc);
    FormattedText {
        content: acc,
        display_len,
    }
}

mod formatted_text_impl {
    use super::*;

    impl FormattedText {
        /// The expanded string, escape sequences included.
        pub fn content(&self) -> &str { &self.content }

        /// Count of characters that occupy columns in a terminal. Always at most the
        /// `char` length of [Self::content].
        pub fn display_len(&self) -> usize { self.display_len }

        pub fn println(&self) {
            println!("{}", self);
        }

        pub fn print(&self) {
            print!("{}", self);
        }

        /// This is different than the [Display] trait implementation, because it
        /// doesn't allocate a new [String], but instead allocates an inline buffer on
        /// the stack. If this buffer gets larger than
        /// [sizing::DEFAULT_STRING_STORAGE_SIZE], it will spill to the heap.
        pub fn to_small_str(
            &self,
        ) -> SmallString<[u8; sizing::DEFAULT_STRING_STORAGE_SIZE]> {
            format!("{}", self).into()
        }
    }
}

mod display_trait_impl {
    use super::*;

    impl Display for FormattedText {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{}", self.content)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn plain_text_gains_only_the_trailing_reset() {
        let it = expand("Hello");
        assert_eq!(it.content(), "Hello\x1b[0m");
        assert_eq!(it.display_len(), 5);
    }

    #[test]
    fn empty_input_yields_just_the_reset() {
        let it = expand("");
        assert_eq!(it.content(), "\x1b[0m");
        assert_eq!(it.display_len(), 0);
    }

    #[test]
    fn reset_markup_expands_to_the_reset_sequence() {
        assert_eq!(expand("[[").content(), "\x1b[0m\x1b[0m");
        assert_eq!(expand("[[m").content(), "\x1b[0m\x1b[0m");
    }

    #[test]
    fn foreground_markup() {
        let it = expand("[[208mHello, world!");
        assert_eq!(it.content(), "\x1b[38;5;208mHello, world!\x1b[0m");
        assert_eq!(it.display_len(), 13);
    }

    #[test]
    fn background_markup_without_terminator() {
        let it = expand("[[;160");
        assert_eq!(it.content(), "\x1b[48;5;160m\x1b[0m");
        assert_eq!(it.display_len(), 0);
    }

    #[test]
    fn combined_markup_expands_foreground_then_background() {
        let it = expand("[[118;128mboth");
        assert_eq!(it.content(), "\x1b[38;5;118m\x1b[48;5;128mboth\x1b[0m");
        assert_eq!(it.display_len(), 4);
    }

    #[test]
    fn warning_line_with_inline_reset() {
        let it = expand("[[;160WARNING![[ user not found!");
        assert_eq!(
            it.content(),
            "\x1b[48;5;160mWARNING!\x1b[0m user not found!\x1b[0m"
        );
        assert_eq!(it.display_len(), "WARNING! user not found!".len());
    }

    #[test]
    fn out_of_range_markup_is_removed_silently() {
        let it = expand("a[[300mb");
        assert_eq!(it.content(), "ab\x1b[0m");
        assert_eq!(it.display_len(), 2);
    }

    #[test]
    fn identical_tokens_expand_identically_everywhere() {
        let it = expand("[[208mA[[208mB");
        assert_eq!(it.content(), "\x1b[38;5;208mA\x1b[38;5;208mB\x1b[0m");
        assert_eq!(it.display_len(), 2);
    }

    #[test]
    fn replacement_is_literal_and_in_scan_order() {
        // The bare "[[" token is scanned first and replaced everywhere, including
        // inside the (longer) second token, which then no longer occurs literally.
        let it = expand("[[ x [[208m");
        assert_eq!(it.content(), "\x1b[0m x \x1b[0m208m\x1b[0m");
        assert_eq!(it.display_len(), 7);
    }

    #[test]
    fn content_always_ends_with_reset() {
        for input in ["", "plain", "[[208mcolored", "[[bad[[300m", "[[;1x"] {
            assert!(expand(input).content().ends_with("\x1b[0m"));
        }
    }

    #[test]
    fn display_len_never_exceeds_content_len() {
        for input in ["", "plain", "[[208mcolored", "[[118;128mboth", "[[300mgone"] {
            let it = expand(input);
            assert!(it.display_len() <= it.content().chars().count());
        }
    }

    #[test]
    fn display_shows_only_the_expanded_content() {
        let it = expand("[[;160hi");
        assert_eq!(format!("{}", it), it.content());
    }

    #[test]
    fn to_small_str_matches_display() {
        let it = expand("[[208mhi");
        assert_eq!(it.to_small_str().as_str(), it.content());
    }
}
