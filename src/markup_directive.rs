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

//! Shorthand color markup tokens. A token opens with two literal `[` characters and
//! selects entries from the 256-color terminal palette:
//!
//! | Token        | Meaning                   |
//! |--------------|---------------------------|
//! | `[[` `[[m`   | reset all attributes      |
//! | `[[Nm?`      | foreground palette index  |
//! | `[[;Nm?`     | background palette index  |
//! | `[[F;Bm?`    | foreground and background |
//!
//! The trailing `m` is optional. It exists so an author can stop the digit run when
//! literal digits follow the directive: `[[20m5` is color 20 followed by "5", while
//! `[[205` is color 205.
//!
//! More info: <https://www.ditig.com/256-colors-cheat-sheet>

use std::{fmt::{Display, Formatter, Result},
          sync::LazyLock};

use regex::Regex;
use smallvec::SmallVec;
use strum_macros::EnumCount;

use crate::SgrCode;

/// Maximal shorthand token: `[[`, up to 3 digits, optionally `;` and up to 3 more
/// digits, optionally a terminating `m`. Everything a token can't swallow (a 4th digit,
/// a second `;`) is left behind as literal text.
static DIRECTIVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[(\d{0,3})(?:;(\d{0,3}))?m?").expect("valid regex"));

/// Markup-bearing strings are short (a log line, one palette row); scans rarely yield
/// more than a handful of tokens, so the token list lives on the stack until it spills.
pub const MAX_INLINE_DIRECTIVE_COUNT: usize = 8;
pub type InlineVecTokens<'a> = SmallVec<[&'a str; MAX_INLINE_DIRECTIVE_COUNT]>;

/// Every maximal shorthand token in `text`, in left-to-right scan order. Tokens are
/// slices of `text`; classification and replacement happen later, so invalid tokens
/// show up here too.
pub fn find_directive_tokens(text: &str) -> InlineVecTokens<'_> {
    DIRECTIVE_REGEX.find_iter(text).map(|m| m.as_str()).collect()
}

/// A classified shorthand token. Invalid tokens have no variant; [Directive::classify]
/// returns `None` for them and the translator drops the token from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount)]
pub enum Directive {
    Reset,
    Foreground(u8),
    Background(u8),
    ForegroundBackground(u8, u8),
}

impl Directive {
    /// Ordered shape match against the token table in the module docs. The combined
    /// `F;B` shape is checked before the single-number shapes so one half of a pair is
    /// never misread as a lone directive. Both halves of a pair validate independently
    /// against 0-255; if either fails the whole token is invalid.
    pub fn classify(token: &str) -> Option<Directive> {
        let caps = DIRECTIVE_REGEX.captures(token)?;
        let fg_digits = &caps[1];
        let bg_digits = caps.get(2).map(|m| m.as_str());

        match (fg_digits, bg_digits) {
            ("", None) => Some(Directive::Reset),
            ("", Some(bg)) => parse_palette_index(bg).map(Directive::Background),
            (fg, Some(bg)) => {
                let fg = parse_palette_index(fg)?;
                let bg = parse_palette_index(bg)?;
                Some(Directive::ForegroundBackground(fg, bg))
            }
            (fg, None) => parse_palette_index(fg).map(Directive::Foreground),
        }
    }
}

/// Valid palette indices are 0-255 inclusive. The digit run is at most 3 characters so
/// `u16` can't overflow; anything above 255 fails the narrowing.
fn parse_palette_index(digits: &str) -> Option<u8> {
    digits.parse::<u16>().ok().and_then(|it| u8::try_from(it).ok())
}

mod directive_impl {
    use super::*;

    impl Display for Directive {
        /// The real escape-sequence expansion of the directive. A combined directive
        /// expands to two concatenated sequences, foreground first.
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                Directive::Reset                        => write!(f, "{}", SgrCode::Reset),
                Directive::Foreground(index)            => write!(f, "{}", SgrCode::ForegroundAnsi256(index)),
                Directive::Background(index)            => write!(f, "{}", SgrCode::BackgroundAnsi256(index)),
                Directive::ForegroundBackground(fg, bg) => write!(
                    f,
                    "{}{}",
                    SgrCode::ForegroundAnsi256(fg),
                    SgrCode::BackgroundAnsi256(bg)
                ),
            }
        }
    }
}
