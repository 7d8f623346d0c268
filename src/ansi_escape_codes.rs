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

//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>

use std::{borrow::Cow,
          fmt::{Display, Formatter, Result},
          sync::LazyLock};

use regex::Regex;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SgrCode {
    Reset,
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
}

pub mod sgr_code_impl {
    use super::*;

    pub const CSI: &str = "\x1b[";
    pub const SGR: &str = "m";

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
        /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                    => write!(f, "{CSI}0{SGR}"),
                SgrCode::ForegroundAnsi256(index) => write!(f, "{CSI}38;5;{index}{SGR}"),
                SgrCode::BackgroundAnsi256(index) => write!(f, "{CSI}48;5;{index}{SGR}"),
            }
        }
    }
}

/// A real (already expanded) escape sequence: the escape character followed by any
/// characters up to and including the next [sgr_code_impl::SGR] terminator. This is the
/// only shape of sequence this crate ever emits, so stripping does not need a general
/// CSI matcher.
static ESCAPE_SEQUENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b[^m]*m").expect("valid regex"));

/// Remove every embedded escape sequence from `text`. Stripping is idempotent: the
/// output contains no escape character that is followed by an `m`.
pub fn strip_escape_sequences(text: &str) -> Cow<'_, str> {
    ESCAPE_SEQUENCE_REGEX.replace_all(text, "")
}

/// Number of character cells `text` occupies once rendered, ie, its length with all
/// escape sequences removed. Measured in `char`s, not bytes.
pub fn visible_len(text: &str) -> usize {
    strip_escape_sequences(text).chars().count()
}
