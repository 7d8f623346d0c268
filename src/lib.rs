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

//! # Why use this crate
//!
//! `r3bl_ansi_markup` gives you a tiny shorthand for coloring terminal output with the
//! ANSI 256 (8-bit) color palette, without typing escape sequences by hand. You write
//! markup directives inline in your string, and [expand] rewrites them into real escape
//! sequences, appends a trailing reset (so no color state leaks into whatever prints
//! next), and tells you the *visible* width of the result - the length the terminal
//! will actually render, with the escape bytes ignored.
//!
//! | Markup       | Meaning                                        |
//! |--------------|------------------------------------------------|
//! | `[[` `[[m`   | reset all attributes                           |
//! | `[[Nm?`      | foreground palette index `N` (0-255)           |
//! | `[[;Nm?`     | background palette index `N` (0-255)           |
//! | `[[F;Bm?`    | foreground `F` and background `B`              |
//!
//! The trailing `m` is optional; use it when literal digits follow the directive.
//! Malformed directives (out of range numbers, bad separators) are silently removed.
//!
//! ```rust
//! use r3bl_ansi_markup::expand;
//!
//! let formatted = expand("[[;160WARNING![[ user not found!");
//! assert_eq!(formatted.display_len(), 24);
//! println!("{formatted}");
//! ```
//!
//! There is also a reference grid of the whole palette, 16 rows of 16 swatches:
//!
//! ```rust,no_run
//! r3bl_ansi_markup::print_color_palette();
//! ```
//!
//! Run `cargo run --example main` to see both in action.
//!
//! # More info on ANSI escape sequences and the 256-color palette
//!
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>

// Attach sources.
pub mod ansi_escape_codes;
pub mod color_palette;
pub mod formatted_text;
pub mod markup_directive;

// Re-export the public API.
pub use ansi_escape_codes::*;
pub use color_palette::*;
pub use formatted_text::*;
pub use markup_directive::*;
