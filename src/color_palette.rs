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

//! Reference table of the 256-color terminal palette.
//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>

use crate::{FormattedText, expand};

pub const ROW_COUNT: u16 = 16;
pub const SWATCHES_PER_ROW: u16 = 16;

/// One markup swatch per palette index in the row: the zero padded 3 digit index,
/// shown over its own index as background color, followed by one space (still inside
/// the background run). The explicit `m` terminator is required here since the label
/// digits follow the directive immediately.
fn palette_row_markup(arg_row: u16) -> String {
    let mut acc = String::new();
    let base = arg_row * SWATCHES_PER_ROW;
    for offset in 0..SWATCHES_PER_ROW {
        let index = base + offset;
        acc.push_str(&format!("[[;{index}m{index:03} "));
    }
    acc
}

/// The palette grid as 16 expanded rows, row `r` covering palette indices `16r` to
/// `16r + 15`, in ascending row-major order.
pub fn palette_rows() -> Vec<FormattedText> {
    (0..ROW_COUNT)
        .map(|row| expand(&palette_row_markup(row)))
        .collect()
}

/// Print the full 0-255 color reference grid to stdout, 16 rows of 16 swatches.
pub fn print_color_palette() {
    for row in palette_rows() {
        row.println();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn grid_has_sixteen_rows() {
        assert_eq!(palette_rows().len(), 16);
    }

    #[test]
    fn rows_cover_every_index_in_ascending_order() {
        for (row_index, row) in palette_rows().iter().enumerate() {
            let mut expected = String::new();
            for offset in 0..16 {
                let index = row_index * 16 + offset;
                expected.push_str(&format!("\x1b[48;5;{index}m{index:03} "));
            }
            expected.push_str("\x1b[0m");
            assert_eq!(row.content(), expected);
        }
    }

    #[test]
    fn every_row_shows_sixty_four_cells() {
        // 16 swatches per row, each a 3 digit label plus one space.
        for row in palette_rows() {
            assert_eq!(row.display_len(), 64);
        }
    }

    #[test]
    fn every_row_ends_with_reset() {
        for row in palette_rows() {
            assert!(row.content().ends_with("\x1b[0m"));
        }
    }
}
