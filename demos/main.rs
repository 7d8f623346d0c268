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

use r3bl_ansi_markup::{expand, print_color_palette};

fn main() {
    // Surface the debug event emitted when a malformed directive is dropped.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Expand markup inline in a string.
    {
        expand("[[208mHello, world!").println();
        expand("[[118;128mForeground and background in one directive.").println();
        expand("[[;160WARNING![[ user not found!").println();
    }

    // Display width vs raw width.
    {
        let formatted = expand("[[27mThe escape bytes don't count.");
        println!(
            "> visible: {} columns, raw: {} bytes",
            formatted.display_len(),
            formatted.content().len()
        );
    }

    // Malformed directives are removed silently; the surrounding text stays.
    {
        expand("[[300mout of range, [[;mmissing number; the words survive").println();
    }

    // The whole 256-color palette, 16 rows of 16 swatches.
    {
        print_color_palette();
    }
}
