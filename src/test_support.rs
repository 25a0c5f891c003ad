//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::buffer::Buffer;

use crate::core::model::Profile;
use crate::core::state::App;

/// Creates a test App over the built-in fixtures with the default profile.
pub fn test_app() -> App {
    App::new(Profile::default())
}

/// Flattens a rendered buffer into one string per row.
///
/// Wide glyphs occupy two cells, so an emoji is followed by the padding
/// cell's blank. Assert on text around them rather than through them.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect()
        })
        .collect()
}
