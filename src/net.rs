//! Text rendering of the cube as an unfolded net.
//!
//! ```text
//!        top
//! left  front  right  back
//!       bottom
//! ```
//!
//! Every face is a 3x3 block of color letters (see [`crate::cube::Color::letter`]).
//! Side faces are drawn as seen from outside with the top edge up; the top
//! face has its back edge up and the bottom face its front edge up.

use crate::cube::{Coord, CubeState, Face};

/// Separator between neighboring faces on a row.
const FACE_GAP: &str = "  ";

/// Width of one face row: three letters with single spaces between them.
const FACE_WIDTH: usize = 5;

/// Position of the cubie carrying the sticker at (`row`, `col`) of `face`.
///
/// Rows count from the top of the drawn block, columns from its left.
pub fn sticker_position(face: Face, row: i32, col: i32) -> Coord {
    match face {
        Face::Top => (col, 2, row),
        Face::Bottom => (col, 0, 2 - row),
        Face::Front => (col, 2 - row, 2),
        Face::Back => (2 - col, 2 - row, 0),
        Face::Left => (0, 2 - row, col),
        Face::Right => (2, 2 - row, 2 - col),
    }
}

/// Formats one row of one face, e.g. `"R R R"`.
///
/// Missing cubies (only possible for an incomplete state) show as `?`.
fn face_row(state: &CubeState, face: Face, row: i32) -> String {
    (0..3)
        .map(|col| {
            state
                .get(sticker_position(face, row, col))
                .map_or('?', |cubie| cubie.faces.get(face).letter())
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats the committed cube state as an unfolded net.
pub fn format_net(state: &CubeState) -> String {
    let indent = " ".repeat(FACE_WIDTH + FACE_GAP.len());
    let mut output = String::new();

    for row in 0..3 {
        output.push_str(&indent);
        output.push_str(&face_row(state, Face::Top, row));
        output.push('\n');
    }

    for row in 0..3 {
        let band: Vec<String> = [Face::Left, Face::Front, Face::Right, Face::Back]
            .into_iter()
            .map(|face| face_row(state, face, row))
            .collect();
        output.push_str(&band.join(FACE_GAP));
        output.push('\n');
    }

    for row in 0..3 {
        output.push_str(&indent);
        output.push_str(&face_row(state, Face::Bottom, row));
        output.push('\n');
    }

    output
}
