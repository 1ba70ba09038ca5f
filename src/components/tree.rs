use ratatui::style::Style;

use crate::{constants::tree, dice::Dice};

/// Text rows of the tree, each left-padded so the glyphs sit around column `width / 2`.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayout {
    rows: Vec<String>,
    star_style: Style,
}

impl TreeLayout {
    pub fn generate<D: Dice>(width: usize, _height: usize, dice: &mut D) -> Self {
        let center = width / 2;
        let mut rows = Vec::new();

        rows.push(centered_row(center, 0, &tree::STAR_GLYPH.to_string()));

        for (num_rows, max_width) in tree::SECTIONS {
            for row in 0..num_rows {
                let row_width = (1 + row * 2).min(max_width);
                let glyphs = std::iter::repeat_n(tree::FOLIAGE_GLYPH, row_width).collect::<String>();
                rows.push(centered_row(center, row_width / 2, &glyphs));
            }
        }

        // Trunk is three wide, starting one column left of center
        for _ in 0..tree::TRUNK_ROWS {
            rows.push(centered_row(center, 1, tree::TRUNK_TEXT));
        }

        Self { rows, star_style: *dice.pick(&tree::STAR_STYLES) }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn star_style(&self) -> Style {
        self.star_style
    }
}

fn centered_row(center: usize, half_width: usize, glyphs: &str) -> String {
    let padding = center.saturating_sub(half_width);
    let mut row = " ".repeat(padding);
    row.push_str(glyphs);
    row
}
