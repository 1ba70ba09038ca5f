use ratatui::style::Style;

use crate::{
    components::{snow::Snowflake, tree::TreeLayout},
    constants::tree,
};

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum Cell {
    #[default]
    Blank,
    Star(Style),
    Foliage,
    Trunk,
    Flake {
        glyph: char,
        style: Style,
    },
}

impl Cell {
    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }

    pub fn is_tree(&self) -> bool {
        matches!(self, Cell::Star(_) | Cell::Foliage | Cell::Trunk)
    }
}

/// One frame worth of cells, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn blank(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![Cell::Blank; width * height] }
    }

    /// Stamps the tree starting at [`tree::TREE_OFFSET`], then drops snowflakes onto
    /// whatever cells the tree left blank.
    pub fn compose(width: usize, height: usize, layout: &TreeLayout, flakes: &[Snowflake]) -> Self {
        let mut canvas = Self::blank(width, height);

        for (index, row) in layout.rows().iter().enumerate() {
            let y = tree::TREE_OFFSET + index;
            if y >= height {
                break;
            }
            for (x, glyph) in row.chars().enumerate().take(width) {
                let cell = match glyph {
                    tree::STAR_GLYPH => Cell::Star(layout.star_style()),
                    tree::FOLIAGE_GLYPH => Cell::Foliage,
                    tree::TRUNK_GLYPH => Cell::Trunk,
                    _ => continue,
                };
                canvas.set(x, y, cell);
            }
        }

        for flake in flakes {
            if canvas.get(flake.x, flake.y).is_some_and(Cell::is_blank) {
                canvas.set(flake.x, flake.y, Cell::Flake { glyph: flake.glyph, style: flake.style });
            }
        }

        canvas
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() rejects a zero size
        self.cells.chunks(self.width.max(1)).take(self.height)
    }
}
