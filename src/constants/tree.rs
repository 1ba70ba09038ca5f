use ratatui::style::{Color, Modifier, Style};

pub const STAR_GLYPH: char = '*';
pub const FOLIAGE_GLYPH: char = '^';
pub const TRUNK_GLYPH: char = '|';
pub const TRUNK_TEXT: &str = "|||";
pub const TRUNK_ROWS: usize = 2;

/// First canvas row the tree is stamped on.
pub const TREE_OFFSET: usize = 2;

/// Tree body sections as `(rows, max_width)`, top to bottom.
pub const SECTIONS: [(usize, usize); 3] = [(4, 9), (5, 15), (6, 21)];

pub const STAR_STYLES: [Style; 3] = [
    Style::new().fg(Color::LightYellow).add_modifier(Modifier::BOLD),
    Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
    Style::new().fg(Color::LightYellow),
];

pub const FOLIAGE_STYLE: Style = Style::new().fg(Color::LightGreen);
pub const TINTED_FOLIAGE_STYLE: Style = Style::new().fg(Color::LightYellow).add_modifier(Modifier::BOLD);
pub const TRUNK_STYLE: Style = Style::new().fg(Color::Indexed(94));

pub const TINT_CHANCE: f64 = 0.1;
