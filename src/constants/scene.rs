use ratatui::style::{Color, Modifier, Style};

pub const TITLE_STYLES: [Style; 4] = [
    Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD),
    Style::new().fg(Color::LightGreen).add_modifier(Modifier::BOLD),
    Style::new().fg(Color::LightYellow).add_modifier(Modifier::BOLD),
    Style::new().fg(Color::LightMagenta).add_modifier(Modifier::BOLD),
];

// The title is laid out as if it were 29 columns wide.
pub const TITLE_WIDTH: usize = 29;
pub const TITLE_GAP: usize = 2;
pub const FOOTER_GAP: usize = 3;
