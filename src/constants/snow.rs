use ratatui::style::{Color, Modifier, Style};

pub const SNOWFLAKES: [char; 4] = ['*', '.', 'o', '~'];

pub const SNOWFLAKE_STYLES: [Style; 4] = [
    Style::new().fg(Color::White),
    Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
    Style::new().fg(Color::LightCyan),
    Style::new().fg(Color::LightCyan).add_modifier(Modifier::BOLD),
];

pub const SPAWN_CHANCE: f64 = 0.6;
pub const DRIFT_CHANCE: f64 = 0.3;
