use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{self as cstyle, Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::{
    components::canvas::{Canvas, Cell},
    constants::{scene, text, tree},
    dice::Dice,
};

/// Turns a composed canvas into the lines of one frame: title, canvas rows, footer.
pub fn present<D: Dice>(canvas: &Canvas, tint_chance: f64, dice: &mut D) -> Text<'static> {
    let width = canvas.width();
    let mut lines = Vec::with_capacity(canvas.height() + scene::TITLE_GAP + scene::FOOTER_GAP + 2);

    let title_style = *dice.pick(&scene::TITLE_STYLES);
    lines.push(Line::from(vec![
        Span::raw(" ".repeat(width.saturating_sub(scene::TITLE_WIDTH) / 2)),
        Span::styled(text::TITLE_TEXT, title_style),
    ]));
    lines.extend(std::iter::repeat_with(Line::default).take(scene::TITLE_GAP));

    for row in canvas.rows() {
        let spans = row.iter().map(|cell| cell_span(cell, tint_chance, dice)).collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }

    lines.extend(std::iter::repeat_with(Line::default).take(scene::FOOTER_GAP));
    lines.push(Line::from(vec![
        Span::raw(" ".repeat(width.saturating_sub(text::FOOTER_TEXT.chars().count()) / 2)),
        Span::raw(text::FOOTER_TEXT),
    ]));

    Text::from(lines)
}

fn cell_span<D: Dice>(cell: &Cell, tint_chance: f64, dice: &mut D) -> Span<'static> {
    match *cell {
        Cell::Blank => Span::raw(" "),
        Cell::Star(style) => Span::styled(tree::STAR_GLYPH.to_string(), style),
        Cell::Foliage => {
            let style = if dice.chance(tint_chance) { tree::TINTED_FOLIAGE_STYLE } else { tree::FOLIAGE_STYLE };
            Span::styled(tree::FOLIAGE_GLYPH.to_string(), style)
        },
        Cell::Trunk => Span::styled(tree::TRUNK_GLYPH.to_string(), tree::TRUNK_STYLE),
        Cell::Flake { glyph, style } => Span::styled(glyph.to_string(), style),
    }
}

/// Draws a presented frame inside a rounded border, centered in the given area.
#[derive(Debug)]
pub struct SceneView<'a> {
    frame: &'a Text<'static>,
}

impl<'a> SceneView<'a> {
    pub fn new(frame: &'a Text<'static>) -> Self {
        Self { frame }
    }
}

impl Widget for SceneView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let width = u16::try_from(self.frame.width()).unwrap_or(u16::MAX).saturating_add(2);
        let height = u16::try_from(self.frame.height()).unwrap_or(u16::MAX).saturating_add(2);

        let [_, area, _] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(height), Constraint::Fill(1)]).areas(area);
        let [_, area, _] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(width), Constraint::Fill(1)]).areas(area);

        let border = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().bg(Color::Black));

        Paragraph::new(self.frame.clone()).block(border).render(area, buf);
    }
}

/// Writes a frame as plain ANSI text, clearing the terminal first.
pub fn write_ansi<W: Write>(out: &mut W, frame: &Text<'_>) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    for line in frame.lines.iter() {
        for span in line.spans.iter() {
            let style = line.style.patch(span.style);
            let bold = style.add_modifier.contains(Modifier::BOLD);

            if let Some(color) = style.fg {
                queue!(out, SetForegroundColor(ansi_color(color)))?;
            }
            if bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            queue!(out, Print(&span.content))?;
            if bold {
                queue!(out, SetAttribute(Attribute::Reset))?;
            }
            if style.fg.is_some() {
                queue!(out, ResetColor)?;
            }
        }
        queue!(out, Print("\n"))?;
    }

    out.flush()
}

fn ansi_color(color: Color) -> cstyle::Color {
    match color {
        Color::Reset => cstyle::Color::Reset,
        Color::Black => cstyle::Color::Black,
        Color::Red => cstyle::Color::DarkRed,
        Color::Green => cstyle::Color::DarkGreen,
        Color::Yellow => cstyle::Color::DarkYellow,
        Color::Blue => cstyle::Color::DarkBlue,
        Color::Magenta => cstyle::Color::DarkMagenta,
        Color::Cyan => cstyle::Color::DarkCyan,
        Color::Gray => cstyle::Color::Grey,
        Color::DarkGray => cstyle::Color::DarkGrey,
        Color::LightRed => cstyle::Color::Red,
        Color::LightGreen => cstyle::Color::Green,
        Color::LightYellow => cstyle::Color::Yellow,
        Color::LightBlue => cstyle::Color::Blue,
        Color::LightMagenta => cstyle::Color::Magenta,
        Color::LightCyan => cstyle::Color::Cyan,
        Color::White => cstyle::Color::White,
        Color::Indexed(index) => cstyle::Color::AnsiValue(index),
        Color::Rgb(r, g, b) => cstyle::Color::Rgb { r, g, b },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        components::{snow::Snowflake, tree::TreeLayout},
        constants::snow,
        dice::scripted::ScriptedDice,
    };

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    fn default_frame(dice: &mut ScriptedDice) -> Text<'static> {
        let layout = TreeLayout::generate(60, 20, &mut ScriptedDice::new());
        let flakes = [Snowflake::new(3, 1, '~', snow::SNOWFLAKE_STYLES[1])];
        let canvas = Canvas::compose(60, 20, &layout, &flakes);
        present(&canvas, tree::TINT_CHANCE, dice)
    }

    #[test]
    fn test_frame_shape() {
        let frame = default_frame(&mut ScriptedDice::new());

        assert_eq!(frame.lines.len(), 1 + 2 + 20 + 3 + 1);
        assert_eq!(plain(&frame.lines[0]), format!("{}{}", " ".repeat(15), text::TITLE_TEXT));
        assert_eq!(plain(&frame.lines[1]), "");
        assert_eq!(plain(&frame.lines[2]), "");
        assert_eq!(plain(&frame.lines[3]), " ".repeat(60));
        assert_eq!(plain(&frame.lines[4]), format!("   ~{}", " ".repeat(56)));
        assert_eq!(plain(&frame.lines[5]), format!("{}*{}", " ".repeat(30), " ".repeat(29)));
        assert_eq!(plain(&frame.lines[26]), format!("{}{}", " ".repeat(12), text::FOOTER_TEXT));
    }

    #[test]
    fn test_cell_colors() {
        let frame = default_frame(&mut ScriptedDice::new().indices([3]));

        assert_eq!(frame.lines[0].spans[1].style, scene::TITLE_STYLES[3]);
        assert_eq!(frame.lines[4].spans[3].style, snow::SNOWFLAKE_STYLES[1]);
        // First foliage row is canvas row 3
        assert_eq!(frame.lines[6].spans[30].style, tree::FOLIAGE_STYLE);
        // Trunk rows are canvas rows 18 and 19
        assert_eq!(frame.lines[21].spans[29].style, tree::TRUNK_STYLE);
        assert_eq!(frame.lines[22].spans[28].style, Style::default());
    }

    #[test]
    fn test_foliage_tint() {
        let frame = default_frame(&mut ScriptedDice::new().chances([true]));

        assert_eq!(frame.lines[6].spans[30].style, tree::TINTED_FOLIAGE_STYLE);
        assert_eq!(frame.lines[7].spans[29].style, tree::FOLIAGE_STYLE);
    }

    #[test]
    fn test_narrow_title_padding() {
        let layout = TreeLayout::generate(10, 4, &mut ScriptedDice::new());
        let canvas = Canvas::compose(10, 4, &layout, &[]);
        let frame = present(&canvas, 0.0, &mut ScriptedDice::new());

        assert_eq!(plain(&frame.lines[0]), text::TITLE_TEXT);
        assert_eq!(plain(frame.lines.last().unwrap()), text::FOOTER_TEXT);
    }

    #[test]
    fn test_write_ansi() -> io::Result<()> {
        let frame = default_frame(&mut ScriptedDice::new());
        let mut out = Vec::new();
        write_ansi(&mut out, &frame)?;

        let raw = String::from_utf8_lossy(&out).to_string();
        assert!(raw.contains("\u{1b}[2J"));

        let stripped = String::from_utf8(strip_ansi_escapes::strip(&out)).unwrap();
        let lines = stripped.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), frame.lines.len());
        assert_eq!(lines[0].trim(), text::TITLE_TEXT);
        assert_eq!(lines[6], format!("{}^{}", " ".repeat(30), " ".repeat(29)));
        assert_eq!(lines[21], format!("{}|||{}", " ".repeat(29), " ".repeat(28)));
        Ok(())
    }

    #[test]
    fn test_scene_view_renders_centered() {
        let frame = default_frame(&mut ScriptedDice::new());
        let area = Rect::new(0, 0, 80, 41);
        let mut buf = Buffer::empty(area);

        SceneView::new(&frame).render(area, &mut buf);

        // Frame is 60x27, plus a border: 62x29 placed at (9, 6)
        assert_eq!(buf[(9, 6)].symbol(), "╭");
        assert_eq!(buf[(10 + 30, 7 + 5)].symbol(), "*");
    }

    #[test]
    fn test_scene_view_clips_oversized_frame() {
        let layout = TreeLayout::generate(usize::from(u16::MAX), 2, &mut ScriptedDice::new());
        let canvas = Canvas::compose(usize::from(u16::MAX), 2, &layout, &[]);
        let frame = present(&canvas, 0.0, &mut ScriptedDice::new());
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        SceneView::new(&frame).render(area, &mut buf);

        assert!((0..24).any(|y| buf[(0, y)].symbol() == "╭"));
    }
}
