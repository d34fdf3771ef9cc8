// src/ui/renderer.rs
use std::io::{self, Stdout};
use std::ops::Range;
use std::time::{Duration, Instant};

use tui::backend::CrosstermBackend;
use tui::layout::{Constraint, Direction, Layout, Rect};
use tui::style::{Modifier, Style};
use tui::text::{Span, Spans};
use tui::widgets::{Block, Borders, Paragraph};
use tui::Terminal;

use crate::app::App;
use crate::config::Theme;

/// Lines taken by the list border and the status line.
const CHROME_HEIGHT: u16 = 3;

pub struct Renderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self { terminal, theme })
    }

    pub fn size(&self) -> io::Result<Rect> {
        self.terminal.size()
    }

    pub fn render(&mut self, app: &App) -> io::Result<()> {
        let start = Instant::now();
        let theme = &self.theme;

        self.terminal.draw(|frame| {
            let area = frame.size();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(CHROME_HEIGHT - 1), Constraint::Length(1)].as_ref())
                .split(area);

            let range = app.scroll().visible_range();
            let title = format!(
                " Contacts  {}-{} of {} ",
                range.start,
                range.end,
                app.scroll().len()
            );
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border.to_tui_color()))
                .title(Span::styled(
                    title,
                    Style::default()
                        .fg(theme.title.to_tui_color())
                        .add_modifier(Modifier::BOLD),
                ));
            let inner = block.inner(chunks[0]);
            frame.render_widget(block, chunks[0]);

            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(1), Constraint::Length(1)].as_ref())
                .split(inner);

            let list = Paragraph::new(app.surface().visible_lines()).style(
                Style::default()
                    .fg(theme.foreground.to_tui_color())
                    .bg(theme.background.to_tui_color()),
            );
            frame.render_widget(list, columns[0]);

            let thumb = scrollbar_thumb(
                columns[1].height,
                app.scroll().scroll_top(),
                app.scroll().total_height(),
                app.scroll().container_height(),
            );
            let track: Vec<Spans> = (0..columns[1].height)
                .map(|row| {
                    let glyph = if thumb.contains(&row) { "█" } else { "│" };
                    Spans::from(Span::styled(glyph, Style::default().fg(theme.border.to_tui_color())))
                })
                .collect();
            frame.render_widget(Paragraph::new(track), columns[1]);

            let status_style = if app.message().is_some() {
                Style::default().fg(theme.status_line.warning.to_tui_color())
            } else {
                Style::default().fg(theme.status_line.foreground.to_tui_color())
            };
            let status = Paragraph::new(Spans::from(Span::styled(app.status_line(), status_style)))
                .style(Style::default().bg(theme.status_line.background.to_tui_color()));
            frame.render_widget(status, chunks[1]);
        })?;

        let elapsed = start.elapsed();
        if elapsed > Duration::from_millis(16) { // Target 60 fps
            log::warn!("Slow render: {:?}", elapsed);
        }

        Ok(())
    }
}

/// Height available to list rows in a terminal of `total_height` lines.
pub fn list_height(total_height: u16) -> u16 {
    total_height.saturating_sub(CHROME_HEIGHT)
}

/// Track rows covered by the scrollbar thumb.
pub fn scrollbar_thumb(track: u16, scroll_top: u64, extent: u64, viewport: u64) -> Range<u16> {
    if track == 0 || extent <= viewport {
        return 0..track;
    }

    let track_len = u64::from(track);
    // Widened so huge extents cannot overflow the products
    let size = ((u128::from(viewport) * u128::from(track_len) / u128::from(extent)) as u64)
        .clamp(1, track_len);
    let max_scroll = extent - viewport;
    let start = (u128::from(scroll_top.min(max_scroll)) * u128::from(track_len - size)
        / u128::from(max_scroll)) as u64;

    // Both bounds are at most `track`, so the casts are lossless
    start as u16..(start + size) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_height() {
        assert_eq!(list_height(24), 21);
        assert_eq!(list_height(2), 0);
    }

    #[test]
    fn test_thumb_fills_short_lists() {
        assert_eq!(scrollbar_thumb(10, 0, 5, 10), 0..10);
        assert_eq!(scrollbar_thumb(0, 0, 500, 10), 0..0);
    }

    #[test]
    fn test_thumb_moves_with_scroll() {
        assert_eq!(scrollbar_thumb(10, 0, 100, 10), 0..1);
        assert_eq!(scrollbar_thumb(10, 90, 100, 10), 9..10);
        assert_eq!(scrollbar_thumb(10, 45, 100, 10), 4..5);
    }

    #[test]
    fn test_thumb_with_huge_extent() {
        let extent = u64::from(u32::MAX) * 100_000;
        assert_eq!(scrollbar_thumb(u16::MAX, 0, extent, 100), 0..1);
        let bottom = scrollbar_thumb(u16::MAX, extent - 100, extent, 100);
        assert_eq!(bottom, u16::MAX - 1..u16::MAX);
    }

    #[test]
    fn test_thumb_scales_with_viewport() {
        assert_eq!(scrollbar_thumb(20, 0, 40, 20), 0..10);
        assert_eq!(scrollbar_thumb(20, 20, 40, 20), 10..20);
    }
}
