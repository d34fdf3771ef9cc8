// src/ui/terminal.rs
use tui::text::Spans;

use crate::surface::ScrollSurface;

/// One row as it appears in the terminal: exactly `item_height` lines once
/// appended.
pub type RowLines = Vec<Spans<'static>>;

/// Scroll surface backed by terminal lines. One pixel is one line.
///
/// Like a browser, the host clamps programmatic scrolls to the scrollable
/// range.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    height: u16,
    scroll_offset: u64,
    extent: u64,
    content_offset: u64,
    lines: Vec<Spans<'static>>,
    mounted: bool,
    listening: bool,
}

impl TerminalSurface {
    pub fn new(height: u16) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }

    /// Resizes the container; the offset is re-clamped to the new range.
    pub fn set_height(&mut self, height: u16) {
        self.height = height;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn extent(&self) -> u64 {
        self.extent
    }

    pub fn max_scroll(&self) -> u64 {
        self.extent.saturating_sub(u64::from(self.height))
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// The lines that fall inside the container at the current offset,
    /// blank-filled where no row is materialized.
    pub fn visible_lines(&self) -> Vec<Spans<'static>> {
        let height = usize::from(self.height);
        let lead = self.content_offset.saturating_sub(self.scroll_offset);
        let skip = self.scroll_offset.saturating_sub(self.content_offset);

        let mut visible: Vec<Spans<'static>> = (0..lead.min(height as u64))
            .map(|_| Spans::default())
            .collect();
        visible.extend(
            self.lines
                .iter()
                .skip(usize::try_from(skip).unwrap_or(usize::MAX))
                .take(height - visible.len())
                .cloned(),
        );
        visible.resize(height, Spans::default());
        visible
    }
}

impl ScrollSurface for TerminalSurface {
    type Row = RowLines;

    fn container_height(&self) -> u64 {
        u64::from(self.height)
    }

    fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    fn set_scroll_offset(&mut self, offset: u64) {
        self.scroll_offset = offset.min(self.max_scroll());
    }

    fn mount(&mut self, extent: u64) {
        self.lines.clear();
        self.extent = extent;
        self.content_offset = 0;
        self.mounted = true;
    }

    fn set_extent(&mut self, extent: u64) {
        self.extent = extent;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    fn clear_content(&mut self) {
        self.lines.clear();
    }

    fn set_content_offset(&mut self, offset: u64) {
        self.content_offset = offset;
    }

    fn append_row(&mut self, mut row: RowLines, height: u32) {
        let height = usize::try_from(height).unwrap_or(usize::MAX);
        row.truncate(height);
        row.resize(height, Spans::default());
        self.lines.extend(row);
    }

    fn attach_scroll_listener(&mut self) {
        self.listening = true;
    }

    fn detach_scroll_listener(&mut self) {
        self.listening = false;
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.extent = 0;
        self.content_offset = 0;
        self.scroll_offset = 0;
        self.mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui::text::Span;

    fn text(line: &Spans<'_>) -> String {
        line.0.iter().map(|span| span.content.as_ref()).collect()
    }

    fn row(label: &str, lines: usize) -> RowLines {
        (0..lines)
            .map(|n| Spans::from(Span::raw(format!("{}.{}", label, n))))
            .collect()
    }

    #[test]
    fn test_rows_padded_and_truncated() {
        let mut surface = TerminalSurface::new(10);
        surface.mount(6);
        surface.append_row(row("a", 1), 3);
        surface.append_row(row("b", 5), 3);

        let lines: Vec<String> = surface.visible_lines().iter().map(text).collect();
        assert_eq!(&lines[..6], &["a.0", "", "", "b.0", "b.1", "b.2"]);
    }

    #[test]
    fn test_scroll_clamped_to_extent() {
        let mut surface = TerminalSurface::new(4);
        surface.mount(10);
        surface.set_scroll_offset(100);
        assert_eq!(surface.scroll_offset(), 6);

        surface.set_extent(2);
        surface.set_scroll_offset(1);
        assert_eq!(surface.scroll_offset(), 0);
    }

    #[test]
    fn test_visible_lines_follow_content_offset() {
        let mut surface = TerminalSurface::new(2);
        surface.mount(100);
        surface.set_content_offset(10);
        surface.append_row(row("r5", 2), 2);
        surface.append_row(row("r6", 2), 2);
        surface.set_scroll_offset(11);

        let lines: Vec<String> = surface.visible_lines().iter().map(text).collect();
        assert_eq!(lines, vec!["r5.1", "r6.0"]);
    }

    #[test]
    fn test_visible_lines_always_fill_height() {
        let mut surface = TerminalSurface::new(5);
        assert!(!surface.is_mounted());
        surface.mount(0);
        assert!(surface.is_mounted());
        assert_eq!(surface.visible_lines().len(), 5);

        surface.clear();
        assert!(!surface.is_mounted());
    }

    #[test]
    fn test_growing_height_reclamps_offset() {
        let mut surface = TerminalSurface::new(4);
        surface.mount(10);
        surface.set_scroll_offset(6);

        surface.set_height(8);
        assert_eq!(surface.scroll_offset(), 2);

        surface.set_height(20);
        assert_eq!(surface.scroll_offset(), 0);
    }
}
