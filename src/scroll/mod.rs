// src/scroll/mod.rs
mod error;
mod options;
mod range;

pub use error::{RenderOutcome, RenderReport, RowError, RowFailure, ScrollError};
pub use options::{RenderItem, ScrollOptions, DEFAULT_BUFFER_SIZE};
pub use range::VisibleRange;

use std::time::Instant;

use crate::surface::ScrollSurface;

/// Windowed list renderer.
///
/// Only the rows inside the visible range (plus `buffer_size` rows on each
/// side) exist on the surface at any time. The sizer node keeps the full
/// `len * item_height` extent so the host scrollbar behaves as if every row
/// were present.
pub struct VirtualScroll<T, S: ScrollSurface> {
    surface: S,
    item_height: u32,
    buffer_size: usize,
    render_item: RenderItem<T, S::Row>,
    data: Vec<T>,
    scroll_top: u64,
    container_height: u64,
    rendered: Option<VisibleRange>,
}

impl<T, S: ScrollSurface> VirtualScroll<T, S> {
    /// Mounts onto `surface` and renders the first window.
    pub fn new(mut surface: S, options: ScrollOptions<T, S::Row>) -> Result<Self, ScrollError> {
        let (item_height, buffer_size, render_item, data) = options.validate()?;

        let container_height = surface.container_height();
        let scroll_top = surface.scroll_offset();
        surface.mount(extent_for(data.len(), item_height));
        surface.attach_scroll_listener();

        let mut scroll = Self {
            surface,
            item_height,
            buffer_size,
            render_item,
            data,
            scroll_top,
            container_height,
            rendered: None,
        };

        log::debug!(
            "Mounted virtual scroll: {} rows, item height {}, container {}",
            scroll.data.len(),
            item_height,
            container_height
        );
        scroll.render();

        Ok(scroll)
    }

    /// Scroll event entry point. Does no surface work when the window is
    /// unchanged.
    pub fn handle_scroll(&mut self) -> RenderOutcome {
        self.scroll_top = self.surface.scroll_offset();
        self.render_if_changed()
    }

    /// Re-reads the container height after the host resized it.
    pub fn remeasure(&mut self) -> RenderOutcome {
        self.container_height = self.surface.container_height();
        self.scroll_top = self.surface.scroll_offset();
        self.render_if_changed()
    }

    /// Replaces the list and re-renders unconditionally.
    ///
    /// The scroll offset is clamped to the last valid position first, so a
    /// shrinking list never leaves the window past its end.
    pub fn update_data(&mut self, data: Vec<T>) -> RenderReport {
        log::debug!("Replacing {} rows with {}", self.data.len(), data.len());
        self.data = data;

        let extent = self.total_height();
        self.surface.set_extent(extent);

        self.scroll_top = self.surface.scroll_offset();
        let max_scroll = extent.saturating_sub(self.container_height);
        if self.scroll_top > max_scroll {
            self.scroll_top = max_scroll;
            self.surface.set_scroll_offset(max_scroll);
        }

        self.render()
    }

    /// Moves row `index` to the top of the container and renders.
    pub fn scroll_to_index(&mut self, index: usize) -> RenderOutcome {
        let offset = (index as u64).saturating_mul(u64::from(self.item_height));
        self.surface.set_scroll_offset(offset);
        self.handle_scroll()
    }

    /// Forced render pass, bypassing the unchanged-window check.
    pub fn render(&mut self) -> RenderReport {
        let start = Instant::now();
        let range = self.compute_range();

        self.surface.clear_content();
        self.surface.set_content_offset(range.content_offset(self.item_height));

        let mut failures = Vec::new();
        let mut rendered = 0;
        for index in range.as_range() {
            match (self.render_item)(&self.data[index], index) {
                Ok(row) => {
                    self.surface.append_row(row, self.item_height);
                    rendered += 1;
                }
                Err(err) => failures.push(RowFailure {
                    index,
                    message: err.to_string(),
                }),
            }
        }

        self.rendered = Some(range);

        let report = RenderReport {
            range,
            rendered,
            failures,
        };
        if let Some(first) = report.failures.first() {
            log::warn!(
                "Skipped {} of {} rows in {}..{} (first: {})",
                report.failures.len(),
                range.len(),
                range.start,
                range.end,
                first
            );
        }
        log::trace!(
            "Rendered rows {}..{} in {:?}",
            range.start,
            range.end,
            start.elapsed()
        );

        report
    }

    /// Detaches from the host and hands the surface back.
    pub fn destroy(mut self) -> S {
        self.surface.detach_scroll_listener();
        self.surface.clear();
        log::debug!("Destroyed virtual scroll over {} rows", self.data.len());
        self.surface
    }

    pub fn visible_range(&self) -> VisibleRange {
        self.rendered.unwrap_or_default()
    }

    pub fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    pub fn container_height(&self) -> u64 {
        self.container_height
    }

    pub fn total_height(&self) -> u64 {
        extent_for(self.data.len(), self.item_height)
    }

    pub fn item_height(&self) -> u32 {
        self.item_height
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn compute_range(&self) -> VisibleRange {
        VisibleRange::compute(
            self.scroll_top,
            self.container_height,
            self.item_height,
            self.buffer_size,
            self.data.len(),
        )
    }

    fn render_if_changed(&mut self) -> RenderOutcome {
        let range = self.compute_range();
        if self.rendered == Some(range) {
            return RenderOutcome::Unchanged(range);
        }
        RenderOutcome::Rendered(self.render())
    }
}

fn extent_for(len: usize, item_height: u32) -> u64 {
    (len as u64).saturating_mul(u64::from(item_height))
}
