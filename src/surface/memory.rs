// src/surface/memory.rs
use super::ScrollSurface;

/// Headless host that keeps the node tree in memory.
///
/// Every structural change (mount, resize, clear, translate, append) bumps
/// `mutations`, so callers can check that a pass did no work.
#[derive(Debug)]
pub struct MemorySurface<R> {
    container_height: u64,
    scroll_offset: u64,
    mounted: bool,
    extent: u64,
    content_offset: u64,
    rows: Vec<(R, u32)>,
    listening: bool,
    mutations: usize,
}

impl<R> MemorySurface<R> {
    pub fn new(container_height: u64) -> Self {
        Self {
            container_height,
            scroll_offset: 0,
            mounted: false,
            extent: 0,
            content_offset: 0,
            rows: Vec::new(),
            listening: false,
            mutations: 0,
        }
    }

    // Simulates the user dragging the scrollbar; the caller delivers the event
    pub fn scroll_to(&mut self, offset: u64) {
        self.scroll_offset = offset;
    }

    pub fn set_container_height(&mut self, height: u64) {
        self.container_height = height;
    }

    pub fn rows(&self) -> impl Iterator<Item = &R> {
        self.rows.iter().map(|(row, _)| row)
    }

    pub fn row_heights(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().map(|(_, height)| *height)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn extent(&self) -> u64 {
        self.extent
    }

    pub fn content_offset(&self) -> u64 {
        self.content_offset
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn mutations(&self) -> usize {
        self.mutations
    }
}

impl<R> ScrollSurface for MemorySurface<R> {
    type Row = R;

    fn container_height(&self) -> u64 {
        self.container_height
    }

    fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    fn set_scroll_offset(&mut self, offset: u64) {
        self.scroll_offset = offset;
    }

    fn mount(&mut self, extent: u64) {
        self.rows.clear();
        self.mounted = true;
        self.extent = extent;
        self.content_offset = 0;
        self.mutations += 1;
    }

    fn set_extent(&mut self, extent: u64) {
        self.extent = extent;
        self.mutations += 1;
    }

    fn clear_content(&mut self) {
        self.rows.clear();
        self.mutations += 1;
    }

    fn set_content_offset(&mut self, offset: u64) {
        self.content_offset = offset;
        self.mutations += 1;
    }

    fn append_row(&mut self, row: R, height: u32) {
        self.rows.push((row, height));
        self.mutations += 1;
    }

    fn attach_scroll_listener(&mut self) {
        self.listening = true;
    }

    fn detach_scroll_listener(&mut self) {
        self.listening = false;
    }

    fn clear(&mut self) {
        self.rows.clear();
        self.mounted = false;
        self.extent = 0;
        self.content_offset = 0;
        self.mutations += 1;
    }
}
