// src/surface/mod.rs
mod memory;

pub use memory::MemorySurface;

/// The host side of a windowed list: a scrollable container the renderer
/// owns a sizer node and a content node inside.
///
/// All lengths are in pixels along the scroll axis. Hosts without pixels
/// (a terminal) pick their own unit and use it consistently.
pub trait ScrollSurface {
    /// A freshly created visual node for one row.
    type Row;

    /// Current rendered height of the container.
    fn container_height(&self) -> u64;

    fn scroll_offset(&self) -> u64;

    /// Programmatic scroll. Does not dispatch a scroll event.
    fn set_scroll_offset(&mut self, offset: u64);

    /// Replace the container's children with an empty sizer of `extent`
    /// and an empty content node nested in it.
    fn mount(&mut self, extent: u64);

    /// Resize the sizer node.
    fn set_extent(&mut self, extent: u64);

    /// Remove every row from the content node.
    fn clear_content(&mut self);

    /// Translate the content node along the scroll axis.
    fn set_content_offset(&mut self, offset: u64);

    /// Append a row, forcing its size along the scroll axis to `height`.
    fn append_row(&mut self, row: Self::Row, height: u32);

    fn attach_scroll_listener(&mut self);

    fn detach_scroll_listener(&mut self);

    /// Empty the container entirely.
    fn clear(&mut self);
}
