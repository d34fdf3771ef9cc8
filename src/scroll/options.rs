// src/scroll/options.rs
use super::error::{RowError, ScrollError};

pub const DEFAULT_BUFFER_SIZE: usize = 5;

pub type RenderItem<T, R> = Box<dyn FnMut(&T, usize) -> Result<R, RowError>>;

/// Construction options for [`VirtualScroll`](super::VirtualScroll).
pub struct ScrollOptions<T, R> {
    pub(super) item_height: u32,
    pub(super) buffer_size: usize,
    pub(super) render_item: Option<RenderItem<T, R>>,
    pub(super) data: Vec<T>,
}

impl<T, R> ScrollOptions<T, R> {
    pub fn new(item_height: u32) -> Self {
        Self {
            item_height,
            buffer_size: DEFAULT_BUFFER_SIZE,
            render_item: None,
            data: Vec::new(),
        }
    }

    pub fn buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Row factory, called with the element and its absolute index.
    pub fn render_item<F>(mut self, render_item: F) -> Self
    where
        F: FnMut(&T, usize) -> Result<R, RowError> + 'static,
    {
        self.render_item = Some(Box::new(render_item));
        self
    }

    pub fn data(mut self, data: Vec<T>) -> Self {
        self.data = data;
        self
    }

    pub(super) fn validate(self) -> Result<(u32, usize, RenderItem<T, R>, Vec<T>), ScrollError> {
        if self.item_height == 0 {
            return Err(ScrollError::InvalidItemHeight(self.item_height));
        }
        let render_item = self.render_item.ok_or(ScrollError::MissingRenderer)?;
        Ok((self.item_height, self.buffer_size, render_item, self.data))
    }
}
