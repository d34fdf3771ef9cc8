// src/directive/mod.rs
//! Declarative binding for hosts that attach behaviour to elements through
//! an attribute, e.g. `x-virtual-scroll="{ item_height = 50 }"`.
//!
//! The binding owns the renderer for as long as the element lives. Dropping
//! it is the element's cleanup hook and runs `destroy()`.

use serde::Deserialize;

use crate::scroll::{RowError, ScrollError, ScrollOptions, VirtualScroll, DEFAULT_BUFFER_SIZE};
use crate::surface::ScrollSurface;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectiveOptions {
    pub item_height: u32,
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

#[derive(Debug, thiserror::Error)]
pub enum DirectiveError {
    #[error("Invalid directive expression: {0}")]
    Expression(#[from] toml::de::Error),

    #[error(transparent)]
    Scroll(#[from] ScrollError),
}

#[derive(Deserialize)]
struct Wrapper {
    options: DirectiveOptions,
}

impl DirectiveOptions {
    /// Parses an inline-table expression such as
    /// `{ item_height = 50, buffer_size = 1 }`.
    pub fn parse(expression: &str) -> Result<Self, DirectiveError> {
        let wrapper: Wrapper = toml::from_str(&format!("options = {}", expression.trim()))?;
        Ok(wrapper.options)
    }
}

pub struct ScrollDirective<T, S: ScrollSurface> {
    scroll: Option<VirtualScroll<T, S>>,
}

impl<T, S: ScrollSurface> ScrollDirective<T, S> {
    pub fn bind<F>(
        surface: S,
        expression: &str,
        render_item: F,
        data: Vec<T>,
    ) -> Result<Self, DirectiveError>
    where
        F: FnMut(&T, usize) -> Result<S::Row, RowError> + 'static,
    {
        let options = DirectiveOptions::parse(expression)?;
        log::debug!("Binding virtual scroll directive: {:?}", options);

        let scroll = VirtualScroll::new(
            surface,
            ScrollOptions::new(options.item_height)
                .buffer_size(options.buffer_size)
                .render_item(render_item)
                .data(data),
        )?;
        Ok(Self {
            scroll: Some(scroll),
        })
    }

    pub fn scroll(&self) -> Option<&VirtualScroll<T, S>> {
        self.scroll.as_ref()
    }

    pub fn scroll_mut(&mut self) -> Option<&mut VirtualScroll<T, S>> {
        self.scroll.as_mut()
    }

    /// Runs the cleanup hook now and returns the emptied surface.
    pub fn unbind(mut self) -> Option<S> {
        self.scroll.take().map(VirtualScroll::destroy)
    }
}

impl<T, S: ScrollSurface> Drop for ScrollDirective<T, S> {
    fn drop(&mut self) {
        if let Some(scroll) = self.scroll.take() {
            log::debug!("Element removed, cleaning up virtual scroll");
            scroll.destroy();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::VisibleRange;
    use crate::surface::MemorySurface;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_parse_expression() {
        let options = DirectiveOptions::parse("{ item_height = 50, buffer_size = 1 }").unwrap();
        assert_eq!(
            options,
            DirectiveOptions {
                item_height: 50,
                buffer_size: 1
            }
        );
    }

    #[test]
    fn test_parse_defaults_buffer() {
        let options = DirectiveOptions::parse("{ item_height = 24 }").unwrap();
        assert_eq!(options.buffer_size, DEFAULT_BUFFER_SIZE);
    }

    #[test]
    fn test_parse_rejects_unknown_and_malformed() {
        assert!(matches!(
            DirectiveOptions::parse("{ item_height = 24, colour = 3 }"),
            Err(DirectiveError::Expression(_))
        ));
        assert!(matches!(
            DirectiveOptions::parse("item_height: 24"),
            Err(DirectiveError::Expression(_))
        ));
    }

    #[test]
    fn test_bind_rejects_zero_height() {
        let result = ScrollDirective::bind(
            MemorySurface::new(100),
            "{ item_height = 0 }",
            |n: &u32, _| Ok(*n),
            vec![1, 2, 3],
        );
        assert!(matches!(
            result.err(),
            Some(DirectiveError::Scroll(ScrollError::InvalidItemHeight(0)))
        ));
    }

    #[test]
    fn test_bind_renders_and_unbind_cleans_up() {
        let mut directive = ScrollDirective::bind(
            MemorySurface::new(200),
            "{ item_height = 50, buffer_size = 1 }",
            |n: &u32, _| Ok(*n),
            (0..100).collect(),
        )
        .unwrap();

        let scroll = directive.scroll_mut().unwrap();
        assert_eq!(scroll.visible_range(), VisibleRange::new(0, 5));
        scroll.scroll_to_index(10);
        assert_eq!(scroll.visible_range(), VisibleRange::new(9, 15));

        let surface = directive.unbind().unwrap();
        assert!(!surface.is_listening());
        assert_eq!(surface.row_count(), 0);
    }

    #[test]
    fn test_drop_runs_cleanup() {
        let renders = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&renders);
        let directive = ScrollDirective::bind(
            MemorySurface::new(100),
            "{ item_height = 10, buffer_size = 0 }",
            move |n: &u32, i| {
                log.borrow_mut().push(i);
                Ok(*n)
            },
            (0..50).collect(),
        )
        .unwrap();
        assert!(directive.scroll().is_some_and(|s| s.surface().is_listening()));

        drop(directive);

        // The render closure, and with it the shared log, was released
        assert_eq!(Rc::strong_count(&renders), 1);
        assert_eq!(renders.borrow().len(), 10);
    }
}
