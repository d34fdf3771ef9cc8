// src/app/mod.rs
pub mod contacts;

pub use contacts::Contact;

use tui::style::{Modifier, Style};
use tui::text::{Span, Spans};

use crate::config::{ListConfig, Theme};
use crate::input::ScrollAction;
use crate::scroll::{RenderOutcome, ScrollError, ScrollOptions, VirtualScroll};
use crate::surface::{MemorySurface, ScrollSurface};
use crate::ui::{list_height, RowLines, TerminalSurface};

pub struct App {
    scroll: VirtualScroll<Contact, TerminalSurface>,
    pending_count: Option<usize>,
    message: Option<String>,
    wheel_step: u16,
    should_quit: bool,
}

impl App {
    pub fn new(
        contacts: Vec<Contact>,
        list: &ListConfig,
        theme: &Theme,
        terminal_height: u16,
    ) -> Result<Self, ScrollError> {
        let name_style = Style::default().add_modifier(Modifier::BOLD);
        let detail_style = Style::default().fg(theme.secondary.to_tui_color());

        let options = ScrollOptions::new(list.item_height)
            .buffer_size(list.buffer_size)
            .render_item(move |contact: &Contact, index| {
                Ok(contact_row(contact, index, name_style, detail_style))
            })
            .data(contacts);
        let surface = TerminalSurface::new(list_height(terminal_height));

        Ok(Self {
            scroll: VirtualScroll::new(surface, options)?,
            pending_count: None,
            message: None,
            wheel_step: list.wheel_step.max(1),
            should_quit: false,
        })
    }

    pub fn scroll(&self) -> &VirtualScroll<Contact, TerminalSurface> {
        &self.scroll
    }

    pub fn surface(&self) -> &TerminalSurface {
        self.scroll.surface()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn apply(&mut self, action: ScrollAction) {
        if !matches!(action, ScrollAction::Digit(_)) {
            self.message = None;
        }

        let page = i64::from(self.surface().height().max(1));
        let wheel = i64::from(self.wheel_step);
        let outcome = match action {
            ScrollAction::LineDown => Some(self.scroll_by(1)),
            ScrollAction::LineUp => Some(self.scroll_by(-1)),
            ScrollAction::PageDown => Some(self.scroll_by(page)),
            ScrollAction::PageUp => Some(self.scroll_by(-page)),
            ScrollAction::WheelDown => Some(self.scroll_by(wheel)),
            ScrollAction::WheelUp => Some(self.scroll_by(-wheel)),
            ScrollAction::Top => Some(self.scroll.scroll_to_index(0)),
            ScrollAction::Bottom => Some(match self.pending_count.take() {
                Some(index) => self.scroll.scroll_to_index(index),
                None => self.scroll.scroll_to_index(self.scroll.len()),
            }),
            ScrollAction::Digit(digit) => {
                let count = self
                    .pending_count
                    .unwrap_or(0)
                    .saturating_mul(10)
                    .saturating_add(usize::from(digit));
                self.pending_count = Some(count);
                None
            }
            ScrollAction::ClearCount => {
                self.pending_count = None;
                None
            }
            ScrollAction::Reverse => {
                let reversed = self.scroll.data().iter().rev().cloned().collect();
                let report = self.scroll.update_data(reversed);
                Some(RenderOutcome::Rendered(report))
            }
            ScrollAction::Resize(_, height) => {
                self.scroll.surface_mut().set_height(list_height(height));
                Some(self.scroll.remeasure())
            }
            ScrollAction::Quit => {
                self.should_quit = true;
                None
            }
        };

        if let Some(RenderOutcome::Rendered(report)) = outcome {
            if let Err(err) = report.into_result() {
                self.message = Some(err.to_string());
            }
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(message) = &self.message {
            return format!(" {}", message);
        }

        let range = self.scroll.visible_range();
        let mut status = format!(
            " rows {}..{}  offset {}/{}  buffer {}",
            range.start,
            range.end,
            self.scroll.scroll_top(),
            self.scroll.total_height(),
            self.scroll.buffer_size()
        );
        if let Some(count) = self.pending_count {
            status.push_str(&format!("  goto {}", count));
        }
        status
    }

    fn scroll_by(&mut self, delta: i64) -> RenderOutcome {
        let current = self.scroll.scroll_top();
        let target = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta.unsigned_abs())
        };
        self.scroll.surface_mut().set_scroll_offset(target);
        self.scroll.handle_scroll()
    }
}

fn contact_row(contact: &Contact, index: usize, name_style: Style, detail_style: Style) -> RowLines {
    vec![
        Spans::from(vec![
            Span::styled(format!("{:>6}  ", index), detail_style),
            Span::styled(contact.name.clone(), name_style),
        ]),
        Spans::from(Span::styled(
            format!("        {}  <{}>", contact.company, contact.email),
            detail_style,
        )),
    ]
}

/// Renders the window at `offset` without a terminal and returns one text
/// line per materialized row.
pub fn render_headless(
    contacts: Vec<Contact>,
    list: &ListConfig,
    container_height: u64,
    offset: u64,
) -> Result<Vec<String>, ScrollError> {
    let options = ScrollOptions::new(list.item_height)
        .buffer_size(list.buffer_size)
        .render_item(|contact: &Contact, index| {
            Ok(format!(
                "{:>6}  {}  {}  <{}>",
                index, contact.name, contact.company, contact.email
            ))
        })
        .data(contacts);
    let mut scroll = VirtualScroll::new(MemorySurface::new(container_height), options)?;

    scroll.surface_mut().set_scroll_offset(offset);
    if let RenderOutcome::Rendered(report) = scroll.handle_scroll() {
        report.into_result()?;
    }

    let range = scroll.visible_range();
    let mut lines = vec![format!(
        "rows {}..{} of {} (offset {}, content at {})",
        range.start,
        range.end,
        scroll.len(),
        scroll.scroll_top(),
        scroll.surface().content_offset()
    )];
    lines.extend(scroll.surface().rows().cloned());

    scroll.destroy();
    Ok(lines)
}
