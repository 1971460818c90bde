//! # Terminal Renderer
//!
//! Draws a laid out page through a [`RenderStream`]. The focused line is
//! shown in reverse video and the viewport scrolls to keep it on screen.
//! The bottom row is a key hint bar.

use super::layout::{LineStyle, PageLayout, ScreenLine};
use crate::storefront::io::{RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use unicode_width::UnicodeWidthChar;

const STATUS_HINT: &str = "Tab/↑↓ перемещение  Enter выбор  Esc закрыть  q выход";

// Helper macro to convert crossterm errors to anyhow errors
macro_rules! queue_term {
    ($($arg:expr),* $(,)?) => {
        queue!($($arg),*).map_err(anyhow::Error::from)
    };
}

pub trait ViewRenderer {
    /// Take over the terminal
    fn initialize(&mut self) -> Result<()>;

    /// Draw the whole page with `focus` highlighted
    fn render_page(&mut self, page: &PageLayout, focus: Option<usize>) -> Result<()>;

    fn update_size(&mut self, width: u16, height: u16);

    /// Give the terminal back
    fn cleanup(&mut self) -> Result<()>;
}

pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: TerminalSize,
    scroll_offset: usize,
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            terminal_size,
            scroll_offset: 0,
        })
    }

    pub fn terminal_size(&self) -> TerminalSize {
        self.terminal_size
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Rows available for page content
    fn content_height(&self) -> usize {
        self.terminal_size.1.saturating_sub(1).max(1) as usize
    }

    /// Move the viewport so the focused line is visible
    fn scroll_to(&mut self, page: &PageLayout, focus: Option<usize>) {
        let height = self.content_height();
        let max_offset = page.line_count().saturating_sub(height);

        if let Some(line) = focus.and_then(|index| page.focusables.get(index)).map(|f| f.line) {
            if line < self.scroll_offset {
                self.scroll_offset = line;
            } else if line >= self.scroll_offset + height {
                self.scroll_offset = line + 1 - height;
            }
        }
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    fn draw_line(&mut self, row: u16, line: &ScreenLine, focused: bool) -> Result<()> {
        self.render_stream.move_cursor(0, row)?;

        let width = self.terminal_size.0 as usize;
        let indent = (line.indent as usize).min(width);
        let text = truncate_to_width(&line.text, width - indent);

        queue_term!(self.render_stream, Print(" ".repeat(indent)))?;
        match line.style {
            LineStyle::Heading => queue_term!(self.render_stream, SetAttribute(Attribute::Bold))?,
            LineStyle::Muted => queue_term!(self.render_stream, SetAttribute(Attribute::Dim))?,
            LineStyle::Error => queue_term!(self.render_stream, SetForegroundColor(Color::Red))?,
            LineStyle::Control => {
                queue_term!(self.render_stream, SetForegroundColor(Color::Cyan))?
            }
            LineStyle::Plain => {}
        }
        if focused {
            queue_term!(self.render_stream, SetAttribute(Attribute::Reverse))?;
        }
        queue_term!(
            self.render_stream,
            Print(text),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
        Ok(())
    }

    fn draw_status_bar(&mut self, page: &PageLayout) -> Result<()> {
        let (width, height) = self.terminal_size;
        self.render_stream.move_cursor(0, height.saturating_sub(1))?;

        let position = if page.line_count() > self.content_height() {
            format!("  {}/{}", self.scroll_offset + 1, page.line_count())
        } else {
            String::new()
        };
        let status = truncate_to_width(&format!("{STATUS_HINT}{position}"), width as usize);

        queue_term!(
            self.render_stream,
            SetAttribute(Attribute::Dim),
            Print(status),
            SetAttribute(Attribute::Reset)
        )?;
        Ok(())
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()?;
        Ok(())
    }

    fn render_page(&mut self, page: &PageLayout, focus: Option<usize>) -> Result<()> {
        self.scroll_to(page, focus);

        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()?;

        let focused_line = focus
            .and_then(|index| page.focusables.get(index))
            .map(|focusable| focusable.line);
        let visible = page
            .lines
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(self.content_height());

        for (row, (index, line)) in visible.enumerate() {
            self.draw_line(row as u16, line, focused_line == Some(index))?;
        }
        self.draw_status_bar(page)?;

        self.render_stream.flush()?;
        Ok(())
    }

    fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.show_cursor()?;
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.disable_raw_mode()?;
        self.render_stream.flush()?;
        Ok(())
    }
}

/// Cut `text` to at most `width` terminal columns
fn truncate_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::io::{MockRenderStream, RenderCommand};
    use crate::storefront::views::layout::layout;
    use crate::storefront::views::{Node, UiAction};

    fn tall_page(buttons: usize) -> PageLayout {
        let children = (0..buttons)
            .map(|i| {
                Node::new("button")
                    .with_text(format!("кнопка {i}"))
                    .with_action(UiAction::CloseModal)
            })
            .collect();
        layout(&Node::new("div").with_children(children))
    }

    #[test]
    fn initialize_should_take_over_terminal() {
        let stream = MockRenderStream::new();
        let handle = stream.handle();
        let mut renderer = TerminalRenderer::with_render_stream(stream).unwrap();

        renderer.initialize().unwrap();
        renderer.cleanup().unwrap();

        let commands = handle.commands();
        assert!(commands.contains(&RenderCommand::EnableRawMode));
        assert!(commands.contains(&RenderCommand::EnterAlternateScreen));
        assert!(commands.contains(&RenderCommand::LeaveAlternateScreen));
        assert!(commands.contains(&RenderCommand::DisableRawMode));
    }

    #[test]
    fn render_page_should_draw_text_and_status_bar() {
        let stream = MockRenderStream::with_size((60, 10));
        let handle = stream.handle();
        let mut renderer = TerminalRenderer::with_render_stream(stream).unwrap();

        renderer.render_page(&tall_page(2), Some(1)).unwrap();

        let screen = handle.screen_text();
        assert!(screen.contains("[ кнопка 0 ]"));
        assert!(screen.contains("[ кнопка 1 ]"));
        assert!(screen.contains("Enter выбор"));
        assert!(handle.screen().contains("\x1b[7m"));
    }

    #[test]
    fn focus_below_viewport_should_scroll() {
        let stream = MockRenderStream::with_size((40, 5));
        let handle = stream.handle();
        let mut renderer = TerminalRenderer::with_render_stream(stream).unwrap();

        renderer.render_page(&tall_page(10), Some(7)).unwrap();

        assert_eq!(renderer.scroll_offset(), 4);
        let screen = handle.screen_text();
        assert!(screen.contains("кнопка 7"));
        assert!(!screen.contains("кнопка 0"));
    }

    #[test]
    fn focus_above_viewport_should_scroll_back() {
        let mut renderer =
            TerminalRenderer::with_render_stream(MockRenderStream::with_size((40, 5))).unwrap();

        renderer.render_page(&tall_page(10), Some(9)).unwrap();
        renderer.render_page(&tall_page(10), Some(2)).unwrap();

        assert_eq!(renderer.scroll_offset(), 2);
    }

    #[test]
    fn truncate_should_respect_wide_characters() {
        assert_eq!(truncate_to_width("Лоты", 2), "Ло");
        assert_eq!(truncate_to_width("日本", 3), "日");
        assert_eq!(truncate_to_width("abc", 10), "abc");
    }
}
