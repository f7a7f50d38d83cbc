//! Markdown rendering for brief content.
//!
//! Converts the generated markdown into styled ratatui lines. Covers the
//! subset the Brief Service emits: headings, paragraphs, bullet lists, and
//! bold/italic spans.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Renders markdown source into styled lines.
pub fn markdown_lines(source: &str) -> Vec<Line<'static>> {
    let mut renderer = LineRenderer::default();
    for event in Parser::new(source) {
        renderer.push_event(event);
    }
    renderer.finish()
}

#[derive(Default)]
struct LineRenderer {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    heading: Option<HeadingLevel>,
    bold: bool,
    italic: bool,
    in_item: bool,
}

impl LineRenderer {
    fn push_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                self.blank_separator();
                self.heading = Some(level);
            }
            Event::End(TagEnd::Heading(_)) => {
                self.flush_line();
                self.heading = None;
            }
            Event::Start(Tag::Paragraph) => {
                if !self.in_item {
                    self.blank_separator();
                }
            }
            Event::End(TagEnd::Paragraph) => self.flush_line(),
            Event::Start(Tag::Item) => {
                self.flush_line();
                self.in_item = true;
                self.current.push(Span::styled(
                    "  • ".to_string(),
                    Style::default().fg(Color::Cyan),
                ));
            }
            Event::End(TagEnd::Item) => {
                self.flush_line();
                self.in_item = false;
            }
            Event::Start(Tag::Strong) => self.bold = true,
            Event::End(TagEnd::Strong) => self.bold = false,
            Event::Start(Tag::Emphasis) => self.italic = true,
            Event::End(TagEnd::Emphasis) => self.italic = false,
            Event::Text(text) => {
                let style = self.span_style();
                self.current.push(Span::styled(text.into_string(), style));
            }
            Event::Code(code) => {
                self.current.push(Span::styled(
                    code.into_string(),
                    Style::default().fg(Color::Yellow),
                ));
            }
            Event::SoftBreak => self.current.push(Span::raw(" ")),
            Event::HardBreak => self.flush_line(),
            _ => {}
        }
    }

    fn span_style(&self) -> Style {
        let mut style = match self.heading {
            Some(HeadingLevel::H1) => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Some(HeadingLevel::H2) => Style::default().add_modifier(Modifier::BOLD),
            Some(_) => Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
            None => Style::default(),
        };
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }

    /// Emits a blank line between blocks (never at the top).
    fn blank_separator(&mut self) {
        self.flush_line();
        if !self.lines.is_empty() {
            self.lines.push(Line::from(""));
        }
    }

    fn flush_line(&mut self) {
        if !self.current.is_empty() {
            let spans = std::mem::take(&mut self.current);
            self.lines.push(Line::from(spans));
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_line();
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_heading_and_paragraph() {
        let lines = markdown_lines("# Falcons\n\nA proud team.");
        assert_eq!(line_text(&lines[0]), "Falcons");
        assert!(
            lines[0].spans[0]
                .style
                .add_modifier
                .contains(Modifier::BOLD)
        );
        assert_eq!(line_text(&lines[1]), "");
        assert_eq!(line_text(&lines[2]), "A proud team.");
    }

    #[test]
    fn test_list_items_get_bullets() {
        let lines = markdown_lines("- **Legacy:** decades\n- **Unity:** one banner");
        let rendered: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(rendered.len(), 2);
        assert!(rendered[0].starts_with("  • "));
        assert!(rendered[0].contains("Legacy:"));
        assert!(rendered[1].contains("Unity:"));
    }

    #[test]
    fn test_no_leading_blank_line() {
        let lines = markdown_lines("## Core Narrative\n\ntext");
        assert_eq!(line_text(&lines[0]), "Core Narrative");
    }

    #[test]
    fn test_soft_break_joins_with_space() {
        let lines = markdown_lines("one\ntwo");
        assert_eq!(line_text(&lines[0]), "one two");
    }
}
