use crate::theme::Palette;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Trail from the top-level menu entry down to the current page
pub struct Breadcrumbs {
    labels: Vec<String>,
    /// Maximum labels to display before truncation
    max_display: usize,
    palette: Palette,
}

impl Default for Breadcrumbs {
    fn default() -> Self {
        Self::new()
    }
}

impl Breadcrumbs {
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            max_display: 4,
            palette: Palette::default(),
        }
    }

    pub fn with_max_display(mut self, max: usize) -> Self {
        self.max_display = max;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Replace the trail (labels from [`cartadmin_core::trail_for_route`])
    pub fn set_trail(&mut self, labels: Vec<String>) {
        self.labels = labels;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(Line::from(self.build_spans()));
        frame.render_widget(paragraph, area);
    }

    fn build_spans(&self) -> Vec<Span<'static>> {
        let mut spans = vec![Span::styled("⌂ ", self.palette.active())];

        if self.labels.is_empty() {
            spans.push(Span::styled("(no menu entry)", self.palette.hint()));
            return spans;
        }

        let shown = self.visible_labels();
        let last = shown.len() - 1;
        for (idx, label) in shown.into_iter().enumerate() {
            let style = if idx == last {
                self.palette.title()
            } else {
                self.palette.hint()
            };
            spans.push(Span::styled(label, style));
            if idx < last {
                spans.push(Span::styled(" › ", self.palette.hint()));
            }
        }

        spans
    }

    /// "First › … › Parent › Current" once the trail is too long
    fn visible_labels(&self) -> Vec<String> {
        if self.labels.len() <= self.max_display {
            return self.labels.clone();
        }

        let mut result = Vec::with_capacity(4);
        result.push(self.labels[0].clone());
        result.push("…".to_string());
        let skip = self.labels.len().saturating_sub(2);
        result.extend(self.labels.iter().skip(skip).cloned());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_truncation_keeps_root_and_tail() {
        let mut crumbs = Breadcrumbs::new().with_max_display(3);
        crumbs.set_trail(labels(&["System", "Localisation", "Taxes", "Tax Rates"]));

        assert_eq!(
            crumbs.visible_labels(),
            labels(&["System", "…", "Taxes", "Tax Rates"])
        );
    }

    #[test]
    fn test_short_trail_untouched() {
        let mut crumbs = Breadcrumbs::new();
        crumbs.set_trail(labels(&["Catalog", "Products"]));

        // icon + 2 labels + 1 separator
        assert_eq!(crumbs.build_spans().len(), 4);
    }

    #[test]
    fn test_empty_trail_placeholder() {
        let crumbs = Breadcrumbs::new();
        let spans = crumbs.build_spans();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].content, "(no menu entry)");
    }
}
