//! Sidebar pane: the visible navigation rows as a selectable list

use crate::theme::{icon_glyph, Palette};
use cartadmin_core::{Marker, NavRow, RowKind};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Columns of indentation per tier
const INDENT_WIDTH: usize = 2;

/// Plain-text rendering of a row: indent, marker, label, chevron
pub fn row_text(row: &NavRow<'_>) -> String {
    let indent = " ".repeat(row.indent.index() * INDENT_WIDTH);
    let chevron = match row.kind {
        RowKind::Branch { expanded: true } => " ▾",
        RowKind::Branch { expanded: false } => " ▸",
        RowKind::Leaf => "",
    };
    format!("{}{} {}{}", indent, marker_glyph(row.marker), row.label(), chevron)
}

fn marker_glyph(marker: Marker) -> &'static str {
    match marker {
        Marker::Icon(icon) => icon_glyph(icon),
        Marker::Bullet => "•",
        Marker::Blank => " ",
    }
}

/// Renders rows produced by [`cartadmin_core::flatten_visible`]
pub struct SidebarPane<'a> {
    rows: &'a [NavRow<'a>],
    palette: Palette,
}

impl<'a> SidebarPane<'a> {
    pub fn new(rows: &'a [NavRow<'a>], palette: Palette) -> Self {
        Self { rows, palette }
    }

    /// Block drawn around the list; exposed so hit-testing uses the same inner area
    pub fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.palette.border(true))
            .title(Span::styled(" Navigation ", self.palette.title()))
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &mut ListState) {
        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| {
                let style = if row.active {
                    self.palette.active()
                } else {
                    Style::default().fg(self.palette.text)
                };
                ListItem::new(Line::from(Span::styled(row_text(row), style)))
            })
            .collect();

        let list = List::new(items)
            .block(self.block())
            .highlight_style(self.palette.selected());

        frame.render_stateful_widget(list, area, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartadmin_core::{flatten_visible, ExpansionStore, Icon, NavModel, NavNode, NavPath};

    fn model() -> NavModel {
        NavModel::new(vec![
            NavNode::leaf("Dashboard", "/").with_icon(Icon::Dashboard),
            NavNode::branch(
                "Catalog",
                "/catalog",
                vec![NavNode::branch(
                    "Attributes",
                    "/catalog/attribute-menu",
                    vec![NavNode::leaf("Attribute Groups", "/catalog/attribute-groups")],
                )],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_row_text_layout() {
        let model = model();
        let mut expansion = ExpansionStore::new();
        expansion.expand(NavPath::root(1));

        let rows = flatten_visible(&model, &expansion, "/");
        let text: Vec<_> = rows.iter().map(row_text).collect();
        assert_eq!(
            text,
            vec!["◈ Dashboard", "  Catalog ▾", "  • Attributes ▸"]
        );

        expansion.expand(NavPath::from_indices(vec![1, 0]));
        let rows = flatten_visible(&model, &expansion, "/");
        assert_eq!(row_text(&rows[3]), "    • Attribute Groups");
    }
}
