//! Organization dashboard table.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::styles;
use crate::utils::truncate;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(vec![
        Span::styled(format!(" {:<40}", "Title"), styles::muted_style()),
        Span::styled(format!("{:<10}", "Status"), styles::muted_style()),
        Span::styled("Applicants", styles::muted_style()),
    ])];

    if app.loading.org && app.org_rows.is_empty() {
        lines.push(Line::from(Span::styled(
            " Loading your opportunities...",
            styles::muted_style(),
        )));
    } else if app.org_rows.is_empty() {
        lines.push(Line::from(Span::styled(
            " No opportunities posted yet.",
            styles::muted_style(),
        )));
    }

    for (i, row) in app.org_rows.iter().enumerate() {
        let style = if i == app.org_selection {
            styles::selected_style()
        } else {
            styles::list_item_style()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<40}", truncate(&row.title, 38)), style),
            Span::styled(format!("{:<10}", row.status), styles::list_item_style()),
            Span::styled(row.applicants.to_string(), styles::highlight_style()),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Organization dashboard ")
        .border_style(styles::border_style(true));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
