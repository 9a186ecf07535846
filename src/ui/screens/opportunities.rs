//! Opportunity search list and detail views.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, AppState};
use crate::models::Opportunity;
use crate::ui::styles;
use crate::utils::truncate;

pub fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_listing(frame, app, chunks[0]);

    let filtered = app.filtered_opportunities();
    let highlighted = filtered.get(app.opportunity_selection).copied();
    render_summary(frame, highlighted, chunks[1]);
}

fn render_listing(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if matches!(app.state, AppState::Searching) || !app.opportunity_query.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(" /", styles::search_style()),
            Span::styled(app.opportunity_query.clone(), styles::search_style()),
            Span::styled(
                if matches!(app.state, AppState::Searching) {
                    "▌"
                } else {
                    ""
                },
                styles::search_style(),
            ),
        ]));
    }

    let filtered = app.filtered_opportunities();
    if app.loading.opportunities && filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            " Loading opportunities...",
            styles::muted_style(),
        )));
    } else if filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            " No open opportunities found.",
            styles::muted_style(),
        )));
    }

    let width = area.width.saturating_sub(14) as usize;
    for (i, opp) in filtered.iter().enumerate() {
        let style = if i == app.opportunity_selection {
            styles::selected_style()
        } else {
            styles::list_item_style()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<9}", opp.location_display()), styles::muted_style()),
            Span::styled(truncate(&opp.title, width), style),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Open opportunities ")
        .border_style(styles::border_style(true));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_summary(frame: &mut Frame, opportunity: Option<&Opportunity>, area: Rect) {
    let lines = match opportunity {
        Some(opp) => vec![
            Line::from(Span::styled(format!(" {}", opp.title), styles::title_style())),
            Line::from(""),
            detail_line("Status:   ", opp.status.display_name()),
            detail_line("Where:    ", opp.location_display()),
            detail_line("When:     ", &opp.dates_display()),
            detail_line("Skills:   ", &opp.skills_display()),
            detail_line("Min hrs:  ", &opp.min_hours.to_string()),
            Line::from(""),
            Line::from(vec![
                Span::styled(" [Enter]", styles::help_key_style()),
                Span::styled(" full details", styles::muted_style()),
            ]),
        ],
        None => vec![Line::from(Span::styled(
            " Select an opportunity",
            styles::muted_style(),
        ))],
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let lines = match &app.selected_opportunity {
        Some(opp) => {
            let mut lines = vec![
                Line::from(Span::styled(format!(" {}", opp.title), styles::title_style())),
                Line::from(""),
                detail_line("Status:   ", opp.status.display_name()),
                detail_line("Where:    ", opp.location_display()),
                detail_line("When:     ", &opp.dates_display()),
                detail_line("Skills:   ", &opp.skills_display()),
                detail_line("Min hrs:  ", &opp.min_hours.to_string()),
                Line::from(""),
            ];
            for text_line in opp.description.lines() {
                lines.push(Line::from(Span::styled(
                    format!(" {}", text_line),
                    styles::list_item_style(),
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(" [a]", styles::help_key_style()),
                Span::styled(" apply   ", styles::help_desc_style()),
                Span::styled("[Esc]", styles::help_key_style()),
                Span::styled(" back", styles::help_desc_style()),
            ]));
            lines
        }
        None if app.loading.opportunity_detail => vec![Line::from(Span::styled(
            " Loading opportunity...",
            styles::muted_style(),
        ))],
        None => vec![Line::from(Span::styled(
            " Opportunity not found.",
            styles::muted_style(),
        ))],
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Opportunity ")
        .border_style(styles::border_style(true));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(block), area);
}

fn detail_line<'a>(label: &'a str, value: &str) -> Line<'a> {
    Line::from(vec![
        Span::raw(" "),
        Span::styled(label.to_string(), styles::muted_style()),
        Span::styled(value.to_string(), styles::list_item_style()),
    ])
}
