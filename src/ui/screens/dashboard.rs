//! Volunteer dashboard: stat cards plus the ranked match list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::ApplicationStatus;
use crate::ui::styles;
use crate::utils::truncate;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Greeting
            Constraint::Length(5), // Stat cards
            Constraint::Min(5),    // Matches + applications
        ])
        .split(area);

    render_greeting(frame, app, chunks[0]);
    render_stats(frame, app, chunks[1]);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);
    render_matches(frame, app, lower[0]);
    render_applications(frame, app, lower[1]);
}

fn render_greeting(frame: &mut Frame, app: &App, area: Rect) {
    let email = app
        .session_state
        .user()
        .map(|u| u.email.as_str())
        .unwrap_or("there");
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!("Welcome back, {}", email),
            styles::highlight_style(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let pending = app
        .applications
        .iter()
        .filter(|a| a.status == ApplicationStatus::Pending)
        .count();

    render_card(frame, cards[0], "Matches", &app.matches.len().to_string());
    render_card(
        frame,
        cards[1],
        "Applications",
        &app.applications.len().to_string(),
    );
    render_card(frame, cards[2], "Pending", &pending.to_string());
}

fn render_card(frame: &mut Frame, area: Rect, label: &str, value: &str) {
    let lines = vec![
        Line::from(Span::styled(format!(" {}", label), styles::muted_style())),
        Line::from(Span::styled(
            format!(" {}", value),
            styles::title_style(),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(false));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_matches(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if app.loading.matches && app.matches.is_empty() {
        lines.push(Line::from(Span::styled(
            " Ranking opportunities for you...",
            styles::muted_style(),
        )));
    } else if app.matches.is_empty() {
        lines.push(Line::from(Span::styled(
            " No matches yet. Complete your profile to get ranked suggestions.",
            styles::muted_style(),
        )));
    }

    let width = area.width.saturating_sub(12) as usize;
    for (i, entry) in app.matches.iter().enumerate() {
        let style = if i == app.match_selection {
            styles::selected_style()
        } else {
            styles::list_item_style()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {:>4}  ", entry.score_display()), styles::success_style()),
            Span::styled(truncate(&entry.title, width), style),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Your matches ")
        .border_style(styles::border_style(true));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_applications(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if app.loading.applications && app.applications.is_empty() {
        lines.push(Line::from(Span::styled(
            " Loading applications...",
            styles::muted_style(),
        )));
    } else if app.applications.is_empty() {
        lines.push(Line::from(Span::styled(
            " You have not applied to anything yet.",
            styles::muted_style(),
        )));
    }

    for application in &app.applications {
        let status_style = match application.status {
            ApplicationStatus::Accepted => styles::success_style(),
            ApplicationStatus::Rejected => styles::error_style(),
            ApplicationStatus::Pending => styles::muted_style(),
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<10}", application.status.display_name()),
                status_style,
            ),
            Span::styled(application.applied_display(), styles::list_item_style()),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Applications ")
        .border_style(styles::border_style(false));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
