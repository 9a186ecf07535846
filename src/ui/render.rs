use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, AppState};
use crate::routes::{Route, RouteGuard};

use super::screens::{auth, dashboard, landing, messages, opportunities, org};
use super::styles;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Navigation
            Constraint::Min(10),   // Main content
            Constraint::Length(2), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    render_nav(frame, app, chunks[1]);
    render_main_content(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);

    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame, app);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = "  Handraise";
    let help_hint = "[?] Help";

    let title_line = Line::from(vec![
        Span::styled(title, styles::title_style()),
        Span::styled(
            format!("  {}", app.navigator.current().title()),
            styles::muted_style(),
        ),
        Span::raw(" ".repeat(
            (area.width as usize)
                .saturating_sub(title.len() + app.navigator.current().title().len() + help_hint.len() + 6),
        )),
        Span::styled(help_hint, styles::muted_style()),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());
    frame.render_widget(Paragraph::new(title_line).block(block), area);
}

fn render_nav(frame: &mut Frame, app: &App, area: Rect) {
    let route = app.navigator.current();

    let mut spans = vec![Span::raw(" ")];
    if route.is_protected() {
        let mut tabs = vec![
            ("[1] Dashboard", matches!(route, Route::Dashboard)),
            (
                "[2] Opportunities",
                matches!(route, Route::Opportunities | Route::OpportunityDetail(_)),
            ),
            ("[3] Messages", matches!(route, Route::Messages)),
        ];
        if app
            .session_state
            .user()
            .is_some_and(|u| u.role.is_org_side())
        {
            tabs.push(("[4] Organization", matches!(route, Route::OrgDashboard)));
        }

        for (i, (label, selected)) in tabs.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", styles::muted_style()));
            }
            spans.push(Span::styled(*label, styles::tab_style(*selected)));
        }

        if let Some(user) = app.session_state.user() {
            let used: usize = spans.iter().map(|s| s.content.len()).sum();
            let right = format!("{} ({}) ", user.email, user.role.display_name());
            let padding = (area.width as usize).saturating_sub(used + right.len());
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(right, styles::muted_style()));
        }
    } else {
        spans.push(Span::styled(
            "Volunteer matching for everyone",
            styles::muted_style(),
        ));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    let route = app.navigator.current().clone();

    if route.is_protected() {
        match app.guard() {
            // No flash of protected content and no premature redirect
            // while the session is still resolving.
            RouteGuard::Loading => return,
            // The run loop replaces the route; render nothing this frame.
            RouteGuard::Unauthorized => return,
            RouteGuard::Authorized => {}
        }
    }

    match route {
        Route::Landing => landing::render(frame, app, area),
        Route::Login => auth::render_login(frame, app, area),
        Route::Signup => auth::render_signup(frame, app, area),
        Route::Dashboard => dashboard::render(frame, app, area),
        Route::Opportunities => opportunities::render_list(frame, app, area),
        Route::OpportunityDetail(_) => opportunities::render_detail(frame, app, area),
        Route::Messages => messages::render(frame, app, area),
        Route::OrgDashboard => org::render(frame, app, area),
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = if let Some(ref msg) = app.status_message {
        format!(" {} ", msg)
    } else {
        String::from(" ")
    };
    let right_text = if app.navigator.current().is_protected() {
        " [u]pdate | [o] sign out | [q]uit "
    } else {
        " [q]uit "
    };

    let padding = (area.width as usize)
        .saturating_sub(left_text.len())
        .saturating_sub(right_text.len());
    let status_line = Line::from(vec![
        Span::styled(left_text, styles::muted_style()),
        Span::raw(" ".repeat(padding)),
        Span::styled(right_text, styles::muted_style()),
    ]);
    frame.render_widget(
        Paragraph::new(status_line).style(styles::status_bar_style()),
        area,
    );
}

fn render_help_overlay(frame: &mut Frame, _app: &App) {
    let area = centered_rect_fixed(52, 21, frame.area());
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");

    let help_text = vec![
        Line::from(Span::styled("  Handraise", styles::title_style())),
        Line::from(Span::styled(
            format!("  version {}", version),
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Navigation", styles::highlight_style())),
        help_line("  1-4       ", "Switch screens"),
        help_line("  ↑/↓       ", "Navigate list"),
        help_line("  Enter     ", "Select / drill down"),
        help_line("  Esc       ", "Go back"),
        Line::from(""),
        Line::from(Span::styled(" Actions", styles::highlight_style())),
        help_line("  /         ", "Search opportunities"),
        help_line("  a         ", "Apply (opportunity detail)"),
        help_line("  c         ", "Compose (messages)"),
        help_line("  u         ", "Refresh current screen"),
        help_line("  o         ", "Sign out"),
        help_line("  q         ", "Quit"),
        Line::from(""),
        Line::from(vec![
            Span::styled("       Press ", styles::muted_style()),
            Span::styled("?", styles::help_key_style()),
            Span::styled(" or ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to close", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));
    frame.render_widget(Paragraph::new(help_text).block(block), area);
}

fn help_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(key, styles::help_key_style()),
        Span::styled(desc, styles::help_desc_style()),
    ])
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(46, 7, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "   Are you sure you want to quit?",
            styles::highlight_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to quit, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
