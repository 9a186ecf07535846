//! Sign-in and sign-up form screens.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, LoginFocus, SignupFocus};
use crate::ui::styles;

/// Width of the input fields in characters
const FIELD_WIDTH: usize = 24;

pub fn render_login(frame: &mut Frame, app: &App, area: Rect) {
    let height = if app.login_form.error.is_some() { 13 } else { 11 };
    let dialog = centered_rect_fixed(52, height, area);
    frame.render_widget(Clear, dialog);

    let mut lines = vec![
        Line::from(Span::styled("  Sign in to Handraise", styles::title_style())),
        Line::from(""),
    ];

    lines.push(field_line(
        "Email:    ",
        &app.login_form.email,
        app.login_form.focus == LoginFocus::Email,
        false,
    ));
    lines.push(field_line(
        "Password: ",
        &app.login_form.password,
        app.login_form.focus == LoginFocus::Password,
        true,
    ));
    lines.push(Line::from(""));
    lines.push(button_line(
        if app.login_form.submitting {
            " Signing in... "
        } else {
            "    Sign in    "
        },
        app.login_form.focus == LoginFocus::Button,
    ));

    if let Some(ref error) = app.login_form.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            styles::error_style(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  [Tab]", styles::help_key_style()),
        Span::styled(" next field  ", styles::muted_style()),
        Span::styled("[Enter]", styles::help_key_style()),
        Span::styled(" submit  ", styles::muted_style()),
        Span::styled("[Esc]", styles::help_key_style()),
        Span::styled(" back", styles::muted_style()),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));
    frame.render_widget(Paragraph::new(lines).block(block), dialog);
}

pub fn render_signup(frame: &mut Frame, app: &App, area: Rect) {
    let height = if app.signup_form.error.is_some() { 14 } else { 12 };
    let dialog = centered_rect_fixed(52, height, area);
    frame.render_widget(Clear, dialog);

    let mut lines = vec![
        Line::from(Span::styled("  Create a Handraise account", styles::title_style())),
        Line::from(""),
    ];

    lines.push(field_line(
        "Email:    ",
        &app.signup_form.email,
        app.signup_form.focus == SignupFocus::Email,
        false,
    ));
    lines.push(field_line(
        "Password: ",
        &app.signup_form.password,
        app.signup_form.focus == SignupFocus::Password,
        true,
    ));

    let role_focused = app.signup_form.focus == SignupFocus::Role;
    let role_style = if role_focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled("I am a:   ", styles::muted_style()),
        Span::styled(
            format!("< {} >", app.signup_form.role.display_name()),
            role_style,
        ),
    ]));

    lines.push(Line::from(""));
    lines.push(button_line(
        if app.signup_form.submitting {
            " Creating account... "
        } else {
            "   Create account    "
        },
        app.signup_form.focus == SignupFocus::Button,
    ));

    if let Some(ref error) = app.signup_form.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", error),
            styles::error_style(),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("  [Tab]", styles::help_key_style()),
        Span::styled(" next field  ", styles::muted_style()),
        Span::styled("[←/→]", styles::help_key_style()),
        Span::styled(" role  ", styles::muted_style()),
        Span::styled("[Esc]", styles::help_key_style()),
        Span::styled(" back", styles::muted_style()),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));
    frame.render_widget(Paragraph::new(lines).block(block), dialog);
}

fn field_line<'a>(label: &'a str, value: &str, focused: bool, masked: bool) -> Line<'a> {
    let shown: String = if masked {
        "*".repeat(value.len().min(FIELD_WIDTH))
    } else {
        value.chars().rev().take(FIELD_WIDTH).collect::<Vec<_>>().into_iter().rev().collect()
    };
    let display = format!("{:<width$}", shown, width = FIELD_WIDTH);
    let cursor = if focused { "▌" } else { "" };
    let value_style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };

    Line::from(vec![
        Span::raw("  "),
        Span::styled(label.to_string(), styles::muted_style()),
        Span::styled("[", styles::muted_style()),
        Span::styled(format!("{}{}", display, cursor), value_style),
        Span::styled("]", styles::muted_style()),
    ])
}

fn button_line<'a>(label: &'a str, focused: bool) -> Line<'a> {
    let style = if focused {
        styles::selected_style()
    } else {
        styles::list_item_style()
    };
    if focused {
        Line::from(vec![
            Span::raw("            [ ▶"),
            Span::styled(label, style),
            Span::raw("◀ ]"),
        ])
    } else {
        Line::from(vec![
            Span::raw("            [  "),
            Span::styled(label, style),
            Span::raw("  ]"),
        ])
    }
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
