//! Conversations list and message thread.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, AppState};
use crate::ui::styles;
use crate::utils::truncate;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    render_conversations(frame, app, chunks[0]);
    render_thread(frame, app, chunks[1]);
}

fn render_conversations(frame: &mut Frame, app: &App, area: Rect) {
    let me = app.session_state.user().map(|u| u.id.clone()).unwrap_or_default();
    let mut lines = Vec::new();

    if app.loading.conversations && app.conversations.is_empty() {
        lines.push(Line::from(Span::styled(
            " Loading conversations...",
            styles::muted_style(),
        )));
    } else if app.conversations.is_empty() {
        lines.push(Line::from(Span::styled(
            " No conversations yet.",
            styles::muted_style(),
        )));
    }

    let width = area.width.saturating_sub(4) as usize;
    for (i, conversation) in app.conversations.iter().enumerate() {
        let style = if i == app.conversation_selection {
            styles::selected_style()
        } else {
            styles::list_item_style()
        };
        lines.push(Line::from(Span::styled(
            format!(" {}", truncate(&conversation.title(&me), width)),
            style,
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Conversations ")
        .border_style(styles::border_style(false));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_thread(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let me = app.session_state.user().map(|u| u.id.clone()).unwrap_or_default();
    let mut lines = Vec::new();

    match app.selected_conversation() {
        Some(conversation) => match app.messages.get(&conversation.id) {
            Some(messages) if !messages.is_empty() => {
                for message in messages {
                    let (who, style) = if message.sender_id == me {
                        ("you", styles::highlight_style())
                    } else {
                        ("them", styles::success_style())
                    };
                    lines.push(Line::from(vec![
                        Span::styled(format!(" {:>4}  ", who), style),
                        Span::styled(message.content.clone(), styles::list_item_style()),
                    ]));
                }
            }
            Some(_) => lines.push(Line::from(Span::styled(
                " No messages in this conversation yet.",
                styles::muted_style(),
            ))),
            None => lines.push(Line::from(Span::styled(
                " Loading messages...",
                styles::muted_style(),
            ))),
        },
        None => lines.push(Line::from(Span::styled(
            " Select a conversation",
            styles::muted_style(),
        ))),
    }

    let thread_block = Block::default()
        .borders(Borders::ALL)
        .title(" Messages ")
        .border_style(styles::border_style(true));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(thread_block),
        chunks[0],
    );

    let composing = matches!(app.state, AppState::Composing);
    let compose_line = Line::from(vec![
        Span::styled(" > ", styles::search_style()),
        Span::styled(app.compose_input.clone(), styles::list_item_style()),
        Span::styled(if composing { "▌" } else { "" }, styles::search_style()),
    ]);
    let compose_block = Block::default()
        .borders(Borders::ALL)
        .title(if composing {
            " Compose ([Enter] send, [Esc] cancel) "
        } else {
            " Compose ([c] to write) "
        })
        .border_style(styles::border_style(composing));
    frame.render_widget(Paragraph::new(compose_line).block(compose_block), chunks[1]);
}
