use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::styles;

pub fn render(frame: &mut Frame, _app: &App, area: Rect) {
    let top_padding = (area.height.saturating_sub(10) / 2) as usize;

    let mut lines = vec![Line::from(""); top_padding];
    lines.extend([
        Line::from(Span::styled(
            center("╦ ╦╔═╗╔╗╔╔╦╗╦═╗╔═╗╦╔═╗╔═╗", area.width),
            styles::title_style(),
        )),
        Line::from(Span::styled(
            center("╠═╣╠═╣║║║ ║║╠╦╝╠═╣║╚═╗║╣ ", area.width),
            styles::title_style(),
        )),
        Line::from(Span::styled(
            center("╩ ╩╩ ╩╝╚╝═╩╝╩╚═╩ ╩╩╚═╝╚═╝", area.width),
            styles::title_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            center("Find volunteer work that matters.", area.width),
            styles::list_item_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw(" ".repeat(pad_for(30, area.width))),
            Span::styled("[l]", styles::help_key_style()),
            Span::styled(" sign in    ", styles::help_desc_style()),
            Span::styled("[s]", styles::help_key_style()),
            Span::styled(" create account", styles::help_desc_style()),
        ]),
    ]);

    frame.render_widget(Paragraph::new(lines), area);
}

fn center(text: &str, width: u16) -> String {
    let pad = pad_for(text.chars().count(), width);
    format!("{}{}", " ".repeat(pad), text)
}

fn pad_for(len: usize, width: u16) -> usize {
    (width as usize).saturating_sub(len) / 2
}
