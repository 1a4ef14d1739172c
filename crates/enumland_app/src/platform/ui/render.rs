use enumland_core::{AppViewModel, RenderState, INPUT_PLACEHOLDER};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use throbber_widgets_tui::{Throbber, ThrobberState};

use super::constants::{
    APP_TITLE, ERROR_TITLE, INPUT_TITLE, KEY_HINTS, LOADING_LABEL, RESULTS_TITLE,
};
use super::input::visible_tail;
use super::layout;

pub fn draw(frame: &mut Frame, view: &AppViewModel, throbber_state: &mut ThrobberState) {
    let areas = layout::split(frame.area());

    frame.render_widget(Paragraph::new(Line::from(APP_TITLE.bold())), areas.title);
    render_input(frame, view, areas.input);
    render_body(frame, view, areas.body, throbber_state);
    frame.render_widget(
        Paragraph::new(KEY_HINTS.dark_gray()).alignment(Alignment::Right),
        areas.footer,
    );
}

fn render_input(frame: &mut Frame, view: &AppViewModel, area: Rect) {
    let block = Block::bordered().title(INPUT_TITLE);
    let inner = block.inner(area);

    let (line, cursor_offset) = if view.placeholder_visible {
        (Line::from(INPUT_PLACEHOLDER.dark_gray()), 0)
    } else {
        // Leave one column for the cursor.
        let (tail, width) = visible_tail(&view.input, inner.width.saturating_sub(1));
        (Line::from(Span::raw(tail)), width)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
    if inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position((inner.x + cursor_offset, inner.y));
    }
}

fn render_body(
    frame: &mut Frame,
    view: &AppViewModel,
    area: Rect,
    throbber_state: &mut ThrobberState,
) {
    if area.is_empty() {
        return;
    }
    match &view.render {
        RenderState::Loading => {
            let throbber = Throbber::default()
                .label(LOADING_LABEL)
                .throbber_style(Style::new().cyan());
            let row = Rect { height: 1, ..area };
            frame.render_stateful_widget(throbber, row, throbber_state);
        }
        RenderState::Error(message) => {
            let banner = Paragraph::new(message.as_str())
                .red()
                .wrap(Wrap { trim: false })
                .block(Block::bordered().title(ERROR_TITLE).red());
            frame.render_widget(banner, area);
        }
        RenderState::Results(domains) => {
            let items: Vec<ListItem> = domains
                .iter()
                .map(|domain| ListItem::new(domain.as_str()))
                .collect();
            let count = format!(" {} ", domains.len());
            let list = List::new(items)
                .block(
                    Block::bordered()
                        .title(RESULTS_TITLE.bold())
                        .title_bottom(Line::from(count).right_aligned()),
                )
                .highlight_style(Style::new().reversed())
                .highlight_symbol("> ");
            let mut list_state = ListState::default().with_selected(view.selected);
            frame.render_stateful_widget(list, area, &mut list_state);
        }
        RenderState::Nothing => {}
    }
}
