use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use unicode_width::UnicodeWidthChar;

use super::constants::PAGE_SCROLL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// New raw value of the search box.
    Edit(String),
    Scroll(i32),
    Quit,
}

/// Map a terminal event to an action against the current raw input.
pub fn map_event(event: Event, input: &str) -> Option<UiAction> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key, input),
        Event::Paste(text) => map_paste(&text, input),
        _ => None,
    }
}

pub fn map_key(key: KeyEvent, input: &str) -> Option<UiAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(UiAction::Quit),
        KeyCode::Char('c') if ctrl => Some(UiAction::Quit),
        KeyCode::Char('u') if ctrl => Some(UiAction::Edit(String::new())),
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(ch) => {
            let mut value = input.to_string();
            value.push(ch);
            Some(UiAction::Edit(value))
        }
        KeyCode::Backspace => {
            let mut value = input.to_string();
            value.pop()?;
            Some(UiAction::Edit(value))
        }
        KeyCode::Up => Some(UiAction::Scroll(-1)),
        KeyCode::Down => Some(UiAction::Scroll(1)),
        KeyCode::PageUp => Some(UiAction::Scroll(-PAGE_SCROLL)),
        KeyCode::PageDown => Some(UiAction::Scroll(PAGE_SCROLL)),
        KeyCode::Home => Some(UiAction::Scroll(i32::MIN)),
        KeyCode::End => Some(UiAction::Scroll(i32::MAX)),
        _ => None,
    }
}

/// Pasted text is appended with line breaks dropped.
pub fn map_paste(text: &str, input: &str) -> Option<UiAction> {
    let pasted: String = text.chars().filter(|ch| !ch.is_control()).collect();
    if pasted.is_empty() {
        return None;
    }
    Some(UiAction::Edit(format!("{input}{pasted}")))
}

/// Longest suffix of `input` that fits in `max_width` columns, with its width.
pub fn visible_tail(input: &str, max_width: u16) -> (&str, u16) {
    let mut width = 0u16;
    let mut start = input.len();
    for (idx, ch) in input.char_indices().rev() {
        let ch_width = ch.width().unwrap_or(0) as u16;
        if width + ch_width > max_width {
            break;
        }
        width += ch_width;
        start = idx;
    }
    (&input[start..], width)
}
