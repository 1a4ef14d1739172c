use ratatui::layout::{Constraint, Layout, Margin, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    pub title: Rect,
    pub input: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn split(area: Rect) -> Areas {
    let area = area.inner(Margin {
        vertical: 0,
        horizontal: 1,
    });
    let [title, input, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);

    Areas {
        title,
        input,
        body,
        footer,
    }
}
