use ratatui::layout::{Constraint, Layout, Rect};

/// Area inside a one-cell border.
pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// A popup rectangle covering `percent_x` by `percent_y` of `r`, centered.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let margin_y = (100 - percent_y.min(100)) / 2;
    let margin_x = (100 - percent_x.min(100)) / 2;
    let rows = Layout::vertical([
        Constraint::Percentage(margin_y),
        Constraint::Percentage(percent_y),
        Constraint::Percentage(margin_y),
    ])
    .split(r);
    let cols = Layout::horizontal([
        Constraint::Percentage(margin_x),
        Constraint::Percentage(percent_x),
        Constraint::Percentage(margin_x),
    ])
    .split(rows[1]);
    cols[1]
}

/// `n` equal-width columns across `area`.
pub(super) fn columns(area: Rect, n: u16) -> Vec<Rect> {
    let width = area.width / n.max(1);
    Layout::horizontal((0..n).map(|_| Constraint::Length(width))).split(area).to_vec()
}
