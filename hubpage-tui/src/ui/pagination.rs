use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use user_service::{Control, ControlKind};

const GAP: u16 = 1;

/// Width of a control drawn as `[label]`.
pub fn control_width(control: &Control) -> u16 {
    control.label.chars().count() as u16 + 2
}

/// Area inside the pagination block's border.
pub fn inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Lay the controls out left to right on the first row of `area`.
///
/// Returns `(control index, rect)` pairs. When the full row does not fit,
/// `Prev` stays on the left, `Next` is pinned to the right edge and only a
/// window of page numbers around the active page is kept.
pub fn hit_regions(controls: &[Control], area: Rect) -> Vec<(usize, Rect)> {
    if area.height == 0 || area.width == 0 {
        return Vec::new();
    }

    let widths: Vec<u16> = controls.iter().map(control_width).collect();
    let total = widths
        .iter()
        .fold(0u16, |acc, w| acc.saturating_add(*w).saturating_add(GAP))
        .saturating_sub(GAP);

    if total <= area.width {
        return layout_sequential(&widths, (0..controls.len()).collect(), area);
    }

    let last = controls.len().saturating_sub(1);
    let has_arrows = controls.len() >= 2
        && controls[0].kind == ControlKind::Prev
        && controls[last].kind == ControlKind::Next;
    let arrows = widths[0]
        .saturating_add(GAP)
        .saturating_add(widths[last]);
    if !has_arrows || arrows > area.width {
        return layout_sequential(&widths, (0..controls.len()).collect(), area);
    }

    // each page number costs its width plus the gap that follows it
    let budget = area.width - arrows;
    let cost = |index: usize| widths[index].saturating_add(GAP);

    let mut visible = vec![0];
    let anchor = controls
        .iter()
        .position(|c| c.active)
        .unwrap_or(1)
        .clamp(1, last.max(1));
    if anchor < last && cost(anchor) <= budget {
        let (mut lo, mut hi) = (anchor, anchor);
        let mut used = cost(anchor);
        loop {
            let mut grew = false;
            if hi + 1 < last && used.saturating_add(cost(hi + 1)) <= budget {
                hi += 1;
                used += cost(hi);
                grew = true;
            }
            if lo > 1 && used.saturating_add(cost(lo - 1)) <= budget {
                lo -= 1;
                used += cost(lo);
                grew = true;
            }
            if !grew {
                break;
            }
        }
        visible.extend(lo..=hi);
    }

    let mut regions = layout_sequential(&widths, visible, area);
    regions.push((
        last,
        Rect::new(area.right() - widths[last], area.y, widths[last], 1),
    ));
    regions
}

/// Place the given controls one after another, dropping any that run past
/// the right edge.
fn layout_sequential(widths: &[u16], indices: Vec<usize>, area: Rect) -> Vec<(usize, Rect)> {
    let mut regions = Vec::with_capacity(indices.len());
    let mut x = area.x;
    for index in indices {
        let width = widths[index];
        let end = x.saturating_add(width);
        if end > area.right() {
            break;
        }
        regions.push((index, Rect::new(x, area.y, width, 1)));
        x = end.saturating_add(GAP);
    }
    regions
}

/// The control under a terminal cell, if any.
pub fn control_at<'a>(
    controls: &'a [Control],
    regions: &[(usize, Rect)],
    column: u16,
    row: u16,
) -> Option<&'a Control> {
    let position = Position::new(column, row);
    regions
        .iter()
        .find(|(_, rect)| rect.contains(position))
        .and_then(|(index, _)| controls.get(*index))
}

fn control_style(control: &Control) -> Style {
    if control.active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else if control.disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    }
}

pub fn render(controls: &[Control], frame: &mut Frame, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Pages");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (index, rect) in hit_regions(controls, inner) {
        let control = &controls[index];
        let label = Span::styled(format!("[{}]", control.label), control_style(control));
        frame.render_widget(Paragraph::new(label), rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use user_service::{default_page_size, NavEvent, Pager};

    fn controls(n: usize, page_size: usize, current: usize) -> Vec<Control> {
        let items: Vec<usize> = (0..n).collect();
        let mut pager = Pager::new(
            &items,
            std::num::NonZeroUsize::new(page_size).unwrap_or(default_page_size()),
        );
        pager.apply(NavEvent::Goto(current));
        pager.controls()
    }

    #[test]
    fn test_regions_are_sequential() {
        let controls = controls(25, 10, 0);
        let regions = hit_regions(&controls, Rect::new(1, 5, 78, 1));

        let expected = vec![
            (0, Rect::new(1, 5, 6, 1)),   // [Prev]
            (1, Rect::new(8, 5, 3, 1)),   // [1]
            (2, Rect::new(12, 5, 3, 1)),  // [2]
            (3, Rect::new(16, 5, 3, 1)),  // [3]
            (4, Rect::new(20, 5, 6, 1)),  // [Next]
        ];
        assert_eq!(regions, expected);
    }

    #[test]
    fn test_control_at() {
        let controls = controls(25, 10, 0);
        let regions = hit_regions(&controls, Rect::new(0, 0, 80, 1));

        assert_eq!(
            control_at(&controls, &regions, 0, 0).map(|c| c.kind),
            Some(ControlKind::Prev)
        );
        assert_eq!(
            control_at(&controls, &regions, 12, 0).map(|c| c.kind),
            Some(ControlKind::Page(2))
        );
        // the gap between controls
        assert!(control_at(&controls, &regions, 6, 0).is_none());
        // wrong row
        assert!(control_at(&controls, &regions, 0, 1).is_none());
    }

    #[test]
    fn test_next_pinned_when_row_overflows() {
        let controls = controls(40, 1, 0);
        let area = Rect::new(0, 0, 40, 1);
        let regions = hit_regions(&controls, area);

        let (last_index, last_rect) = *regions.last().unwrap();
        assert_eq!(controls[last_index].kind, ControlKind::Next);
        assert_eq!(last_rect.right(), area.right());
        assert!(regions.len() < controls.len());

        // no overlap between consecutive regions
        for pair in regions.windows(2) {
            assert!(pair[0].1.right() < pair[1].1.x);
        }
    }

    #[test]
    fn test_overflowing_row_keeps_active_page_visible() {
        let controls = controls(40, 1, 29);
        let area = Rect::new(0, 0, 40, 1);
        let regions = hit_regions(&controls, area);

        let kinds: Vec<ControlKind> = regions.iter().map(|(i, _)| controls[*i].kind).collect();
        assert_eq!(kinds.first(), Some(&ControlKind::Prev));
        assert_eq!(kinds.last(), Some(&ControlKind::Next));
        assert!(kinds.contains(&ControlKind::Page(29)));
        assert!(kinds.contains(&ControlKind::Page(28)));
        assert!(kinds.contains(&ControlKind::Page(30)));
        assert!(!kinds.contains(&ControlKind::Page(0)));

        let active: Vec<_> = regions.iter().filter(|(i, _)| controls[*i].active).collect();
        assert_eq!(active.len(), 1);

        for pair in regions.windows(2) {
            assert!(pair[0].1.right() < pair[1].1.x);
        }
        assert_eq!(regions.last().unwrap().1.right(), area.right());
    }

    #[test]
    fn test_overflowing_row_on_last_page() {
        let controls = controls(40, 1, 39);
        let regions = hit_regions(&controls, Rect::new(0, 0, 40, 1));

        let kinds: Vec<ControlKind> = regions.iter().map(|(i, _)| controls[*i].kind).collect();
        assert!(kinds.contains(&ControlKind::Page(39)));
        assert_eq!(kinds.last(), Some(&ControlKind::Next));
    }

    #[test]
    fn test_empty_area_has_no_regions() {
        let controls = controls(25, 10, 0);
        assert!(hit_regions(&controls, Rect::new(0, 0, 0, 0)).is_empty());
    }
}
