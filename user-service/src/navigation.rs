// Pagination State
// Owns the pages and the current index; the only place the index changes

use std::num::NonZeroUsize;

use crate::paginator::paginate;

/// A navigation request coming from the pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Jump to the page with this zero-based index
    Goto(usize),
    /// Advance by one page
    Next,
    /// Go back one page
    Prev,
}

/// Which pagination control a [`Control`] stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Prev,
    Page(usize),
    Next,
}

impl ControlKind {
    /// The event a click on this control produces.
    pub fn event(self) -> NavEvent {
        match self {
            ControlKind::Prev => NavEvent::Prev,
            ControlKind::Page(index) => NavEvent::Goto(index),
            ControlKind::Next => NavEvent::Next,
        }
    }
}

/// View model for a single pagination control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub kind: ControlKind,
    pub label: String,
    pub active: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone)]
pub struct Pager<T> {
    pages: Vec<Vec<T>>,
    current: usize,
}

impl<T: Clone> Pager<T> {
    pub fn new(items: &[T], page_size: NonZeroUsize) -> Self {
        Self::from_pages(paginate(items, page_size))
    }
}

impl<T> Pager<T> {
    pub fn from_pages(pages: Vec<Vec<T>>) -> Self {
        Self { pages, current: 0 }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn total_items(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    /// Records on the active page; empty when there are no pages.
    pub fn current_page(&self) -> &[T] {
        self.pages
            .get(self.current)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn page(&self, index: usize) -> Option<&[T]> {
        self.pages.get(index).map(Vec::as_slice)
    }

    pub fn can_prev(&self) -> bool {
        self.current > 0
    }

    pub fn can_next(&self) -> bool {
        self.current + 1 < self.pages.len()
    }

    /// Apply a navigation event. Returns `true` if the current index changed.
    ///
    /// Events that would move the index outside `0..page_count` are ignored,
    /// so the invariant holds even if a disabled control is triggered.
    pub fn apply(&mut self, event: NavEvent) -> bool {
        let target = match event {
            NavEvent::Goto(index) => Some(index),
            NavEvent::Next => self.current.checked_add(1),
            NavEvent::Prev => self.current.checked_sub(1),
        };

        match target {
            Some(index) if index < self.pages.len() && index != self.current => {
                self.current = index;
                true
            }
            _ => false,
        }
    }

    /// Build the control row: `Prev`, one numbered control per page, `Next`.
    pub fn controls(&self) -> Vec<Control> {
        let mut controls = Vec::with_capacity(self.pages.len() + 2);

        controls.push(Control {
            kind: ControlKind::Prev,
            label: "Prev".to_string(),
            active: false,
            disabled: !self.can_prev(),
        });

        controls.extend((0..self.pages.len()).map(|index| Control {
            kind: ControlKind::Page(index),
            label: (index + 1).to_string(),
            active: index == self.current,
            disabled: false,
        }));

        controls.push(Control {
            kind: ControlKind::Next,
            label: "Next".to_string(),
            active: false,
            disabled: !self.can_next(),
        });

        controls
    }
}

impl<T> Default for Pager<T> {
    fn default() -> Self {
        Self::from_pages(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginator::default_page_size;

    fn pager(n: usize) -> Pager<usize> {
        let items: Vec<usize> = (0..n).collect();
        Pager::new(&items, default_page_size())
    }

    fn active_labels(pager: &Pager<usize>) -> Vec<String> {
        pager
            .controls()
            .into_iter()
            .filter(|c| c.active)
            .map(|c| c.label)
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let pager = pager(25);
        assert_eq!(pager.current_index(), 0);
        assert_eq!(pager.page_count(), 3);
        assert_eq!(pager.total_items(), 25);
        assert_eq!(pager.current_page(), (0..10).collect::<Vec<_>>().as_slice());
        assert!(!pager.can_prev());
        assert!(pager.can_next());
    }

    #[test]
    fn test_next_and_prev() {
        let mut pager = pager(25);
        assert!(pager.apply(NavEvent::Next));
        assert_eq!(pager.current_index(), 1);
        assert!(pager.apply(NavEvent::Next));
        assert_eq!(pager.current_page().len(), 5);
        assert!(pager.apply(NavEvent::Prev));
        assert_eq!(pager.current_index(), 1);
    }

    #[test]
    fn test_next_on_last_page_is_disabled_and_ignored() {
        let mut pager = pager(25);
        pager.apply(NavEvent::Goto(2));

        let next = pager.controls().pop().unwrap();
        assert_eq!(next.kind, ControlKind::Next);
        assert!(next.disabled);

        assert!(!pager.apply(NavEvent::Next));
        assert_eq!(pager.current_index(), 2);
    }

    #[test]
    fn test_prev_on_first_page_is_disabled_and_ignored() {
        let mut pager = pager(25);

        let prev = pager.controls().remove(0);
        assert_eq!(prev.kind, ControlKind::Prev);
        assert!(prev.disabled);

        assert!(!pager.apply(NavEvent::Prev));
        assert_eq!(pager.current_index(), 0);
    }

    #[test]
    fn test_goto_marks_only_that_control_active() {
        let mut pager = pager(40);
        for k in 0..4 {
            pager.apply(NavEvent::Goto(k));
            assert_eq!(pager.current_index(), k);
            assert_eq!(active_labels(&pager), vec![(k + 1).to_string()]);
        }
    }

    #[test]
    fn test_goto_out_of_range_is_ignored() {
        let mut pager = pager(25);
        pager.apply(NavEvent::Goto(1));
        assert!(!pager.apply(NavEvent::Goto(3)));
        assert_eq!(pager.current_index(), 1);
    }

    #[test]
    fn test_goto_current_reports_no_change() {
        let mut pager = pager(25);
        assert!(!pager.apply(NavEvent::Goto(0)));
    }

    #[test]
    fn test_controls_layout() {
        let pager = pager(25);
        let labels: Vec<String> = pager.controls().into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Prev", "1", "2", "3", "Next"]);
    }

    #[test]
    fn test_empty_pager() {
        let mut pager = pager(0);
        assert!(pager.is_empty());
        assert!(pager.current_page().is_empty());
        assert!(!pager.apply(NavEvent::Next));
        assert!(!pager.apply(NavEvent::Goto(0)));

        let controls = pager.controls();
        assert_eq!(controls.len(), 2);
        assert!(controls.iter().all(|c| c.disabled && !c.active));
    }

    #[test]
    fn test_single_page_disables_both_arrows() {
        let pager = pager(7);
        let controls = pager.controls();
        assert!(controls[0].disabled);
        assert!(controls[2].disabled);
        assert!(controls[1].active);
    }

    #[test]
    fn test_control_kind_events() {
        assert_eq!(ControlKind::Prev.event(), NavEvent::Prev);
        assert_eq!(ControlKind::Next.event(), NavEvent::Next);
        assert_eq!(ControlKind::Page(4).event(), NavEvent::Goto(4));
    }
}
