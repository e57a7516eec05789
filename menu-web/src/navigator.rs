//! Category navigation state and the guided collapse -> scroll -> expand sequence.
//!
//! Every section has one collapsed flag that drives both its header and its
//! items container, so the two can never disagree. Nav-button clicks start a
//! new generation; a sequence whose generation is no longer current stops
//! before touching the page again, so the latest click always wins.

use tracing::{debug, warn};

use crate::error::MenuResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionState {
    Collapsed,
    Expanded,
}

impl SectionState {
    fn toggled(self) -> Self {
        match self {
            SectionState::Collapsed => SectionState::Expanded,
            SectionState::Expanded => SectionState::Collapsed,
        }
    }
}

/// Handle for one in-flight nav-button sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavTicket {
    pub target: usize,
    generation: u64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigatorState {
    sections: Vec<SectionState>,
    active: Option<usize>,
    generation: u64,
}

impl NavigatorState {
    /// All sections collapsed, first button active.
    pub fn new(section_count: usize) -> Self {
        Self {
            sections: vec![SectionState::Collapsed; section_count],
            active: (section_count > 0).then_some(0),
            generation: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, index: usize) -> Option<SectionState> {
        self.sections.get(index).copied()
    }

    pub fn is_collapsed(&self, index: usize) -> bool {
        self.section(index) != Some(SectionState::Expanded)
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn expanded(&self) -> impl Iterator<Item = usize> + '_ {
        self.sections
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == SectionState::Expanded)
            .map(|(i, _)| i)
    }

    /// Header click: flips one section and nothing else.
    pub fn toggle(&mut self, index: usize) -> Option<SectionState> {
        let section = self.sections.get_mut(index)?;
        *section = section.toggled();
        Some(*section)
    }

    pub fn collapse_all(&mut self) {
        self.sections.fill(SectionState::Collapsed);
    }

    /// First half of a nav-button click: activate the button and collapse
    /// every section. Supersedes any sequence already running.
    pub fn begin(&mut self, target: usize) -> Option<NavTicket> {
        if target >= self.sections.len() {
            return None;
        }
        self.active = Some(target);
        self.collapse_all();
        self.generation += 1;
        Some(NavTicket {
            target,
            generation: self.generation,
        })
    }

    pub fn is_current(&self, ticket: NavTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Last step of a nav-button click. Returns `false` and leaves the
    /// sections alone if a later click has taken over.
    pub fn complete(&mut self, ticket: NavTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        match self.sections.get_mut(ticket.target) {
            Some(section) => {
                *section = SectionState::Expanded;
                true
            }
            None => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    Expanded,
    Superseded,
    OutOfRange,
}

/// Page-side effects the navigation sequence waits on.
#[allow(async_fn_in_trait)]
pub trait NavigationHost {
    fn update<R>(&mut self, f: impl FnOnce(&mut NavigatorState) -> R) -> R;

    /// Resolves once the collapse transition has finished.
    async fn collapse_settled(&self);

    /// Start scrolling so the header of `index` sits below the nav bar.
    fn scroll_to_section(&self, index: usize) -> MenuResult<()>;

    /// Resolves once the scroll has come to rest.
    async fn scroll_settled(&self);
}

pub async fn navigate_to<H: NavigationHost>(host: &mut H, target: usize) -> NavOutcome {
    let Some(ticket) = host.update(|state| state.begin(target)) else {
        warn!("Navigation target {} out of range", target);
        return NavOutcome::OutOfRange;
    };

    host.collapse_settled().await;
    if !host.update(|state| state.is_current(ticket)) {
        debug!("Navigation to {} superseded before scrolling", target);
        return NavOutcome::Superseded;
    }

    if let Err(err) = host.scroll_to_section(target) {
        warn!("Scroll to category {} failed: {}", target, err);
    }
    host.scroll_settled().await;

    if host.update(|state| state.complete(ticket)) {
        NavOutcome::Expanded
    } else {
        debug!("Navigation to {} superseded before expanding", target);
        NavOutcome::Superseded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = NavigatorState::new(3);
        assert_eq!(state.active(), Some(0));
        assert!((0..3).all(|i| state.is_collapsed(i)));
        assert_eq!(NavigatorState::new(0).active(), None);
    }

    #[test]
    fn test_toggle_only_touches_one_section() {
        let mut state = NavigatorState::new(3);
        let ticket = state.begin(2).unwrap();
        assert!(state.complete(ticket));

        assert_eq!(state.toggle(0), Some(SectionState::Expanded));
        assert_eq!(state.active(), Some(2));
        assert_eq!(state.expanded().collect::<Vec<_>>(), [0, 2]);

        assert_eq!(state.toggle(0), Some(SectionState::Collapsed));
        assert_eq!(state.expanded().collect::<Vec<_>>(), [2]);
        assert_eq!(state.toggle(7), None);
    }

    #[test]
    fn test_begin_collapses_everything() {
        let mut state = NavigatorState::new(3);
        state.toggle(0);
        state.toggle(1);

        let ticket = state.begin(1).unwrap();
        assert_eq!(state.active(), Some(1));
        assert_eq!(state.expanded().count(), 0);

        assert!(state.complete(ticket));
        assert_eq!(state.expanded().collect::<Vec<_>>(), [1]);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut state = NavigatorState::new(3);
        let first = state.begin(0).unwrap();
        let second = state.begin(2).unwrap();

        assert!(!state.is_current(first));
        assert!(!state.complete(first));
        assert!(state.complete(second));
        assert_eq!(state.expanded().collect::<Vec<_>>(), [2]);
        assert_eq!(state.active(), Some(2));
    }

    #[test]
    fn test_begin_out_of_range() {
        let mut state = NavigatorState::new(2);
        assert!(state.begin(2).is_none());
        assert_eq!(state.active(), Some(0));
    }
}
