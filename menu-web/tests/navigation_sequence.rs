use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::block_on;
use futures::future::join;
use menu_web::prelude::*;

#[derive(Clone, Debug, PartialEq)]
enum Step {
    CollapseWait { expanded: usize },
    Scroll(usize),
    ScrollWait,
}

/// Records every page effect and lets a test hold the collapse wait open.
struct ScriptedHost {
    state: Rc<RefCell<NavigatorState>>,
    steps: Rc<RefCell<Vec<Step>>>,
    gate: Cell<Option<oneshot::Receiver<()>>>,
    fail_scroll: bool,
}

impl ScriptedHost {
    fn new(state: Rc<RefCell<NavigatorState>>) -> Self {
        Self {
            state,
            steps: Rc::new(RefCell::new(Vec::new())),
            gate: Cell::new(None),
            fail_scroll: false,
        }
    }

    fn gated(state: Rc<RefCell<NavigatorState>>, gate: oneshot::Receiver<()>) -> Self {
        let host = Self::new(state);
        host.gate.set(Some(gate));
        host
    }
}

impl NavigationHost for ScriptedHost {
    fn update<R>(&mut self, f: impl FnOnce(&mut NavigatorState) -> R) -> R {
        f(&mut *self.state.borrow_mut())
    }

    async fn collapse_settled(&self) {
        let expanded = self.state.borrow().expanded().count();
        self.steps.borrow_mut().push(Step::CollapseWait { expanded });
        if let Some(gate) = self.gate.take() {
            let _ = gate.await;
        }
    }

    fn scroll_to_section(&self, index: usize) -> MenuResult<()> {
        self.steps.borrow_mut().push(Step::Scroll(index));
        if self.fail_scroll {
            return Err(MenuError::MissingAnchor(".nav-container".to_string()));
        }
        Ok(())
    }

    async fn scroll_settled(&self) {
        self.steps.borrow_mut().push(Step::ScrollWait);
    }
}

fn shared(count: usize) -> Rc<RefCell<NavigatorState>> {
    Rc::new(RefCell::new(NavigatorState::new(count)))
}

#[test]
fn test_sequence_runs_in_order() {
    let state = shared(4);
    state.borrow_mut().toggle(0);
    state.borrow_mut().toggle(3);

    let mut host = ScriptedHost::new(state.clone());
    let outcome = block_on(navigate_to(&mut host, 2));

    assert_eq!(outcome, NavOutcome::Expanded);
    assert_eq!(
        *host.steps.borrow(),
        [Step::CollapseWait { expanded: 0 }, Step::Scroll(2), Step::ScrollWait]
    );

    let state = state.borrow();
    assert_eq!(state.active(), Some(2));
    assert_eq!(state.expanded().collect::<Vec<_>>(), [2]);
}

#[test]
fn test_active_button_is_exclusive() {
    let state = shared(5);
    for target in [3, 1, 4] {
        let mut host = ScriptedHost::new(state.clone());
        block_on(navigate_to(&mut host, target));

        let state = state.borrow();
        let active: Vec<usize> = (0..5).filter(|&i| state.is_active(i)).collect();
        assert_eq!(active, [target]);
        assert_eq!(state.expanded().collect::<Vec<_>>(), [target]);
    }
}

#[test]
fn test_header_click_leaves_navigation_alone() {
    let state = shared(3);
    let mut host = ScriptedHost::new(state.clone());
    block_on(navigate_to(&mut host, 1));

    state.borrow_mut().toggle(2);
    {
        let state = state.borrow();
        assert_eq!(state.active(), Some(1));
        assert_eq!(state.expanded().collect::<Vec<_>>(), [1, 2]);
    }

    state.borrow_mut().toggle(1);
    let state = state.borrow();
    assert_eq!(state.active(), Some(1));
    assert_eq!(state.expanded().collect::<Vec<_>>(), [2]);
}

#[test]
fn test_later_click_supersedes_pending_sequence() {
    let state = shared(3);
    let (release_first, gate) = oneshot::channel();
    let mut first_host = ScriptedHost::gated(state.clone(), gate);
    let mut second_host = ScriptedHost::new(state.clone());

    let first = navigate_to(&mut first_host, 0);
    let second = async {
        let outcome = navigate_to(&mut second_host, 2).await;
        release_first.send(()).unwrap();
        outcome
    };
    let (first, second) = block_on(join(first, second));

    assert_eq!(first, NavOutcome::Superseded);
    assert_eq!(second, NavOutcome::Expanded);
    // The superseded sequence never scrolled
    assert_eq!(*first_host.steps.borrow(), [Step::CollapseWait { expanded: 0 }]);

    let state = state.borrow();
    assert_eq!(state.active(), Some(2));
    assert_eq!(state.expanded().collect::<Vec<_>>(), [2]);
}

#[test]
fn test_scroll_failure_still_expands() {
    let state = shared(2);
    let mut host = ScriptedHost::new(state.clone());
    host.fail_scroll = true;

    assert_eq!(block_on(navigate_to(&mut host, 1)), NavOutcome::Expanded);
    assert_eq!(state.borrow().expanded().collect::<Vec<_>>(), [1]);
}

#[test]
fn test_out_of_range_target() {
    let state = shared(2);
    let mut host = ScriptedHost::new(state.clone());

    assert_eq!(block_on(navigate_to(&mut host, 5)), NavOutcome::OutOfRange);
    assert!(host.steps.borrow().is_empty());
    assert_eq!(state.borrow().active(), Some(0));
}
