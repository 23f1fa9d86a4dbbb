use std::cell::Cell;
use std::rc::Rc;

use log::info;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::motion::listeners::VisibilityObserver;

/// Entrance state of a section. Once `Triggered` it never goes back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    NotTriggered,
    Triggered,
}

impl RevealState {
    pub fn observe(self, visible: bool) -> Self {
        match self {
            RevealState::NotTriggered if visible => RevealState::Triggered,
            state => state,
        }
    }

    pub fn is_visible(self) -> bool {
        self == RevealState::Triggered
    }

    /// Class list for a child that fades in with its section.
    pub fn classes(self) -> Classes {
        classes!("reveal", self.is_visible().then_some("reveal--visible"))
    }
}

/// Delay of child `i` is `base_ms + i * step_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaggerSchedule {
    pub base_ms: u32,
    pub step_ms: u32,
}

impl StaggerSchedule {
    pub const fn new(base_ms: u32, step_ms: u32) -> Self {
        Self { base_ms, step_ms }
    }

    pub fn delay_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_ms.saturating_add(index.saturating_mul(self.step_ms))
    }

    pub fn delays(self) -> impl Iterator<Item = u32> {
        (0..).map(move |index| self.delay_ms(index))
    }

    pub fn style(&self, index: usize) -> String {
        format!("transition-delay: {}ms;", self.delay_ms(index))
    }

    /// Inline styles for children in order, meant to be zipped with them.
    pub fn styles(self) -> impl Iterator<Item = String> {
        self.delays().map(|ms| format!("transition-delay: {}ms;", ms))
    }
}

/// Section-level children: heading, body blocks and so on.
pub const SECTION_STAGGER: StaggerSchedule = StaggerSchedule::new(0, 100);

/// Flips to `Triggered` the first time `node` scrolls into view and stays there.
#[hook]
pub fn use_reveal_once(node: NodeRef, section: &'static str) -> RevealState {
    let state = use_state_eq(RevealState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let machine = Rc::new(Cell::new(RevealState::default()));
                let observer = node.cast::<Element>().and_then(|element| {
                    VisibilityObserver::observe(&element, config::REVEAL_THRESHOLD, move |visible| {
                        let current = machine.get();
                        let next = current.observe(visible);
                        if next != current {
                            info!("Revealing {} section", section);
                            machine.set(next);
                            state.set(next);
                        }
                    })
                });

                move || drop(observer)
            },
            node,
        );
    }

    *state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_hidden_until_visible() {
        let state = RevealState::default();
        assert_eq!(state.observe(false), RevealState::NotTriggered);
        assert!(!state.is_visible());
    }

    #[test]
    fn triggers_once_and_never_reverts() {
        let mut state = RevealState::default();
        let mut transitions = 0;

        for visible in [false, true, false, true, true, false, true] {
            let next = state.observe(visible);
            if next != state {
                transitions += 1;
            }
            state = next;
        }

        assert_eq!(transitions, 1);
        assert_eq!(state, RevealState::Triggered);
        assert_eq!(state.observe(false), RevealState::Triggered);
    }

    #[test]
    fn schedule_steps_from_base() {
        let schedule = StaggerSchedule::new(300, 100);
        let delays: Vec<u32> = schedule.delays().take(4).collect();
        assert_eq!(delays, vec![300, 400, 500, 600]);
        assert_eq!(schedule.style(2), "transition-delay: 500ms;");
    }

    #[test]
    fn styles_follow_the_schedule_for_each_child() {
        let schedule = StaggerSchedule::new(500, 100);
        let children = ["a", "b", "c"];
        let styles: Vec<String> = children.iter().zip(schedule.styles()).map(|(_, style)| style).collect();
        assert_eq!(
            styles,
            vec!["transition-delay: 500ms;", "transition-delay: 600ms;", "transition-delay: 700ms;"]
        );
        assert_eq!(styles[1], schedule.style(1));
    }

    #[test]
    fn schedule_saturates_instead_of_overflowing() {
        let schedule = StaggerSchedule::new(u32::MAX - 10, 100);
        assert_eq!(schedule.delay_ms(5), u32::MAX);
    }
}
