use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

/// Reveals `target` one character per tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    target: &'static str,
    shown: usize,
    total: usize,
}

impl Typewriter {
    pub fn new(target: &'static str) -> Self {
        Self {
            target,
            shown: 0,
            total: target.chars().count(),
        }
    }

    /// Prefix revealed so far. Never cuts a character in half.
    pub fn visible(&self) -> &'static str {
        let end = self
            .target
            .char_indices()
            .nth(self.shown)
            .map(|(offset, _)| offset)
            .unwrap_or(self.target.len());
        &self.target[..end]
    }

    /// Reveals one more character. Returns false once there is nothing left.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.shown += 1;
        true
    }

    pub fn is_complete(&self) -> bool {
        self.shown >= self.total
    }
}

/// Text of a typewriter running on an interval. The interval stops when the
/// text is complete or the component unmounts, whichever comes first.
#[hook]
pub fn use_typewriter(target: &'static str, interval_ms: u32) -> &'static str {
    let text = use_state_eq(|| "");

    {
        let text = text.clone();
        use_effect_with_deps(
            move |_| {
                let machine = Rc::new(RefCell::new(Typewriter::new(target)));
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let interval_handle_clone = interval_handle.clone();

                let interval = Interval::new(interval_ms, move || {
                    let mut machine = machine.borrow_mut();
                    if machine.tick() {
                        text.set(machine.visible());
                    }
                    if machine.is_complete() {
                        debug!("Typewriter finished");
                        // Dropping the interval from inside its own tick is not allowed,
                        // so release it once this callback has returned.
                        let interval_handle = interval_handle.clone();
                        wasm_bindgen_futures::spawn_local(async move {
                            interval_handle.borrow_mut().take();
                        });
                    }
                });

                *interval_handle_clone.borrow_mut() = Some(interval);

                move || {
                    if let Some(interval) = interval_handle_clone.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            (),
        );
    }

    *text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frames(target: &'static str) -> Vec<&'static str> {
        let mut typewriter = Typewriter::new(target);
        let mut frames = vec![typewriter.visible()];
        while typewriter.tick() {
            frames.push(typewriter.visible());
        }
        frames
    }

    #[test]
    fn produces_one_frame_per_character_plus_empty() {
        let target = "Full Stack Developer & UI/UX Designer";
        let frames = frames(target);

        assert_eq!(frames.len(), target.chars().count() + 1);
        assert_eq!(frames.first(), Some(&""));
        assert_eq!(frames.last(), Some(&target));
        assert!(frames.iter().all(|frame| frame.len() <= target.len()));
        assert!(frames.windows(2).all(|pair| pair[1].starts_with(pair[0])));
    }

    #[test]
    fn ticking_past_the_end_changes_nothing() {
        let mut typewriter = Typewriter::new("ab");
        assert!(typewriter.tick());
        assert!(typewriter.tick());
        assert!(typewriter.is_complete());
        assert!(!typewriter.tick());
        assert_eq!(typewriter.visible(), "ab");
    }

    #[test]
    fn multibyte_characters_are_revealed_whole() {
        let frames = frames("né✓");
        assert_eq!(frames, vec!["", "n", "né", "né✓"]);
    }

    #[test]
    fn empty_target_is_complete_immediately() {
        let typewriter = Typewriter::new("");
        assert!(typewriter.is_complete());
        assert_eq!(frames(""), vec![""]);
    }
}
