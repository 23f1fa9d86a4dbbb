use std::rc::Rc;

use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::profile::{social_links, MONOGRAM, NAV_ITEMS};
use crate::motion::listeners::{scroll_to_anchor, ScrollListener};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

pub enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    LinkActivated,
}

impl NavState {
    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Scrolled(offset) => Self {
                scrolled: offset > config::NAV_SCROLL_THRESHOLD,
                ..self
            },
            NavAction::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self
            },
            NavAction::LinkActivated => Self {
                menu_open: false,
                ..self
            },
        }
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let state = use_reducer_eq(NavState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let listener = ScrollListener::attach(move |offset| {
                    state.dispatch(NavAction::Scrolled(offset));
                });

                move || drop(listener)
            },
            (),
        );
    }

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("Toggling mobile menu");
            state.dispatch(NavAction::ToggleMenu);
        })
    };

    let nav_link = |anchor: &'static str| {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(NavAction::LinkActivated);
            scroll_to_anchor(anchor);
        })
    };

    let links = |class: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|item| {
                html! {
                    <a key={item.name} href={item.anchor} class={class} onclick={nav_link(item.anchor)}>
                        {item.name}
                    </a>
                }
            })
            .collect::<Html>()
    };

    let socials = social_links(&["GitHub", "LinkedIn", "Email"])
        .map(|link| {
            html! {
                <a key={link.label} href={link.href} class="nav-social" aria-label={link.label}>
                    {link.icon}
                </a>
            }
        })
        .collect::<Html>();

    html! {
        <nav class={classes!("top-nav", state.scrolled.then_some("glass-effect scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo gradient-text" onclick={nav_link("#home")}>
                    {MONOGRAM}
                </a>

                <div class="nav-links">
                    { links("nav-link") }
                </div>

                <div class="nav-socials">
                    { socials.clone() }
                </div>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    { if state.menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            <div class={classes!("mobile-menu", "glass-effect", state.menu_open.then_some("mobile-menu-open"))}>
                { links("mobile-link") }
                <div class="mobile-socials">
                    { socials }
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                    animation: navDrop 0.5s ease-out;
                }

                .top-nav.scrolled {
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                }

                @keyframes navDrop {
                    from { transform: translateY(-100px); }
                    to { transform: translateY(0); }
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    text-decoration: none;
                }

                .nav-links {
                    display: flex;
                    gap: 2rem;
                }

                .nav-link, .mobile-link {
                    color: #d1d5db;
                    text-decoration: none;
                    font-weight: 500;
                    transition: color 0.3s ease, transform 0.3s ease;
                }

                .nav-link:hover {
                    color: #22d3ee;
                    transform: translateY(-2px);
                }

                .nav-socials {
                    display: flex;
                    gap: 1rem;
                }

                .nav-social {
                    color: #9ca3af;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .nav-social:hover {
                    color: #22d3ee;
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #9ca3af;
                    font-size: 1.5rem;
                    cursor: pointer;
                }

                .mobile-menu {
                    display: none;
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease, opacity 0.3s ease;
                }

                .mobile-link {
                    display: block;
                    padding: 0.5rem 1rem;
                }

                .mobile-link:hover {
                    color: #22d3ee;
                    transform: translateX(10px);
                }

                .mobile-socials {
                    display: flex;
                    gap: 1rem;
                    padding: 1rem;
                }

                @media (max-width: 768px) {
                    .nav-links, .nav-socials {
                        display: none;
                    }

                    .burger-menu, .mobile-menu {
                        display: block;
                    }

                    .mobile-menu.mobile-menu-open {
                        max-height: 24rem;
                        opacity: 1;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_threshold_is_strict() {
        let state = NavState::default();
        assert!(!state.apply(NavAction::Scrolled(config::NAV_SCROLL_THRESHOLD)).scrolled);
        assert!(state.apply(NavAction::Scrolled(config::NAV_SCROLL_THRESHOLD + 1.0)).scrolled);
        assert!(!state.apply(NavAction::Scrolled(0.0)).scrolled);
    }

    #[test]
    fn scrolling_back_up_clears_the_flag() {
        let state = NavState::default()
            .apply(NavAction::Scrolled(400.0))
            .apply(NavAction::Scrolled(10.0));
        assert!(!state.scrolled);
    }

    #[test]
    fn toggle_flips_the_menu() {
        let state = NavState::default().apply(NavAction::ToggleMenu);
        assert!(state.menu_open);
        assert!(!state.apply(NavAction::ToggleMenu).menu_open);
    }

    #[test]
    fn link_activation_always_closes_the_menu() {
        let closed = NavState::default();
        let open = closed.apply(NavAction::ToggleMenu);

        for before in [closed, open] {
            assert!(!before.apply(NavAction::LinkActivated).menu_open);
        }
    }

    #[test]
    fn menu_and_scroll_flags_are_independent() {
        let state = NavState::default()
            .apply(NavAction::ToggleMenu)
            .apply(NavAction::Scrolled(120.0));
        assert_eq!(state, NavState { scrolled: true, menu_open: true });

        let state = state.apply(NavAction::LinkActivated);
        assert_eq!(state, NavState { scrolled: true, menu_open: false });
    }
}
