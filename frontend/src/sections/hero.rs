use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::profile::{social_links, OWNER, TAGLINE};
use crate::motion::listeners::scroll_to_anchor;
use crate::motion::reveal::use_reveal_once;
use crate::motion::typewriter::use_typewriter;

const PARTICLES: usize = 20;

/// Deterministic scatter for the background particles.
fn particle_style(index: usize) -> String {
    let left = (index * 37 + 11) % 100;
    let top = (index * 53 + 29) % 100;
    let duration = 5 + (index * 7) % 10;
    let delay = (index * 3) % 5;
    format!(
        "left: {}%; top: {}%; animation-duration: {}s; animation-delay: {}s;",
        left, top, duration, delay
    )
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let node = use_node_ref();
    let reveal = use_reveal_once(node.clone(), "hero");
    let subtitle = use_typewriter(TAGLINE, config::TYPEWRITER_INTERVAL_MS);

    let jump_to = |anchor: &'static str| {
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            scroll_to_anchor(anchor);
        })
    };

    html! {
        <section class="hero">
            <div class="hero__background">
                { (0..PARTICLES).map(|i| html! {
                    <div key={i.to_string()} class="hero__particle" style={particle_style(i)}></div>
                }).collect::<Html>() }
            </div>

            <div ref={node} class={classes!("hero__content", reveal.classes())}>
                <h1 class="hero__title">
                    {"Hi, I'm "}
                    <span class="gradient-text">{OWNER}</span>
                </h1>

                <div class="hero__subtitle">
                    <p>
                        {subtitle}
                        <span class="hero__cursor">{"|"}</span>
                    </p>
                </div>

                <p class="hero__intro">
                    {"I create beautiful, functional, and user-centered digital experiences. Passionate about turning ideas into reality through code and design."}
                </p>

                <div class="hero__actions">
                    <button class="hero-cta" onclick={jump_to("#projects")}>
                        {"View My Work"}
                    </button>
                    <button class="hero-cta hero-cta--outline" onclick={jump_to("#contact")}>
                        {"Get In Touch"}
                    </button>
                </div>

                <div class="hero__socials">
                    { social_links(&["GitHub", "LinkedIn", "Email"]).map(|link| html! {
                        <a key={link.label} href={link.href} class="social-bubble glass-effect" aria-label={link.label}>
                            {link.icon}
                        </a>
                    }).collect::<Html>() }
                </div>
            </div>

            <div class="hero__scroll-hint">{"↓"}</div>

            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    position: relative;
                    overflow: hidden;
                }

                .hero__background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                    background: linear-gradient(135deg, #111827, rgba(30, 58, 138, 0.2), rgba(22, 78, 99, 0.2));
                }

                .hero__particle {
                    position: absolute;
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: rgba(34, 211, 238, 0.3);
                    opacity: 0;
                    animation-name: drift;
                    animation-iteration-count: infinite;
                }

                @keyframes drift {
                    0% { transform: translate(0, 0); opacity: 0; }
                    50% { transform: translate(100px, -100px); opacity: 1; }
                    100% { transform: translate(0, 0); opacity: 0; }
                }

                .hero__content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    max-width: 56rem;
                    padding: 0 1rem;
                }

                .hero__title {
                    font-size: 4.5rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .hero__subtitle {
                    height: 2rem;
                    margin-bottom: 2rem;
                    font-size: 1.5rem;
                    color: #d1d5db;
                }

                .hero__cursor {
                    animation: blink 1s step-end infinite;
                }

                @keyframes blink {
                    50% { opacity: 0; }
                }

                .hero__intro {
                    font-size: 1.125rem;
                    color: #9ca3af;
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                    line-height: 1.6;
                }

                .hero__actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    margin-bottom: 4rem;
                }

                .hero-cta {
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    color: white;
                    border: none;
                    cursor: pointer;
                    background: linear-gradient(90deg, #06b6d4, #3b82f6);
                    transition: all 0.3s ease;
                }

                .hero-cta:hover {
                    transform: scale(1.05);
                    box-shadow: 0 10px 15px rgba(6, 182, 212, 0.25);
                }

                .hero-cta--outline {
                    background: transparent;
                    border: 1px solid #06b6d4;
                }

                .hero__socials {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                }

                .social-bubble {
                    padding: 0.75rem 1rem;
                    border-radius: 9999px;
                    color: white;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .social-bubble:hover {
                    transform: translateY(-5px) scale(1.2);
                    background: rgba(6, 182, 212, 0.2);
                }

                .hero__scroll-hint {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: #22d3ee;
                    font-size: 2rem;
                    opacity: 0;
                    animation: fadeInHint 1s 2s forwards, bob 2s 3s infinite;
                }

                @keyframes fadeInHint {
                    to { opacity: 1; }
                }

                @keyframes bob {
                    0%, 100% { transform: translate(-50%, 0); }
                    50% { transform: translate(-50%, 10px); }
                }

                @media (max-width: 768px) {
                    .hero__title {
                        font-size: 3rem;
                    }

                    .hero__subtitle {
                        font-size: 1.25rem;
                    }

                    .hero__actions {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_stay_inside_the_banner() {
        for i in 0..PARTICLES {
            let style = particle_style(i);
            let left: usize = style["left: ".len()..style.find('%').unwrap()].parse().unwrap();
            assert!(left < 100, "particle {i} at {left}%");
        }
    }
}
