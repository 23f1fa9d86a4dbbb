use chrono::Datelike;
use yew::prelude::*;

use crate::content::profile::{CONTACT_DETAILS, NAV_ITEMS, OWNER};

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <div class="site-footer__columns">
                    <div>
                        <h3 class="gradient-text">{OWNER}</h3>
                        <p>
                            {"Systems Development Consultant passionate about creating beautiful and functional digital experiences."}
                        </p>
                    </div>

                    <div>
                        <h4>{"Quick Links"}</h4>
                        { NAV_ITEMS.iter().skip(1).map(|item| html! {
                            <a key={item.name} href={item.anchor} class="site-footer__link">{item.name}</a>
                        }).collect::<Html>() }
                    </div>

                    <div>
                        <h4>{"Get In Touch"}</h4>
                        { CONTACT_DETAILS.iter().map(|detail| html! {
                            <p key={detail.label}>{detail.value}</p>
                        }).collect::<Html>() }
                    </div>
                </div>

                <div class="site-footer__bottom">
                    <p class="site-footer__fade" style="animation-delay: 0.5s;">
                        {format!("© {} {}. Made with ", current_year, OWNER)}
                        <span class="site-footer__heart">{"♥"}</span>
                        {" and lots of coffee"}
                    </p>
                    <p class="site-footer__fade site-footer__stack" style="animation-delay: 0.7s;">
                        {"Built with Rust, Yew & WebAssembly"}
                    </p>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    border-top: 1px solid #1f2937;
                }

                .site-footer__inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                }

                .site-footer__columns {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 2rem;
                }

                .site-footer h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .site-footer h4 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }

                .site-footer p {
                    color: #9ca3af;
                    line-height: 1.6;
                }

                .site-footer__link {
                    display: block;
                    color: #9ca3af;
                    text-decoration: none;
                    margin-bottom: 0.5rem;
                    transition: all 0.3s ease;
                }

                .site-footer__link:hover {
                    color: #22d3ee;
                    transform: translateX(5px);
                }

                .site-footer__bottom {
                    margin-top: 3rem;
                    padding-top: 2rem;
                    border-top: 1px solid #1f2937;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .site-footer__fade {
                    opacity: 0;
                    animation: footerFade 0.5s forwards;
                }

                @keyframes footerFade {
                    to { opacity: 1; }
                }

                .site-footer__heart {
                    display: inline-block;
                    color: #ef4444;
                    animation: heartbeat 3s infinite;
                }

                @keyframes heartbeat {
                    0%, 33%, 100% { transform: scale(1); }
                    16% { transform: scale(1.2); }
                }

                .site-footer__stack {
                    font-size: 0.875rem;
                }

                @media (max-width: 768px) {
                    .site-footer__columns {
                        grid-template-columns: 1fr;
                    }

                    .site-footer__bottom {
                        flex-direction: column;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
