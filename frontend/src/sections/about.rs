use yew::prelude::*;

use crate::content::skills::{HIGHLIGHTS, SERVICES, SKILL_GROUPS};
use crate::motion::reveal::{use_reveal_once, StaggerSchedule, SECTION_STAGGER};

const SERVICE_STAGGER: StaggerSchedule = StaggerSchedule::new(500, 100);
const SKILL_STAGGER: StaggerSchedule = StaggerSchedule::new(300, 100);

#[function_component(About)]
pub fn about() -> Html {
    let node = use_node_ref();
    let reveal = use_reveal_once(node.clone(), "about");

    html! {
        <section id="about" class="section-padding section--tinted">
            <div ref={node} class="section-inner">
                <div class={classes!("section-heading", reveal.classes())} style={SECTION_STAGGER.style(0)}>
                    <h2>{"About "}<span class="gradient-text">{"Me"}</span></h2>
                    <p>
                        {"I'm a passionate Systems Development Consultant with experience in full-stack development, data science, and cloud technologies. I love combining technical expertise with creative problem-solving to build robust and user-centered digital solutions."}
                    </p>
                </div>

                <div class="about-columns">
                    <div class={classes!("about-journey", reveal.classes())} style={SECTION_STAGGER.style(1)}>
                        <h3>{"My Journey"}</h3>
                        <p>
                            {"Started as a curious student who loved solving problems with code. Over the years, I've worked with startups and established companies, helping them bring their digital visions to life."}
                        </p>
                        <p>
                            {"I believe in continuous learning and staying up-to-date with the latest technologies. When I'm not coding, you can find me exploring new design trends, contributing to open-source projects, or mentoring aspiring developers."}
                        </p>
                        <div class="about-highlights">
                            { HIGHLIGHTS.iter().map(|(figure, caption)| html! {
                                <div key={*caption} class="glass-effect about-highlight">
                                    <span class="about-highlight__figure">{*figure}</span>
                                    {" "}{*caption}
                                </div>
                            }).collect::<Html>() }
                        </div>
                    </div>

                    <div class={classes!("about-services", reveal.classes())} style={SECTION_STAGGER.style(2)}>
                        <div class="glass-effect about-services__panel">
                            <h3>{"What I Do"}</h3>
                            { SERVICES.iter().zip(SERVICE_STAGGER.styles()).map(|(service, style)| html! {
                                <div
                                    key={*service}
                                    class={classes!("about-service", "reveal--from-left", reveal.classes())}
                                    {style}
                                >
                                    <span class="about-service__dot"></span>
                                    <span>{*service}</span>
                                </div>
                            }).collect::<Html>() }
                        </div>
                    </div>
                </div>

                <div class={classes!("skills", reveal.classes())} style={SECTION_STAGGER.style(3)}>
                    <h3 class="skills__title">{"Skills & "}<span class="gradient-text">{"Technologies"}</span></h3>
                    <div class="skills__grid">
                        { SKILL_GROUPS.iter().zip(SKILL_STAGGER.styles()).map(|(group, style)| html! {
                            <div
                                key={group.title}
                                class={classes!("skill-card", "glass-effect", "hover-lift", reveal.classes())}
                                {style}
                            >
                                <div class="skill-card__header">
                                    <div class="skill-card__icon" style={format!("background: {};", group.accent)}>
                                        {group.icon}
                                    </div>
                                    <h4>{group.title}</h4>
                                </div>
                                <div class="tech-tags">
                                    { group.skills.iter().map(|skill| html! {
                                        <span key={*skill} class="tech-tag">{*skill}</span>
                                    }).collect::<Html>() }
                                </div>
                            </div>
                        }).collect::<Html>() }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .about-columns {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 3rem;
                    margin-bottom: 4rem;
                }

                .about-journey h3, .about-services h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }

                .about-journey p {
                    color: #d1d5db;
                    line-height: 1.6;
                    margin-bottom: 1.5rem;
                }

                .about-highlights {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    padding-top: 1rem;
                }

                .about-highlight {
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                }

                .about-highlight__figure {
                    color: #22d3ee;
                    font-weight: 600;
                }

                .about-services__panel {
                    padding: 2rem;
                    border-radius: 1rem;
                }

                .about-service {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                    color: #d1d5db;
                }

                .about-service__dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #22d3ee, #3b82f6);
                }

                .skills__title {
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .skills__grid {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 1.5rem;
                }

                .skill-card {
                    padding: 1.5rem;
                    border-radius: 0.75rem;
                }

                .skill-card__header {
                    display: flex;
                    align-items: center;
                    margin-bottom: 1rem;
                }

                .skill-card__icon {
                    padding: 0.75rem;
                    border-radius: 0.5rem;
                    margin-right: 1rem;
                    color: white;
                }

                .skill-card h4 {
                    font-size: 1.25rem;
                    font-weight: 600;
                }

                .skill-card:hover .tech-tag {
                    background: rgba(75, 85, 99, 0.5);
                }

                @media (max-width: 1024px) {
                    .about-columns {
                        grid-template-columns: 1fr;
                    }

                    .skills__grid {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }
                }

                @media (max-width: 768px) {
                    .skills__grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
