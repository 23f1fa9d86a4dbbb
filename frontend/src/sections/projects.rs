use log::info;
use yew::prelude::*;

use crate::components::project_image::ProjectImage;
use crate::content::projects::{
    filter_projects, partition_featured, technology_preview, CategoryFilter, ProjectRecord, PROJECTS,
};
use crate::motion::reveal::{use_reveal_once, RevealState, StaggerSchedule, SECTION_STAGGER};

const FEATURED_STAGGER: StaggerSchedule = StaggerSchedule::new(300, 200);
const OTHER_STAGGER: StaggerSchedule = StaggerSchedule::new(500, 100);
const COMPACT_TECH_LIMIT: usize = 3;

#[derive(Properties, PartialEq)]
struct CardProps {
    project: &'static ProjectRecord,
    index: usize,
    reveal: RevealState,
}

#[function_component(FeaturedCard)]
fn featured_card(props: &CardProps) -> Html {
    let project = props.project;
    // Alternate cards slide in from opposite sides.
    let side = if props.index % 2 == 0 { "reveal--from-left" } else { "reveal--from-right" };

    html! {
        <article
            class={classes!("project-card", "project-card--featured", "glass-effect", "hover-lift", side, props.reveal.classes())}
            style={FEATURED_STAGGER.style(props.index)}
        >
            <div class="project-card__media">
                <ProjectImage src={project.image} alt={project.title} />
                <div class="project-card__shade"></div>
                <ProjectLinks project={project} />
            </div>

            <div class="project-card__body">
                <div class="project-card__meta">
                    <span class="project-card__category">{"🏷 "}{project.category.label()}</span>
                    <span class="project-card__date">{"📅 "}{project.date}</span>
                </div>
                <h4>{project.title}</h4>
                <p>{project.description}</p>
                <div class="tech-tags">
                    { project.technologies.iter().map(|tech| html! {
                        <span key={*tech} class="tech-tag">{*tech}</span>
                    }).collect::<Html>() }
                </div>
            </div>
        </article>
    }
}

#[function_component(CompactCard)]
fn compact_card(props: &CardProps) -> Html {
    let project = props.project;
    let (shown, hidden) = technology_preview(project.technologies, COMPACT_TECH_LIMIT);

    html! {
        <article
            class={classes!("project-card", "project-card--compact", "glass-effect", "hover-lift", props.reveal.classes())}
            style={OTHER_STAGGER.style(props.index)}
        >
            <div class="project-card__media project-card__media--compact">
                <div class="project-card__glyph">{"💻"}</div>
                <ProjectLinks project={project} />
            </div>

            <div class="project-card__body">
                <div class="project-card__meta">
                    <span class="project-card__category">{project.category.label()}</span>
                    <span class="project-card__date">{project.date}</span>
                </div>
                <h4>{project.title}</h4>
                <p class="line-clamp-2">{project.description}</p>
                <div class="tech-tags">
                    { shown.iter().map(|tech| html! {
                        <span key={*tech} class="tech-tag tech-tag--small">{*tech}</span>
                    }).collect::<Html>() }
                    if hidden > 0 {
                        <span class="tech-tag--more">{format!("+{} more", hidden)}</span>
                    }
                </div>
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectLinksProps {
    project: &'static ProjectRecord,
}

#[function_component(ProjectLinks)]
fn project_links(props: &ProjectLinksProps) -> Html {
    html! {
        <div class="project-card__links">
            <a href={props.project.github} class="project-link glass-effect" aria-label="Source code">{"GH"}</a>
            <a href={props.project.live} class="project-link glass-effect" aria-label="Live demo">{"↗"}</a>
        </div>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let node = use_node_ref();
    let reveal = use_reveal_once(node.clone(), "projects");
    let selected = use_state_eq(CategoryFilter::default);

    let filtered = filter_projects(&PROJECTS, *selected);
    let (featured, other) = partition_featured(&filtered);

    let filter_buttons = CategoryFilter::options()
        .map(|filter| {
            let onclick = {
                let selected = selected.clone();
                Callback::from(move |_: MouseEvent| {
                    info!("Filtering projects by {}", filter.label());
                    selected.set(filter);
                })
            };
            let active = (*selected == filter).then_some("filter-button--active");
            html! {
                <button key={filter.label()} class={classes!("filter-button", active)} {onclick}>
                    {filter.label()}
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <section id="projects" class="section-padding">
            <div ref={node} class="section-inner">
                <div class={classes!("section-heading", reveal.classes())} style={SECTION_STAGGER.style(0)}>
                    <h2>{"Featured "}<span class="gradient-text">{"Projects"}</span></h2>
                    <p>
                        {"Here are some of my recent projects that showcase my skills and passion for creating innovative digital solutions."}
                    </p>
                </div>

                <div class={classes!("filter-bar", reveal.classes())} style={SECTION_STAGGER.style(1)}>
                    { filter_buttons }
                </div>

                <div class={classes!("project-group", reveal.classes())} style={SECTION_STAGGER.style(2)}>
                    <h3>{"Featured Work"}</h3>
                    <div class="project-grid project-grid--featured">
                        { featured.iter().enumerate().map(|(index, project)| html! {
                            <FeaturedCard key={project.id.to_string()} project={*project} {index} {reveal} />
                        }).collect::<Html>() }
                    </div>
                </div>

                <div class={classes!("project-group", reveal.classes())} style={SECTION_STAGGER.style(3)}>
                    <h3>{"Other Projects"}</h3>
                    <div class="project-grid project-grid--compact">
                        { other.iter().enumerate().map(|(index, project)| html! {
                            <CompactCard key={project.id.to_string()} project={*project} {index} {reveal} />
                        }).collect::<Html>() }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .filter-bar {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 3rem;
                }

                .filter-button {
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    font-weight: 500;
                    color: #d1d5db;
                    cursor: pointer;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    transition: all 0.3s ease;
                }

                .filter-button:hover {
                    background: rgba(6, 182, 212, 0.1);
                }

                .filter-button--active {
                    color: white;
                    border-color: transparent;
                    background: linear-gradient(90deg, #06b6d4, #3b82f6);
                }

                .project-group {
                    margin-bottom: 4rem;
                }

                .project-group h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    text-align: center;
                    margin-bottom: 2rem;
                }

                .project-grid {
                    display: grid;
                    gap: 2rem;
                }

                .project-grid--featured {
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                }

                .project-grid--compact {
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 1.5rem;
                }

                .project-card {
                    border-radius: 1rem;
                    overflow: hidden;
                }

                .project-card__media {
                    position: relative;
                    height: 16rem;
                    overflow: hidden;
                }

                .project-card__media--compact {
                    height: 12rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(135deg, rgba(168, 85, 247, 0.2), rgba(236, 72, 153, 0.2));
                }

                .project-card__glyph {
                    font-size: 2.25rem;
                    opacity: 0.2;
                }

                .project-image {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.3s ease;
                }

                .project-card:hover .project-image {
                    transform: scale(1.05);
                }

                .project-image--placeholder {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2.25rem;
                    background: linear-gradient(135deg, rgba(6, 182, 212, 0.2), rgba(59, 130, 246, 0.2));
                }

                .project-card__shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(17, 24, 39, 0.8), transparent);
                }

                .project-card__links {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    display: flex;
                    gap: 0.5rem;
                }

                .project-link {
                    padding: 0.5rem 0.75rem;
                    border-radius: 9999px;
                    color: white;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                }

                .project-link:hover {
                    transform: scale(1.1);
                    background: rgba(6, 182, 212, 0.2);
                }

                .project-card__body {
                    padding: 1.5rem;
                }

                .project-card--compact .project-card__body {
                    padding: 1rem;
                }

                .project-card__meta {
                    display: flex;
                    justify-content: space-between;
                    margin-bottom: 0.75rem;
                    font-size: 0.875rem;
                }

                .project-card__category {
                    color: #22d3ee;
                }

                .project-card__date {
                    color: #9ca3af;
                }

                .project-card h4 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin-bottom: 0.75rem;
                    transition: color 0.3s ease;
                }

                .project-card:hover h4 {
                    color: #22d3ee;
                }

                .project-card p {
                    color: #d1d5db;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }

                .line-clamp-2 {
                    display: -webkit-box;
                    -webkit-line-clamp: 2;
                    -webkit-box-orient: vertical;
                    overflow: hidden;
                }

                .tech-tag--small {
                    padding: 0.25rem 0.5rem;
                    border-radius: 0.25rem;
                    font-size: 0.75rem;
                }

                .tech-tag--more {
                    padding: 0.25rem 0.5rem;
                    font-size: 0.75rem;
                    color: #9ca3af;
                }

                @media (max-width: 1024px) {
                    .project-grid--featured {
                        grid-template-columns: 1fr;
                    }

                    .project-grid--compact {
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                    }
                }

                @media (max-width: 768px) {
                    .project-grid--compact {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
