use log::warn;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProjectImageProps {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Thumbnail that falls back to a placeholder tile when the image fails to load.
#[function_component(ProjectImage)]
pub fn project_image(props: &ProjectImageProps) -> Html {
    let failed = use_state_eq(|| false);

    let on_error = {
        let failed = failed.clone();
        let src = props.src;
        Callback::from(move |_: Event| {
            warn!("Thumbnail {} failed to load, showing placeholder", src);
            failed.set(true);
        })
    };

    if *failed {
        html! {
            <div class="project-image project-image--placeholder" role="img" aria-label={props.alt}>
                <span>{"💻"}</span>
            </div>
        }
    } else {
        html! {
            <img class="project-image" src={props.src} alt={props.alt} loading="lazy" onerror={on_error} />
        }
    }
}
