use yew::prelude::*;
use log::{info, Level};

mod config;
mod content {
    pub mod profile;
    pub mod projects;
    pub mod skills;
}
mod motion {
    pub mod listeners;
    pub mod reveal;
    pub mod typewriter;
}
mod contact {
    pub mod form;
    pub mod submit;
}
mod components {
    pub mod project_image;
}
mod sections {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod navigation;
    pub mod projects;
}

use sections::{
    about::About,
    contact::Contact,
    footer::Footer,
    hero::Hero,
    navigation::Navigation,
    projects::Projects,
};


#[function_component]
fn App() -> Html {
    html! {
        <main class="portfolio">
            <Navigation />
            <div id="home">
                <Hero />
            </div>
            <About />
            <Projects />
            <Contact />
            <Footer />
        </main>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
