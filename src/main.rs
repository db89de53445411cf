use yew::prelude::*;
use log::info;

mod config;
mod showcase {
    pub mod catalog;
    pub mod observer;
    pub mod progress;
    pub mod state;
}
mod components {
    pub mod feature_detail;
    pub mod feature_list;
    pub mod phone_mockup;
}
mod pages {
    pub mod landing;
    pub mod showcase;
}

use config::ShowcaseConfig;
use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    let config = use_memo(|_| ShowcaseConfig::load(), ());

    html! {
        <Landing config={(*config).clone()} />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting feature showcase");
    yew::Renderer::<App>::new().render();
}
