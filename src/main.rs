use std::sync::Once;

use yew::prelude::*;
use log::{info, warn, Level};

mod config;
mod demo_request {
    pub mod fields;
    pub mod validation;
    pub mod store;
    pub mod firestore;
    pub mod orchestrator;
}
mod components {
    pub mod demo_form;
    pub mod form_banner;
    pub mod success_panel;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

static START: Once = Once::new();

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

/// Mounts the app once. Later calls do nothing, so a second bootstrap can't
/// attach a second set of handlers.
pub fn start() {
    START.call_once(|| {
        let mount_point = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(config::MOUNT_ID));

        match mount_point {
            Some(element) => {
                info!("Mounting into #{}", config::MOUNT_ID);
                yew::Renderer::<App>::with_root(element).render();
            }
            None => {
                warn!("#{} not found, mounting into <body>", config::MOUNT_ID);
                yew::Renderer::<App>::new().render();
            }
        }
    });
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    start();
}
