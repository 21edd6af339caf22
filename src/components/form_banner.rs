use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::demo_request::orchestrator::{Banner, BANNER_TIMEOUT_MS};

#[derive(Properties, PartialEq)]
pub struct FormBannerProps {
    pub banner: Banner,
    pub on_dismiss: Callback<u32>,
    pub on_expire: Callback<u32>,
}

/// Error banner at the top of the form. Removes itself after
/// `BANNER_TIMEOUT_MS`; the timer dies with the banner, so a dismissed or
/// replaced banner never fires.
#[function_component(FormBanner)]
pub fn form_banner(props: &FormBannerProps) -> Html {
    let FormBannerProps { banner, on_dismiss, on_expire } = props;

    {
        let on_expire = on_expire.clone();
        use_effect_with_deps(
            move |id: &u32| {
                let id = *id;
                let timeout = Timeout::new(BANNER_TIMEOUT_MS, move || on_expire.emit(id));
                move || drop(timeout)
            },
            banner.id,
        );
    }

    let dismiss = {
        let on_dismiss = on_dismiss.clone();
        let id = banner.id;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_dismiss.emit(id);
        })
    };

    html! {
        <div class="form-error-banner" role="alert">
            <span>{banner.message}</span>
            <button type="button" class="form-error-dismiss" aria-label="Dismiss" onclick={dismiss}>
                {"×"}
            </button>
        </div>
    }
}
