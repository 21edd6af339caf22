use yew::prelude::*;

#[function_component(SuccessPanel)]
pub fn success_panel() -> Html {
    html! {
        <div class="form-success">
            <svg width="48" height="48" viewBox="0 0 48 48" fill="none" style="margin: 0 auto 1rem;">
                <circle cx="24" cy="24" r="20" stroke="#22c55e" stroke-width="2"/>
                <path d="M16 24l6 6 10-12" stroke="#22c55e" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
            </svg>
            <h3 style="color: #22c55e; font-size: 1.25rem; margin-bottom: 0.5rem;">{"Demo Request Received!"}</h3>
            <p style="color: #94a3b8; font-size: 0.875rem;">{"We'll get back to you within 24 hours."}</p>
        </div>
    }
}
