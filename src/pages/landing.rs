use yew::prelude::*;

use crate::components::demo_form::DemoForm;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <section id="demo" class="demo-section">
            <style>
            {r#".demo-section {
                padding: 6rem 1.5rem;
                display: flex;
                justify-content: center;
            }
            .demo-card {
                width: 100%;
                max-width: 640px;
                background: rgba(15, 23, 42, 0.8);
                border: 1px solid rgba(148, 163, 184, 0.15);
                border-radius: 16px;
                padding: 2.5rem;
            }
            .demo-card h2 {
                font-size: 1.75rem;
                margin-bottom: 0.5rem;
                color: #f8fafc;
            }
            .demo-card > p {
                color: #94a3b8;
                margin-bottom: 2rem;
            }
            .form-row {
                display: grid;
                grid-template-columns: 1fr 1fr;
                gap: 1rem;
            }
            .form-group {
                display: flex;
                flex-direction: column;
                margin-bottom: 1.25rem;
            }
            .form-group label {
                font-size: 0.875rem;
                color: #cbd5e1;
                margin-bottom: 0.4rem;
            }
            .form-group input,
            .form-group select,
            .form-group textarea {
                background: rgba(30, 41, 59, 0.8);
                border: 1px solid rgba(148, 163, 184, 0.25);
                border-radius: 8px;
                padding: 0.75rem 1rem;
                color: #f8fafc;
                font-size: 0.95rem;
            }
            .form-group .error {
                border-color: #ef4444;
            }
            .error-message {
                color: #ef4444;
                font-size: 0.8rem;
                margin-top: 0.35rem;
            }
            .form-error-banner {
                display: flex;
                justify-content: space-between;
                align-items: center;
                background: rgba(239, 68, 68, 0.1);
                border: 1px solid rgba(239, 68, 68, 0.4);
                color: #fca5a5;
                border-radius: 8px;
                padding: 0.75rem 1rem;
                margin-bottom: 1.25rem;
                font-size: 0.875rem;
            }
            .form-error-dismiss {
                background: none;
                border: none;
                color: inherit;
                font-size: 1.1rem;
                cursor: pointer;
            }
            .btn-full {
                width: 100%;
            }
            .btn-loading {
                opacity: 0.7;
                cursor: wait;
            }
            .form-success {
                text-align: center;
                padding: 2rem 0;
            }
            @media (max-width: 640px) {
                .form-row {
                    grid-template-columns: 1fr;
                }
                .demo-card {
                    padding: 1.5rem;
                }
            }"#}
            </style>
            <div class="demo-card">
                <h2>{"See RetailVision in your store"}</h2>
                <p>{"Tell us a little about your business and we'll set up a personalized demo."}</p>
                <DemoForm />
            </div>
        </section>
    }
}
