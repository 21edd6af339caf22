use std::rc::Rc;

use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use log::info;

use crate::components::form_banner::FormBanner;
use crate::components::success_panel::SuccessPanel;
use crate::config;
use crate::demo_request::fields::{FieldId, StoreType};
use crate::demo_request::orchestrator::{DemoFormState, FieldView};
use crate::demo_request::store::{persist_lead, LeadStore, SubmissionOutcome};

pub enum DemoFormMsg {
    Input(FieldId, String),
    Blur(FieldId),
    Submit,
    Settled(SubmissionOutcome),
    DismissBanner(u32),
    ExpireBanner(u32),
}

pub struct DemoForm {
    state: DemoFormState,
    store: Option<Rc<dyn LeadStore>>,
}

impl Component for DemoForm {
    type Message = DemoFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: DemoFormState::new(),
            store: config::get_lead_store(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DemoFormMsg::Input(field, value) => {
                self.state.input(field, value);
                true
            }
            DemoFormMsg::Blur(field) => {
                self.state.blur(field);
                true
            }
            DemoFormMsg::Submit => {
                let Some(record) = self.state.request_submit() else {
                    return true;
                };

                info!("Submitting demo request for {}", record.company);
                let store = self.store.clone();
                ctx.link().send_future(async move {
                    DemoFormMsg::Settled(persist_lead(store.as_deref(), &record).await)
                });
                true
            }
            DemoFormMsg::Settled(outcome) => {
                self.state.settle(outcome);
                true
            }
            DemoFormMsg::DismissBanner(id) => self.state.dismiss_banner(id),
            DemoFormMsg::ExpireBanner(id) => self.state.expire_banner(id),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.state.show_success() {
            return html! { <SuccessPanel /> };
        }

        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            DemoFormMsg::Submit
        });
        let control = self.state.submit_control();

        html! {
            <form id="demo-form" class="demo-form" onsubmit={onsubmit} novalidate=true>
                {
                    if let Some(banner) = self.state.banner() {
                        html! {
                            <FormBanner
                                banner={banner.clone()}
                                on_dismiss={link.callback(DemoFormMsg::DismissBanner)}
                                on_expire={link.callback(DemoFormMsg::ExpireBanner)}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="form-row">
                    { self.input_field(ctx, FieldId::Name, "Full Name *", "text", "Jane Smith") }
                    { self.input_field(ctx, FieldId::Email, "Work Email *", "email", "jane@store.com") }
                </div>
                <div class="form-row">
                    { self.input_field(ctx, FieldId::Company, "Company *", "text", "Your store or brand") }
                    { self.input_field(ctx, FieldId::Phone, "Phone", "tel", "(555) 000-0000") }
                </div>
                { self.store_type_field(ctx) }
                { self.message_field(ctx) }
                <button
                    type="submit"
                    class={classes!("btn", "btn-primary", "btn-full", control.loading.then(|| "btn-loading"))}
                    disabled={control.disabled}
                >
                    <span>{control.label}</span>
                </button>
            </form>
        }
    }
}

fn error_message(view: FieldView) -> Html {
    match view.message {
        Some(message) => html! { <div class="error-message">{message}</div> },
        None => html! {},
    }
}

impl DemoForm {
    fn input_field(
        &self,
        ctx: &Context<Self>,
        field: FieldId,
        label: &'static str,
        kind: &'static str,
        placeholder: &'static str,
    ) -> Html {
        let view = self.state.field_view(field);
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            DemoFormMsg::Input(field, input.value())
        });
        let onblur = ctx.link().callback(move |_: FocusEvent| DemoFormMsg::Blur(field));

        html! {
            <div class="form-group">
                <label for={field.as_str()}>{label}</label>
                <input
                    type={kind}
                    id={field.as_str()}
                    name={field.as_str()}
                    class={classes!(view.errored.then(|| "error"))}
                    placeholder={placeholder}
                    value={self.state.values.value(field).to_string()}
                    oninput={oninput}
                    onblur={onblur}
                />
                { error_message(view) }
            </div>
        }
    }

    fn store_type_field(&self, ctx: &Context<Self>) -> Html {
        let field = FieldId::StoreType;
        let view = self.state.field_view(field);
        let current = self.state.values.value(field);
        let onchange = ctx.link().callback(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            DemoFormMsg::Input(field, select.value())
        });
        let onblur = ctx.link().callback(move |_: FocusEvent| DemoFormMsg::Blur(field));

        html! {
            <div class="form-group">
                <label for={field.as_str()}>{"Store Type *"}</label>
                <select
                    id={field.as_str()}
                    name={field.as_str()}
                    class={classes!(view.errored.then(|| "error"))}
                    onchange={onchange}
                    onblur={onblur}
                >
                    <option value="" selected={current.is_empty()}>{"Select your store type"}</option>
                    {
                        StoreType::ALL.iter().map(|kind| html! {
                            <option value={kind.value()} selected={current == kind.value()}>
                                {kind.label()}
                            </option>
                        }).collect::<Html>()
                    }
                </select>
                { error_message(view) }
            </div>
        }
    }

    fn message_field(&self, ctx: &Context<Self>) -> Html {
        let field = FieldId::Message;
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            DemoFormMsg::Input(field, input.value())
        });
        let onblur = ctx.link().callback(move |_: FocusEvent| DemoFormMsg::Blur(field));

        html! {
            <div class="form-group">
                <label for={field.as_str()}>{"Tell us about your store"}</label>
                <textarea
                    id={field.as_str()}
                    name={field.as_str()}
                    rows="4"
                    placeholder="Number of locations, current challenges, goals..."
                    value={self.state.values.value(field).to_string()}
                    oninput={oninput}
                    onblur={onblur}
                />
                { error_message(self.state.field_view(field)) }
            </div>
        }
    }
}
