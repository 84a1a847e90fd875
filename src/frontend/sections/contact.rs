use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::{layer_transform, Backdrop, OutboundLink, Reveal};
use crate::{
    contact::{run_submission, ContactError, ContactField, ContactForm, MessageSink, SimulatedDelivery},
    content::{ContactMethod, CONTACT_METHODS},
    frontend::hooks::{use_pointer_offset, use_scroll_y, use_site_config, use_spring, RevealOptions},
    motion::{PointerProfile, ScrollParallax},
    navigation::SectionId,
};

const METHOD_STAGGER_MS: u32 = 100;

#[derive(Clone, PartialEq)]
enum Status {
    Sent,
    Failed(String),
}

fn method_card(position: usize, method: &ContactMethod) -> Html {
    let body = html! {
        <>
            <span class="method-icon" aria-hidden="true">{method.icon}</span>
            <span class="method-copy">
                <span class="method-label">{method.label}</span>
                <span class="method-value">{method.value}</span>
                <span class="method-description">{method.description}</span>
            </span>
        </>
    };

    html! {
        <li key={method.label}>
            <Reveal
                options={RevealOptions::REPEAT}
                delay_ms={position as u32 * METHOD_STAGGER_MS}
                class="method"
            >
                if let Some(href) = method.link {
                    <OutboundLink href={href} class="method-link">{body}</OutboundLink>
                } else {
                    <div class="method-static">{body}</div>
                }
            </Reveal>
        </li>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let config = use_site_config();
    let section_ref = use_node_ref();
    let scroll_y = use_scroll_y();
    let (offset_x, offset_y) = use_pointer_offset(section_ref.clone());

    let profile = PointerProfile::CONTACT;
    let (target_x, target_y) = profile.tilt((offset_x, offset_y));
    let tilt_x = use_spring(profile.spring, target_x);
    let tilt_y = use_spring(profile.spring, target_y);

    let form = use_mut_ref(ContactForm::default);
    let redraw = use_force_update();
    let status = use_state(|| None::<Status>);

    let on_field = |field: ContactField| {
        let form = form.clone();
        let redraw = redraw.clone();
        let status = status.clone();
        Callback::from(move |event: InputEvent| {
            let value = match field {
                ContactField::Message => event.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => event.target_unchecked_into::<HtmlInputElement>().value(),
            };
            form.borrow_mut().set_field(field, value);
            // A new draft hides the previous outcome.
            if status.is_some() {
                status.set(None);
            }
            redraw.force_update();
        })
    };

    let onsubmit = {
        let form = form.clone();
        let redraw = redraw.clone();
        let status = status.clone();
        let delay = config.submit_delay;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let form = form.clone();
            let redraw = redraw.clone();
            let status = status.clone();
            let sink: Rc<dyn MessageSink> = Rc::new(SimulatedDelivery::new(delay));

            spawn_local(async move {
                let notify = {
                    let redraw = redraw.clone();
                    move || redraw.force_update()
                };
                match run_submission(form, sink, notify).await {
                    Ok(()) => status.set(Some(Status::Sent)),
                    // A second press while sending changes nothing.
                    Err(ContactError::AlreadySubmitting) => {}
                    Err(error) => status.set(Some(Status::Failed(error.to_string()))),
                }
            });
        })
    };

    let snapshot = form.borrow().clone();
    let submitting = snapshot.is_submitting();

    let text_input = |field: ContactField, input_type: &'static str| {
        html! {
            <label class="field">
                <span class="field-label">{field.label()}</span>
                <input
                    type={input_type}
                    name={field.as_str()}
                    placeholder={field.placeholder()}
                    required=true
                    value={snapshot.field(field).to_string()}
                    oninput={on_field(field)}
                />
            </label>
        }
    };

    let status_line = match (*status).clone() {
        _ if submitting => html! { <p class="form-status" role="status">{"Sending your message..."}</p> },
        Some(Status::Sent) => html! { <p class="form-status form-status-ok" role="status">{"Thanks! Your message has been sent."}</p> },
        Some(Status::Failed(reason)) => html! { <p class="form-status form-status-error" role="alert">{reason}</p> },
        None => html! {},
    };

    html! {
        <section id={SectionId::Contact.as_str()} ref={section_ref} class="section contact">
            <Backdrop
                word="CONTACT"
                offset_y={ScrollParallax::CONTACT_BACKGROUND.offset(scroll_y)}
                drift={profile.drift((offset_x, offset_y))}
            />

            <div class="section-inner">
                <Reveal options={RevealOptions::REPEAT} class="section-heading">
                    <span class="section-kicker">{"Get in touch"}</span>
                    <h2>{"Let's Work "}<span class="accent">{"Together"}</span></h2>
                    <p class="section-lede">
                        {"Have a project in mind or want to collaborate? I'd love to hear from you."}
                    </p>
                </Reveal>

                <div class="contact-grid" style={layer_transform(0.0, tilt_x, tilt_y)}>
                    <Reveal options={RevealOptions::REPEAT} class="contact-methods">
                        <h3>{"Contact Information"}</h3>
                        <ul>
                            { for CONTACT_METHODS.iter().enumerate().map(|(position, method)| method_card(position, method)) }
                        </ul>
                    </Reveal>

                    <Reveal options={RevealOptions::REPEAT} class="contact-form-panel">
                        <h3>{"Send a Message"}</h3>
                        <form class="contact-form" onsubmit={onsubmit} novalidate=true>
                            <div class="field-row">
                                { text_input(ContactField::Name, "text") }
                                { text_input(ContactField::Email, "email") }
                            </div>
                            { text_input(ContactField::Subject, "text") }
                            <label class="field">
                                <span class="field-label">{ContactField::Message.label()}</span>
                                <textarea
                                    name={ContactField::Message.as_str()}
                                    placeholder={ContactField::Message.placeholder()}
                                    rows="6"
                                    required=true
                                    value={snapshot.field(ContactField::Message).to_string()}
                                    oninput={on_field(ContactField::Message)}
                                />
                            </label>
                            <button
                                class={classes!("button", "button-solid", "button-block", submitting.then_some("is-busy"))}
                                type="submit"
                                disabled={submitting}
                                aria-busy={submitting.to_string()}
                            >
                                {snapshot.submit_label()}
                            </button>
                            {status_line}
                        </form>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
