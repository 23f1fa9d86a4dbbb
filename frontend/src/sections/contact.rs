use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::form::{ContactField, ContactForm};
use crate::contact::submit::{default_submitter, SubmitStatus};
use crate::content::profile::{social_links, CONTACT_DETAILS};
use crate::motion::reveal::{use_reveal_once, SECTION_STAGGER};

#[function_component(Contact)]
pub fn contact() -> Html {
    let node = use_node_ref();
    let reveal = use_reveal_once(node.clone(), "contact");
    let form = use_state(ContactForm::default);
    let status = use_state(SubmitStatus::default);
    let submitter = use_memo(|_| default_submitter(), ());

    let on_field = |field: ContactField| {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |value: String| {
            form.set(form.with(field, value));
            let next = status.after_edit();
            if next != *status {
                status.set(next);
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        let submitter = submitter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_sending() {
                return;
            }

            let message = match form.validate() {
                Ok(message) => message,
                Err(err) => {
                    warn!("Contact form incomplete: {}", err);
                    status.set(SubmitStatus::Failed(err.to_string()));
                    return;
                }
            };

            status.set(SubmitStatus::Sending);
            let form = form.clone();
            let status = status.clone();
            let pending = submitter.submit(message);
            spawn_local(async move {
                match pending.await {
                    Ok(()) => {
                        info!("Contact message sent");
                        form.set(ContactForm::default());
                        status.set(SubmitStatus::Sent);
                    }
                    Err(err) => {
                        warn!("Contact message failed: {}", err);
                        status.set(SubmitStatus::Failed(err.to_string()));
                    }
                }
            });
        })
    };

    let input_field = |field: ContactField, kind: &'static str| {
        let on_change = on_field(field);
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        });
        html! {
            <div class="form-field">
                <label for={field.id()}>{field.label()}</label>
                <input
                    type={kind}
                    id={field.id()}
                    name={field.id()}
                    value={form.get(field).to_string()}
                    placeholder={field.placeholder()}
                    required=true
                    {oninput}
                />
            </div>
        }
    };

    let message_field = {
        let on_change = on_field(ContactField::Message);
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(input.value());
        });
        let field = ContactField::Message;
        html! {
            <div class="form-field">
                <label for={field.id()}>{field.label()}</label>
                <textarea
                    id={field.id()}
                    name={field.id()}
                    rows="5"
                    value={form.get(field).to_string()}
                    placeholder={field.placeholder()}
                    required=true
                    {oninput}
                />
            </div>
        }
    };

    let status_line = match &*status {
        SubmitStatus::Idle => html! {},
        SubmitStatus::Sending => html! { <p class="form-status">{"Sending..."}</p> },
        SubmitStatus::Sent => html! {
            <p class="form-status form-status--success">{"Thanks! Your message is on its way."}</p>
        },
        SubmitStatus::Failed(reason) => html! {
            <p class="form-status form-status--error">{reason.clone()}</p>
        },
    };

    html! {
        <section id="contact" class="section-padding section--tinted">
            <div ref={node} class="section-inner">
                <div class={classes!("section-heading", reveal.classes())} style={SECTION_STAGGER.style(0)}>
                    <h2>{"Get In "}<span class="gradient-text">{"Touch"}</span></h2>
                    <p>
                        {"Have a project in mind or just want to chat? I'd love to hear from you. Let's create something amazing together!"}
                    </p>
                </div>

                <div class="contact-columns">
                    <div class={classes!("contact-info", reveal.classes())} style={SECTION_STAGGER.style(1)}>
                        <h3>{"Let's Connect"}</h3>
                        <p>
                            {"I'm always open to discussing new opportunities, creative projects, or just having a friendly chat about technology and design."}
                        </p>

                        <div class="contact-details">
                            { CONTACT_DETAILS.iter().map(|detail| html! {
                                <a key={detail.label} href={detail.href} class="contact-detail glass-effect">
                                    <div class="contact-detail__label">{detail.label}</div>
                                    <div class="contact-detail__value">{detail.value}</div>
                                </a>
                            }).collect::<Html>() }
                        </div>

                        <h4>{"Follow Me"}</h4>
                        <div class="contact-socials">
                            { social_links(&["GitHub", "LinkedIn", "Twitter"]).map(|link| html! {
                                <a key={link.label} href={link.href} class="social-bubble glass-effect" aria-label={link.label}>
                                    {link.icon}
                                </a>
                            }).collect::<Html>() }
                        </div>
                    </div>

                    <div class={classes!(reveal.classes())} style={SECTION_STAGGER.style(2)}>
                        <form class="contact-form glass-effect" {onsubmit}>
                            <h3>{"Send Message"}</h3>
                            <div class="form-row">
                                { input_field(ContactField::Name, "text") }
                                { input_field(ContactField::Email, "email") }
                            </div>
                            { input_field(ContactField::Subject, "text") }
                            { message_field }
                            <button type="submit" class="form-submit" disabled={status.is_sending()}>
                                {"➤ Send Message"}
                            </button>
                            { status_line }
                        </form>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .contact-columns {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 3rem;
                }

                .contact-info h3, .contact-form h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin-bottom: 1.5rem;
                }

                .contact-info > p {
                    color: #d1d5db;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }

                .contact-info h4 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin: 2rem 0 1rem;
                }

                .contact-details {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .contact-detail {
                    display: block;
                    padding: 1rem;
                    border-radius: 0.75rem;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .contact-detail:hover {
                    transform: translateX(10px);
                    background: rgba(6, 182, 212, 0.1);
                }

                .contact-detail__label {
                    font-size: 0.875rem;
                    color: #9ca3af;
                }

                .contact-detail__value {
                    color: white;
                }

                .contact-socials {
                    display: flex;
                    gap: 1rem;
                }

                .contact-form {
                    padding: 2rem;
                    border-radius: 1rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .form-row {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 1.5rem;
                }

                .form-field label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #d1d5db;
                    margin-bottom: 0.5rem;
                }

                .form-field input, .form-field textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border-radius: 0.5rem;
                    border: 1px solid #4b5563;
                    background: rgba(55, 65, 81, 0.5);
                    color: white;
                    transition: all 0.3s ease;
                }

                .form-field textarea {
                    resize: none;
                }

                .form-field input:focus, .form-field textarea:focus {
                    outline: none;
                    border-color: transparent;
                    box-shadow: 0 0 0 2px #06b6d4;
                }

                .form-submit {
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    color: white;
                    cursor: pointer;
                    background: linear-gradient(90deg, #06b6d4, #3b82f6);
                    transition: all 0.3s ease;
                }

                .form-submit:hover {
                    transform: scale(1.02);
                    box-shadow: 0 10px 15px rgba(6, 182, 212, 0.25);
                }

                .form-submit:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }

                .form-status {
                    text-align: center;
                    color: #9ca3af;
                }

                .form-status--success {
                    color: #34d399;
                }

                .form-status--error {
                    color: #f87171;
                }

                @media (max-width: 1024px) {
                    .contact-columns, .form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
