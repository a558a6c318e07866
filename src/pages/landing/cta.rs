use log::warn;
use web_sys::{HtmlFormElement, SubmitEvent};
use yew::prelude::*;

use super::Container;
use crate::components::icon::IconGlyph;
use crate::components::reveal::Reveal;
use crate::config::{use_brand, Icon};
use crate::contact::submit_inquiry;

#[function_component(Cta)]
pub fn cta() -> Html {
    let brand = use_brand();
    let form_ref = use_node_ref();

    let onsubmit = {
        let brand = brand.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            if let Err(err) = submit_inquiry(&form, &brand) {
                warn!("Inquiry not sent: {}", err);
            }
        })
    };

    html! {
        <section id="contact" class="section">
            <Container>
                <div class="grid grid-2 cta-grid">
                    <Reveal>
                        <h2>{&brand.cta_primary}</h2>
                        <p class="muted">{"Tell us a bit about your goals and we’ll tailor a walkthrough."}</p>
                        <div class="contact-lines">
                            <div><IconGlyph icon={Icon::Mail} color={brand.accent.clone()} />{&brand.contact_email}</div>
                            <div><IconGlyph icon={Icon::Phone} color={brand.accent.clone()} />{&brand.contact_phone}</div>
                            <div><IconGlyph icon={Icon::MapPin} color={brand.accent.clone()} />{&brand.contact_address}</div>
                        </div>
                    </Reveal>
                    <Reveal delay_ms={100}>
                        <form ref={form_ref} class="card inquiry-form" onsubmit={onsubmit}>
                            <label>
                                <span>{"Your name"}</span>
                                <input name="name" required={true} placeholder="Esther Goldman" />
                            </label>
                            <label>
                                <span>{"Work email"}</span>
                                <input type="email" name="email" required={true} placeholder="you@company.com" />
                            </label>
                            <label>
                                <span>{"Approximate first investment"}</span>
                                <input name="amount" placeholder="$1,000" />
                            </label>
                            <label>
                                <span>{"Notes"}</span>
                                <textarea name="notes" rows="4" placeholder="Tell us what you’re looking for…" />
                            </label>
                            <button
                                type="submit"
                                class="nav-button primary"
                                style={format!("box-shadow: 0 0 0 1px {};", brand.accent)}
                            >
                                {&brand.cta_primary}
                                <IconGlyph icon={Icon::ArrowRight} />
                            </button>
                        </form>
                    </Reveal>
                </div>
            </Container>
            <style>
                {r#"
                    .cta-grid {
                        gap: 2.5rem;
                        margin-top: 0;
                    }
                    .contact-lines {
                        margin-top: 1.5rem;
                        display: grid;
                        gap: 0.75rem;
                        font-size: 0.875rem;
                        color: #cbd5e1;
                    }
                    .contact-lines div {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .inquiry-form {
                        display: grid;
                        gap: 1rem;
                    }
                    .inquiry-form:hover {
                        transform: none;
                    }
                    .inquiry-form label {
                        display: grid;
                        gap: 0.25rem;
                        font-size: 0.875rem;
                        color: #cbd5e1;
                    }
                    .inquiry-form input,
                    .inquiry-form textarea {
                        width: 100%;
                        box-sizing: border-box;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 0.75rem;
                        background: transparent;
                        padding: 0.5rem 0.75rem;
                        color: #f1f5f9;
                        font: inherit;
                    }
                    .inquiry-form input::placeholder,
                    .inquiry-form textarea::placeholder {
                        color: #94a3b8;
                    }
                    .inquiry-form button {
                        justify-self: start;
                        border: none;
                        cursor: pointer;
                        font: inherit;
                    }
                "#}
            </style>
        </section>
    }
}
