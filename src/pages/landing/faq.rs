use web_sys::MouseEvent;
use yew::prelude::*;

use super::Container;
use crate::components::reveal::Reveal;
use crate::config::use_brand;
use crate::state::{Accordion, AccordionAction};

#[function_component(Faq)]
pub fn faq() -> Html {
    let brand = use_brand();
    let accordion = use_reducer(Accordion::default);

    let items = brand.faqs.iter().enumerate().map(|(index, entry)| {
        let is_open = accordion.is_open(index);
        let toggle = {
            let accordion = accordion.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                accordion.dispatch(AccordionAction::Toggle(index));
            })
        };

        html! {
            <Reveal key={index} delay_ms={index as u32 * 60}>
                <div class={classes!("card", "faq-item", is_open.then_some("open"))}>
                    <button
                        class="faq-question"
                        aria-expanded={is_open.to_string()}
                        onclick={toggle}
                    >
                        <span>{&entry.q}</span>
                        <span class="toggle-icon">{if is_open { "−" } else { "+" }}</span>
                    </button>
                    <div class="faq-answer">{&entry.a}</div>
                </div>
            </Reveal>
        }
    });

    html! {
        <section id="faq" class="section">
            <Container>
                <div class="section-intro">
                    <h2>{"Frequently asked questions"}</h2>
                    <p>{"Short answers. Detailed disclosures live in each offering."}</p>
                </div>
                <div class="grid grid-2 faq-grid">
                    { for items }
                </div>
            </Container>
            <style>
                {r#"
                    .faq-grid {
                        align-items: start;
                    }
                    .faq-item:hover {
                        transform: none;
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        gap: 1rem;
                        background: none;
                        border: none;
                        padding: 0;
                        color: #fff;
                        font: inherit;
                        font-weight: 500;
                        text-align: left;
                        cursor: pointer;
                    }
                    .toggle-icon {
                        color: #94a3b8;
                    }
                    .faq-answer {
                        max-height: 0;
                        overflow: hidden;
                        font-size: 0.875rem;
                        color: #cbd5e1;
                        transition: max-height 0.3s ease, margin-top 0.3s ease;
                    }
                    .faq-item.open .faq-answer {
                        max-height: 12rem;
                        margin-top: 0.5rem;
                    }
                "#}
            </style>
        </section>
    }
}
