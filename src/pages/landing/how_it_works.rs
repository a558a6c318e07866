use yew::prelude::*;

use super::Container;
use crate::components::reveal::Reveal;
use crate::config::use_brand;

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let brand = use_brand();

    html! {
        <section id="how" class="section how-it-works">
            <Container>
                <div class="section-intro">
                    <h2>{"How it works"}</h2>
                    <p>{"Invest in a few elegant steps."}</p>
                </div>
                <div class="grid grid-3">
                    {
                        brand.how_it_works.iter().enumerate().map(|(i, step)| html! {
                            <Reveal key={step.step.clone()} delay_ms={i as u32 * 100}>
                                <div class="card">
                                    <div class="step-number">{format!("Step {}", step.step)}</div>
                                    <div class="step-title">{&step.title}</div>
                                    <div class="step-desc">{&step.desc}</div>
                                </div>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </Container>
            <style>
                {r#"
                    .how-it-works {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .step-number {
                        font-size: 0.875rem;
                        color: #94a3b8;
                    }
                    .step-title {
                        margin-top: 0.25rem;
                        font-weight: 500;
                        color: #fff;
                    }
                    .step-desc {
                        margin-top: 0.5rem;
                        font-size: 0.875rem;
                        color: #cbd5e1;
                    }
                "#}
            </style>
        </section>
    }
}
