use yew::prelude::*;

use super::Container;
use crate::components::reveal::Reveal;
use crate::config::use_brand;

#[function_component(Stats)]
pub fn stats() -> Html {
    let brand = use_brand();

    html! {
        <section class="stats">
            <Container>
                <div class="grid grid-4">
                    {
                        brand.stats.iter().enumerate().map(|(i, stat)| html! {
                            <Reveal key={stat.label.clone()} delay_ms={i as u32 * 80}>
                                <div class="card stat-card">
                                    <div class="stat-value">{&stat.value}</div>
                                    <div class="stat-label">{&stat.label}</div>
                                </div>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </Container>
            <style>
                {r#"
                    .stats {
                        padding: 1rem 0 3rem;
                    }
                    .stat-card {
                        text-align: center;
                    }
                    .stat-value {
                        font-family: Georgia, "Times New Roman", serif;
                        font-size: 1.5rem;
                        font-weight: 600;
                        color: #fff;
                    }
                    .stat-label {
                        margin-top: 0.25rem;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.08em;
                        color: #94a3b8;
                    }
                "#}
            </style>
        </section>
    }
}
