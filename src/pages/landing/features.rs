use yew::prelude::*;

use super::Container;
use crate::components::icon::IconGlyph;
use crate::components::reveal::Reveal;
use crate::config::{use_brand, Icon};
use crate::scroll::anchor_callback;

#[function_component(FeatureGrid)]
pub fn feature_grid() -> Html {
    let brand = use_brand();

    html! {
        <section id="features" class="section">
            <Container>
                <div class="section-intro">
                    <h2>{"Built for modern investors"}</h2>
                    <p>{"Premium experience, transparent economics, and a platform that scales with you."}</p>
                </div>
                <div class="grid grid-4">
                    {
                        brand.features.iter().enumerate().map(|(i, feature)| html! {
                            <Reveal key={feature.title.clone()} delay_ms={i as u32 * 80}>
                                <div class="card">
                                    <IconGlyph icon={feature.icon} color={brand.accent.clone()} class={classes!("card-icon")} />
                                    <h3 class="card-title">{&feature.title}</h3>
                                    <p class="feature-desc">{&feature.desc}</p>
                                    <a href="#contact" class="learn-more" onclick={anchor_callback("#contact".into(), None)}>
                                        {"Learn more"}
                                        <IconGlyph icon={Icon::ArrowRight} />
                                    </a>
                                </div>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </Container>
            <style>
                {r#"
                    .feature-desc {
                        margin: 0.25rem 0 0;
                        font-size: 0.875rem;
                        color: #cbd5e1;
                    }
                "#}
            </style>
        </section>
    }
}
