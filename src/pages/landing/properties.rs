use yew::prelude::*;

use super::Container;
use crate::components::icon::IconGlyph;
use crate::components::nav_button::NavButton;
use crate::components::reveal::Reveal;
use crate::config::{use_brand, Icon};
use crate::scroll::anchor_callback;

#[function_component(PropertyShowcase)]
pub fn property_showcase() -> Html {
    let brand = use_brand();

    html! {
        <section id="properties" class="section">
            <Container>
                <div class="showcase-header">
                    <div>
                        <h2>{"Featured properties"}</h2>
                        <p class="muted">
                            {"Explore offerings with full underwriting, fees, and risk disclosures. Yields are illustrative."}
                        </p>
                    </div>
                    <NavButton href="#properties">{"View all"}</NavButton>
                </div>
                <div class="grid grid-3">
                    {
                        brand.properties.iter().enumerate().map(|(i, property)| html! {
                            <Reveal key={property.title.clone()} delay_ms={i as u32 * 100}>
                                <div class="card">
                                    <IconGlyph icon={property.icon} color={brand.accent.clone()} class={classes!("card-icon")} />
                                    <h3 class="card-title">{&property.title}</h3>
                                    <div class="tag-row">
                                        {
                                            property.tags.iter().map(|tag| html! {
                                                <span key={tag.clone()} class="tag">{tag}</span>
                                            }).collect::<Html>()
                                        }
                                    </div>
                                    <div class="yield-note">{&property.yield_note}</div>
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
                    .showcase-header {
                        display: flex;
                        align-items: flex-end;
                        justify-content: space-between;
                        gap: 1.5rem;
                    }
                    .card-icon {
                        font-size: 1.5rem;
                    }
                    .card-title {
                        margin-top: 0.75rem !important;
                        font-family: inherit !important;
                        font-size: 1rem;
                    }
                    .tag-row {
                        margin-top: 0.5rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        font-size: 0.75rem;
                    }
                    .tag {
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 9999px;
                        padding: 0.25rem 0.5rem;
                        color: #cbd5e1;
                    }
                    .yield-note {
                        margin-top: 1rem;
                        font-size: 0.875rem;
                        color: #cbd5e1;
                    }
                "#}
            </style>
        </section>
    }
}
