use yew::prelude::*;

use super::Container;
use crate::components::icon::IconGlyph;
use crate::components::nav_button::NavButton;
use crate::components::reveal::Reveal;
use crate::config::{use_brand, Icon};

#[function_component(TestimonialStrip)]
pub fn testimonial_strip() -> Html {
    let brand = use_brand();
    let testimonial = &brand.testimonial;

    html! {
        <section class="testimonial">
            <Container>
                <Reveal class={classes!("testimonial-panel")}>
                    <div class="testimonial-row">
                        <div class="testimonial-body">
                            <p class="testimonial-quote">{format!("“{}”", testimonial.quote)}</p>
                            <div class="testimonial-author">
                                <div class="avatar">
                                    <IconGlyph icon={Icon::Star} color={brand.accent.clone()} />
                                </div>
                                <div>
                                    <div class="author-name">{&testimonial.author}</div>
                                    <div class="author-role">{&testimonial.role}</div>
                                </div>
                            </div>
                        </div>
                        <NavButton href="#properties">
                            {"Explore properties"}
                            <IconGlyph icon={Icon::ArrowRight} />
                        </NavButton>
                    </div>
                </Reveal>
            </Container>
            <style>
                {r#"
                    .testimonial {
                        padding: 4rem 0;
                    }
                    .testimonial-panel {
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1.5rem;
                        background: linear-gradient(135deg, rgba(255, 255, 255, 0.06), rgba(255, 255, 255, 0.03));
                        padding: 3rem;
                        color: #fff;
                    }
                    .testimonial-row {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1.5rem;
                    }
                    @media (max-width: 768px) {
                        .testimonial-panel {
                            padding: 2rem;
                        }
                        .testimonial-row {
                            flex-direction: column;
                            align-items: flex-start;
                        }
                    }
                    .testimonial-body {
                        max-width: 42rem;
                    }
                    .testimonial-quote {
                        margin: 0;
                        font-family: Georgia, "Times New Roman", serif;
                        font-size: 1.5rem;
                        font-weight: 600;
                        line-height: 1.35;
                    }
                    .testimonial-author {
                        margin-top: 1rem;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-size: 0.875rem;
                    }
                    .avatar {
                        width: 2.25rem;
                        height: 2.25rem;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.1);
                        display: grid;
                        place-items: center;
                    }
                    .author-name {
                        font-weight: 500;
                    }
                    .author-role {
                        color: #94a3b8;
                    }
                "#}
            </style>
        </section>
    }
}
