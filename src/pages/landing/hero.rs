use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::Container;
use crate::components::icon::IconGlyph;
use crate::components::nav_button::NavButton;
use crate::components::particles::ParticleField;
use crate::components::reveal::Reveal;
use crate::config::{use_brand, Icon, PARALLAX_FACTOR, PARTICLE_COUNT};
use crate::motion::{glow_position, parallax_offset};

#[function_component(Hero)]
pub fn hero() -> Html {
    let brand = use_brand();
    let section = use_node_ref();
    let (_, scroll_y) = use_window_scroll();
    let glow = use_state(|| (50.0, 50.0));

    let onmousemove = {
        let section = section.clone();
        let glow = glow.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = section.cast::<Element>() {
                let rect = element.get_bounding_client_rect();
                glow.set(glow_position(
                    e.client_x() as f64,
                    e.client_y() as f64,
                    rect.left(),
                    rect.top(),
                    rect.width(),
                    rect.height(),
                ));
            }
        })
    };

    let (glow_x, glow_y) = *glow;
    let backdrop_style = format!(
        "transform: translate3d(0, {:.1}px, 0);",
        parallax_offset(scroll_y, PARALLAX_FACTOR)
    );
    let glow_style = format!("--glow-x: {:.1}%; --glow-y: {:.1}%;", glow_x, glow_y);

    html! {
        <section class="hero" ref={section} style={glow_style} onmousemove={onmousemove}>
            <div class="hero-backdrop" style={backdrop_style}></div>
            <div class="hero-glow"></div>
            <ParticleField count={PARTICLE_COUNT} accent={brand.accent.clone()} />
            <Container>
                <div class="hero-grid">
                    <Reveal>
                        <div class="hero-badge">
                            <IconGlyph icon={Icon::BadgeCheck} />
                            <span>{"Institutional diligence"}</span>
                            <span class="dot"></span>
                            <span>{"Automated income"}</span>
                        </div>
                        <h1>{&brand.tagline}</h1>
                        <p class="hero-subline">{&brand.subline}</p>
                        <div class="hero-actions">
                            <NavButton href="#contact">{&brand.cta_primary}</NavButton>
                            <NavButton href="#properties">{&brand.cta_secondary}</NavButton>
                        </div>
                        <ul class="value-bullets">
                            {
                                brand.value_bullets.iter().map(|bullet| html! {
                                    <li key={bullet.clone()}>
                                        <IconGlyph icon={Icon::Check} color={brand.accent.clone()} />
                                        {bullet}
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </Reveal>
                    <Reveal delay_ms={100} class={classes!("hero-visual")}>
                        <div class="hero-panel"></div>
                        <div class="hero-tile bottom-left"></div>
                        <div class="hero-tile top-right"></div>
                    </Reveal>
                </div>
            </Container>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        overflow: hidden;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: -20% 0 0 0;
                        z-index: 0;
                        opacity: 0.3;
                        will-change: transform;
                        background:
                            radial-gradient(800px 300px at 10% 10%, rgba(196, 154, 58, 0.25), transparent 60%),
                            radial-gradient(800px 300px at 90% 0%, rgba(196, 154, 58, 0.12), transparent 60%);
                    }
                    .hero-glow {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        pointer-events: none;
                        background: radial-gradient(400px circle at var(--glow-x) var(--glow-y), rgba(196, 154, 58, 0.12), transparent 70%);
                        transition: background 0.1s linear;
                    }
                    .hero .container {
                        position: relative;
                        z-index: 1;
                    }
                    .hero-grid {
                        display: grid;
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                        gap: 2.5rem;
                        align-items: center;
                        padding: 6rem 0;
                    }
                    @media (max-width: 1024px) {
                        .hero-grid {
                            grid-template-columns: 1fr;
                            padding: 5rem 0;
                        }
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 9999px;
                        padding: 0.25rem 0.75rem;
                        font-size: 0.75rem;
                        color: #cbd5e1;
                    }
                    .hero-badge .dot {
                        width: 4px;
                        height: 4px;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.3);
                    }
                    .hero h1 {
                        margin-top: 1rem;
                        font-size: 3rem;
                        line-height: 1.1;
                        letter-spacing: -0.02em;
                    }
                    .hero-subline {
                        margin-top: 1rem;
                        font-size: 1.125rem;
                        color: #cbd5e1;
                        max-width: 36rem;
                    }
                    .hero-actions {
                        margin-top: 1.5rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                    }
                    .value-bullets {
                        margin: 1.5rem 0 0;
                        padding: 0;
                        list-style: none;
                        display: grid;
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        color: #cbd5e1;
                    }
                    .value-bullets li {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .hero-visual {
                        position: relative;
                    }
                    .hero-panel {
                        aspect-ratio: 4 / 3;
                        width: 100%;
                        border-radius: 1rem;
                        background: linear-gradient(135deg, rgba(255, 255, 255, 0.1), rgba(255, 255, 255, 0.05));
                        box-shadow: inset 0 1px 0 rgba(255, 255, 255, 0.06);
                        outline: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .hero-tile {
                        position: absolute;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.05);
                        outline: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .hero-tile.bottom-left {
                        bottom: -1.5rem;
                        left: -1.5rem;
                        width: 7rem;
                        height: 7rem;
                    }
                    .hero-tile.top-right {
                        top: -1.5rem;
                        right: -1.5rem;
                        width: 4rem;
                        height: 4rem;
                    }
                    @media (max-width: 768px) {
                        .hero-tile {
                            display: none;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
