use yew::prelude::*;

use super::Container;
use crate::components::reveal::Reveal;
use crate::config::use_brand;

#[function_component(LogoBar)]
pub fn logo_bar() -> Html {
    let brand = use_brand();

    html! {
        <section class="logo-bar">
            <Container>
                <Reveal class={classes!("logo-panel")}>
                    <p class="logo-caption">{"As seen in"}</p>
                    <div class="logo-row">
                        {
                            brand.press.iter().map(|name| html! {
                                <div key={name.clone()} class="logo-name">{name}</div>
                            }).collect::<Html>()
                        }
                    </div>
                </Reveal>
            </Container>
            <style>
                {r#"
                    .logo-panel {
                        margin-top: 2.5rem;
                        padding: 2.5rem 0;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        border-radius: 1rem;
                    }
                    .logo-caption {
                        margin: 0;
                        text-align: center;
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.08em;
                        color: #94a3b8;
                    }
                    .logo-row {
                        margin-top: 1rem;
                        display: grid;
                        grid-template-columns: repeat(6, minmax(0, 1fr));
                        gap: 1.5rem;
                        opacity: 0.9;
                    }
                    @media (max-width: 768px) {
                        .logo-row {
                            grid-template-columns: repeat(3, minmax(0, 1fr));
                        }
                    }
                    .logo-name {
                        text-align: center;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #cbd5e1;
                    }
                "#}
            </style>
        </section>
    }
}
