use yew::prelude::*;

use crate::motion::particles;

#[derive(Properties, PartialEq)]
pub struct ParticleFieldProps {
    pub count: usize,
    pub accent: AttrValue,
}

#[function_component(ParticleField)]
pub fn particle_field(props: &ParticleFieldProps) -> Html {
    let field = use_memo(|count| particles(*count), props.count);

    html! {
        <div class="particle-field" aria-hidden="true">
            {
                field.iter().map(|p| html! {
                    <span
                        class="particle"
                        style={format!("{} background: {};", p.style(), props.accent)}
                    />
                }).collect::<Html>()
            }
            <style>
                {r#"
                    .particle-field {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                        z-index: 0;
                    }
                    .particle {
                        position: absolute;
                        border-radius: 50%;
                        opacity: 0;
                        animation-name: particle-drift;
                        animation-timing-function: ease-in-out;
                        animation-iteration-count: infinite;
                    }
                    @keyframes particle-drift {
                        0% { opacity: 0; transform: translateY(0); }
                        30% { opacity: 0.55; }
                        100% { opacity: 0; transform: translateY(-60px); }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .particle { animation: none; opacity: 0.25; }
                    }
                "#}
            </style>
        </div>
    }
}
