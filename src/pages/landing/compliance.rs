use yew::prelude::*;

use super::Container;
use crate::components::icon::IconGlyph;
use crate::config::{use_brand, Icon};

#[function_component(ComplianceBar)]
pub fn compliance_bar() -> Html {
    let brand = use_brand();

    html! {
        <section class="compliance-bar">
            <Container>
                <div class="compliance-row">
                    <IconGlyph icon={Icon::Landmark} color={brand.accent.clone()} />
                    <span>
                        {"Offerings may involve securities; not an offer to sell or a solicitation to buy. Read all risk factors & disclosures in each offering document."}
                    </span>
                </div>
            </Container>
            <style>
                {r#"
                    .compliance-bar {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(0, 0, 0, 0.4);
                    }
                    .compliance-row {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 0.5rem 1rem;
                        padding: 0.75rem 0;
                        font-size: 13px;
                        color: #cbd5e1;
                    }
                "#}
            </style>
        </section>
    }
}
