use chrono::{Datelike, Utc};
use yew::prelude::*;

use super::Container;
use crate::config::use_brand;
use crate::scroll::anchor_callback;

#[function_component(LuxFooter)]
pub fn lux_footer() -> Html {
    let brand = use_brand();
    let year = Utc::now().year();

    html! {
        <footer class="lux-footer">
            <Container>
                <div class="footer-row">
                    <div class="footer-brand">
                        <img src="/assets/logo.png" alt="FML Logo" width="20" height="20" />
                        <span>{&brand.company}</span>
                    </div>
                    <div class="footer-links">
                        <a href="#">{"Privacy"}</a>
                        <a href="#">{"Terms"}</a>
                        <a href="#contact" onclick={anchor_callback("#contact".into(), None)}>{"Contact"}</a>
                    </div>
                    <div>{format!("© {} {}. All rights reserved.", year, brand.company)}</div>
                </div>
                <div class="disclosures">
                    <p>
                        <strong>{"Disclosures:"}</strong>
                        {" Past performance is not indicative of future results. Investments are illiquid and involve risk, including loss of principal. Any examples are hypothetical and for illustrative purposes only. Read all offering documents before investing."}
                    </p>
                </div>
            </Container>
            <style>
                {r#"
                    .lux-footer {
                        padding-top: 3rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(0, 0, 0, 0.4);
                    }
                    .footer-row {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                        padding-bottom: 2rem;
                        font-size: 0.875rem;
                        color: #cbd5e1;
                    }
                    @media (max-width: 768px) {
                        .footer-row {
                            flex-direction: column;
                        }
                    }
                    .footer-brand,
                    .footer-links {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .footer-brand img {
                        border-radius: 0.375rem;
                    }
                    .footer-links a:hover {
                        color: #fff;
                    }
                    .disclosures {
                        padding-bottom: 2.5rem;
                        font-size: 12px;
                        line-height: 1.6;
                        color: #94a3b8;
                    }
                "#}
            </style>
        </footer>
    }
}
