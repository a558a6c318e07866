use gloo_timers::callback::Timeout;
use log::{debug, warn};
use yew::prelude::*;

use crate::config::INITIAL_SCROLL_DELAY_MS;
use crate::scroll::scroll_to_location_hash;

mod compliance;
mod cta;
mod faq;
mod features;
mod footer;
mod hero;
mod how_it_works;
mod logo_bar;
mod navbar;
mod properties;
mod stats;
mod testimonial;

use compliance::ComplianceBar;
use cta::Cta;
use faq::Faq;
use features::FeatureGrid;
use footer::LuxFooter;
use hero::Hero;
use how_it_works::HowItWorks;
use logo_bar::LogoBar;
use navbar::Navbar;
use properties::PropertyShowcase;
use stats::Stats;
use testimonial::TestimonialStrip;

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    pub children: Children,
}

#[function_component(Container)]
pub fn container(props: &ContainerProps) -> Html {
    html! {
        <div class="container">
            { for props.children.iter() }
        </div>
    }
}

#[function_component(FmlLanding)]
pub fn fml_landing() -> Html {
    // Jump to a linked section (`/#faq`) once the sections are mounted,
    // otherwise start from the top.
    use_effect_with_deps(
        move |_| {
            Timeout::new(INITIAL_SCROLL_DELAY_MS, move || match scroll_to_location_hash() {
                Ok(true) => debug!("Restored section from URL fragment"),
                Ok(false) => {
                    if let Some(window) = web_sys::window() {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                Err(err) => warn!("Could not restore section from URL: {}", err),
            })
            .forget();
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <Navbar />
            <Hero />
            <ComplianceBar />
            <LogoBar />
            <Stats />
            <PropertyShowcase />
            <HowItWorks />
            <FeatureGrid />
            <TestimonialStrip />
            <Faq />
            <Cta />
            <LuxFooter />
            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                    }
                    .landing-page {
                        min-height: 100vh;
                        background: #0B0C10;
                        color: #e2e8f0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .landing-page h1,
                    .landing-page h2,
                    .landing-page h3 {
                        color: #fff;
                        font-family: Georgia, "Times New Roman", serif;
                        margin: 0;
                    }
                    .landing-page h2 {
                        font-size: 1.9rem;
                    }
                    .landing-page a {
                        color: inherit;
                        text-decoration: none;
                    }
                    .container {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .section {
                        padding: 4rem 0;
                        scroll-margin-top: 6rem;
                    }
                    .section-intro {
                        max-width: 42rem;
                    }
                    .section-intro p,
                    .muted {
                        color: #cbd5e1;
                        margin-top: 0.5rem;
                    }
                    .card {
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.04);
                        border-radius: 1rem;
                        padding: 1.5rem;
                        transition: transform 0.2s ease, background 0.2s ease, box-shadow 0.2s ease;
                    }
                    .card:hover {
                        transform: scale(1.03);
                        background: rgba(255, 255, 255, 0.06);
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.35);
                    }
                    .grid {
                        display: grid;
                        gap: 1.5rem;
                        margin-top: 2rem;
                    }
                    .grid-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
                    .grid-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
                    .grid-4 { grid-template-columns: repeat(4, minmax(0, 1fr)); }
                    @media (max-width: 768px) {
                        .grid-3,
                        .grid-4 {
                            grid-template-columns: repeat(2, minmax(0, 1fr));
                        }
                        .grid-2 {
                            grid-template-columns: 1fr;
                        }
                    }
                    .nav-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.35rem;
                        border-radius: 1rem;
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        transition: transform 0.2s ease, background 0.2s ease;
                    }
                    .nav-button:hover {
                        transform: scale(1.03);
                    }
                    .nav-button.primary {
                        background: #fff;
                        color: #0B0C10 !important;
                    }
                    .nav-button.ghost {
                        border: 1px solid rgba(255, 255, 255, 0.2);
                    }
                    .nav-button.ghost:hover {
                        background: rgba(255, 255, 255, 0.05);
                    }
                    .learn-more {
                        display: inline-flex;
                        gap: 0.25rem;
                        margin-top: 1.25rem;
                        font-size: 0.875rem;
                        transition: transform 0.2s ease;
                    }
                    .learn-more:hover {
                        transform: scale(1.03);
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .reveal.is-visible {
                        opacity: 1;
                        transform: none;
                    }
                    @media (prefers-reduced-motion: reduce) {
                        .reveal {
                            opacity: 1;
                            transform: none;
                            transition: none;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
