use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::Container;
use crate::components::icon::IconGlyph;
use crate::components::nav_button::NavButton;
use crate::config::{use_brand, Icon};
use crate::scroll::anchor_callback;
use crate::state::{is_scrolled, MenuAction, MenuState};

const LINKS: [(&str, &str); 4] = [
    ("#properties", "Properties"),
    ("#how", "How it works"),
    ("#features", "Why us"),
    ("#faq", "FAQ"),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let brand = use_brand();
    let menu = use_reducer(MenuState::default);
    let scrolled = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().map(|window| {
                    let target = window.clone();
                    let callback = Closure::<dyn Fn()>::new(move || {
                        if let Ok(scroll_y) = target.scroll_y() {
                            scrolled.set(is_scrolled(scroll_y));
                        }
                    });
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    );
                    callback
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.dispatch(MenuAction::Close))
    };

    let link = |href: &'static str, label: &'static str, class: &'static str| {
        html! {
            <a
                key={href}
                href={href}
                class={class}
                onclick={anchor_callback(AttrValue::from(href), Some(close_menu.clone()))}
            >
                {label}
            </a>
        }
    };

    html! {
        <header class={classes!("site-header", (*scrolled).then_some("scrolled"))}>
            <Container>
                <div class="header-row">
                    <div class="brand-mark">
                        <img src="/assets/logo.png" alt="FML Logo" width="32" height="32" />
                        <span>{&brand.company}</span>
                    </div>
                    <nav class="desktop-links">
                        { for LINKS.iter().map(|(href, label)| link(*href, *label, "nav-link")) }
                    </nav>
                    <div class="desktop-actions">
                        <NavButton href="#properties">{&brand.cta_secondary}</NavButton>
                        <NavButton href="#contact" primary={true}>
                            {&brand.cta_primary}
                            <IconGlyph icon={Icon::ArrowRight} />
                        </NavButton>
                    </div>
                    <button
                        class="menu-toggle"
                        aria-label="Toggle menu"
                        aria-expanded={menu.open.to_string()}
                        onclick={toggle_menu}
                    >
                        <IconGlyph icon={if menu.open { Icon::Close } else { Icon::Menu }} />
                    </button>
                </div>
                {
                    if menu.open {
                        html! {
                            <div class="mobile-menu">
                                { for LINKS.iter().map(|(href, label)| link(*href, *label, "mobile-link")) }
                                <NavButton href="#contact" primary={true} on_navigate={close_menu.clone()}>
                                    {&brand.cta_primary}
                                </NavButton>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </Container>
            <style>
                {r#"
                    .site-header {
                        position: sticky;
                        top: 0;
                        z-index: 40;
                        backdrop-filter: blur(8px);
                        background: rgba(0, 0, 0, 0.4);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .site-header.scrolled {
                        background: rgba(0, 0, 0, 0.75);
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
                    }
                    .header-row {
                        display: flex;
                        height: 4rem;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .brand-mark {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        font-weight: 600;
                        letter-spacing: 0.03em;
                    }
                    .brand-mark img {
                        border-radius: 0.375rem;
                    }
                    .desktop-links,
                    .desktop-actions {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        font-size: 0.875rem;
                    }
                    .desktop-actions {
                        gap: 0.75rem;
                    }
                    .nav-link {
                        transition: transform 0.2s ease, color 0.2s ease;
                    }
                    .nav-link:hover {
                        color: #fff;
                        transform: scale(1.03);
                    }
                    .menu-toggle {
                        display: none;
                        background: none;
                        border: none;
                        color: inherit;
                        font-size: 1.5rem;
                        padding: 0.5rem;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        padding-bottom: 1rem;
                    }
                    .mobile-link {
                        border-radius: 0.5rem;
                        padding: 0.5rem 0.75rem;
                    }
                    .mobile-link:hover {
                        background: rgba(255, 255, 255, 0.05);
                    }
                    @media (max-width: 768px) {
                        .desktop-links,
                        .desktop-actions {
                            display: none;
                        }
                        .menu-toggle {
                            display: block;
                        }
                    }
                    @media (min-width: 769px) {
                        .mobile-menu {
                            display: none;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
