use yew::prelude::*;

use crate::config::use_brand;
use crate::scroll::anchor_callback;

#[derive(Properties, PartialEq)]
pub struct NavButtonProps {
    pub href: AttrValue,
    pub children: Children,
    #[prop_or_default]
    pub primary: bool,
    /// Fired after an in-page scroll was handled, e.g. to close the mobile menu.
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
}

#[function_component(NavButton)]
pub fn nav_button(props: &NavButtonProps) -> Html {
    let brand = use_brand();
    let onclick = anchor_callback(props.href.clone(), props.on_navigate.clone());

    let style = if props.primary {
        format!("box-shadow: 0 0 0 1px {};", brand.accent)
    } else {
        String::new()
    };

    html! {
        <a
            href={props.href.clone()}
            class={classes!("nav-button", if props.primary { "primary" } else { "ghost" })}
            style={style}
            onclick={onclick}
        >
            { for props.children.iter() }
        </a>
    }
}
