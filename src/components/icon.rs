use yew::prelude::*;

use crate::config::Icon;

#[derive(Properties, PartialEq)]
pub struct IconGlyphProps {
    pub icon: Icon,
    /// Tints the glyph, usually with the brand accent.
    #[prop_or_default]
    pub color: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconGlyphProps) -> Html {
    let style = props
        .color
        .as_ref()
        .map(|color| format!("color: {};", color))
        .unwrap_or_default();

    html! {
        <span class={classes!("icon", props.class.clone())} style={style} aria-hidden="true">
            {props.icon.glyph()}
        </span>
    }
}
