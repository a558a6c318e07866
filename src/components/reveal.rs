use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    /// Staggers siblings that enter the viewport together.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe_once(&element, visible.setter()));
                if observer.is_none() {
                    // No IntersectionObserver support, just show the content.
                    visible.set(true);
                }
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let style = if props.delay_ms > 0 {
        format!("transition-delay: {}ms;", props.delay_ms)
    } else {
        String::new()
    };

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*visible).then_some("is-visible"), props.class.clone())}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

fn observe_once(
    element: &Element,
    visible: UseStateSetter<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if entered {
                visible.set(true);
                observer.disconnect();
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    observer.observe(element);
    Some((observer, callback))
}
