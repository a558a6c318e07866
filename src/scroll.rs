use log::{debug, warn};
use thiserror::Error;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config::HEADER_OFFSET;

#[derive(Error, Debug, PartialEq)]
pub enum ScrollError {
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("`{0}` is not a valid selector")]
    InvalidSelector(String),
}

/// True for in-page anchors like `#faq`. A bare `#` is left to the browser.
pub fn is_fragment(href: &str) -> bool {
    href.len() > 1 && href.starts_with('#')
}

/// Document offset that puts an element's top edge right below the sticky header.
pub fn scroll_target(page_y_offset: f64, rect_top: f64, header_offset: f64) -> f64 {
    (page_y_offset + rect_top - header_offset).max(0.0)
}

/// Smooth-scrolls to the element `href` points at.
///
/// Returns `Ok(false)` when the link is not an in-page anchor or nothing
/// matches it, in which case the browser should follow the link as usual.
pub fn scroll_to_anchor(href: &str) -> Result<bool, ScrollError> {
    if !is_fragment(href) {
        return Ok(false);
    }

    let window = web_sys::window().ok_or(ScrollError::NoWindow)?;
    let document = window.document().ok_or(ScrollError::NoDocument)?;
    let element = document
        .query_selector(href)
        .map_err(|_| ScrollError::InvalidSelector(href.to_string()))?;
    let Some(element) = element else {
        debug!("No section matches {}", href);
        return Ok(false);
    };

    let rect_top = element.get_bounding_client_rect().top();
    let page_y = window.page_y_offset().unwrap_or(0.0);
    let top = scroll_target(page_y, rect_top, HEADER_OFFSET);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);

    debug!("Scrolling to {} at {}px", href, top);
    Ok(true)
}

/// Click handler for in-page links. Default navigation is suppressed only
/// when the scroll was handled here; `after` fires in that case too.
pub fn anchor_callback(href: AttrValue, after: Option<Callback<()>>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if finish_navigation(&href, scroll_to_anchor(&href), after.as_ref()) {
            e.prevent_default();
        }
    })
}

/// Emits `after` once a scroll was handled. Returns whether the browser's
/// own navigation has to be suppressed.
fn finish_navigation(
    href: &str,
    outcome: Result<bool, ScrollError>,
    after: Option<&Callback<()>>,
) -> bool {
    match outcome {
        Ok(true) => {
            if let Some(after) = after {
                after.emit(());
            }
            true
        }
        Ok(false) => false,
        Err(err) => {
            warn!("Anchor navigation to {} failed: {}", href, err);
            false
        }
    }
}

/// Honours a `#fragment` in the URL the page was opened with.
pub fn scroll_to_location_hash() -> Result<bool, ScrollError> {
    let window = web_sys::window().ok_or(ScrollError::NoWindow)?;
    let hash = window.location().hash().unwrap_or_default();
    scroll_to_anchor(&hash)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn target_subtracts_header_height() {
        // Section 900px below the viewport top while already scrolled 300px.
        assert_eq!(scroll_target(300.0, 900.0, HEADER_OFFSET), 1128.0);
    }

    #[test]
    fn target_for_section_above_viewport() {
        assert_eq!(scroll_target(2000.0, -500.0, 72.0), 1428.0);
    }

    #[test]
    fn target_never_goes_negative() {
        assert_eq!(scroll_target(0.0, 10.0, 72.0), 0.0);
    }

    #[test]
    fn only_named_fragments_are_handled() {
        assert!(is_fragment("#properties"));
        assert!(is_fragment("#contact"));
        assert!(!is_fragment("#"));
        assert!(!is_fragment(""));
        assert!(!is_fragment("/privacy"));
        assert!(!is_fragment("https://example.com/#faq"));
    }

    fn counting_callback() -> (Callback<()>, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        (Callback::from(move |_: ()| counter.set(counter.get() + 1)), calls)
    }

    #[test]
    fn handled_scroll_fires_after_and_suppresses_default() {
        let (after, calls) = counting_callback();
        assert!(finish_navigation("#faq", Ok(true), Some(&after)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn unhandled_or_failed_scroll_leaves_the_menu_alone() {
        let (after, calls) = counting_callback();
        assert!(!finish_navigation("#", Ok(false), Some(&after)));
        assert!(!finish_navigation(
            "#a[",
            Err(ScrollError::InvalidSelector("#a[".to_string())),
            Some(&after)
        ));
        assert_eq!(calls.get(), 0);
        assert!(finish_navigation("#faq", Ok(true), None));
    }

    #[test]
    fn non_fragments_short_circuit_before_the_dom() {
        assert_eq!(scroll_to_anchor("#"), Ok(false));
        assert_eq!(scroll_to_anchor("mailto:someone@example.com"), Ok(false));
    }
}
