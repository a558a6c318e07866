use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::config::SCROLLED_THRESHOLD;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuState {
    pub open: bool,
}

pub enum MenuAction {
    Toggle,
    Close,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        if open == self.open {
            return self;
        }
        debug!("Mobile menu {}", if open { "opened" } else { "closed" });
        Rc::new(MenuState { open })
    }
}

/// FAQ accordion: at most one item is open at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Accordion {
    pub open: Option<usize>,
}

impl Accordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

pub enum AccordionAction {
    Toggle(usize),
}

impl Reducible for Accordion {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AccordionAction::Toggle(index) => {
                let open = if self.is_open(index) { None } else { Some(index) };
                Rc::new(Accordion { open })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_flips_on_every_toggle() {
        let mut menu = Rc::new(MenuState::default());
        for expected in [true, false, true, false] {
            menu = menu.reduce(MenuAction::Toggle);
            assert_eq!(menu.open, expected);
        }
    }

    #[test]
    fn menu_close_is_idempotent() {
        let menu = Rc::new(MenuState::default()).reduce(MenuAction::Toggle);
        let menu = menu.reduce(MenuAction::Close);
        assert!(!menu.open);

        let again = menu.clone().reduce(MenuAction::Close);
        assert!(Rc::ptr_eq(&menu, &again));
    }

    #[test]
    fn opening_an_item_closes_the_previous_one() {
        let accordion = Rc::new(Accordion::default()).reduce(AccordionAction::Toggle(0));
        assert!(accordion.is_open(0));

        let accordion = accordion.reduce(AccordionAction::Toggle(2));
        assert!(accordion.is_open(2));
        assert!(!accordion.is_open(0));
        assert_eq!(accordion.open, Some(2));
    }

    #[test]
    fn toggling_the_open_item_closes_it() {
        let accordion = Rc::new(Accordion::default())
            .reduce(AccordionAction::Toggle(1))
            .reduce(AccordionAction::Toggle(1));
        assert_eq!(accordion.open, None);
    }

    #[test]
    fn scrolled_flag_uses_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(SCROLLED_THRESHOLD));
        assert!(is_scrolled(SCROLLED_THRESHOLD + 1.0));
    }
}
