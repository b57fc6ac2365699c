//! Application Context
//!
//! The page-wide UI instance, reachable from exported functions and DOM callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use crate::app::ClientFormUi;
use crate::view::DomView;

pub type PageUi = ClientFormUi<DomView>;

thread_local! {
    static PAGE_UI: RefCell<Option<Rc<PageUi>>> = const { RefCell::new(None) };
}

/// Install the page instance; a second install replaces the first
pub fn install(ui: Rc<PageUi>) {
    PAGE_UI.with(|slot| *slot.borrow_mut() = Some(ui));
}

/// Shared handle to the page instance, if installed
pub fn page_ui() -> Option<Rc<PageUi>> {
    PAGE_UI.with(|slot| slot.borrow().clone())
}
