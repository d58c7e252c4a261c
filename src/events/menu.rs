use crate::constants::*;
use crate::dom;
use crate::overlay;
use room_core::Presenter;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Header menu, logo and close button.
pub fn wire_menu_buttons(document: &web::Document, presenter: &Rc<RefCell<Presenter>>) {
    let p = presenter.clone();
    dom::add_click_listener(document, ABOUT_MENU_ID, move || {
        if let Err(e) = p.borrow_mut().enter_about() {
            log::warn!("[view] about ignored: {}", e);
        }
    });

    let p = presenter.clone();
    dom::add_click_listener(document, PROJECTS_MENU_ID, move || {
        p.borrow_mut().enter_projects();
    });

    let p = presenter.clone();
    dom::add_click_listener(document, LOGO_ID, move || {
        p.borrow_mut().reset();
    });

    let p = presenter.clone();
    dom::add_click_listener(document, CLOSE_BUTTON_ID, move || {
        p.borrow_mut().reset();
    });
}

/// Contact dropdown: the button toggles it, a mouse-up outside closes it.
pub fn wire_contact_menu(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, CONTACT_BUTTON_ID, move || {
        overlay::toggle_contact(&doc);
    });

    let doc = document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let inside = dom::query(&doc, CONTACT_MENU_SELECTOR)
            .map(|menu| dom::target_within_element(ev.target(), &menu))
            .unwrap_or(false);
        if !inside {
            overlay::close_contact(&doc);
        }
    }) as Box<dyn FnMut(_)>);
    let _ = document.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
    closure.forget();
}
