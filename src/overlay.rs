use crate::constants::*;
use crate::dom;
use room_core::ThemeMode;
use web_sys as web;

#[inline]
pub fn hide_loader(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADER_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn set_close_visible(document: &web::Document, visible: bool) {
    dom::set_display(document, CLOSE_BUTTON_ID, visible);
}

/// Swap the body theme class to match `theme`.
pub fn apply_theme(document: &web::Document, theme: ThemeMode) {
    if let Some(body) = document.body() {
        let classes = body.class_list();
        let _ = classes.remove_1(theme.toggled().body_class());
        let _ = classes.add_1(theme.body_class());
    }
}

#[inline]
pub fn toggle_contact(document: &web::Document) {
    if let Some(el) = dom::query(document, CONTACT_DROPDOWN_SELECTOR) {
        let _ = el.class_list().toggle(CONTACT_DROPDOWN_OPEN_CLASS);
    }
}

#[inline]
pub fn close_contact(document: &web::Document) {
    if let Some(el) = dom::query(document, CONTACT_DROPDOWN_SELECTOR) {
        let _ = el.class_list().remove_1(CONTACT_DROPDOWN_OPEN_CLASS);
    }
}
