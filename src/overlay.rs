use crate::constants::NOTICE_ELEMENT_ID;
use web_sys as web;

/// Show the compatibility notice with `message`, if the page provides one.
pub fn show_notice(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(NOTICE_ELEMENT_ID) {
        el.set_text_content(Some(message));
        _ = el.class_list().remove_1("hidden");
        // fallback for pages without a `hidden` class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_notice(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(NOTICE_ELEMENT_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}
