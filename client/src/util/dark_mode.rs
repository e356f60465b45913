//! Dark mode initialization and toggle.
//!
//! The initial value follows the system `prefers-color-scheme`; toggling only
//! flips the `.dark-mode` class on `<html>` for the current page view. No
//! preference is stored between sessions.

/// Whether the system prefers a dark color scheme. Always `false` during SSR.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the `.dark-mode` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        let class_list = el.class_list();
        let result = if enabled { class_list.add_1("dark-mode") } else { class_list.remove_1("dark-mode") };
        if result.is_err() {
            leptos::logging::warn!("failed to update dark-mode class");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip dark mode, apply it to the document, and return the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    next
}
