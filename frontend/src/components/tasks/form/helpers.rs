//! DOM-side helpers for the task form: clipboard extraction, file-input
//! synchronization, and toast feedback.

use gloo_console::warn;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DataTransfer, File, HtmlElement, HtmlInputElement};
use yew::NodeRef;

/// Pulls an image file out of a paste event, if any.
///
/// Walks every clipboard item whose media type starts with `"image"` and
/// keeps the last one, matching how the page this replaces overwrote the
/// file list per matched item. Non-image content yields `None`.
pub fn extract_pasted_image(event: &web_sys::Event) -> Option<File> {
    let clipboard = event.dyn_ref::<ClipboardEvent>()?.clipboard_data()?;
    let items = clipboard.items();

    let mut image = None;
    for idx in 0..items.length() {
        let Some(item) = items.get(idx) else {
            continue;
        };
        if item.type_().starts_with("image") {
            if let Ok(Some(file)) = item.get_as_file() {
                image = Some(file);
            }
        }
    }
    image
}

/// Makes `file` the sole entry of the attachment input's file list, as if
/// the user had picked it in the file dialog, so plain form submission picks
/// it up unchanged. A missing input is tolerated with a console warning.
pub fn sync_file_input(input_ref: &NodeRef, file: &File) {
    let Some(input) = input_ref.cast::<HtmlInputElement>() else {
        warn!("brak pola załącznika, pominięto wklejony obraz");
        return;
    };
    let Ok(transfer) = DataTransfer::new() else {
        warn!("nie udało się utworzyć DataTransfer");
        return;
    };
    if transfer.items().add_with_file(file).is_err() {
        warn!("nie udało się dodać pliku do DataTransfer");
        return;
    }
    input.set_files(transfer.files().as_ref());
}

/// Displays a temporary notification at the bottom of the screen and
/// removes it after a few seconds.
pub fn show_toast(message: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
            toast.set_text_content(Some(message));
            let html_toast: HtmlElement = toast.unchecked_into();
            let style = html_toast.style();
            style.set_property("position", "fixed").ok();
            style.set_property("bottom", "20px").ok();
            style.set_property("left", "50%").ok();
            style.set_property("transform", "translateX(-50%)").ok();
            style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
            style.set_property("color", "#fff").ok();
            style.set_property("padding", "10px 20px").ok();
            style.set_property("border-radius", "4px").ok();
            style.set_property("z-index", "10000").ok();

            if body.append_child(&html_toast).is_ok() {
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(3000).await;
                    if let Some(parent) = html_toast.parent_node() {
                        parent.remove_child(&html_toast).ok();
                    }
                });
            }
        }
    }
}
