//! Full-screen overlay sheet used to zoom the attachment preview.
//!
//! The sheet is always mounted and hidden by default; `open_overlay` /
//! `close_overlay` flip a `show` class on it. The class flip runs through a
//! short `setTimeout` so the CSS transition fires after the sheet's content
//! has rendered.

use uuid::Uuid;
use web_sys::js_sys;
use yew::{html, Component, Context, Html, NodeRef, Properties};

pub struct OverlaySheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for OverlaySheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="overlay-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_overlay(overlay_ref: NodeRef) {
    set_show_class(overlay_ref, "add");
}

pub fn close_overlay(overlay_ref: NodeRef) {
    set_show_class(overlay_ref, "remove");
}

fn set_show_class(overlay_ref: NodeRef, method: &str) {
    if let Some(overlay) = overlay_ref.cast::<web_sys::HtmlElement>() {
        let func = js_sys::Function::new_no_args(&format!(
            "document.querySelector('#{}').classList.{}('show')",
            overlay.id(),
            method
        ));
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50);
        }
    }
}
