//! Task editor form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `TaskFormProps`, `TaskFormComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - Own the answer-visibility contract (the `otwarte` task type hides and
//!   clears the answers section) and the paste-to-attachment flow.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::TaskFormProps;
pub use state::TaskFormComponent;

impl Component for TaskFormComponent {
    type Message = Msg;
    type Properties = TaskFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TaskFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
