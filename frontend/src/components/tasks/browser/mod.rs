//! Task browser: the student task page with its two presentation modes
//! (grouped tree and flat list) behind an exclusive switch bar, and
//! per-node `active` toggling of tree items.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::TaskBrowserProps;
pub use state::{TaskBrowserComponent, ViewMode};

impl Component for TaskBrowserComponent {
    type Message = Msg;
    type Properties = TaskBrowserProps;

    fn create(_ctx: &Context<Self>) -> Self {
        TaskBrowserComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
