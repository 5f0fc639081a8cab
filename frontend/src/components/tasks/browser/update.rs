use yew::prelude::*;

use super::messages::Msg;
use super::state::TaskBrowserComponent;

pub fn update(
    component: &mut TaskBrowserComponent,
    _ctx: &Context<TaskBrowserComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SetView(mode) => {
            component.set_view(mode);
            true
        }
        Msg::ToggleNode(key) => {
            component.toggle_node(key);
            true
        }
    }
}
