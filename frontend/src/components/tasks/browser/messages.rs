use super::state::ViewMode;

#[derive(Clone)]
pub enum Msg {
    /// A `.tasks-switch` button was clicked.
    SetView(ViewMode),
    /// A tree item was clicked; flips its `active` class.
    ToggleNode(String),
}
