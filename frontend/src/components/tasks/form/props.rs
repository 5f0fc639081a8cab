//! Properties of the task editor form.

use common::model::task::Task;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TaskFormProps {
    /// Emitted with the validated task when the user saves the form.
    #[prop_or_default]
    pub on_saved: Callback<Task>,
}
