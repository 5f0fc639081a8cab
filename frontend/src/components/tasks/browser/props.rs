use common::model::task::AssignedTask;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TaskBrowserProps {
    /// Tasks assigned to the current student, in server order.
    #[prop_or_default]
    pub zadania: Vec<AssignedTask>,
}
