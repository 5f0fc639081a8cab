//! View rendering for the task browser.
//!
//! Both view containers are always mounted, `view-active` on exactly one of
//! them; the switch buttons mirror that with an `active` class on exactly
//! one button. Tree items toggle their own `active` class on click and stop
//! propagation so a click never reaches an ancestor tree item, preserving
//! nearest-ancestor semantics.

use yew::html::Scope;
use yew::prelude::*;

use common::model::task::AssignedTask;

use super::helpers::{group_tasks, node_key, SubjectGroup};
use super::messages::Msg;
use super::state::{TaskBrowserComponent, ViewMode};

pub fn view(component: &TaskBrowserComponent, ctx: &Context<TaskBrowserComponent>) -> Html {
    let link = ctx.link();
    let zadania = &ctx.props().zadania;

    html! {
        <div class="task-browser">
            { build_switch_bar(component, link) }

            <div
                id="treeView"
                class={classes!(
                    "view",
                    (component.view_mode == ViewMode::Tree).then_some("view-active"),
                )}
            >
                { build_tree(component, link, zadania) }
            </div>

            <div
                id="listView"
                class={classes!(
                    "view",
                    (component.view_mode == ViewMode::List).then_some("view-active"),
                )}
            >
                { build_list(zadania) }
            </div>
        </div>
    }
}

/// The exclusive-select switch bar. Each button is tagged with the view it
/// activates; the active one is whichever matches the current mode.
fn build_switch_bar(component: &TaskBrowserComponent, link: &Scope<TaskBrowserComponent>) -> Html {
    html! {
        <div class="tasks-switch">
            { switch_button("tree", "Drzewo", component, link) }
            { switch_button("list", "Lista", component, link) }
        </div>
    }
}

fn switch_button(
    data_view: &'static str,
    label: &'static str,
    component: &TaskBrowserComponent,
    link: &Scope<TaskBrowserComponent>,
) -> Html {
    let mode = ViewMode::from_data_view(data_view);
    html! {
        <button
            data-view={data_view}
            class={classes!((component.view_mode == mode).then_some("active"))}
            onclick={link.callback(move |_| Msg::SetView(mode))}
        >
            {label}
        </button>
    }
}

fn build_tree(
    component: &TaskBrowserComponent,
    link: &Scope<TaskBrowserComponent>,
    zadania: &[AssignedTask],
) -> Html {
    let groups = group_tasks(zadania);
    if groups.is_empty() {
        return html! { <p class="empty">{"Brak przypisanych zadań."}</p> };
    }

    html! {
        <ul class="task-tree">
            { groups.iter().map(|group| build_subject(component, link, group)).collect::<Html>() }
        </ul>
    }
}

fn build_subject(
    component: &TaskBrowserComponent,
    link: &Scope<TaskBrowserComponent>,
    group: &SubjectGroup<'_>,
) -> Html {
    let subject_key = node_key(&[group.przedmiot]);

    html! {
        <li class={tree_item_class(component, &subject_key)} onclick={toggle(link, &subject_key)}>
            <span class="tree-label">{group.przedmiot}</span>
            <ul>
                {
                    group.zakresy.iter().map(|scope| {
                        let scope_key = node_key(&[group.przedmiot, scope.zakres]);
                        html! {
                            <li
                                class={tree_item_class(component, &scope_key)}
                                onclick={toggle(link, &scope_key)}
                            >
                                <span class="tree-label">{scope.zakres}</span>
                                <ul>
                                    {
                                        scope.dzialy.iter().map(|topic| {
                                            let topic_key = node_key(&[
                                                group.przedmiot,
                                                scope.zakres,
                                                topic.dzial,
                                            ]);
                                            html! {
                                                <li
                                                    class={tree_item_class(component, &topic_key)}
                                                    onclick={toggle(link, &topic_key)}
                                                >
                                                    <span class="tree-label">{topic.dzial}</span>
                                                    <ul class="tree-tasks">
                                                        {
                                                            topic.zadania.iter()
                                                                .map(|assigned| task_row(assigned))
                                                                .collect::<Html>()
                                                        }
                                                    </ul>
                                                </li>
                                            }
                                        }).collect::<Html>()
                                    }
                                </ul>
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
        </li>
    }
}

fn tree_item_class(component: &TaskBrowserComponent, key: &str) -> Classes {
    classes!("tree-item", component.is_active(key).then_some("active"))
}

/// Toggle callback for one tree item. Stops propagation so only the nearest
/// tree item flips, never its ancestors.
fn toggle(link: &Scope<TaskBrowserComponent>, key: &str) -> Callback<MouseEvent> {
    let key = key.to_string();
    link.callback(move |e: MouseEvent| {
        e.stop_propagation();
        Msg::ToggleNode(key.clone())
    })
}

fn task_row(assigned: &AssignedTask) -> Html {
    let task = &assigned.zadanie;
    html! {
        <li class="tree-task">
            <span class="task-title">
                { format!("{} / zad. {} ({})", task.rok_arkusza, task.numer_zadania,
                    task.typ_zadania.as_select_value()) }
            </span>
            <span class={classes!("status", status_class(assigned))}>
                { assigned.status.label() }
            </span>
        </li>
    }
}

fn build_list(zadania: &[AssignedTask]) -> Html {
    if zadania.is_empty() {
        return html! { <p class="empty">{"Brak przypisanych zadań."}</p> };
    }

    html! {
        <table class="task-list">
            <thead>
                <tr>
                    <th>{"Rok"}</th>
                    <th>{"Nr"}</th>
                    <th>{"Dział"}</th>
                    <th>{"Typ"}</th>
                    <th>{"Status"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    zadania.iter().map(|assigned| {
                        let task = &assigned.zadanie;
                        html! {
                            <tr>
                                <td>{task.rok_arkusza}</td>
                                <td>{task.numer_zadania}</td>
                                <td>{task.dzial.clone()}</td>
                                <td>{task.typ_zadania.as_select_value()}</td>
                                <td class={classes!("status", status_class(assigned))}>
                                    { assigned.status.label() }
                                </td>
                            </tr>
                        }
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}

fn status_class(assigned: &AssignedTask) -> &'static str {
    use common::model::task::TaskStatus;
    match assigned.status {
        TaskStatus::Nowe => "status-nowe",
        TaskStatus::Zrobione => "status-zrobione",
        TaskStatus::Bledne => "status-bledne",
    }
}
