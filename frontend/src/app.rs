use common::model::task::{AnswerKey, AssignedTask, Task, TaskStatus, TaskType};
use yew::{classes, html, Component, Context, Html};

use crate::components::tasks::browser::TaskBrowserComponent;
use crate::components::tasks::form::TaskFormComponent;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Zadania,
    NoweZadanie,
}

pub enum Msg {
    SetPage(Page),
    TaskSaved(Task),
}

/// Application shell: a two-entry nav over the task browser and the task
/// editor. Tasks saved in the editor land in the browser's list as fresh
/// assignments.
pub struct App {
    page: Page,
    zadania: Vec<AssignedTask>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            page: Page::Zadania,
            zadania: sample_assignments(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetPage(page) => {
                self.page = page;
                true
            }
            Msg::TaskSaved(task) => {
                self.zadania.push(AssignedTask {
                    zadanie: task,
                    status: TaskStatus::Nowe,
                });
                self.page = Page::Zadania;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="app-root">
                <nav class="app-nav">
                    <button
                        class={classes!("nav-btn", (self.page == Page::Zadania).then_some("active"))}
                        onclick={link.callback(|_| Msg::SetPage(Page::Zadania))}
                    >
                        {"Zadania"}
                    </button>
                    <button
                        class={classes!("nav-btn", (self.page == Page::NoweZadanie).then_some("active"))}
                        onclick={link.callback(|_| Msg::SetPage(Page::NoweZadanie))}
                    >
                        {"Nowe zadanie"}
                    </button>
                </nav>
                {
                    match self.page {
                        Page::Zadania => html! {
                            <TaskBrowserComponent zadania={self.zadania.clone()} />
                        },
                        Page::NoweZadanie => html! {
                            <TaskFormComponent on_saved={link.callback(Msg::TaskSaved)} />
                        },
                    }
                }
            </div>
        }
    }
}

/// Demo assignments standing in for the server-provided student rows.
fn sample_assignments() -> Vec<AssignedTask> {
    let base = Task {
        id: 0,
        przedmiot: "matematyka".to_string(),
        zakres: "podstawa".to_string(),
        dzial: "Funkcja kwadratowa".to_string(),
        rodzaj_arkusza: "matura".to_string(),
        rok_arkusza: 2023,
        numer_zadania: 1,
        typ_zadania: TaskType::Zamkniete,
        tresc: String::new(),
        odp_a: None,
        odp_b: None,
        odp_c: None,
        odp_d: None,
        poprawna_odp: None,
    };

    vec![
        AssignedTask {
            zadanie: Task {
                id: 1,
                numer_zadania: 4,
                tresc: "Rozwiąż równanie x² - 5x + 6 = 0.".to_string(),
                odp_a: Some("x ∈ {2, 3}".to_string()),
                odp_b: Some("x ∈ {1, 6}".to_string()),
                odp_c: Some("x ∈ {-2, -3}".to_string()),
                odp_d: Some("brak rozwiązań".to_string()),
                poprawna_odp: Some(AnswerKey::A),
                ..base.clone()
            },
            status: TaskStatus::Zrobione,
        },
        AssignedTask {
            zadanie: Task {
                id: 2,
                dzial: "Trygonometria".to_string(),
                zakres: "rozszerzenie".to_string(),
                rok_arkusza: 2024,
                numer_zadania: 11,
                typ_zadania: TaskType::Otwarte,
                tresc: "Udowodnij tożsamość sin²x + cos²x = 1.".to_string(),
                ..base.clone()
            },
            status: TaskStatus::Nowe,
        },
        AssignedTask {
            zadanie: Task {
                id: 3,
                przedmiot: "polski".to_string(),
                dzial: "Epoki literackie".to_string(),
                rok_arkusza: 2022,
                numer_zadania: 2,
                tresc: "Wskaż epokę, w której tworzył Jan Kochanowski.".to_string(),
                odp_a: Some("renesans".to_string()),
                odp_b: Some("barok".to_string()),
                odp_c: Some("oświecenie".to_string()),
                odp_d: Some("romantyzm".to_string()),
                poprawna_odp: Some(AnswerKey::A),
                ..base
            },
            status: TaskStatus::Bledne,
        },
    ]
}
