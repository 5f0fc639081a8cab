//! Component state for the task editor form.
//!
//! The form is the single owner of the draft task: the DOM is rendered from
//! these fields and never read back except through input events. That keeps
//! the answer-visibility contract (hide + clear on the open task type)
//! testable without a browser.

use gloo_file::ObjectUrl;
use yew::NodeRef;

use common::model::catalog;
use common::model::task::{AnswerKey, Task, TaskType, RODZAJ_ARKUSZA_OUT};

pub struct TaskFormComponent {
    pub przedmiot: String,
    pub zakres: String,
    pub dzial: String,
    pub rodzaj_arkusza: String,
    /// Raw values of the year/number inputs; parsed on submit.
    pub rok_arkusza: String,
    pub numer_zadania: String,
    pub typ_zadania: TaskType,
    pub tresc: String,
    /// Answers A–D, in order.
    pub odpowiedzi: [String; 4],
    pub poprawna_odp: Option<AnswerKey>,

    /// The hidden file input holding the attachment for form submission.
    pub file_input_ref: NodeRef,
    /// Object URL of the current attachment preview. Replacing it drops the
    /// previous one, which revokes the old URL.
    pub preview_url: Option<ObjectUrl>,
    /// Zoom overlay for the preview thumbnail.
    pub overlay_ref: NodeRef,
}

impl TaskFormComponent {
    pub fn new() -> Self {
        let przedmiot = catalog::PRZEDMIOTY[0].to_string();
        let dzial = catalog::dzialy_for(&przedmiot)
            .first()
            .map(|d| d.to_string())
            .unwrap_or_default();
        Self {
            przedmiot,
            zakres: catalog::ZAKRESY[0].to_string(),
            dzial,
            rodzaj_arkusza: "matura".to_string(),
            rok_arkusza: String::new(),
            numer_zadania: String::new(),
            typ_zadania: TaskType::Zamkniete,
            tresc: String::new(),
            odpowiedzi: Default::default(),
            poprawna_odp: None,
            file_input_ref: NodeRef::default(),
            preview_url: None,
            overlay_ref: NodeRef::default(),
        }
    }

    /// Answer-visibility rule: the answers section is shown for every task
    /// type except the open one.
    pub fn answers_visible(&self) -> bool {
        self.typ_zadania != TaskType::Otwarte
    }

    /// Applies a task-type change. Switching to the open type hides the
    /// answers section and discards everything typed into it; switching back
    /// shows the section again without restoring anything.
    pub fn set_typ_zadania(&mut self, typ: TaskType) {
        self.typ_zadania = typ;
        if typ == TaskType::Otwarte {
            self.odpowiedzi = Default::default();
            self.poprawna_odp = None;
        }
    }

    /// Changing the subject invalidates the topic choice; reset it to the
    /// first topic of the new subject.
    pub fn set_przedmiot(&mut self, przedmiot: String) {
        self.dzial = catalog::dzialy_for(&przedmiot)
            .first()
            .map(|d| d.to_string())
            .unwrap_or_default();
        self.przedmiot = przedmiot;
    }

    /// Year and task number only apply to tasks taken from an exam sheet.
    pub fn requires_sheet_origin(&self) -> bool {
        self.rodzaj_arkusza != RODZAJ_ARKUSZA_OUT
    }

    /// Builds the task row this form would submit.
    pub fn to_task(&self) -> Task {
        let parse = |raw: &str| raw.trim().parse::<u32>().unwrap_or(0);
        let answer = |idx: usize| {
            let value = self.odpowiedzi[idx].trim();
            (!value.is_empty()).then(|| value.to_string())
        };
        Task {
            id: 0,
            przedmiot: self.przedmiot.clone(),
            zakres: self.zakres.clone(),
            dzial: self.dzial.clone(),
            rodzaj_arkusza: self.rodzaj_arkusza.clone(),
            rok_arkusza: parse(&self.rok_arkusza),
            numer_zadania: parse(&self.numer_zadania),
            typ_zadania: self.typ_zadania,
            tresc: self.tresc.clone(),
            odp_a: answer(0),
            odp_b: answer(1),
            odp_c: answer(2),
            odp_d: answer(3),
            poprawna_odp: self.poprawna_odp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_answers() -> TaskFormComponent {
        let mut form = TaskFormComponent::new();
        form.odpowiedzi = [
            "2".to_string(),
            "4".to_string(),
            "6".to_string(),
            "8".to_string(),
        ];
        form.poprawna_odp = Some(AnswerKey::C);
        form
    }

    #[test]
    fn answers_visible_for_closed_tasks() {
        let mut form = TaskFormComponent::new();
        assert!(form.answers_visible());
        form.set_typ_zadania(TaskType::Otwarte);
        assert!(!form.answers_visible());
    }

    #[test]
    fn switching_to_open_clears_answers() {
        let mut form = form_with_answers();
        form.set_typ_zadania(TaskType::Otwarte);
        assert!(form.odpowiedzi.iter().all(String::is_empty));
        assert_eq!(form.poprawna_odp, None);
    }

    #[test]
    fn switching_to_closed_leaves_answers_untouched() {
        let mut form = form_with_answers();
        form.set_typ_zadania(TaskType::Zamkniete);
        assert_eq!(form.odpowiedzi[0], "2");
        assert_eq!(form.poprawna_odp, Some(AnswerKey::C));
    }

    #[test]
    fn clearing_is_not_undone_by_switching_back() {
        // zamknięte (answer "42") -> otwarte -> zamknięte: the section is
        // visible again but the answer stays empty.
        let mut form = TaskFormComponent::new();
        form.odpowiedzi[0] = "42".to_string();
        form.set_typ_zadania(TaskType::Otwarte);
        form.set_typ_zadania(TaskType::Zamkniete);
        assert!(form.answers_visible());
        assert_eq!(form.odpowiedzi[0], "");
    }

    #[test]
    fn set_typ_zadania_is_idempotent() {
        let mut form = form_with_answers();
        form.set_typ_zadania(TaskType::Otwarte);
        let after_once = (form.odpowiedzi.clone(), form.answers_visible());
        form.set_typ_zadania(TaskType::Otwarte);
        assert_eq!((form.odpowiedzi.clone(), form.answers_visible()), after_once);
    }

    #[test]
    fn subject_change_resets_topic() {
        let mut form = TaskFormComponent::new();
        form.set_przedmiot("angielski".to_string());
        assert_eq!(form.dzial, "Reading");
    }

    #[test]
    fn to_task_parses_numeric_fields() {
        let mut form = form_with_answers();
        form.rok_arkusza = "2024".to_string();
        form.numer_zadania = " 9 ".to_string();
        let task = form.to_task();
        assert_eq!(task.rok_arkusza, 2024);
        assert_eq!(task.numer_zadania, 9);
        assert_eq!(task.odp_c.as_deref(), Some("6"));
    }

    #[test]
    fn to_task_drops_blank_answers() {
        let mut form = TaskFormComponent::new();
        form.odpowiedzi[1] = "  ".to_string();
        let task = form.to_task();
        assert_eq!(task.odp_a, None);
        assert_eq!(task.odp_b, None);
    }
}
