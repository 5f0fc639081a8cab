//! The task (`zadanie`) model shared by the editor form and the browser.
//!
//! Field names and sentinel strings match the server rows this frontend was
//! written against: `typ_zadania` is `"zamkniete"` or `"otwarte"`, the
//! `"out"` sheet kind marks tasks that do not come from an exam sheet, and a
//! closed task must carry all four answers plus the correct one.

use serde::{Deserialize, Serialize};

use crate::model::catalog;

/// Sheet kind for tasks created outside an exam sheet; such tasks carry no
/// year or task number.
pub const RODZAJ_ARKUSZA_OUT: &str = "out";

/// Question variant. Only the open variant hides the answers section; any
/// other select value behaves as a closed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Zamkniete,
    Otwarte,
}

impl TaskType {
    /// Maps a raw select value. `"otwarte"` is the sentinel; everything else
    /// is treated as a closed task, like the page script it replaces.
    pub fn from_select_value(value: &str) -> Self {
        if value == "otwarte" {
            TaskType::Otwarte
        } else {
            TaskType::Zamkniete
        }
    }

    pub fn as_select_value(&self) -> &'static str {
        match self {
            TaskType::Zamkniete => "zamkniete",
            TaskType::Otwarte => "otwarte",
        }
    }
}

/// Correct-answer key of a closed task (`poprawna_odp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerKey {
    A,
    B,
    C,
    D,
}

impl AnswerKey {
    pub const ALL: [AnswerKey; 4] = [AnswerKey::A, AnswerKey::B, AnswerKey::C, AnswerKey::D];

    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "A" => Some(AnswerKey::A),
            "B" => Some(AnswerKey::B),
            "C" => Some(AnswerKey::C),
            "D" => Some(AnswerKey::D),
            _ => None,
        }
    }

    pub fn letter(&self) -> &'static str {
        match self {
            AnswerKey::A => "A",
            AnswerKey::B => "B",
            AnswerKey::C => "C",
            AnswerKey::D => "D",
        }
    }
}

/// Status of a task assigned to a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "nowe")]
    Nowe,
    #[serde(rename = "zrobione")]
    Zrobione,
    #[serde(rename = "błędne")]
    Bledne,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Nowe => "nowe",
            TaskStatus::Zrobione => "zrobione",
            TaskStatus::Bledne => "błędne",
        }
    }
}

/// A single task row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub przedmiot: String,
    pub zakres: String,
    pub dzial: String,
    pub rodzaj_arkusza: String,
    pub rok_arkusza: u32,
    pub numer_zadania: u32,
    pub typ_zadania: TaskType,
    pub tresc: String,
    pub odp_a: Option<String>,
    pub odp_b: Option<String>,
    pub odp_c: Option<String>,
    pub odp_d: Option<String>,
    pub poprawna_odp: Option<AnswerKey>,
}

impl Task {
    /// Checks the same rules the server applies before accepting a task.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if !catalog::is_known_przedmiot(&self.przedmiot) {
            return Err(TaskValidationError::NiepoprawnyPrzedmiot);
        }
        if !catalog::is_known_zakres(&self.zakres) {
            return Err(TaskValidationError::NiepoprawnyZakres);
        }
        if !catalog::dzialy_for(&self.przedmiot).contains(&self.dzial.as_str()) {
            return Err(TaskValidationError::NiepoprawnyDzial);
        }
        if self.rodzaj_arkusza != RODZAJ_ARKUSZA_OUT
            && (self.rok_arkusza == 0 || self.numer_zadania == 0)
        {
            return Err(TaskValidationError::BrakRokuLubNumeru);
        }
        if self.typ_zadania == TaskType::Zamkniete {
            let answers = [&self.odp_a, &self.odp_b, &self.odp_c, &self.odp_d];
            let complete = answers
                .iter()
                .all(|a| a.as_deref().is_some_and(|s| !s.trim().is_empty()));
            if !complete || self.poprawna_odp.is_none() {
                return Err(TaskValidationError::NiekompletneOdpowiedzi);
            }
        }
        Ok(())
    }
}

/// A task together with its per-student assignment status, as shown on the
/// student task page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedTask {
    pub zadanie: Task,
    pub status: TaskStatus,
}

/// Validation failures, worded the way the server reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    NiepoprawnyPrzedmiot,
    NiepoprawnyZakres,
    NiepoprawnyDzial,
    BrakRokuLubNumeru,
    NiekompletneOdpowiedzi,
}

impl std::fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            TaskValidationError::NiepoprawnyPrzedmiot => "Niepoprawny przedmiot",
            TaskValidationError::NiepoprawnyZakres => "Niepoprawny zakres",
            TaskValidationError::NiepoprawnyDzial => "Niepoprawny dział",
            TaskValidationError::BrakRokuLubNumeru => {
                "Rok i numer zadania są wymagane dla arkuszy maturalnych"
            }
            TaskValidationError::NiekompletneOdpowiedzi => {
                "Zadanie zamknięte wymaga odpowiedzi A-D i poprawnej odpowiedzi."
            }
        };
        f.write_str(msg)
    }
}

impl std::error::Error for TaskValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed_task() -> Task {
        Task {
            id: 1,
            przedmiot: "matematyka".to_string(),
            zakres: "podstawa".to_string(),
            dzial: "Funkcja kwadratowa".to_string(),
            rodzaj_arkusza: "matura".to_string(),
            rok_arkusza: 2023,
            numer_zadania: 7,
            typ_zadania: TaskType::Zamkniete,
            tresc: "Wyznacz miejsca zerowe.".to_string(),
            odp_a: Some("x=1".to_string()),
            odp_b: Some("x=2".to_string()),
            odp_c: Some("x=3".to_string()),
            odp_d: Some("x=4".to_string()),
            poprawna_odp: Some(AnswerKey::B),
        }
    }

    #[test]
    fn select_value_sentinel() {
        assert_eq!(TaskType::from_select_value("otwarte"), TaskType::Otwarte);
        assert_eq!(
            TaskType::from_select_value("zamkniete"),
            TaskType::Zamkniete
        );
        // Anything that is not the sentinel behaves as a closed task.
        assert_eq!(TaskType::from_select_value(""), TaskType::Zamkniete);
        assert_eq!(
            TaskType::from_select_value("cokolwiek"),
            TaskType::Zamkniete
        );
    }

    #[test]
    fn valid_closed_task_passes() {
        assert_eq!(closed_task().validate(), Ok(()));
    }

    #[test]
    fn closed_task_requires_all_answers() {
        let mut task = closed_task();
        task.odp_c = None;
        assert_eq!(
            task.validate(),
            Err(TaskValidationError::NiekompletneOdpowiedzi)
        );

        let mut task = closed_task();
        task.odp_b = Some("   ".to_string());
        assert_eq!(
            task.validate(),
            Err(TaskValidationError::NiekompletneOdpowiedzi)
        );

        let mut task = closed_task();
        task.poprawna_odp = None;
        assert_eq!(
            task.validate(),
            Err(TaskValidationError::NiekompletneOdpowiedzi)
        );
    }

    #[test]
    fn open_task_needs_no_answers() {
        let mut task = closed_task();
        task.typ_zadania = TaskType::Otwarte;
        task.odp_a = None;
        task.odp_b = None;
        task.odp_c = None;
        task.odp_d = None;
        task.poprawna_odp = None;
        assert_eq!(task.validate(), Ok(()));
    }

    #[test]
    fn sheet_tasks_require_year_and_number() {
        let mut task = closed_task();
        task.rok_arkusza = 0;
        assert_eq!(task.validate(), Err(TaskValidationError::BrakRokuLubNumeru));

        // Tasks outside an exam sheet are exempt.
        let mut task = closed_task();
        task.rodzaj_arkusza = RODZAJ_ARKUSZA_OUT.to_string();
        task.rok_arkusza = 0;
        task.numer_zadania = 0;
        assert_eq!(task.validate(), Ok(()));
    }

    #[test]
    fn catalog_membership_is_checked() {
        let mut task = closed_task();
        task.przedmiot = "historia".to_string();
        assert_eq!(
            task.validate(),
            Err(TaskValidationError::NiepoprawnyPrzedmiot)
        );

        let mut task = closed_task();
        task.dzial = "Reading".to_string();
        assert_eq!(task.validate(), Err(TaskValidationError::NiepoprawnyDzial));
    }

    #[test]
    fn task_type_serde_uses_select_values() {
        let json = serde_json::to_string(&TaskType::Otwarte).unwrap();
        assert_eq!(json, "\"otwarte\"");
        let back: TaskType = serde_json::from_str("\"zamkniete\"").unwrap();
        assert_eq!(back, TaskType::Zamkniete);
    }
}
