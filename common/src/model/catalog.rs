//! Static subject catalog used by the task form selects and the task
//! browser grouping. Subjects, scopes and per-subject topic lists are fixed
//! at compile time; there is no server to fetch them from.

/// Exam scope values accepted by the task form (`zakres`).
pub const ZAKRESY: [&str; 2] = ["podstawa", "rozszerzenie"];

/// All subjects with at least one topic list.
pub const PRZEDMIOTY: [&str; 3] = ["matematyka", "polski", "angielski"];

const DZIALY_MATEMATYKA: [&str; 14] = [
    "Liczby rzeczywiste i wyrażenia algebraiczne",
    "Zbiory, wartość bezwzględna i nierówności",
    "Funkcje",
    "Funkcja liniowa",
    "Funkcja kwadratowa",
    "Wielomiany i wyrażenia wymierne",
    "Funkcja wykładnicza i funkcja logarytmiczna",
    "Trygonometria",
    "Ciągi",
    "Planimetria",
    "Geometria analityczna",
    "Stereometria",
    "Rachunek prawdopodobieństwa",
    "Statystyka",
];

const DZIALY_POLSKI: [&str; 6] = [
    "Czytanie ze zrozumieniem",
    "Lektury obowiązkowe",
    "Środki stylistyczne",
    "Epoki literackie",
    "Wypowiedź argumentacyjna",
    "Gramatyka i język",
];

const DZIALY_ANGIELSKI: [&str; 7] = [
    "Reading",
    "Listening",
    "Use of English",
    "Writing",
    "Grammar",
    "Vocabulary",
    "Picture description",
];

/// Topic list for a subject. Unknown subjects have no topics.
pub fn dzialy_for(przedmiot: &str) -> &'static [&'static str] {
    match przedmiot {
        "matematyka" => &DZIALY_MATEMATYKA,
        "polski" => &DZIALY_POLSKI,
        "angielski" => &DZIALY_ANGIELSKI,
        _ => &[],
    }
}

pub fn is_known_przedmiot(przedmiot: &str) -> bool {
    PRZEDMIOTY.contains(&przedmiot)
}

pub fn is_known_zakres(zakres: &str) -> bool {
    ZAKRESY.contains(&zakres)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subject_has_topics() {
        for przedmiot in PRZEDMIOTY {
            assert!(
                !dzialy_for(przedmiot).is_empty(),
                "no topics for {przedmiot}"
            );
        }
    }

    #[test]
    fn unknown_subject_has_no_topics() {
        assert!(dzialy_for("historia").is_empty());
        assert!(!is_known_przedmiot("historia"));
    }

    #[test]
    fn scopes_are_fixed() {
        assert!(is_known_zakres("podstawa"));
        assert!(is_known_zakres("rozszerzenie"));
        assert!(!is_known_zakres("matura"));
    }
}
