//! Grouping of assigned tasks into the subject → scope → topic tree shown
//! by the tree view. Groups keep first-seen order, matching the server page
//! this replaces.

use common::model::task::AssignedTask;

pub struct SubjectGroup<'a> {
    pub przedmiot: &'a str,
    pub zakresy: Vec<ScopeGroup<'a>>,
}

pub struct ScopeGroup<'a> {
    pub zakres: &'a str,
    pub dzialy: Vec<TopicGroup<'a>>,
}

pub struct TopicGroup<'a> {
    pub dzial: &'a str,
    pub zadania: Vec<&'a AssignedTask>,
}

/// Key of a tree node, unique across all levels of the tree.
pub fn node_key(parts: &[&str]) -> String {
    parts.join("/")
}

pub fn group_tasks(tasks: &[AssignedTask]) -> Vec<SubjectGroup<'_>> {
    let mut subjects: Vec<SubjectGroup<'_>> = Vec::new();

    for assigned in tasks {
        let task = &assigned.zadanie;

        let si = match subjects.iter().position(|s| s.przedmiot == task.przedmiot) {
            Some(i) => i,
            None => {
                subjects.push(SubjectGroup {
                    przedmiot: &task.przedmiot,
                    zakresy: Vec::new(),
                });
                subjects.len() - 1
            }
        };
        let subject = &mut subjects[si];

        let zi = match subject.zakresy.iter().position(|z| z.zakres == task.zakres) {
            Some(i) => i,
            None => {
                subject.zakresy.push(ScopeGroup {
                    zakres: &task.zakres,
                    dzialy: Vec::new(),
                });
                subject.zakresy.len() - 1
            }
        };
        let scope = &mut subject.zakresy[zi];

        let di = match scope.dzialy.iter().position(|d| d.dzial == task.dzial) {
            Some(i) => i,
            None => {
                scope.dzialy.push(TopicGroup {
                    dzial: &task.dzial,
                    zadania: Vec::new(),
                });
                scope.dzialy.len() - 1
            }
        };
        scope.dzialy[di].zadania.push(assigned);
    }

    subjects
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::task::{Task, TaskStatus, TaskType};

    fn assigned(id: u32, przedmiot: &str, zakres: &str, dzial: &str) -> AssignedTask {
        AssignedTask {
            zadanie: Task {
                id,
                przedmiot: przedmiot.to_string(),
                zakres: zakres.to_string(),
                dzial: dzial.to_string(),
                rodzaj_arkusza: "matura".to_string(),
                rok_arkusza: 2024,
                numer_zadania: id,
                typ_zadania: TaskType::Zamkniete,
                tresc: String::new(),
                odp_a: None,
                odp_b: None,
                odp_c: None,
                odp_d: None,
                poprawna_odp: None,
            },
            status: TaskStatus::Nowe,
        }
    }

    #[test]
    fn groups_by_subject_scope_and_topic() {
        let tasks = vec![
            assigned(1, "matematyka", "podstawa", "Funkcje"),
            assigned(2, "matematyka", "podstawa", "Funkcje"),
            assigned(3, "matematyka", "rozszerzenie", "Ciągi"),
            assigned(4, "polski", "podstawa", "Epoki literackie"),
        ];

        let groups = group_tasks(&tasks);
        assert_eq!(groups.len(), 2);

        let math = &groups[0];
        assert_eq!(math.przedmiot, "matematyka");
        assert_eq!(math.zakresy.len(), 2);
        assert_eq!(math.zakresy[0].dzialy[0].zadania.len(), 2);
        assert_eq!(math.zakresy[1].dzialy[0].dzial, "Ciągi");

        assert_eq!(groups[1].przedmiot, "polski");
    }

    #[test]
    fn keeps_first_seen_order() {
        let tasks = vec![
            assigned(1, "polski", "podstawa", "Gramatyka i język"),
            assigned(2, "matematyka", "podstawa", "Funkcje"),
            assigned(3, "polski", "rozszerzenie", "Epoki literackie"),
        ];

        let groups = group_tasks(&tasks);
        assert_eq!(groups[0].przedmiot, "polski");
        assert_eq!(groups[1].przedmiot, "matematyka");
        assert_eq!(groups[0].zakresy[0].zakres, "podstawa");
        assert_eq!(groups[0].zakresy[1].zakres, "rozszerzenie");
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_tasks(&[]).is_empty());
    }

    #[test]
    fn node_keys_are_level_unique() {
        assert_eq!(node_key(&["matematyka"]), "matematyka");
        assert_eq!(
            node_key(&["matematyka", "podstawa", "Funkcje"]),
            "matematyka/podstawa/Funkcje"
        );
    }
}
