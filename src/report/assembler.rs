//! Matrix assembly.

use crate::allocation::SlotAssignment;
use crate::models::{MatrixRow, ScheduleMatrix, Station, TimeSlot};

/// Joins multiple names in a Break or Training cell.
pub const LIST_SEPARATOR: &str = ", ";

/// Builds the station-by-time matrix.
///
/// `assignments[i]` must belong to `slots[i]`. Work-station cells hold the
/// single occupant or nothing; Break and Training cells list every name,
/// sorted and deduplicated.
pub fn assemble(slots: &[TimeSlot], assignments: &[SlotAssignment]) -> ScheduleMatrix {
    let columns = slots.iter().map(TimeSlot::label).collect();

    let rows = Station::DISPLAY_ORDER
        .into_iter()
        .map(|station| MatrixRow {
            station,
            cells: assignments.iter().map(|a| cell_for(station, a)).collect(),
        })
        .collect();

    ScheduleMatrix { columns, rows }
}

fn cell_for(station: Station, assignment: &SlotAssignment) -> String {
    match station {
        Station::Break => join_names(&assignment.on_break),
        Station::Training => join_names(&assignment.training),
        work => assignment.work.get(&work).cloned().unwrap_or_default(),
    }
}

fn join_names(names: &[String]) -> String {
    let mut names: Vec<&str> = names.iter().map(String::as_str).collect();
    names.sort_unstable();
    names.dedup();
    names.join(LIST_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn slot(index: usize, h: u32, m: u32) -> TimeSlot {
        TimeSlot {
            index,
            time: NaiveTime::from_hms_opt(h, m, 0).unwrap(),
        }
    }

    #[test]
    fn test_matrix_shape_and_labels() {
        let slots = vec![slot(1, 9, 0), slot(2, 9, 30)];
        let assignments = vec![SlotAssignment::default(), SlotAssignment::default()];
        let matrix = assemble(&slots, &assignments);

        assert_eq!(matrix.columns, vec!["9:00 AM", "9:30 AM"]);
        assert_eq!(matrix.rows.len(), 10);
        assert!(matrix.rows.iter().all(|r| r.cells.len() == 2));
        assert!(matrix.rows.iter().all(|r| r.cells.iter().all(String::is_empty)));
    }

    #[test]
    fn test_work_and_list_cells() {
        let mut assignment = SlotAssignment::default();
        assignment.work.insert(Station::Expo, "Ana B.".to_string());
        assignment.on_break = vec!["Cal D.".to_string(), "Ben C.".to_string()];
        assignment.training = vec!["Dee E.".to_string(), "Dee E.".to_string()];

        let matrix = assemble(&[slot(1, 13, 0)], &[assignment]);
        assert_eq!(matrix.cell(Station::Expo, "1:00 PM"), Some("Ana B."));
        assert_eq!(matrix.cell(Station::Handout, "1:00 PM"), Some(""));
        assert_eq!(matrix.cell(Station::Break, "1:00 PM"), Some("Ben C., Cal D."));
        assert_eq!(matrix.cell(Station::Training, "1:00 PM"), Some("Dee E."));
    }

    #[test]
    fn test_rows_follow_display_order() {
        let matrix = assemble(&[slot(1, 9, 0)], &[SlotAssignment::default()]);
        let stations: Vec<Station> = matrix.rows.iter().map(|r| r.station).collect();
        assert_eq!(stations, Station::DISPLAY_ORDER.to_vec());
    }
}
