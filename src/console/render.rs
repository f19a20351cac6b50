/***************************************/
/*          Standard library           */
/***************************************/
use std::fmt::Write;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{SummaryReport, TickSnapshot};

// Rendering is presentation-only: everything here reads a snapshot and
// returns text, with no reach into the simulation.

/// Vertical building view, highest floor first. Each elevator is tagged at
/// its current floor with id, direction letter and door state.
pub fn building_view(snapshot: &TickSnapshot, n_floors: u8) -> String {
    let mut view = String::from("Building view (top = highest floor)\n\n");

    for floor in (0..n_floors).rev() {
        let _ = write!(view, "Floor {} | ", floor);

        for elevator in &snapshot.elevators {
            if elevator.floor == floor {
                let door = if elevator.door_open { "Open" } else { "Closed" };
                let _ = write!(view, "[E{} {} {}]", elevator.id, elevator.direction.letter(), door);
            } else {
                view.push_str("[            ]");
            }
        }
        view.push('\n');
    }

    view.push_str("\nLegend: U=Up, D=Down, I=Idle, Door: Open/Closed\n");
    view
}

/// Full status block: time step header, building view, per-elevator detail
/// lines and the pending request count.
pub fn status_report(snapshot: &TickSnapshot, n_floors: u8) -> String {
    let mut report = format!("\n=== Time step: {} ===\n", snapshot.time);
    report.push_str(&building_view(snapshot, n_floors));

    report.push_str("\nElevator details:\n");
    for elevator in &snapshot.elevators {
        let _ = writeln!(
            report,
            "Elevator {} | Floor: {} | Dir: {} | Door: {} | Queue size: {}",
            elevator.id,
            elevator.floor,
            elevator.direction,
            if elevator.door_open { "Open" } else { "Closed" },
            elevator.queue_len
        );
    }

    let _ = writeln!(report, "Pending requests: {}", snapshot.pending_requests);
    report
}

pub fn summary_report(summary: &SummaryReport) -> String {
    let mut report = String::from("\n===== Simulation Summary =====\n");
    let _ = writeln!(report, "Total time steps: {}", summary.total_ticks);
    let _ = writeln!(
        report,
        "Total requests processed (assigned): {}",
        summary.requests_assigned
    );
    for (id, stops) in &summary.stops_per_elevator {
        let _ = writeln!(report, "Elevator {} served stops: {}", id, stops);
    }
    report
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod render_tests {
    use super::*;
    use crate::shared::Direction::{Idle, Up};
    use crate::shared::ElevatorSnapshot;

    fn snapshot() -> TickSnapshot {
        TickSnapshot {
            time: 3,
            elevators: vec![
                ElevatorSnapshot {
                    id: 0,
                    floor: 2,
                    direction: Up,
                    door_open: false,
                    queue_len: 1,
                    stops_served: 0,
                },
                ElevatorSnapshot {
                    id: 1,
                    floor: 0,
                    direction: Idle,
                    door_open: true,
                    queue_len: 0,
                    stops_served: 2,
                },
            ],
            pending_requests: 1,
        }
    }

    #[test]
    fn test_building_view_tags_elevator_floors() {
        // Act
        let view = building_view(&snapshot(), 4);

        // Assert: top floor first, cars tagged on their own floors only.
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines[2], "Floor 3 | [            ][            ]");
        assert_eq!(lines[3], "Floor 2 | [E0 U Closed][            ]");
        assert_eq!(lines[5], "Floor 0 | [            ][E1 I Open]");
    }

    #[test]
    fn test_status_report_includes_details_and_pending() {
        // Act
        let report = status_report(&snapshot(), 4);

        // Assert
        assert!(report.contains("=== Time step: 3 ==="));
        assert!(report.contains("Elevator 0 | Floor: 2 | Dir: Up | Door: Closed | Queue size: 1"));
        assert!(report.contains("Pending requests: 1"));
    }

    #[test]
    fn test_summary_report_lists_per_elevator_stops() {
        // Arrange
        let summary = SummaryReport {
            total_ticks: 12,
            requests_assigned: 3,
            stops_per_elevator: vec![(0, 4), (1, 2)],
        };

        // Act
        let report = summary_report(&summary);

        // Assert
        assert!(report.contains("Total time steps: 12"));
        assert!(report.contains("Total requests processed (assigned): 3"));
        assert!(report.contains("Elevator 1 served stops: 2"));
    }
}
