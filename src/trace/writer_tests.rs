/*
 * Unit tests for trace module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_format_line
 * - test_trace_file_roundtrip
 *
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod writer_tests {
    use crate::shared::Direction::{Idle, Up};
    use crate::shared::{ElevatorSnapshot, TickSnapshot};
    use crate::trace::writer::{format_line, TraceWriter};
    use std::fs;

    fn snapshot_at(time: u32) -> TickSnapshot {
        TickSnapshot {
            time,
            elevators: vec![
                ElevatorSnapshot {
                    id: 0,
                    floor: 3,
                    direction: Up,
                    door_open: true,
                    queue_len: 2,
                    stops_served: 1,
                },
                ElevatorSnapshot {
                    id: 1,
                    floor: 0,
                    direction: Idle,
                    door_open: false,
                    queue_len: 0,
                    stops_served: 0,
                },
            ],
            pending_requests: 0,
        }
    }

    #[test]
    fn test_format_line() {
        // Arrange
        let snapshot = snapshot_at(7);

        // Assert
        assert_eq!(
            format_line(7, &snapshot.elevators[0]),
            "t=7 Elevator 0 Floor=3 Dir=Up Door=Open QueueSize=2"
        );
        assert_eq!(
            format_line(7, &snapshot.elevators[1]),
            "t=7 Elevator 1 Floor=0 Dir=Idle Door=Closed QueueSize=0"
        );
    }

    #[test]
    fn test_trace_file_roundtrip() {
        // Arrange
        let path = std::env::temp_dir().join(format!("trace_test_{}.log", std::process::id()));
        let mut writer = TraceWriter::create(&path).unwrap();

        // Act
        writer.record_tick(&snapshot_at(1)).unwrap();
        writer.record_tick(&snapshot_at(2)).unwrap();
        writer.finish(2).unwrap();

        // Assert
        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Elevator Simulation Log");
        assert_eq!(lines[1], "t=1 Elevator 0 Floor=3 Dir=Up Door=Open QueueSize=2");
        assert_eq!(lines[4], "t=2 Elevator 1 Floor=0 Dir=Idle Door=Closed QueueSize=0");
        assert_eq!(lines[5], "Simulation ended. Total time steps: 2");

        fs::remove_file(&path).unwrap();
    }
}
