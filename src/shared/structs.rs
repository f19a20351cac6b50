/***************************************/
/*          Standard library           */
/***************************************/
use std::error::Error;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Idle,
    Up,
    Down,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match *self {
            Direction::Idle => "Idle",
            Direction::Up => "Up",
            Direction::Down => "Down",
        }
    }

    /// One-letter tag used by the building view.
    pub fn letter(&self) -> char {
        match *self {
            Direction::Idle => 'I',
            Direction::Up => 'U',
            Direction::Down => 'D',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A pickup/dropoff request. Immutable once created; the orchestrator
/// guarantees `from_floor != to_floor` before construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub from_floor: u8,
    pub to_floor: u8,
    pub time_requested: u32,
}

impl Request {
    pub fn new(from_floor: u8, to_floor: u8, time_requested: u32) -> Request {
        Request {
            from_floor,
            to_floor,
            time_requested,
        }
    }
}

/// Rejection reasons for a submitted request. Both are reported once to the
/// caller with no mutation of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    InvalidFloor { floor: u8, n_floors: u8 },
    TrivialRequest { floor: u8 },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RequestError::InvalidFloor { floor, n_floors } => write!(
                f,
                "invalid floor {}: floors must be between 0 and {}",
                floor,
                n_floors - 1
            ),
            RequestError::TrivialRequest { floor } => {
                write!(f, "you are already on floor {}", floor)
            }
        }
    }
}

impl Error for RequestError {}

/// Observable state of one elevator at the end of a tick. The core emits
/// these values; the console and the trace writer decide presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorSnapshot {
    pub id: usize,
    pub floor: u8,
    pub direction: Direction,
    pub door_open: bool,
    pub queue_len: usize,
    pub stops_served: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickSnapshot {
    pub time: u32,
    pub elevators: Vec<ElevatorSnapshot>,
    pub pending_requests: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryReport {
    pub total_ticks: u32,
    pub requests_assigned: u32,
    pub stops_per_elevator: Vec<(usize, u32)>,
}
