/***************************************/
/*          Standard library           */
/***************************************/
use std::collections::VecDeque;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, ElevatorSnapshot};

/**
 * Per-car state machine.
 *
 * An `Elevator` owns its own motion state and an ordered queue of target
 * floors, and advances itself by exactly one simulated time unit per `step()`.
 * Targets are appended by the dispatcher and consumed front-first by the car.
 *
 * # Fields
 * - `id`:           Stable identity for the lifetime of the run.
 * - `floor`:        Current floor; changes by at most one per tick.
 * - `direction`:    Recomputed every tick from motion or queue emptiness.
 * - `door_open`:    True for exactly one tick after arriving at a target.
 * - `targets`:      FIFO queue of floors still to visit, in commit order.
 * - `stops_served`: Completed stops, counted at the door-close event.
 *
 */
pub struct Elevator {
    id: usize,
    floor: u8,
    direction: Direction,
    door_open: bool,
    targets: VecDeque<u8>,
    stops_served: u32,
}

impl Elevator {
    pub fn new(id: usize, start_floor: u8) -> Elevator {
        Elevator {
            id,
            floor: start_floor,
            direction: Direction::Idle,
            door_open: false,
            targets: VecDeque::new(),
            stops_served: 0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn floor(&self) -> u8 {
        self.floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_door_open(&self) -> bool {
        self.door_open
    }

    pub fn queue_len(&self) -> usize {
        self.targets.len()
    }

    pub fn stops_served(&self) -> u32 {
        self.stops_served
    }

    /// Appends a target floor, unless it duplicates the current queue tail.
    pub fn add_target(&mut self, floor: u8) {
        if self.targets.back() == Some(&floor) {
            return;
        }
        self.targets.push_back(floor);
    }

    /// An elevator is idle iff its queue is empty, its door is closed and its
    /// direction is `Idle`. These three facts stay consistent across ticks.
    pub fn is_idle(&self) -> bool {
        self.targets.is_empty() && !self.door_open && self.direction == Direction::Idle
    }

    pub fn distance_to(&self, floor: u8) -> u8 {
        self.floor.abs_diff(floor)
    }

    /// Advances the car by one time unit. Each tick performs at most one of:
    /// door-close with stop completion, idle settle, a one-floor move, or
    /// door-open on arrival. Arrival and departure are split across ticks.
    pub fn step(&mut self) {
        // Door open: close it and complete the stop.
        if self.door_open {
            self.door_open = false;
            self.stops_served += 1;

            if self.targets.front() == Some(&self.floor) {
                self.targets.pop_front();
            }
            if self.targets.is_empty() {
                self.direction = Direction::Idle;
            }
            return;
        }

        // Nothing to do: settle into idle.
        let target = match self.targets.front() {
            Some(&floor) => floor,
            None => {
                self.direction = Direction::Idle;
                return;
            }
        };

        // Move one floor toward the front target, or open the door on arrival.
        if self.floor < target {
            self.floor += 1;
            self.direction = Direction::Up;
        } else if self.floor > target {
            self.floor -= 1;
            self.direction = Direction::Down;
        } else {
            self.door_open = true;
        }
    }

    pub fn snapshot(&self) -> ElevatorSnapshot {
        ElevatorSnapshot {
            id: self.id,
            floor: self.floor,
            direction: self.direction,
            door_open: self.door_open,
            queue_len: self.targets.len(),
            stops_served: self.stops_served,
        }
    }

    #[cfg(test)]
    pub fn test_get_targets(&self) -> Vec<u8> {
        self.targets.iter().copied().collect()
    }
}
