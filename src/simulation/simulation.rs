/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::info;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::BuildingConfig;
use crate::dispatcher;
use crate::elevator::Elevator;
use crate::shared::{Request, RequestError, SummaryReport, TickSnapshot};

/**
 * Simulation clock and orchestrator.
 *
 * Owns the fleet and the pending request list, and drives one tick at a
 * time: advance the clock, run the dispatcher over all pending requests,
 * then step every elevator. Each tick is atomic from the caller's view;
 * dispatch fully completes before any car moves.
 *
 * # Fields
 * - `n_floors`:          Height of the building; floors are `0..n_floors`.
 * - `fleet`:             The elevators, fixed for the run, all starting at 0.
 * - `pending`:           Requests not yet assigned to a car.
 * - `time`:              Current tick number, starting at 0.
 * - `requests_assigned`: Requests committed to a car so far.
 *
 */
pub struct Simulation {
    n_floors: u8,
    fleet: Vec<Elevator>,
    pending: Vec<Request>,
    time: u32,
    requests_assigned: u32,
}

impl Simulation {
    pub fn new(config: &BuildingConfig) -> Simulation {
        Simulation {
            n_floors: config.n_floors,
            fleet: (0..config.n_elevators)
                .map(|id| Elevator::new(id as usize, 0))
                .collect(),
            pending: Vec::new(),
            time: 0,
            requests_assigned: 0,
        }
    }

    pub fn n_floors(&self) -> u8 {
        self.n_floors
    }

    pub fn current_time(&self) -> u32 {
        self.time
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Submits a pickup/dropoff request, stamped with the current time.
    /// Rejected requests leave the simulation untouched.
    pub fn add_request(&mut self, from_floor: u8, to_floor: u8) -> Result<(), RequestError> {
        for floor in [from_floor, to_floor] {
            if floor >= self.n_floors {
                return Err(RequestError::InvalidFloor {
                    floor,
                    n_floors: self.n_floors,
                });
            }
        }
        if from_floor == to_floor {
            return Err(RequestError::TrivialRequest { floor: from_floor });
        }

        self.pending.push(Request::new(from_floor, to_floor, self.time));
        info!(
            "request from floor {} to floor {} accepted at t={}",
            from_floor, to_floor, self.time
        );
        Ok(())
    }

    /// Advances the whole simulation by one tick and returns the resulting
    /// snapshot for the console and the trace writer.
    pub fn step(&mut self) -> TickSnapshot {
        self.time += 1;

        self.requests_assigned += dispatcher::assign_requests(&mut self.fleet, &mut self.pending);

        // Fleet index order; the cars do not interact, so the order is not
        // observable.
        for elevator in self.fleet.iter_mut() {
            elevator.step();
        }

        self.status()
    }

    /// Current state without advancing time.
    pub fn status(&self) -> TickSnapshot {
        TickSnapshot {
            time: self.time,
            elevators: self.fleet.iter().map(Elevator::snapshot).collect(),
            pending_requests: self.pending.len(),
        }
    }

    pub fn summary(&self) -> SummaryReport {
        SummaryReport {
            total_ticks: self.time,
            requests_assigned: self.requests_assigned,
            stops_per_elevator: self
                .fleet
                .iter()
                .map(|e| (e.id(), e.stops_served()))
                .collect(),
        }
    }
}
