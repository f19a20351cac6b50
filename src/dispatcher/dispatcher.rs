/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Elevator;
use crate::shared::{Direction, Request};

/// Cost added when a busy car would have to reverse to reach the pickup.
const WRONG_WAY_PENALTY: u32 = 5;

/**
 * Assignment policy.
 *
 * The dispatcher holds no state of its own: each tick it is handed the fleet
 * and the pending request list, scores every elevator against every request,
 * and commits the best match by appending pickup and destination to the
 * winning car's queue. Assigned requests are removed from the pending list;
 * anything unassignable (only possible with an empty fleet) is retained for
 * the next tick.
 */

/// Runs one assignment pass. Returns the number of requests committed.
pub fn assign_requests(fleet: &mut Vec<Elevator>, pending: &mut Vec<Request>) -> u32 {
    let mut assigned = 0;
    let mut still_pending: Vec<Request> = Vec::new();

    for request in pending.drain(..) {
        let mut best: Option<(usize, u32)> = None;

        for (index, elevator) in fleet.iter().enumerate() {
            let score = score(elevator, &request);

            // Strict < keeps the first elevator reaching the minimum.
            match best {
                Some((_, best_score)) if score >= best_score => {}
                _ => best = Some((index, score)),
            }
        }

        match best {
            Some((index, score)) => {
                let chosen = &mut fleet[index];
                // Collect before delivering.
                chosen.add_target(request.from_floor);
                chosen.add_target(request.to_floor);
                assigned += 1;
                debug!(
                    "request ({} -> {}) assigned to elevator {} with score {}",
                    request.from_floor,
                    request.to_floor,
                    chosen.id(),
                    score
                );
            }
            None => still_pending.push(request),
        }
    }

    *pending = still_pending;
    assigned
}

/// Score for serving `request` with `elevator`; lower is better.
/// distance-to-pickup, plus a fixed penalty if a moving car would have to
/// reverse, plus the current queue length as a load-balancing bias.
pub fn score(elevator: &Elevator, request: &Request) -> u32 {
    let mut score = elevator.distance_to(request.from_floor) as u32;

    if !going_same_way(elevator, request.from_floor) {
        score += WRONG_WAY_PENALTY;
    }

    score += elevator.queue_len() as u32;
    score
}

/// An idle car is always compatible; a moving car is compatible when the
/// pickup lies on its side of travel (its own floor included).
fn going_same_way(elevator: &Elevator, pickup_floor: u8) -> bool {
    match elevator.direction() {
        Direction::Idle => true,
        Direction::Up => pickup_floor >= elevator.floor(),
        Direction::Down => pickup_floor <= elevator.floor(),
    }
}
