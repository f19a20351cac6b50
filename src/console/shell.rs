/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::warn;
use std::io::{self, BufRead, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::console::render;
use crate::simulation::Simulation;
use crate::trace::TraceWriter;

const AUTO_STEPS: u32 = 5;

/**
 * Interactive console shell.
 *
 * Owns the simulation and the trace writer for the duration of the run and
 * translates stdin commands into core operations: submit a request, step
 * once, auto-run, or quit. All rendering goes through the snapshot-based
 * functions in `render`; the shell itself holds no simulation logic.
 */
pub struct Shell {
    sim: Simulation,
    trace: TraceWriter,
}

impl Shell {
    pub fn new(sim: Simulation, trace: TraceWriter) -> Shell {
        Shell { sim, trace }
    }

    /// Interactive command loop. Returns when the user quits or stdin ends.
    pub fn run(mut self) -> io::Result<()> {
        println!("===== Elevator Simulation =====");

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!(
                "{}",
                render::status_report(&self.sim.status(), self.sim.n_floors())
            );
            print_menu()?;

            let line = match read_line(&mut lines)? {
                Some(line) => line,
                None => break,
            };

            match line.trim().to_lowercase().as_str() {
                "r" => self.handle_request(&mut lines)?,
                "s" => self.tick()?,
                "a" => {
                    println!("Auto-running {} steps...", AUTO_STEPS);
                    self.run_steps(AUTO_STEPS)?;
                }
                "q" => break,
                other => {
                    println!("Invalid command.");
                    warn!("unknown command {:?}", other);
                }
            }
        }

        self.finish()
    }

    /// Non-interactive mode: run `n` ticks, print the final status and the
    /// summary, close the trace.
    pub fn run_auto(mut self, n: u32) -> io::Result<()> {
        self.run_steps(n)?;
        print!(
            "{}",
            render::status_report(&self.sim.status(), self.sim.n_floors())
        );
        self.finish()
    }

    fn handle_request(
        &mut self,
        lines: &mut impl Iterator<Item = io::Result<String>>,
    ) -> io::Result<()> {
        let from_floor = match prompt_floor(lines, "Enter current floor: ")? {
            Some(floor) => floor,
            None => return Ok(()),
        };
        let to_floor = match prompt_floor(lines, "Enter destination floor: ")? {
            Some(floor) => floor,
            None => return Ok(()),
        };

        match self.sim.add_request(from_floor, to_floor) {
            Ok(()) => println!(
                "Request added from floor {} to floor {}.",
                from_floor, to_floor
            ),
            Err(e) => {
                println!("Request rejected: {}.", e);
                warn!("request ({}, {}) rejected: {}", from_floor, to_floor, e);
            }
        }
        Ok(())
    }

    fn tick(&mut self) -> io::Result<()> {
        let snapshot = self.sim.step();
        self.trace.record_tick(&snapshot)
    }

    fn run_steps(&mut self, n: u32) -> io::Result<()> {
        for _ in 0..n {
            self.tick()?;
        }
        Ok(())
    }

    fn finish(self) -> io::Result<()> {
        print!("{}", render::summary_report(&self.sim.summary()));
        println!("Log saved to {}.", self.trace.path().display());
        self.trace.finish(self.sim.current_time())?;
        println!("Goodbye!");
        Ok(())
    }
}

fn print_menu() -> io::Result<()> {
    println!("\nOptions:");
    println!("  r - new request (simulate a person calling an elevator)");
    println!("  s - advance simulation by 1 time step");
    println!("  a - auto-run {} steps", AUTO_STEPS);
    println!("  q - quit simulation");
    print!("Enter command: ");
    io::stdout().flush()
}

/// Reads one line; `None` means stdin is exhausted.
fn read_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

/// Prompts for a floor number. Non-numeric input aborts the request with a
/// message and no mutation.
fn prompt_floor(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> io::Result<Option<u8>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let line = match read_line(lines)? {
        Some(line) => line,
        None => return Ok(None),
    };

    match line.trim().parse::<u8>() {
        Ok(floor) => Ok(Some(floor)),
        Err(_) => {
            println!("Invalid input: {:?} is not a floor number.", line.trim());
            Ok(None)
        }
    }
}
