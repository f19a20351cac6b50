/***************************************/
/*          Standard library           */
/***************************************/
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{ElevatorSnapshot, TickSnapshot};

/**
 * Append-only trace file.
 *
 * One line per elevator per tick, recreated at the start of every run, with
 * a header line up front and a trailer carrying the total tick count at
 * shutdown. The writer consumes the per-tick snapshots the core emits; it
 * never reaches into the simulation itself.
 */
pub struct TraceWriter {
    out: BufWriter<File>,
    path: PathBuf,
}

impl TraceWriter {
    /// Creates (truncating) the trace file and writes the header.
    pub fn create(path: &Path) -> io::Result<TraceWriter> {
        let mut out = BufWriter::new(File::create(path)?);
        writeln!(out, "Elevator Simulation Log")?;
        Ok(TraceWriter {
            out,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one line per elevator for the given tick. Flushed per tick so
    /// an interrupted run still has its lines on disk.
    pub fn record_tick(&mut self, snapshot: &TickSnapshot) -> io::Result<()> {
        for elevator in &snapshot.elevators {
            writeln!(self.out, "{}", format_line(snapshot.time, elevator))?;
        }
        self.out.flush()
    }

    /// Writes the trailer line and flushes. Consumes the writer; the trace
    /// is complete after this.
    pub fn finish(mut self, total_ticks: u32) -> io::Result<()> {
        writeln!(self.out, "Simulation ended. Total time steps: {}", total_ticks)?;
        self.out.flush()
    }
}

pub fn format_line(time: u32, elevator: &ElevatorSnapshot) -> String {
    format!(
        "t={} Elevator {} Floor={} Dir={} Door={} QueueSize={}",
        time,
        elevator.id,
        elevator.floor,
        elevator.direction,
        if elevator.door_open { "Open" } else { "Closed" },
        elevator.queue_len
    )
}
