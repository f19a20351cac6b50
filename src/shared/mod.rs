pub mod macros;
pub mod structs;

pub use structs::Direction;
pub use structs::ElevatorSnapshot;
pub use structs::Request;
pub use structs::RequestError;
pub use structs::SummaryReport;
pub use structs::TickSnapshot;
