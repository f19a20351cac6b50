pub mod writer;
pub mod writer_tests;

pub use writer::TraceWriter;
