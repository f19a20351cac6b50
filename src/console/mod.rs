pub mod render;
pub mod shell;

pub use shell::Shell;
