pub mod dispatcher;

pub use dispatcher::assign_requests;
