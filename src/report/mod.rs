pub mod names;
pub mod writer;

pub use names::read_usernames;
pub use writer::ReportWriter;
