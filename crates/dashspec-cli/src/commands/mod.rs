pub mod migrate;
pub mod utils;
pub mod validate;
pub mod versions;

use std::process::ExitCode;

/// Whether a command accepted its input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Accepted,
    /// The document was rejected and its fault printed.
    Rejected,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Accepted => ExitCode::SUCCESS,
            Status::Rejected => ExitCode::FAILURE,
        }
    }
}
