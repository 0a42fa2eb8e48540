pub mod events;
pub mod submission_coordinator;

pub use events::{FlowOutcome, UiEvent};
pub use submission_coordinator::SubmissionCoordinator;
