// Use cases layer: the validation workflow and its orchestration boundary.

pub mod interaction;
pub mod validate_guid;


pub use interaction::Interaction;
pub use validate_guid::{ProcessingDelay, ValidateGuidUseCase};
