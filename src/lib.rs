pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::InteractionState;
pub use frameworks::bootstrap::build_interaction;
pub use interface_adapters::clients::app1::App1Client;
pub use use_cases::{Interaction, ProcessingDelay, ValidateGuidUseCase};
