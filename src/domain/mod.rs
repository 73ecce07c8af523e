// Domain layer: validation port and observable interaction state.

pub mod ports;
pub mod state;

pub use ports::{GrantedSession, GuidValidator, ValidateGuidError};
pub use state::InteractionState;
