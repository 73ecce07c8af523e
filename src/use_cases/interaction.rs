use crate::domain::ports::GuidValidator;
use crate::domain::state::InteractionState;
use crate::use_cases::validate_guid::{ProcessingDelay, ValidateGuidUseCase};

// One page lifecycle: the initial arrival plus any number of same-page
// re-checks, sharing a retained guid and a running call counter. The
// rendering surface owns the triggers; this type owns the state they drive.
pub struct Interaction<V> {
    use_case: ValidateGuidUseCase<V>,
    state: InteractionState,
}

impl<V> Interaction<V>
where
    V: GuidValidator,
{
    pub fn new(validator: V, processing_delay: ProcessingDelay) -> Self {
        Self {
            use_case: ValidateGuidUseCase {
                validator,
                processing_delay,
            },
            state: InteractionState::default(),
        }
    }

    /// Initial arrival with the guid App1 forwarded.
    ///
    /// A non-empty guid is retained and validated immediately; an absent or
    /// empty one leaves an explanatory message and skips validation.
    pub async fn on_arrival(&mut self, auth_guid: Option<&str>) {
        match auth_guid.filter(|guid| !guid.is_empty()) {
            Some(guid) => {
                self.state.received_guid = guid.to_string();
                self.use_case.execute(&mut self.state).await;
            }
            None => {
                self.state.received_guid.clear();
                self.state.reset_outcome();
                self.state.content =
                    "No GUID received from App1. Please access App2 via App1.".to_string();
            }
        }
    }

    /// User-initiated re-check using the guid retained at arrival.
    pub async fn perform_action(&mut self) {
        self.use_case.execute(&mut self.state).await;
    }

    /// Read-only view for the rendering collaborator.
    pub fn state(&self) -> &InteractionState {
        &self.state
    }
}
