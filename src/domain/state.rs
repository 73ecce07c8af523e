// Observable fields for one interaction: initial arrival plus any number of
// same-page re-checks. The rendering collaborator reads these; only the
// validation workflow writes them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionState {
    // Guid forwarded by App1, retained for the life of the interaction.
    pub received_guid: String,
    // True only while a validation attempt is in flight.
    pub loading: bool,
    // Attempts made against App1, successful or not.
    pub call_count: u32,
    // Human-readable narrative of the last attempt.
    pub status: String,
    // Placeholder text for the protected content area.
    pub content: String,
    // Session id granted by App1 on the last valid verdict.
    pub app1_session_id: String,
    // User name resolved by App1 on the last valid verdict.
    pub user_name: String,
}

impl InteractionState {
    /// Clears the previous attempt's outcome fields.
    ///
    /// The guid and the call counter are the only fields that survive across
    /// attempts within one interaction.
    pub fn reset_outcome(&mut self) {
        self.status.clear();
        self.content.clear();
        self.app1_session_id.clear();
        self.user_name.clear();
    }
}
