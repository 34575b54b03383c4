//! DTOs for games_sea adapter.

/// DTO for creating a new game.
///
/// The owner player cannot exist before the game row does, so creation
/// leaves `owner_id` unset; `set_owner` wires it inside the same
/// transaction.
#[derive(Debug, Clone, Default)]
pub struct GameCreate {
    pub text_channel_id: Option<i64>,
    pub voice_channel_id: Option<i64>,
}

impl GameCreate {
    pub fn new() -> Self {
        Self {
            text_channel_id: None,
            voice_channel_id: None,
        }
    }

    pub fn with_text_channel(mut self, channel_id: i64) -> Self {
        self.text_channel_id = Some(channel_id);
        self
    }

    pub fn with_voice_channel(mut self, channel_id: i64) -> Self {
        self.voice_channel_id = Some(channel_id);
        self
    }
}
