//! Characters appearing in a dialogue scene

use serde::{Deserialize, Serialize};

use crate::ids::CharacterId;

/// Maximum length of a character's name or role
pub const MAX_CHARACTER_NAME_LENGTH: usize = 100;

/// Maximum length of an avatar description
pub const MAX_AVATAR_DESCRIPTION_LENGTH: usize = 500;

/// Maximum number of personality traits per character
pub const MAX_PERSONALITY_TRAITS: usize = 10;

/// A speaking participant in a dialogue scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub character_id: CharacterId,
    pub name: String,
    /// Role the character plays in the scene (e.g., "Social worker")
    pub role: String,
    /// Prompt text for the avatar generator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality_traits: Option<Vec<String>>,
}
