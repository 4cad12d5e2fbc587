use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationFrame {
    pub sprite_frame: i8,
    pub frame_delay: u8,
    pub x_shift: i8,
    pub y_shift: i8,
}

/// Per-gender vertical offsets. A side only needs to be authored when the
/// species can actually appear as that gender.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderedOffset {
    #[serde(default)]
    pub male: Option<u8>,
    #[serde(default)]
    pub female: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteFace {
    pub animation: u8,
    pub cry_delay: u8,
    pub start_delay: u8,
    pub frames: Vec<AnimationFrame>,
    pub y_offset: GenderedOffset,
    /// Required on the front face, ignored on the back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addl_y_offset: Option<i8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shadow {
    pub x_offset: i8,
    pub size: String,
}

/// Companion `sprite_data.json` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteDocument {
    pub front: SpriteFace,
    pub back: SpriteFace,
    pub shadow: Shadow,
}

impl SpriteDocument {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
