use serde::{Deserialize, Serialize};

/// Six-stat block in the order the authored documents use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub speed: u8,
    pub special_attack: u8,
    pub special_defense: u8,
}

/// Effort values granted on defeat. Each yield is packed into two bits, so the
/// encoder rejects anything above 3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvYields {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub speed: u8,
    pub special_attack: u8,
    pub special_defense: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldItems {
    pub common: String,
    pub rare: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Learnset {
    /// `[level, move]` pairs in authored order.
    pub by_level: Vec<(u16, String)>,
    /// `TMnn` / `HMnn` labels.
    pub by_tm: Vec<String>,
    /// Absent for species that no tutor can teach.
    #[serde(default)]
    pub by_tutor: Option<Vec<String>>,
}

/// Pal Park encounter parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchingShow {
    pub pal_park_land_area: String,
    pub pal_park_water_area: String,
    pub catching_points: u8,
    pub rarity: u8,
    pub unused: u16,
}

/// One authored species (or alternate form), as read from `data.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesDocument {
    pub base_stats: BaseStats,
    pub ev_yields: EvYields,
    pub abilities: [String; 2],
    pub types: [String; 2],
    pub held_items: HeldItems,
    pub egg_groups: [String; 2],
    pub base_exp_reward: u8,
    pub base_friendship: u8,
    pub body_color: String,
    pub catch_rate: u8,
    pub exp_rate: String,
    pub flip_sprite: bool,
    pub gender_ratio: String,
    pub hatch_cycles: u8,
    pub safari_flee_rate: u8,
    pub learnset: Learnset,
    /// Raw evolution rows. Their shape depends on the method tag in slot 0, so
    /// they stay untyped until the encoder dispatches on that tag.
    #[serde(default)]
    pub evolutions: Option<Vec<Vec<serde_json::Value>>>,
    #[serde(default)]
    pub catching_show: Option<CatchingShow>,
}

impl SpeciesDocument {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
