use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// Evolution methods, tagged with the value stored in the archive.
///
/// `None` (0) is reserved: empty slots in an evolution record are zero-filled
/// and the runtime stops scanning at the first one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    FromRepr,
)]
#[repr(u16)]
pub enum EvolutionMethod {
    #[strum(serialize = "EVO_NONE")]
    None = 0,
    #[strum(serialize = "EVO_LEVEL_HAPPINESS")]
    LevelHappiness = 1,
    #[strum(serialize = "EVO_LEVEL_HAPPINESS_DAY")]
    LevelHappinessDay = 2,
    #[strum(serialize = "EVO_LEVEL_HAPPINESS_NIGHT")]
    LevelHappinessNight = 3,
    #[strum(serialize = "EVO_LEVEL")]
    Level = 4,
    #[strum(serialize = "EVO_TRADE")]
    Trade = 5,
    #[strum(serialize = "EVO_TRADE_WITH_HELD_ITEM")]
    TradeWithHeldItem = 6,
    #[strum(serialize = "EVO_USE_ITEM")]
    UseItem = 7,
    #[strum(serialize = "EVO_LEVEL_ATK_GT_DEF")]
    LevelAtkGtDef = 8,
    #[strum(serialize = "EVO_LEVEL_ATK_EQ_DEF")]
    LevelAtkEqDef = 9,
    #[strum(serialize = "EVO_LEVEL_ATK_LT_DEF")]
    LevelAtkLtDef = 10,
    #[strum(serialize = "EVO_LEVEL_PID_LOW")]
    LevelPidLow = 11,
    #[strum(serialize = "EVO_LEVEL_PID_HIGH")]
    LevelPidHigh = 12,
    #[strum(serialize = "EVO_LEVEL_NINJASK")]
    LevelNinjask = 13,
    #[strum(serialize = "EVO_LEVEL_SHEDINJA")]
    LevelShedinja = 14,
    #[strum(serialize = "EVO_LEVEL_BEAUTY")]
    LevelBeauty = 15,
    #[strum(serialize = "EVO_USE_ITEM_MALE")]
    UseItemMale = 16,
    #[strum(serialize = "EVO_USE_ITEM_FEMALE")]
    UseItemFemale = 17,
    #[strum(serialize = "EVO_LEVEL_WITH_HELD_ITEM_DAY")]
    LevelWithHeldItemDay = 18,
    #[strum(serialize = "EVO_LEVEL_WITH_HELD_ITEM_NIGHT")]
    LevelWithHeldItemNight = 19,
    #[strum(serialize = "EVO_LEVEL_KNOW_MOVE")]
    LevelKnowMove = 20,
    #[strum(serialize = "EVO_LEVEL_SPECIES_IN_PARTY")]
    LevelSpeciesInParty = 21,
    #[strum(serialize = "EVO_LEVEL_MALE")]
    LevelMale = 22,
    #[strum(serialize = "EVO_LEVEL_FEMALE")]
    LevelFemale = 23,
    #[strum(serialize = "EVO_LEVEL_MAGNETIC_FIELD")]
    LevelMagneticField = 24,
    #[strum(serialize = "EVO_LEVEL_MOSS_ROCK")]
    LevelMossRock = 25,
    #[strum(serialize = "EVO_LEVEL_ICE_ROCK")]
    LevelIceRock = 26,
}

/// What the middle column of an authored evolution row holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolutionParamKind {
    /// The row is `[method, target]`.
    None,
    /// A level or other plain number.
    Threshold,
    Item,
    Move,
    Species,
}

impl EvolutionMethod {
    pub fn tag(self) -> u16 {
        self as u16
    }

    pub fn from_tag(tag: u16) -> Option<Self> {
        Self::from_repr(tag)
    }

    /// Every method must have an arm here; adding a method without deciding
    /// its parameter shape does not compile.
    pub fn param_kind(self) -> EvolutionParamKind {
        use EvolutionMethod::*;

        match self {
            None
            | LevelHappiness
            | LevelHappinessDay
            | LevelHappinessNight
            | Trade
            | LevelMagneticField
            | LevelMossRock
            | LevelIceRock => EvolutionParamKind::None,

            Level
            | LevelAtkGtDef
            | LevelAtkEqDef
            | LevelAtkLtDef
            | LevelPidLow
            | LevelPidHigh
            | LevelNinjask
            | LevelShedinja
            | LevelMale
            | LevelFemale
            | LevelBeauty => EvolutionParamKind::Threshold,

            TradeWithHeldItem
            | UseItem
            | UseItemMale
            | UseItemFemale
            | LevelWithHeldItemDay
            | LevelWithHeldItemNight => EvolutionParamKind::Item,

            LevelKnowMove => EvolutionParamKind::Move,

            LevelSpeciesInParty => EvolutionParamKind::Species,
        }
    }
}
