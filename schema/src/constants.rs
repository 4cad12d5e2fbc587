use serde::{Deserialize, Serialize};
use strum::Display;

/// The symbolic enumerations a species document may reference by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
pub enum ConstantKind {
    Species,
    Move,
    Item,
    Ability,
    PokemonType,
    EggGroup,
    ExpRate,
    GenderRatio,
    PokemonColor,
    PalParkLandArea,
    PalParkWaterArea,
    ShadowSize,
}

/// Gender ratio values with special meaning to the runtime.
pub const GENDER_RATIO_MALE_ONLY: u8 = 0;
pub const GENDER_RATIO_FEMALE_50: u8 = 127;
pub const GENDER_RATIO_FEMALE_ONLY: u8 = 254;
pub const GENDER_RATIO_NO_GENDER: u8 = 255;

/// Registry name of the placeholder entry at index 0.
pub const SPECIES_NONE_NAME: &str = "none";

/// Number of TMs; HM bits follow immediately after them.
pub const NUM_TMS: usize = 92;
pub const NUM_HMS: usize = 8;
