use crate::errors::{DatagenError, DatagenResult};
use crate::source::SpeciesSource;
use crate::symbols::ConstantRegistry;
use schema::{
    AnimationFrame, BaseStats, CatchingShow, ConstantKind, EvYields, GenderedOffset, HeldItems,
    Learnset, Shadow, SpeciesDocument, SpriteDocument, SpriteFace, TutorMove, TutorSchema,
};
use serde_json::Value;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

const TYPES: [&str; 18] = [
    "TYPE_NORMAL", "TYPE_FIGHTING", "TYPE_FLYING", "TYPE_POISON", "TYPE_GROUND", "TYPE_ROCK",
    "TYPE_BUG", "TYPE_GHOST", "TYPE_STEEL", "TYPE_MYSTERY", "TYPE_FIRE", "TYPE_WATER",
    "TYPE_GRASS", "TYPE_ELECTRIC", "TYPE_PSYCHIC", "TYPE_ICE", "TYPE_DRAGON", "TYPE_DARK",
];

const COLORS: [&str; 10] = [
    "POKEMON_COLOR_RED", "POKEMON_COLOR_BLUE", "POKEMON_COLOR_YELLOW", "POKEMON_COLOR_GREEN",
    "POKEMON_COLOR_BLACK", "POKEMON_COLOR_BROWN", "POKEMON_COLOR_PURPLE", "POKEMON_COLOR_GRAY",
    "POKEMON_COLOR_WHITE", "POKEMON_COLOR_PINK",
];

const EGG_GROUPS: [&str; 8] = [
    "EGG_GROUP_NONE", "EGG_GROUP_MONSTER", "EGG_GROUP_WATER_1", "EGG_GROUP_BUG",
    "EGG_GROUP_FLYING", "EGG_GROUP_FIELD", "EGG_GROUP_FAIRY", "EGG_GROUP_PLANT",
];

const EXP_RATES: [&str; 6] = [
    "EXP_RATE_MEDIUM_FAST", "EXP_RATE_ERRATIC", "EXP_RATE_FLUCTUATING", "EXP_RATE_MEDIUM_SLOW",
    "EXP_RATE_FAST", "EXP_RATE_SLOW",
];

const SPECIES: [(&str, u32); 11] = [
    ("SPECIES_NONE", 0),
    ("SPECIES_BULBASAUR", 1),
    ("SPECIES_IVYSAUR", 2),
    ("SPECIES_RAICHU", 26),
    ("SPECIES_GENGAR", 94),
    ("SPECIES_PICHU", 172),
    ("SPECIES_REMORAID", 223),
    ("SPECIES_MANTINE", 226),
    ("SPECIES_SILCOON", 266),
    ("SPECIES_TANGROWTH", 465),
    ("SPECIES_EGG", 494),
];

const MOVES: [(&str, u32); 20] = [
    ("MOVE_NONE", 0),
    ("MOVE_POUND", 1),
    ("MOVE_KARATE_CHOP", 2),
    ("MOVE_DOUBLE_SLAP", 3),
    ("MOVE_COMET_PUNCH", 4),
    ("MOVE_MEGA_PUNCH", 5),
    ("MOVE_PAY_DAY", 6),
    ("MOVE_FIRE_PUNCH", 7),
    ("MOVE_ICE_PUNCH", 8),
    ("MOVE_THUNDER_PUNCH", 9),
    ("MOVE_SCRATCH", 10),
    ("MOVE_VICE_GRIP", 11),
    ("MOVE_GUILLOTINE", 12),
    ("MOVE_RAZOR_WIND", 13),
    ("MOVE_SWORDS_DANCE", 14),
    ("MOVE_CUT", 15),
    ("MOVE_GUST", 16),
    ("MOVE_TACKLE", 33),
    ("MOVE_GROWL", 45),
    ("MOVE_ANCIENT_POWER", 246),
];

/// A registry holding every constant the tests reference, with the ids the
/// game headers assign them.
pub fn test_registry() -> ConstantRegistry {
    let mut registry = ConstantRegistry::new()
        .with_sequential(ConstantKind::PokemonType, TYPES)
        .with_sequential(ConstantKind::PokemonColor, COLORS)
        .with_sequential(ConstantKind::EggGroup, EGG_GROUPS)
        .with_sequential(ConstantKind::ExpRate, EXP_RATES)
        .with_sequential(
            ConstantKind::ShadowSize,
            ["SHADOW_SIZE_SMALL", "SHADOW_SIZE_MEDIUM", "SHADOW_SIZE_LARGE"],
        )
        .with_sequential(
            ConstantKind::PalParkLandArea,
            [
                "PAL_PARK_LAND_AREA_NONE",
                "PAL_PARK_LAND_AREA_FIELD",
                "PAL_PARK_LAND_AREA_FOREST",
                "PAL_PARK_LAND_AREA_MOUNTAIN",
            ],
        )
        .with_sequential(
            ConstantKind::PalParkWaterArea,
            ["PAL_PARK_WATER_AREA_NONE", "PAL_PARK_WATER_AREA_POND", "PAL_PARK_WATER_AREA_SEA"],
        )
        .with_value(ConstantKind::Item, "ITEM_NONE", 0)
        .with_value(ConstantKind::Item, "ITEM_THUNDER_STONE", 83)
        .with_value(ConstantKind::Item, "ITEM_ORAN_BERRY", 155)
        .with_value(ConstantKind::Ability, "ABILITY_NONE", 0)
        .with_value(ConstantKind::Ability, "ABILITY_CHLOROPHYLL", 34)
        .with_value(ConstantKind::Ability, "ABILITY_OVERGROW", 65)
        .with_value(ConstantKind::GenderRatio, "GENDER_RATIO_MALE_ONLY", 0)
        .with_value(ConstantKind::GenderRatio, "GENDER_RATIO_FEMALE_12_5", 31)
        .with_value(ConstantKind::GenderRatio, "GENDER_RATIO_FEMALE_50", 127)
        .with_value(ConstantKind::GenderRatio, "GENDER_RATIO_FEMALE_ONLY", 254)
        .with_value(ConstantKind::GenderRatio, "GENDER_RATIO_NO_GENDER", 255);

    for (name, id) in SPECIES {
        registry = registry.with_value(ConstantKind::Species, name, id);
    }
    for (name, id) in MOVES {
        registry = registry.with_value(ConstantKind::Move, name, id);
    }
    registry
}

/// A builder for species documents with Bulbasaur-like defaults.
///
/// # Example
/// ```ignore
/// let doc = TestSpeciesBuilder::new()
///     .level_up(&[(1, "MOVE_TACKLE")])
///     .tutor(&["MOVE_CUT"])
///     .build();
/// ```
pub struct TestSpeciesBuilder {
    doc: SpeciesDocument,
}

impl TestSpeciesBuilder {
    pub fn new() -> Self {
        Self {
            doc: SpeciesDocument {
                base_stats: BaseStats {
                    hp: 45,
                    attack: 49,
                    defense: 49,
                    speed: 45,
                    special_attack: 65,
                    special_defense: 65,
                },
                ev_yields: EvYields::default(),
                abilities: ["ABILITY_OVERGROW".to_string(), "ABILITY_NONE".to_string()],
                types: ["TYPE_GRASS".to_string(), "TYPE_POISON".to_string()],
                held_items: HeldItems {
                    common: "ITEM_NONE".to_string(),
                    rare: "ITEM_NONE".to_string(),
                },
                egg_groups: ["EGG_GROUP_MONSTER".to_string(), "EGG_GROUP_PLANT".to_string()],
                base_exp_reward: 64,
                base_friendship: 70,
                body_color: "POKEMON_COLOR_GREEN".to_string(),
                catch_rate: 45,
                exp_rate: "EXP_RATE_MEDIUM_SLOW".to_string(),
                flip_sprite: false,
                gender_ratio: "GENDER_RATIO_FEMALE_12_5".to_string(),
                hatch_cycles: 20,
                safari_flee_rate: 0,
                learnset: Learnset::default(),
                evolutions: None,
                catching_show: None,
            },
        }
    }

    pub fn stats(mut self, [hp, attack, defense, speed, special_attack, special_defense]: [u8; 6]) -> Self {
        self.doc.base_stats = BaseStats {
            hp,
            attack,
            defense,
            speed,
            special_attack,
            special_defense,
        };
        self
    }

    pub fn ev_yields(mut self, [hp, attack, defense, speed, special_attack, special_defense]: [u8; 6]) -> Self {
        self.doc.ev_yields = EvYields {
            hp,
            attack,
            defense,
            speed,
            special_attack,
            special_defense,
        };
        self
    }

    pub fn types(mut self, first: &str, second: &str) -> Self {
        self.doc.types = [first.to_string(), second.to_string()];
        self
    }

    pub fn abilities(mut self, first: &str, second: &str) -> Self {
        self.doc.abilities = [first.to_string(), second.to_string()];
        self
    }

    pub fn held_items(mut self, common: &str, rare: &str) -> Self {
        self.doc.held_items = HeldItems {
            common: common.to_string(),
            rare: rare.to_string(),
        };
        self
    }

    pub fn gender_ratio(mut self, ratio: &str) -> Self {
        self.doc.gender_ratio = ratio.to_string();
        self
    }

    pub fn catch_rate(mut self, catch_rate: u8) -> Self {
        self.doc.catch_rate = catch_rate;
        self
    }

    pub fn flip_sprite(mut self, flip: bool) -> Self {
        self.doc.flip_sprite = flip;
        self
    }

    pub fn tms(mut self, labels: &[&str]) -> Self {
        self.doc.learnset.by_tm = labels.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn level_up(mut self, moves: &[(u16, &str)]) -> Self {
        self.doc.learnset.by_level = moves
            .iter()
            .map(|(level, name)| (*level, name.to_string()))
            .collect();
        self
    }

    pub fn tutor(mut self, moves: &[&str]) -> Self {
        self.doc.learnset.by_tutor = Some(moves.iter().map(|m| m.to_string()).collect());
        self
    }

    /// Appends one raw evolution row, e.g. `json!(["EVO_LEVEL", 16, "SPECIES_IVYSAUR"])`.
    pub fn evolution(mut self, row: Value) -> Self {
        let row = match row {
            Value::Array(values) => values,
            other => panic!("evolution row must be an array, got {other}"),
        };
        self.doc.evolutions.get_or_insert_with(Vec::new).push(row);
        self
    }

    pub fn catching_show(mut self, land: &str, water: &str, points: u8, rarity: u8, unused: u16) -> Self {
        self.doc.catching_show = Some(CatchingShow {
            pal_park_land_area: land.to_string(),
            pal_park_water_area: water.to_string(),
            catching_points: points,
            rarity,
            unused,
        });
        self
    }

    pub fn build(self) -> SpeciesDocument {
        self.doc
    }
}

/// A sprite document with both gendered offsets authored on both faces.
pub fn test_sprite_document() -> SpriteDocument {
    SpriteDocument {
        front: SpriteFace {
            animation: 3,
            cry_delay: 0,
            start_delay: 5,
            frames: vec![AnimationFrame {
                sprite_frame: 0,
                frame_delay: 8,
                x_shift: 0,
                y_shift: -1,
            }],
            y_offset: GenderedOffset {
                male: Some(10),
                female: Some(11),
            },
            addl_y_offset: Some(0),
        },
        back: SpriteFace {
            animation: 7,
            cry_delay: 2,
            start_delay: 0,
            frames: Vec::new(),
            y_offset: GenderedOffset {
                male: Some(12),
                female: Some(13),
            },
            addl_y_offset: None,
        },
        shadow: Shadow {
            x_offset: 0,
            size: "SHADOW_SIZE_MEDIUM".to_string(),
        },
    }
}

/// A tutor schema teaching `moves` in the given order.
pub fn test_tutor_schema(moves: &[&str]) -> TutorSchema {
    TutorSchema {
        moves: moves
            .iter()
            .enumerate()
            .map(|(i, name)| {
                (
                    name.to_string(),
                    TutorMove {
                        red_cost: (i % 8) as u8,
                        blue_cost: 2,
                        yellow_cost: 0,
                        green_cost: 4,
                        location: "TUTOR_LOCATION_ROUTE_212".to_string(),
                    },
                )
            })
            .collect(),
    }
}

/// Serves documents from memory, keyed by registry name.
#[derive(Default)]
pub struct MemorySource {
    species: HashMap<String, SpeciesDocument>,
    sprites: HashMap<String, SpriteDocument>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_species(mut self, name: &str, doc: SpeciesDocument) -> Self {
        self.species.insert(name.to_string(), doc);
        self
    }

    pub fn with_sprite(mut self, name: &str, doc: SpriteDocument) -> Self {
        self.sprites.insert(name.to_string(), doc);
        self
    }
}

impl SpeciesSource for MemorySource {
    fn load_species(&self, name: &str) -> DatagenResult<SpeciesDocument> {
        self.species.get(name).cloned().ok_or_else(|| {
            DatagenError::io(
                PathBuf::from(name).join("data.json"),
                io::Error::from(io::ErrorKind::NotFound),
            )
        })
    }

    fn load_sprite(&self, name: &str) -> DatagenResult<Option<SpriteDocument>> {
        Ok(self.sprites.get(name).cloned())
    }
}
