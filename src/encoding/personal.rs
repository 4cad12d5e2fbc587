//! The per-species attribute record (`pl_personal.narc`).
//!
//! Layout, 44 bytes:
//!
//! ```text
//! 0x00  u8[6]   base stats (hp, atk, def, spe, spa, spd)
//! 0x06  u8[2]   types
//! 0x08  u8      catch rate
//! 0x09  u8      base exp reward
//! 0x0A  u16     EV yields, 2 bits per stat in the same order, top 4 bits unused
//! 0x0C  u16     common wild held item
//! 0x0E  u16     rare wild held item
//! 0x10  u8      gender ratio
//! 0x11  u8      hatch cycles
//! 0x12  u8      base friendship
//! 0x13  u8      exp rate
//! 0x14  u8[2]   egg groups
//! 0x16  u8[2]   abilities
//! 0x18  u8      safari flee rate
//! 0x19  u8      body colour (7 bits) | flip sprite (top bit)
//! 0x1A  u8[2]   padding
//! 0x1C  u32[4]  TM/HM compatibility bits
//! ```

use super::RecordWriter;
use crate::errors::{CapacityError, DatagenResult, SchemaError};
use crate::symbols::SymbolResolver;
use schema::{BaseStats, ConstantKind, EvYields, SpeciesDocument, NUM_HMS, NUM_TMS};

pub const PERSONAL_RECORD_SIZE: usize = 44;

const MAX_EV_YIELD: u8 = 3;
const MAX_BODY_COLOR: u8 = 0x7F;
const TM_MASK_WORDS: usize = 4;

/// Resolved attribute block for one species.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalRecord {
    pub base_stats: BaseStats,
    pub types: [u8; 2],
    pub catch_rate: u8,
    pub base_exp_reward: u8,
    pub ev_yields: u16,
    pub held_items: [u16; 2],
    pub gender_ratio: u8,
    pub hatch_cycles: u8,
    pub base_friendship: u8,
    pub exp_rate: u8,
    pub egg_groups: [u8; 2],
    pub abilities: [u8; 2],
    pub safari_flee_rate: u8,
    pub body_color: u8,
    pub flip_sprite: bool,
    pub tm_masks: [u32; TM_MASK_WORDS],
}

impl PersonalRecord {
    pub fn from_document(doc: &SpeciesDocument, resolver: &dyn SymbolResolver) -> DatagenResult<Self> {
        let body_color = resolver.lookup_u8(ConstantKind::PokemonColor, &doc.body_color, "body color")?;
        if body_color > MAX_BODY_COLOR {
            return Err(CapacityError::ValueOutOfRange {
                field: "body color",
                value: body_color.into(),
                max: MAX_BODY_COLOR.into(),
            }
            .into());
        }

        Ok(Self {
            base_stats: doc.base_stats,
            types: [
                resolver.lookup_u8(ConstantKind::PokemonType, &doc.types[0], "type")?,
                resolver.lookup_u8(ConstantKind::PokemonType, &doc.types[1], "type")?,
            ],
            catch_rate: doc.catch_rate,
            base_exp_reward: doc.base_exp_reward,
            ev_yields: pack_ev_yields(&doc.ev_yields)?,
            held_items: [
                resolver.lookup_u16(ConstantKind::Item, &doc.held_items.common, "common held item")?,
                resolver.lookup_u16(ConstantKind::Item, &doc.held_items.rare, "rare held item")?,
            ],
            gender_ratio: resolver.lookup_u8(ConstantKind::GenderRatio, &doc.gender_ratio, "gender ratio")?,
            hatch_cycles: doc.hatch_cycles,
            base_friendship: doc.base_friendship,
            exp_rate: resolver.lookup_u8(ConstantKind::ExpRate, &doc.exp_rate, "exp rate")?,
            egg_groups: [
                resolver.lookup_u8(ConstantKind::EggGroup, &doc.egg_groups[0], "egg group")?,
                resolver.lookup_u8(ConstantKind::EggGroup, &doc.egg_groups[1], "egg group")?,
            ],
            abilities: [
                resolver.lookup_u8(ConstantKind::Ability, &doc.abilities[0], "ability")?,
                resolver.lookup_u8(ConstantKind::Ability, &doc.abilities[1], "ability")?,
            ],
            safari_flee_rate: doc.safari_flee_rate,
            body_color,
            flip_sprite: doc.flip_sprite,
            tm_masks: pack_tm_learnset(&doc.learnset.by_tm)?,
        })
    }

    pub fn to_bytes(&self) -> [u8; PERSONAL_RECORD_SIZE] {
        let stats = &self.base_stats;
        let mut w = RecordWriter::with_capacity(PERSONAL_RECORD_SIZE);
        w.u8(stats.hp)
            .u8(stats.attack)
            .u8(stats.defense)
            .u8(stats.speed)
            .u8(stats.special_attack)
            .u8(stats.special_defense)
            .u8(self.types[0])
            .u8(self.types[1])
            .u8(self.catch_rate)
            .u8(self.base_exp_reward)
            .u16(self.ev_yields)
            .u16(self.held_items[0])
            .u16(self.held_items[1])
            .u8(self.gender_ratio)
            .u8(self.hatch_cycles)
            .u8(self.base_friendship)
            .u8(self.exp_rate)
            .u8(self.egg_groups[0])
            .u8(self.egg_groups[1])
            .u8(self.abilities[0])
            .u8(self.abilities[1])
            .u8(self.safari_flee_rate)
            .u8(self.body_color | (u8::from(self.flip_sprite) << 7))
            .zeros(2);
        for mask in self.tm_masks {
            w.u32(mask);
        }
        w.finish_fixed()
    }
}

fn pack_ev_yields(evs: &EvYields) -> Result<u16, CapacityError> {
    let fields = [
        ("hp EV yield", evs.hp),
        ("attack EV yield", evs.attack),
        ("defense EV yield", evs.defense),
        ("speed EV yield", evs.speed),
        ("special attack EV yield", evs.special_attack),
        ("special defense EV yield", evs.special_defense),
    ];

    let mut packed = 0u16;
    for (shift, (field, value)) in fields.into_iter().enumerate() {
        if value > MAX_EV_YIELD {
            return Err(CapacityError::ValueOutOfRange {
                field,
                value: value.into(),
                max: MAX_EV_YIELD.into(),
            });
        }
        packed |= u16::from(value) << (shift * 2);
    }
    Ok(packed)
}

/// Maps `TMnn` to bit `nn - 1` and `HMnn` to bit `nn - 1 + NUM_TMS`.
fn tm_bit(label: &str) -> Result<usize, SchemaError> {
    let bad_label = || SchemaError::TmLabel(label.to_string());

    let (number, offset, count) = if let Some(number) = label.strip_prefix("TM") {
        (number, 0, NUM_TMS)
    } else if let Some(number) = label.strip_prefix("HM") {
        (number, NUM_TMS, NUM_HMS)
    } else {
        return Err(bad_label());
    };

    let number: usize = number.parse().map_err(|_| bad_label())?;
    if number == 0 || number > count {
        return Err(bad_label());
    }
    Ok(number - 1 + offset)
}

fn pack_tm_learnset(labels: &[String]) -> Result<[u32; TM_MASK_WORDS], SchemaError> {
    let mut masks = [0u32; TM_MASK_WORDS];
    for label in labels {
        let bit = tm_bit(label)?;
        masks[bit / 32] |= 1 << (bit % 32);
    }
    Ok(masks)
}
