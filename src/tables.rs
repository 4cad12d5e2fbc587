//! Generated C headers: the tutor cost table and the per-species tutor
//! learnset masks.

use crate::encoding::tutor::{TutorCatalog, TutorMask};
use std::fmt::Write;

pub const TUTORABLE_MOVES_HEADER: &str = "tutorable_moves.h";
pub const TUTOR_LEARNSETS_HEADER: &str = "species_learnsets_by_tutor.h";

const BANNER: &str = "/*\n * This header was generated by datagen-species; DO NOT MODIFY IT!!!\n */";

/// A generated text file held in memory until commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedHeader {
    pub file_name: &'static str,
    pub contents: String,
}

/// Renders the tutor cost table, one row per schema entry in schema order.
pub fn render_tutorable_moves(catalog: &TutorCatalog) -> GeneratedHeader {
    let mut out = String::new();
    out.push_str(BANNER);
    out.push('\n');
    out.push_str("#ifndef POKEPLATINUM_GENERATED_TUTORABLE_MOVES\n");
    out.push_str("#define POKEPLATINUM_GENERATED_TUTORABLE_MOVES\n\n");
    out.push_str("static const TeachableMove sTeachableMoves[] = {\n");

    for row in catalog.rows() {
        let costs = &row.costs;
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "    {{ {}, {}, {}, {}, {}, {}, }}, ",
            row.move_name,
            costs.red_cost,
            costs.blue_cost,
            costs.yellow_cost,
            costs.green_cost,
            costs.location
        );
    }

    out.push_str("};\n\n#endif // POKEPLATINUM_GENERATED_TUTORABLE_MOVES\n");
    GeneratedHeader {
        file_name: TUTORABLE_MOVES_HEADER,
        contents: out,
    }
}

/// Accumulates one mask row per entity, in registry order.
#[derive(Debug, Clone, Default)]
pub struct TutorLearnsetTable {
    rows: Vec<TutorMask>,
}

impl TutorLearnsetTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mask: TutorMask) {
        self.rows.push(mask);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> GeneratedHeader {
        let mut out = String::new();
        out.push_str(BANNER);
        out.push('\n');
        out.push_str("#ifndef POKEPLATINUM_GENERATED_SPECIES_LEARNSETS_BY_TUTOR_H\n");
        out.push_str("#define POKEPLATINUM_GENERATED_SPECIES_LEARNSETS_BY_TUTOR_H\n\n");
        out.push_str("#include \"tutor_movesets.h\"\n\n");
        out.push_str("static const MovesetMask sSpeciesLearnsetsByTutor[MOVESET_MAX] = {\n");

        for mask in &self.rows {
            out.push_str("    { ");
            for byte in mask.as_bytes() {
                let _ = write!(out, "0x{byte:02X}, ");
            }
            out.push_str("},\n");
        }

        out.push_str("};\n#endif // POKEPLATINUM_GENERATED_SPECIES_LEARNSETS_BY_TUTOR_H\n");
        GeneratedHeader {
            file_name: TUTOR_LEARNSETS_HEADER,
            contents: out,
        }
    }
}
