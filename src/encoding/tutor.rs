//! Move tutor catalog and per-species tutor masks.
//!
//! The catalog is the ordered, de-duplicated list of moves any tutor teaches,
//! taken from the tutor schema in document order. A species' tutor mask has
//! one bit per catalog entry, eight to a byte, lowest bit first.

use crate::errors::{DatagenResult, SchemaError};
use crate::symbols::SymbolResolver;
use schema::{ConstantKind, SpeciesDocument, TutorMove, TutorSchema};

/// One row of the generated tutor cost table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorCostRow {
    pub move_name: String,
    pub costs: TutorMove,
}

/// Built once per run, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TutorCatalog {
    moves: Vec<u16>,
    rows: Vec<TutorCostRow>,
}

impl TutorCatalog {
    pub fn build(schema: &TutorSchema, resolver: &dyn SymbolResolver) -> DatagenResult<Self> {
        let mut catalog = Self::default();
        for (name, costs) in &schema.moves {
            let move_id = resolver.lookup_u16(ConstantKind::Move, name, "tutor move")?;
            if !catalog.moves.contains(&move_id) {
                catalog.moves.push(move_id);
            }
            catalog.rows.push(TutorCostRow {
                move_name: name.clone(),
                costs: costs.clone(),
            });
        }
        Ok(catalog)
    }

    pub fn moves(&self) -> &[u16] {
        &self.moves
    }

    pub fn rows(&self) -> &[TutorCostRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn index_of(&self, move_id: u16) -> Option<usize> {
        self.moves.iter().position(|&id| id == move_id)
    }

    /// Bytes in every species' mask.
    pub fn mask_len(&self) -> usize {
        self.moves.len().div_ceil(8)
    }
}

/// A species' tutor eligibility bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorMask {
    bytes: Vec<u8>,
}

impl TutorMask {
    pub fn empty(catalog: &TutorCatalog) -> Self {
        Self {
            bytes: vec![0; catalog.mask_len()],
        }
    }

    /// All-zero when the species has no `by_tutor` section.
    pub fn from_document(
        doc: &SpeciesDocument,
        catalog: &TutorCatalog,
        resolver: &dyn SymbolResolver,
    ) -> DatagenResult<Self> {
        let mut mask = Self::empty(catalog);
        let Some(by_tutor) = &doc.learnset.by_tutor else {
            return Ok(mask);
        };

        for name in by_tutor {
            let move_id = resolver.lookup_u16(ConstantKind::Move, name, "tutor move")?;
            let index = catalog
                .index_of(move_id)
                .ok_or_else(|| SchemaError::NotTutorable(name.clone()))?;
            mask.set(index);
        }
        Ok(mask)
    }

    fn set(&mut self, index: usize) {
        self.bytes[index / 8] |= 1 << (index % 8);
    }

    pub fn is_set(&self, index: usize) -> bool {
        self.bytes
            .get(index / 8)
            .is_some_and(|byte| byte & (1 << (index % 8)) != 0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
