//! Pal Park encounter records (`ppark.narc`).

use super::RecordWriter;
use crate::errors::DatagenResult;
use crate::symbols::SymbolResolver;
use schema::{ConstantKind, SpeciesDocument};

pub const PAL_PARK_RECORD_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PalParkRecord {
    pub land_area: u8,
    pub water_area: u8,
    pub catching_points: u8,
    pub rarity: u8,
    /// Never read by the runtime but kept so the record stays 6 bytes.
    pub unused: u16,
}

impl PalParkRecord {
    /// `None` when the species has no `catching_show` section.
    pub fn from_document(
        doc: &SpeciesDocument,
        resolver: &dyn SymbolResolver,
    ) -> DatagenResult<Option<Self>> {
        let Some(show) = &doc.catching_show else {
            return Ok(None);
        };

        Ok(Some(Self {
            land_area: resolver.lookup_u8(
                ConstantKind::PalParkLandArea,
                &show.pal_park_land_area,
                "pal park land area",
            )?,
            water_area: resolver.lookup_u8(
                ConstantKind::PalParkWaterArea,
                &show.pal_park_water_area,
                "pal park water area",
            )?,
            catching_points: show.catching_points,
            rarity: show.rarity,
            unused: show.unused,
        }))
    }

    pub fn to_bytes(&self) -> [u8; PAL_PARK_RECORD_SIZE] {
        let mut w = RecordWriter::with_capacity(PAL_PARK_RECORD_SIZE);
        w.u8(self.land_area)
            .u8(self.water_area)
            .u8(self.catching_points)
            .u8(self.rarity)
            .u16(self.unused);
        w.finish_fixed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::{test_registry, TestSpeciesBuilder};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absent_section() {
        let registry = test_registry();
        let doc = TestSpeciesBuilder::new().build();
        assert_eq!(PalParkRecord::from_document(&doc, &registry).unwrap(), None);
    }

    #[test]
    fn test_record_layout() {
        let registry = test_registry();
        let doc = TestSpeciesBuilder::new()
            .catching_show("PAL_PARK_LAND_AREA_FOREST", "PAL_PARK_WATER_AREA_NONE", 30, 5, 0x0102)
            .build();
        let record = PalParkRecord::from_document(&doc, &registry).unwrap().unwrap();
        assert_eq!(record.to_bytes(), [2, 0, 30, 5, 0x02, 0x01]);
    }
}
