//! Sprite animation records (`pl_poke_data.narc`) and the gendered height
//! offsets packed alongside them (`height.narc`).

use super::RecordWriter;
use crate::errors::{CapacityError, DatagenResult, SchemaError};
use crate::symbols::SymbolResolver;
use schema::{
    AnimationFrame, ConstantKind, SpriteDocument, SpriteFace, GENDER_RATIO_FEMALE_ONLY,
    GENDER_RATIO_MALE_ONLY, GENDER_RATIO_NO_GENDER,
};

pub const MAX_ANIMATION_FRAMES: usize = 10;
const FRAME_SIZE: usize = 4;
const FACE_SIZE: usize = 3 + MAX_ANIMATION_FRAMES * FRAME_SIZE;
pub const SPRITE_RECORD_SIZE: usize = 2 * FACE_SIZE + 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceRecord {
    pub animation: u8,
    pub cry_delay: u8,
    pub start_delay: u8,
    pub frames: [AnimationFrame; MAX_ANIMATION_FRAMES],
}

/// Front and back animation data plus shadow placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteRecord {
    pub faces: [FaceRecord; 2],
    pub y_offset: i8,
    pub shadow_x_offset: i8,
    pub shadow_size: u8,
}

impl FaceRecord {
    fn from_face(face: &SpriteFace, which: &'static str) -> Result<Self, CapacityError> {
        if face.frames.len() > MAX_ANIMATION_FRAMES {
            return Err(CapacityError::TooManyEntries {
                record: which,
                max: MAX_ANIMATION_FRAMES,
                found: face.frames.len(),
            });
        }

        let mut frames = [AnimationFrame::default(); MAX_ANIMATION_FRAMES];
        frames[..face.frames.len()].copy_from_slice(&face.frames);
        Ok(Self {
            animation: face.animation,
            cry_delay: face.cry_delay,
            start_delay: face.start_delay,
            frames,
        })
    }

    fn write(&self, w: &mut RecordWriter) {
        w.u8(self.animation).u8(self.cry_delay).u8(self.start_delay);
        for frame in &self.frames {
            w.i8(frame.sprite_frame)
                .u8(frame.frame_delay)
                .i8(frame.x_shift)
                .i8(frame.y_shift);
        }
    }
}

impl SpriteRecord {
    pub fn from_document(doc: &SpriteDocument, resolver: &dyn SymbolResolver) -> DatagenResult<Self> {
        let y_offset = doc.front.addl_y_offset.ok_or(SchemaError::MissingField {
            document: "sprite data",
            field: "front addl_y_offset",
        })?;
        Ok(Self {
            faces: [
                FaceRecord::from_face(&doc.front, "front animation frames")?,
                FaceRecord::from_face(&doc.back, "back animation frames")?,
            ],
            y_offset,
            shadow_x_offset: doc.shadow.x_offset,
            shadow_size: resolver.lookup_u8(ConstantKind::ShadowSize, &doc.shadow.size, "shadow size")?,
        })
    }

    pub fn to_bytes(&self) -> [u8; SPRITE_RECORD_SIZE] {
        let mut w = RecordWriter::with_capacity(SPRITE_RECORD_SIZE);
        for face in &self.faces {
            face.write(&mut w);
        }
        w.i8(self.y_offset).i8(self.shadow_x_offset).u8(self.shadow_size);
        w.finish_fixed()
    }
}

/// Which gendered sprite variants a species can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderClass {
    Both,
    MaleOnly,
    FemaleOnly,
    Genderless,
}

impl GenderClass {
    pub fn from_ratio(ratio: u8) -> Self {
        match ratio {
            GENDER_RATIO_MALE_ONLY => GenderClass::MaleOnly,
            GENDER_RATIO_FEMALE_ONLY => GenderClass::FemaleOnly,
            GENDER_RATIO_NO_GENDER => GenderClass::Genderless,
            _ => GenderClass::Both,
        }
    }

    fn has_male(self) -> bool {
        !matches!(self, GenderClass::FemaleOnly)
    }

    fn has_female(self) -> bool {
        matches!(self, GenderClass::Both | GenderClass::FemaleOnly)
    }
}

/// The four height sub-records of one species, each empty or a single byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeightOffsets {
    pub back_female: Option<u8>,
    pub back_male: Option<u8>,
    pub front_female: Option<u8>,
    pub front_male: Option<u8>,
}

impl HeightOffsets {
    /// Four empty sub-records.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_document(doc: &SpriteDocument, gender: GenderClass) -> Result<Self, SchemaError> {
        let pick = |face: &SpriteFace, which: &'static str, male: bool| -> Result<Option<u8>, SchemaError> {
            let (present, value, label) = if male {
                (gender.has_male(), face.y_offset.male, "male")
            } else {
                (gender.has_female(), face.y_offset.female, "female")
            };
            if !present {
                return Ok(None);
            }
            value.map(Some).ok_or(SchemaError::MissingOffset {
                face: which,
                gender: label,
            })
        };

        Ok(Self {
            back_female: pick(&doc.back, "back", false)?,
            back_male: pick(&doc.back, "back", true)?,
            front_female: pick(&doc.front, "front", false)?,
            front_male: pick(&doc.front, "front", true)?,
        })
    }

    /// Sub-records in archive order.
    pub fn sub_records(&self) -> [Vec<u8>; 4] {
        [
            self.back_female.into_iter().collect(),
            self.back_male.into_iter().collect(),
            self.front_female.into_iter().collect(),
            self.front_male.into_iter().collect(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::common::{test_registry, test_sprite_document};
    use crate::DatagenError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_record_size() {
        assert_eq!(SPRITE_RECORD_SIZE, 89);
    }

    #[test]
    fn test_record_layout() {
        let registry = test_registry();
        let mut doc = test_sprite_document();
        doc.front.frames = vec![
            AnimationFrame { sprite_frame: 1, frame_delay: 10, x_shift: -2, y_shift: 3 },
            AnimationFrame { sprite_frame: -1, frame_delay: 0, x_shift: 0, y_shift: 0 },
        ];
        doc.front.addl_y_offset = Some(-4);
        doc.shadow.x_offset = 2;

        let bytes = SpriteRecord::from_document(&doc, &registry).unwrap().to_bytes();
        assert_eq!(&bytes[0..3], &[doc.front.animation, doc.front.cry_delay, doc.front.start_delay]);
        assert_eq!(&bytes[3..7], &[1, 10, 0xFE, 3]);
        assert_eq!(&bytes[7..11], &[0xFF, 0, 0, 0]);
        assert_eq!(&bytes[11..43], &[0; 32]);
        assert_eq!(bytes[43], doc.back.animation);
        // SHADOW_SIZE_MEDIUM = 1
        assert_eq!(&bytes[86..89], &[0xFC, 2, 1]);
    }

    #[test]
    fn test_too_many_frames() {
        let registry = test_registry();
        let mut doc = test_sprite_document();
        doc.back.frames = vec![AnimationFrame::default(); MAX_ANIMATION_FRAMES + 1];
        assert!(matches!(
            SpriteRecord::from_document(&doc, &registry),
            Err(DatagenError::Capacity(CapacityError::TooManyEntries { record: "back animation frames", .. }))
        ));
    }

    #[test]
    fn test_front_addl_y_offset_is_required() {
        let registry = test_registry();
        let mut doc = test_sprite_document();
        doc.front.addl_y_offset = None;
        doc.back.addl_y_offset = Some(5);
        assert!(matches!(
            SpriteRecord::from_document(&doc, &registry),
            Err(DatagenError::Schema(SchemaError::MissingField { field: "front addl_y_offset", .. }))
        ));
    }

    #[rstest]
    #[case(GENDER_RATIO_MALE_ONLY, GenderClass::MaleOnly)]
    #[case(GENDER_RATIO_FEMALE_ONLY, GenderClass::FemaleOnly)]
    #[case(GENDER_RATIO_NO_GENDER, GenderClass::Genderless)]
    #[case(31, GenderClass::Both)]
    #[case(127, GenderClass::Both)]
    fn test_gender_class(#[case] ratio: u8, #[case] class: GenderClass) {
        assert_eq!(GenderClass::from_ratio(ratio), class);
    }

    #[test]
    fn test_female_only_heights() {
        let mut doc = test_sprite_document();
        doc.back.y_offset.female = Some(6);
        doc.front.y_offset.female = Some(9);
        doc.back.y_offset.male = None;
        doc.front.y_offset.male = None;

        let heights = HeightOffsets::from_document(&doc, GenderClass::FemaleOnly).unwrap();
        let [back_female, back_male, front_female, front_male] = heights.sub_records();
        assert_eq!(back_female, vec![6]);
        assert_eq!(back_male, Vec::<u8>::new());
        assert_eq!(front_female, vec![9]);
        assert_eq!(front_male, Vec::<u8>::new());
    }

    #[rstest]
    #[case(GenderClass::MaleOnly)]
    #[case(GenderClass::Genderless)]
    fn test_no_female_heights(#[case] class: GenderClass) {
        let doc = test_sprite_document();
        let heights = HeightOffsets::from_document(&doc, class).unwrap();
        let lengths: Vec<usize> = heights.sub_records().iter().map(Vec::len).collect();
        assert_eq!(lengths, vec![0, 1, 0, 1]);
    }

    #[test]
    fn test_both_genders_need_both_offsets() {
        let mut doc = test_sprite_document();
        doc.front.y_offset.male = None;
        assert!(matches!(
            HeightOffsets::from_document(&doc, GenderClass::Both),
            Err(SchemaError::MissingOffset { face: "front", gender: "male" })
        ));
        assert!(HeightOffsets::from_document(&doc, GenderClass::FemaleOnly).is_ok());
    }
}
