//! The single pass over the registry that drives every encoder and fills the
//! archives, plus the all-or-nothing commit of the results.

use crate::archive::{ArchiveSnapshot, DenseArchive, SparseArchive};
use crate::encoding::evolution::{EvolutionList, EVOLUTION_RECORD_SIZE};
use crate::encoding::learnset::LevelUpLearnset;
use crate::encoding::pal_park::{PalParkRecord, PAL_PARK_RECORD_SIZE};
use crate::encoding::personal::{PersonalRecord, PERSONAL_RECORD_SIZE};
use crate::encoding::sprite::{GenderClass, HeightOffsets, SpriteRecord, SPRITE_RECORD_SIZE};
use crate::encoding::tutor::{TutorCatalog, TutorMask};
use crate::errors::{CompileError, DatagenError, DatagenResult};
use crate::registry::Registry;
use crate::source::SpeciesSource;
use crate::symbols::SymbolResolver;
use crate::tables::{render_tutorable_moves, GeneratedHeader, TutorLearnsetTable};
use schema::{TutorSchema, GENDER_RATIO_FEMALE_50, SPECIES_NONE_NAME};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const PERSONAL_ARCHIVE: &str = "pl_personal.narc";
pub const EVOLUTION_ARCHIVE: &str = "evo.narc";
pub const LEARNSET_ARCHIVE: &str = "wotbl.narc";
pub const HEIGHT_ARCHIVE: &str = "height.narc";
pub const TUTOR_MASK_ARCHIVE: &str = "tutor_learnsets.narc";
pub const PAL_PARK_ARCHIVE: &str = "ppark.narc";
pub const SPRITE_ARCHIVE: &str = "pl_poke_data.narc";

const HEIGHT_SLOTS: usize = 4;

/// Everything one entity contributes, encoded before any of it is appended.
struct EntityRecords {
    personal: [u8; PERSONAL_RECORD_SIZE],
    evolutions: [u8; EVOLUTION_RECORD_SIZE],
    learnset: Vec<u8>,
    tutor_mask: TutorMask,
    heights: HeightOffsets,
    pal_park: Option<[u8; PAL_PARK_RECORD_SIZE]>,
    sprite: Option<[u8; SPRITE_RECORD_SIZE]>,
}

/// Per-run archive builders, owned by the compiler for one pass.
struct ArchiveSet {
    personal: DenseArchive,
    evolutions: DenseArchive,
    learnsets: DenseArchive,
    heights: DenseArchive,
    tutor_masks: DenseArchive,
    pal_park: SparseArchive,
    sprites: SparseArchive,
    tutor_table: TutorLearnsetTable,
}

impl ArchiveSet {
    fn new() -> Self {
        Self {
            personal: DenseArchive::new(PERSONAL_ARCHIVE, 1),
            evolutions: DenseArchive::new(EVOLUTION_ARCHIVE, 1),
            learnsets: DenseArchive::new(LEARNSET_ARCHIVE, 1),
            heights: DenseArchive::new(HEIGHT_ARCHIVE, HEIGHT_SLOTS),
            tutor_masks: DenseArchive::new(TUTOR_MASK_ARCHIVE, 1),
            pal_park: SparseArchive::new(PAL_PARK_ARCHIVE),
            sprites: SparseArchive::new(SPRITE_ARCHIVE),
            tutor_table: TutorLearnsetTable::new(),
        }
    }

    fn append(&mut self, records: EntityRecords) {
        self.personal.push(records.personal);
        self.evolutions.push(records.evolutions);
        self.learnsets.push(records.learnset);
        for sub_record in records.heights.sub_records() {
            self.heights.push(sub_record);
        }
        self.tutor_masks.push(records.tutor_mask.as_bytes());
        self.tutor_table.push(records.tutor_mask);
        self.pal_park.push_present(records.pal_park);
        self.sprites.push_present(records.sprite);
    }

    fn freeze(self, entity_count: usize) -> DatagenResult<(Vec<ArchiveSnapshot>, GeneratedHeader)> {
        let archives = vec![
            self.personal.freeze(entity_count)?,
            self.evolutions.freeze(entity_count)?,
            self.learnsets.freeze(entity_count)?,
            self.heights.freeze(entity_count)?,
            self.tutor_masks.freeze(entity_count)?,
            self.pal_park.freeze(),
            self.sprites.freeze(),
        ];
        Ok((archives, self.tutor_table.render()))
    }
}

/// Compiles a registry of species into archives and generated headers.
///
/// The tutor catalog is built once, when the compiler is created, and is
/// read-only for every entity afterwards.
pub struct Compiler<'a> {
    resolver: &'a dyn SymbolResolver,
    source: &'a dyn SpeciesSource,
    catalog: TutorCatalog,
}

impl<'a> Compiler<'a> {
    pub fn new(
        resolver: &'a dyn SymbolResolver,
        source: &'a dyn SpeciesSource,
        tutor_schema: &TutorSchema,
    ) -> DatagenResult<Self> {
        let catalog = TutorCatalog::build(tutor_schema, resolver)?;
        info!(
            "Built tutor catalog: {} moves, {} mask bytes per species",
            catalog.len(),
            catalog.mask_len()
        );
        Ok(Self {
            resolver,
            source,
            catalog,
        })
    }

    pub fn catalog(&self) -> &TutorCatalog {
        &self.catalog
    }

    /// Runs the whole pass in memory. Nothing touches the output directory;
    /// see [`CompiledOutput::commit`].
    pub fn compile(&self, registry: &Registry) -> DatagenResult<CompiledOutput> {
        info!("Compiling {} species", registry.len());
        if let Some((index, name)) = registry.last_national_dex() {
            info!("Last national dex entry: {} ({})", index, name);
        }

        let mut archives = ArchiveSet::new();
        for name in registry.entries() {
            debug!("Encoding {}", name);
            let records = self
                .compile_entity(name)
                .map_err(|source| CompileError::new(name.as_str(), source))?;
            archives.append(records);
        }

        let (archives, tutor_learnsets) = archives.freeze(registry.len())?;
        Ok(CompiledOutput {
            entity_count: registry.len(),
            archives,
            headers: vec![render_tutorable_moves(&self.catalog), tutor_learnsets],
        })
    }

    fn compile_entity(&self, name: &str) -> DatagenResult<EntityRecords> {
        let doc = self.source.load_species(name)?;

        let personal = PersonalRecord::from_document(&doc, self.resolver)?;
        let evolutions = EvolutionList::from_document(&doc, self.resolver)?;
        let learnset = LevelUpLearnset::from_document(&doc, self.resolver)?;
        let pal_park = PalParkRecord::from_document(&doc, self.resolver)?;
        let tutor_mask = TutorMask::from_document(&doc, &self.catalog, self.resolver)?;

        let (heights, sprite) = match self.source.load_sprite(name)? {
            Some(sprite_doc) => {
                // The placeholder entry is laid out as if it had both genders.
                let gender_ratio = if name == SPECIES_NONE_NAME {
                    GENDER_RATIO_FEMALE_50
                } else {
                    personal.gender_ratio
                };
                let heights =
                    HeightOffsets::from_document(&sprite_doc, GenderClass::from_ratio(gender_ratio))?;
                let sprite = SpriteRecord::from_document(&sprite_doc, self.resolver)?;
                (heights, Some(sprite.to_bytes()))
            }
            None => (HeightOffsets::empty(), None),
        };

        Ok(EntityRecords {
            personal: personal.to_bytes(),
            evolutions: evolutions.to_bytes(),
            learnset: learnset.to_bytes(),
            tutor_mask,
            heights,
            pal_park: pal_park.map(|record| record.to_bytes()),
            sprite,
        })
    }
}

/// The finished, in-memory result of a successful pass.
#[derive(Debug, Clone)]
pub struct CompiledOutput {
    entity_count: usize,
    archives: Vec<ArchiveSnapshot>,
    headers: Vec<GeneratedHeader>,
}

impl CompiledOutput {
    pub fn entity_count(&self) -> usize {
        self.entity_count
    }

    pub fn archives(&self) -> &[ArchiveSnapshot] {
        &self.archives
    }

    pub fn archive(&self, file_name: &str) -> Option<&ArchiveSnapshot> {
        self.archives.iter().find(|a| a.file_name() == file_name)
    }

    pub fn headers(&self) -> &[GeneratedHeader] {
        &self.headers
    }

    pub fn header(&self, file_name: &str) -> Option<&GeneratedHeader> {
        self.headers.iter().find(|h| h.file_name == file_name)
    }

    /// Writes every archive and header into `out_dir`. Each file is staged
    /// under a temporary name first and only renamed into place once all of
    /// them have been written.
    pub fn commit(&self, out_dir: &Path) -> DatagenResult<Vec<PathBuf>> {
        fs::create_dir_all(out_dir).map_err(|e| DatagenError::io(out_dir, e))?;

        let mut staging = Staging::new(out_dir);
        for snapshot in &self.archives {
            let narc = snapshot.to_narc();
            staging.stage(snapshot.file_name(), |path| narc.write_to(path))?;
        }
        for header in &self.headers {
            staging.stage(header.file_name, |path| fs::write(path, &header.contents))?;
        }

        let written = staging.publish()?;
        for path in &written {
            info!("Wrote {}", path.display());
        }
        Ok(written)
    }
}

/// Temporary siblings of the output files. Anything still staged when this
/// is dropped is removed.
struct Staging<'a> {
    out_dir: &'a Path,
    staged: Vec<StagedFile>,
}

struct StagedFile {
    temp: PathBuf,
    target: PathBuf,
    backup: PathBuf,
}

impl<'a> Staging<'a> {
    fn new(out_dir: &'a Path) -> Self {
        Self {
            out_dir,
            staged: Vec::new(),
        }
    }

    fn stage(
        &mut self,
        file_name: &str,
        write: impl FnOnce(&Path) -> io::Result<()>,
    ) -> DatagenResult<()> {
        let temp = self.out_dir.join(format!(".{file_name}.tmp"));
        self.staged.push(StagedFile {
            temp: temp.clone(),
            target: self.out_dir.join(file_name),
            backup: self.out_dir.join(format!(".{file_name}.bak")),
        });
        write(&temp).map_err(|e| DatagenError::io(temp, e))
    }

    /// Moves every staged file into place. Previous outputs are set aside
    /// first; if any rename fails, the ones already replaced are restored.
    fn publish(mut self) -> DatagenResult<Vec<PathBuf>> {
        let mut replaced: Vec<(&StagedFile, bool)> = Vec::new();
        for file in &self.staged {
            if let Err(err) = swap_in(file, &mut replaced) {
                roll_back(&replaced);
                return Err(err);
            }
        }
        for (file, had_previous) in &replaced {
            if *had_previous {
                let _ = fs::remove_file(&file.backup);
            }
        }
        Ok(self.staged.drain(..).map(|file| file.target).collect())
    }
}

fn swap_in<'f>(file: &'f StagedFile, replaced: &mut Vec<(&'f StagedFile, bool)>) -> DatagenResult<()> {
    let had_previous = file.target.exists();
    if had_previous {
        fs::rename(&file.target, &file.backup).map_err(|e| DatagenError::io(&file.target, e))?;
    }
    replaced.push((file, had_previous));
    fs::rename(&file.temp, &file.target).map_err(|e| DatagenError::io(&file.target, e))
}

fn roll_back(replaced: &[(&StagedFile, bool)]) {
    for (file, had_previous) in replaced.iter().rev() {
        if *had_previous {
            let _ = fs::rename(&file.backup, &file.target);
        } else {
            let _ = fs::remove_file(&file.target);
        }
    }
}

impl Drop for Staging<'_> {
    fn drop(&mut self) {
        for file in &self.staged {
            let _ = fs::remove_file(&file.temp);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_failed_publish_restores_previous_outputs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("evo.narc"), b"old evo").unwrap();

        let mut staging = Staging::new(dir.path());
        staging.stage("evo.narc", |path| fs::write(path, b"new evo")).unwrap();
        staging.stage("wotbl.narc", |path| fs::write(path, b"new wotbl")).unwrap();
        fs::remove_file(dir.path().join(".wotbl.narc.tmp")).unwrap();

        assert!(staging.publish().is_err());
        assert_eq!(fs::read(dir.path().join("evo.narc")).unwrap(), b"old evo");

        let mut names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["evo.narc"]);
    }

    #[test]
    fn test_publish_clears_backups() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("evo.narc"), b"old evo").unwrap();

        let mut staging = Staging::new(dir.path());
        staging.stage("evo.narc", |path| fs::write(path, b"new evo")).unwrap();
        let written = staging.publish().unwrap();

        assert_eq!(written, vec![dir.path().join("evo.narc")]);
        assert_eq!(fs::read(dir.path().join("evo.narc")).unwrap(), b"new evo");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
