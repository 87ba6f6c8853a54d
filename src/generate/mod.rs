//! Module for the collection type owning the registered entries and driving a generation run

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{info, warn};

use crate::case::TestCase;
use crate::config::{DEFAULT_CONFIG, SeedRecord};
use crate::error::{Error, case_validation};
use crate::prompt::Confirm;
use crate::registry::{BuilderFn, CaseDecl, Entry, Params, expand};
use crate::rng::Stream;


/// Ordered collection of registered case families, bound to an output folder
/// and a persisted seed config.
///
/// Registration is append-only; `generate` takes `&self`, so the entry list
/// is frozen once generation begins. One generation run derives a single
/// [`Stream`] from the active seed and threads it through every seeded
/// builder in registration order — identical seed plus identical
/// registration code reproduces the output byte for byte.
pub struct Collection<C: TestCase> {
    folder: PathBuf,
    config: PathBuf,
    entries: Vec<Entry<C>>,
}

impl<C: TestCase> Collection<C> {
    /// New collection writing into `folder`, with the config at the default
    /// path ([`DEFAULT_CONFIG`]), usually a sibling of the folder.
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self::with_config(folder, DEFAULT_CONFIG)
    }

    pub fn with_config(folder: impl Into<PathBuf>, config: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            config: config.into(),
            entries: Vec::new(),
        }
    }

    /// Registers a builder that does not draw randomness. The declaration is
    /// expanded immediately: one entry per parameter binding, times the
    /// repeat count, appended in expansion order.
    pub fn collect<F>(&mut self, decl: CaseDecl, builder: F)
    where
        F: Fn(&Params) -> C + 'static,
    {
        let builder = Rc::new(BuilderFn::Plain(Box::new(builder)));
        self.entries.extend(expand(decl, builder));
    }

    /// Registers a builder that draws from the shared deterministic stream.
    /// The stream capability is declared here, at registration time, rather
    /// than inferred from the builder's shape.
    pub fn collect_seeded<F>(&mut self, decl: CaseDecl, builder: F)
    where
        F: Fn(&Params, &mut Stream) -> C + 'static,
    {
        let builder = Rc::new(BuilderFn::Seeded(Box::new(builder)));
        self.entries.extend(expand(decl, builder));
    }

    /// Number of registered entries after expansion.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runs generation with file indices starting at 1.
    pub fn generate(&self, confirm: &mut dyn Confirm) -> Result<(), Error> {
        self.generate_from(1, confirm)
    }

    /// Runs generation with file indices starting at `first_index`.
    ///
    /// Acquires the seed record (prompting to regenerate a missing or
    /// corrupted config, or to continue past a failed seed check), ensures
    /// the output folder is empty (prompting before clearing pre-existing
    /// content), then builds, validates, and writes every entry in
    /// registration order. Any declined prompt or failed validation aborts
    /// the whole run.
    pub fn generate_from(&self, first_index: u32, confirm: &mut dyn Confirm) -> Result<(), Error> {
        let record = acquire_record(&self.config, confirm)?;
        self.prepare_folder(confirm)?;

        if self.entries.is_empty() {
            return Err(Error::NoRegisteredCases);
        }

        let last_index = first_index + self.entries.len() as u32 - 1;
        let width = decimal_width(last_index);

        let mut stream = Stream::new(record.seed());
        for (index, entry) in (first_index..).zip(&self.entries) {
            self.write_entry(entry, index, width, &mut stream)?;
        }

        info!(cases = self.entries.len(), "generation complete");
        Ok(())
    }

    fn prepare_folder(&self, confirm: &mut dyn Confirm) -> Result<(), Error> {
        fs::create_dir_all(&self.folder)?;

        if fs::read_dir(&self.folder)?.next().is_some() {
            warn!(folder = %self.folder.display(), "output folder is not empty");
            let prompt = format!("Clear '{}' and continue?", self.folder.display());
            if !confirm.confirm(&prompt) {
                return Err(Error::OutputNotEmpty {
                    folder: self.folder.clone(),
                });
            }
            fs::remove_dir_all(&self.folder)?;
            fs::create_dir_all(&self.folder)?;
        }
        Ok(())
    }

    /// Builds one case instance, validates it, and renders the
    /// `.in`/`.ans`/`.desc` files. File handles are scoped: the input is
    /// fully written and closed before it is reopened for the answer pass.
    fn write_entry(
        &self,
        entry: &Entry<C>,
        index: u32,
        width: usize,
        stream: &mut Stream,
    ) -> Result<(), Error> {
        let stem = match &entry.display_name {
            Some(name) => format!("{index:0width$}-{name}"),
            None => format!("{index:0width$}"),
        };
        info!(case = %stem, "generating test case");

        let case = match entry.builder.as_ref() {
            BuilderFn::Plain(build) => build(&entry.binding),
            BuilderFn::Seeded(build) => build(&entry.binding, stream),
        };
        case.validate()
            .map_err(|message| case_validation(&stem, message))?;

        let in_path = self.folder.join(format!("{stem}.in"));
        {
            let mut input = BufWriter::new(File::create(&in_path)?);
            case.write_input(&mut input)?;
            input.flush()?;
        }
        info!(path = %in_path.display(), "wrote input");

        let ans_path = self.folder.join(format!("{stem}.ans"));
        {
            let mut input = BufReader::new(File::open(&in_path)?);
            let mut answer = BufWriter::new(File::create(&ans_path)?);
            case.write_answer(&mut answer, &mut input)?;
            answer.flush()?;
        }
        info!(path = %ans_path.display(), "wrote answer");

        if let Some(desc) = &entry.desc {
            let desc_path = self.folder.join(format!("{stem}.desc"));
            fs::write(&desc_path, format!("{desc}\n"))?;
            info!(path = %desc_path.display(), "wrote description");
        }
        Ok(())
    }
}

/// Loads the persisted seed record, negotiating recovery with the operator:
/// a missing or corrupted config may be regenerated, a failed seed check may
/// be waved through. Declining either question surfaces the underlying
/// error. The active record is persisted back before generation starts.
fn acquire_record(path: &Path, confirm: &mut dyn Confirm) -> Result<SeedRecord, Error> {
    let record = match SeedRecord::load(path) {
        Ok(record) => record,
        Err(err @ (Error::ConfigMissing { .. } | Error::ConfigCorrupt { .. })) => {
            warn!("{err}");
            let prompt = format!("Generate a new '{}' file?", path.display());
            if !confirm.confirm(&prompt) {
                return Err(err);
            }
            SeedRecord::generate()
        }
        Err(err) => return Err(err),
    };

    if record.check_seed() {
        info!("seed check passed");
    } else {
        warn!("seed check failed: the config was edited or produced by incompatible logic");
        if !confirm.confirm("Continue test generation anyway?") {
            return Err(Error::SeedCheckMismatch { path: path.into() });
        }
    }

    record.persist(path)?;
    Ok(record)
}

/// Number of decimal digits of `n`; the zero-padding width of a run is the
/// width of its last index.
fn decimal_width(mut n: u32) -> usize {
    let mut width = 1;
    while n >= 10 {
        n /= 10;
        width += 1;
    }
    width
}
