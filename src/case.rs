//! Module defining the capability contract a fixture author implements per case family

use std::io::{Read, Write};

/// One family of test cases. A concrete implementor is a plain value type
/// carrying the data of a single case instance; the trait describes how that
/// instance is rendered into judge-facing files.
///
/// Instances are ephemeral: built by a registered builder, validated, written
/// to disk, and discarded. They are never persisted or reused.
pub trait TestCase {
    /// Writes the case input. Must be deterministic given the instance's own
    /// field values; any randomness belongs in the builder, which draws it
    /// from the shared stream.
    fn write_input(&self, input: &mut dyn Write) -> std::io::Result<()>;

    /// Writes the expected output. `input` is a read handle over the `.in`
    /// file written just before, so the answer can be re-derived from the
    /// input content (e.g., by piping it through a reference solution).
    fn write_answer(&self, answer: &mut dyn Write, input: &mut dyn Read) -> std::io::Result<()> {
        let _ = (answer, input);
        Ok(())
    }

    /// Checks the instance against its declared constraints (size bounds,
    /// value ranges, structural invariants). An `Err` aborts the entire
    /// generation run before any file is written for this case.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
