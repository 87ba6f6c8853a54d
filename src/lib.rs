//! Reproducible, parameterized test-fixture generation for competitive-programming judges.
//!
//! A fixture author implements [`TestCase`] for each case family, registers
//! builders on a [`Collection`] (fixed cases, parameter sweeps, repeated
//! random draws), and calls [`Collection::generate`]. The run's randomness
//! comes from a single [`Stream`] seeded by a persisted [`SeedRecord`], so
//! the same seed and the same registration code reproduce every generated
//! `.in`/`.ans`/`.desc` file byte for byte.
//!
//! # Example
//!
//! ```no_run
//! use std::io::Write;
//!
//! use rand::Rng;
//! use testgen_rs::{CaseDecl, Collection, Params, Stream, StdinConfirm, TestCase};
//!
//! struct ArraySum {
//!     values: Vec<i64>,
//! }
//!
//! impl TestCase for ArraySum {
//!     fn write_input(&self, input: &mut dyn std::io::Write) -> std::io::Result<()> {
//!         writeln!(input, "{}", self.values.len())?;
//!         let rendered: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
//!         writeln!(input, "{}", rendered.join(" "))
//!     }
//!
//!     fn write_answer(
//!         &self,
//!         answer: &mut dyn std::io::Write,
//!         _input: &mut dyn std::io::Read,
//!     ) -> std::io::Result<()> {
//!         writeln!(answer, "{}", self.values.iter().sum::<i64>())
//!     }
//! }
//!
//! let mut tests: Collection<ArraySum> = Collection::new("data/secret");
//!
//! tests.collect(
//!     CaseDecl::new("same_values").sweep("length", 1..10).sweep("value", [8743, 12]),
//!     |params: &Params| ArraySum {
//!         values: vec![params.int("value"); params.int("length") as usize],
//!     },
//! );
//! tests.collect_seeded(
//!     CaseDecl::new("random_list").repeat(3),
//!     |_, random: &mut Stream| ArraySum {
//!         values: (0..100).map(|_| random.gen_range(1..=1_000_000_000)).collect(),
//!     },
//! );
//!
//! tests.generate(&mut StdinConfirm::new()).unwrap();
//! ```

mod case;
mod config;
mod error;
mod generate;
mod prompt;
mod registry;
mod rng;
mod telemetry;

pub use case::TestCase;
pub use config::{DEFAULT_CONFIG, SeedRecord};
pub use error::Error;
pub use generate::Collection;
pub use prompt::{Answers, Confirm, StdinConfirm};
pub use registry::{CaseDecl, ParamValue, Params};
pub use rng::Stream;
pub use telemetry::setup_logging;
