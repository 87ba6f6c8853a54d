//! Fixture generator for the array-sum demo problem: sum an array of N integers.
//!
//! Usage: `testgen-rs [output-folder] [config-file]`, defaulting to
//! `data/secret` and `testgen.toml`. The registered families show the three
//! declaration styles: a fixed case, a parameter sweep, and repeated random
//! draws from the shared stream.

use std::env;
use std::io::Write;

use anyhow::Result;
use rand::Rng;
use testgen_rs::{CaseDecl, Collection, Params, Stream, StdinConfirm, TestCase, setup_logging};

const MAX_ARRAY_SIZE: usize = 200_000;
const MAX_ELEMENT: i64 = 1_000_000_000;

struct ArraySum {
    values: Vec<i64>,
}

impl TestCase for ArraySum {
    fn write_input(&self, input: &mut dyn std::io::Write) -> std::io::Result<()> {
        writeln!(input, "{}", self.values.len())?;
        let rendered: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        writeln!(input, "{}", rendered.join(" "))
    }

    fn write_answer(
        &self,
        answer: &mut dyn std::io::Write,
        _input: &mut dyn std::io::Read,
    ) -> std::io::Result<()> {
        writeln!(answer, "{}", self.values.iter().sum::<i64>())
    }

    fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_ARRAY_SIZE).contains(&self.values.len()) {
            return Err(format!("array size {} out of bounds", self.values.len()));
        }
        if let Some(bad) = self.values.iter().find(|v| !(1..=MAX_ELEMENT).contains(*v)) {
            return Err(format!("element {bad} out of bounds"));
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    setup_logging()?;

    let folder = env::args().nth(1).unwrap_or_else(|| "data/secret".into());
    let config = env::args()
        .nth(2)
        .unwrap_or_else(|| testgen_rs::DEFAULT_CONFIG.into());

    let mut tests: Collection<ArraySum> = Collection::with_config(folder, config);

    tests.collect(
        CaseDecl::new("all_ones").describe("max sized array filled with ones"),
        |_| ArraySum {
            values: vec![1; MAX_ARRAY_SIZE],
        },
    );

    tests.collect(
        CaseDecl::new("same_values")
            .describe("array filled with same values")
            .sweep("length", 1..10)
            .sweep("value", [8_743i64, 12, 999_999]),
        |params: &Params| ArraySum {
            values: vec![params.int("value"); params.int("length") as usize],
        },
    );

    tests.collect_seeded(
        CaseDecl::new("random_list")
            .describe("random max sized array")
            .repeat(3),
        |_, random: &mut Stream| ArraySum {
            values: (0..MAX_ARRAY_SIZE)
                .map(|_| random.gen_range(1..=MAX_ELEMENT))
                .collect(),
        },
    );

    tests.generate(&mut StdinConfirm::new())?;
    Ok(())
}
