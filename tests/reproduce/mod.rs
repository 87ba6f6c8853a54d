//! Tests for the reproducibility contract: identical seed + identical registration code
//! produce a byte-identical output set, across independently built collections.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use claims::assert_ok;
use rand::Rng;
use tempfile::TempDir;
use testgen_rs::{Answers, CaseDecl, Collection, Params, SeedRecord, Stream, TestCase};

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
}

/// The "registration code" of these tests, built fresh per run the way an
/// author's script would be on every invocation.
fn build_collection(folder: &Path, config: &Path) -> Collection<ArraySum> {
    let mut tests: Collection<ArraySum> = Collection::with_config(folder, config);

    tests.collect(
        CaseDecl::new("all_ones").describe("array filled with ones"),
        |_| ArraySum { values: vec![1; 64] },
    );
    tests.collect(
        CaseDecl::new("same_values").sweep("length", [1, 2]).sweep("value", [5, 9]),
        |params: &Params| ArraySum {
            values: vec![params.int("value"); params.int("length") as usize],
        },
    );
    tests.collect_seeded(
        CaseDecl::new("random_list").describe("random array").repeat(3),
        |_, random: &mut Stream| ArraySum {
            values: (0..64).map(|_| random.gen_range(1..=1_000_000_000)).collect(),
        },
    );

    tests
}

fn snapshot(folder: &Path) -> BTreeMap<String, Vec<u8>> {
    fs::read_dir(folder)
        .unwrap()
        .map(|e| {
            let e = e.unwrap();
            let name = e.file_name().into_string().unwrap();
            (name, fs::read(e.path()).unwrap())
        })
        .collect()
}

#[test]
fn independent_runs_over_the_same_config_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("cases");
    let config = dir.path().join("testgen.toml");
    SeedRecord::from_seed(4242).persist(&config).unwrap();

    let mut accept = Answers::with(|_: &str| true);

    assert_ok!(build_collection(&folder, &config).generate(&mut accept));
    let first = snapshot(&folder);
    assert_eq!(first.len(), 8 * 2 + 4); // 8 entries, .in/.ans each, 4 .desc

    // A fresh collection, folder cleared via the confirmed prompt.
    assert_ok!(build_collection(&folder, &config).generate(&mut accept));
    assert_eq!(snapshot(&folder), first);
}

#[test]
fn a_different_seed_changes_the_random_entries() {
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("cases");
    let config = dir.path().join("testgen.toml");
    let mut accept = Answers::with(|_: &str| true);

    SeedRecord::from_seed(1).persist(&config).unwrap();
    assert_ok!(build_collection(&folder, &config).generate(&mut accept));
    let first = snapshot(&folder);

    SeedRecord::from_seed(2).persist(&config).unwrap();
    assert_ok!(build_collection(&folder, &config).generate(&mut accept));
    let second = snapshot(&folder);

    // Deterministic entries are unchanged, seeded ones differ.
    assert_eq!(second["1-all-ones.in"], first["1-all-ones.in"]);
    assert_ne!(second["6-random-list.in"], first["6-random-list.in"]);
}
