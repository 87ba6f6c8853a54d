//! Module defining case declarations and their expansion into ordered registration entries.
//!
//! A declaration describes a whole family of cases: an optional parameter
//! sweep and a repeat count. Expansion turns it into a flat, ordered list of
//! entries, one per concrete parameter binding. Entry order is part of the
//! reproducibility contract: it fixes both the output file indices and the
//! order in which builders advance the shared random stream.

use std::rc::Rc;

use crate::Stream;
use crate::case::TestCase;


/// A single sweep value. Conversions exist for the common literal types, so
/// sweeps read as `.sweep("length", 1..10)` or `.sweep("mode", ["a", "b"])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Int(i64),
    Text(String),
}

macro_rules! param_value_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ParamValue {
            fn from(value: $ty) -> Self {
                ParamValue::Int(value as i64)
            }
        })*
    };
}

param_value_from_int!(i8, i16, i32, i64, u8, u16, u32, usize);

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

/// One concrete parameter binding handed to a builder. Keys are unique and
/// kept in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, ParamValue)>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Integer parameter lookup.
    ///
    /// # Panics
    ///
    /// Panics when the parameter was not declared in the sweep or holds a
    /// non-integer value. Both are programmer errors in the registration
    /// code, not runtime conditions.
    pub fn int(&self, name: &str) -> i64 {
        match self.get(name) {
            Some(ParamValue::Int(value)) => *value,
            Some(other) => panic!("parameter '{name}' is not an integer: {other:?}"),
            None => panic!("parameter '{name}' was not declared in the sweep"),
        }
    }

    /// Text parameter lookup. Panics under the same conditions as [`Params::int`].
    pub fn text(&self, name: &str) -> &str {
        match self.get(name) {
            Some(ParamValue::Text(value)) => value,
            Some(other) => panic!("parameter '{name}' is not text: {other:?}"),
            None => panic!("parameter '{name}' was not declared in the sweep"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, name: String, value: ParamValue) {
        self.0.push((name, value));
    }
}

/// Declarative description of a case family, expanded at registration time.
#[derive(Debug, Clone, Default)]
pub struct CaseDecl {
    name: Option<String>,
    desc: Option<String>,
    repeat: Option<usize>,
    sweep: Vec<(String, Vec<ParamValue>)>,
}

impl CaseDecl {
    /// Declares a named family. Word separators (`_`, spaces) in the name are
    /// normalized to hyphens in the generated file names.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(normalize_name(&name.into())),
            ..Self::default()
        }
    }

    /// Declares a family whose files carry only the zero-padded index.
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Attaches a human-readable description, written to a `.desc` file next
    /// to each generated case.
    pub fn describe(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Replicates the full sweep `n` times. Replicas are concatenated, not
    /// interleaved, and even identical bindings produce distinct cases when
    /// the builder draws from the shared stream.
    pub fn repeat(mut self, n: usize) -> Self {
        self.repeat = Some(n);
        self
    }

    /// Adds a sweep parameter. Expansion takes the cartesian product over
    /// all sweep parameters in declaration order, the first declared
    /// parameter varying slowest.
    pub fn sweep<V>(mut self, param: &str, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<ParamValue>,
    {
        assert!(
            !self.sweep.iter().any(|(key, _)| key == param),
            "sweep parameter '{param}' declared twice"
        );
        self.sweep
            .push((param.to_string(), values.into_iter().map(Into::into).collect()));
        self
    }
}

/// How a builder is invoked. Whether a builder consumes the shared stream is
/// declared here, at registration time, instead of being sniffed from its
/// signature.
pub(crate) enum BuilderFn<C: TestCase> {
    Plain(Box<dyn Fn(&Params) -> C>),
    Seeded(Box<dyn Fn(&Params, &mut Stream) -> C>),
}

/// One ordered unit of generation work: a builder plus a concrete binding.
pub(crate) struct Entry<C: TestCase> {
    pub(crate) builder: Rc<BuilderFn<C>>,
    pub(crate) binding: Params,
    pub(crate) display_name: Option<String>,
    pub(crate) desc: Option<String>,
}

/// Expands a declaration into its ordered entry list.
pub(crate) fn expand<C: TestCase>(decl: CaseDecl, builder: Rc<BuilderFn<C>>) -> Vec<Entry<C>> {
    let product = cartesian_bindings(&decl.sweep);
    let repeat = decl.repeat.unwrap_or(1);

    let mut entries = Vec::with_capacity(product.len() * repeat);
    for _ in 0..repeat {
        for binding in &product {
            entries.push(Entry {
                builder: Rc::clone(&builder),
                binding: binding.clone(),
                display_name: decl.name.clone(),
                desc: decl.desc.clone(),
            });
        }
    }
    entries
}

/// Cartesian product over the sweep in declaration order. With no sweep this
/// is a single empty binding; an empty value list empties the whole product.
fn cartesian_bindings(sweep: &[(String, Vec<ParamValue>)]) -> Vec<Params> {
    let mut product = vec![Params::default()];
    for (key, values) in sweep {
        let mut next = Vec::with_capacity(product.len() * values.len());
        for prefix in &product {
            for value in values {
                let mut binding = prefix.clone();
                binding.push(key.clone(), value.clone());
                next.push(binding);
            }
        }
        product = next;
    }
    product
}

fn normalize_name(raw: &str) -> String {
    raw.replace(['_', ' '], "-")
}
