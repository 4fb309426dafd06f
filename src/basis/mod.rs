//! Named generator intervals and their factorization machinery.
//!
//! A [GeneratorTable] is an ordered list of labeled basis intervals (the
//! order matters: it is the enumeration order of the factorization
//! search). A label of the form `1/X` denotes the multiplicative inverse
//! of the entry labeled `X` and is checked to be exactly that inverse.

use std::{error::Error, fmt};

use crate::value::ExactValue;

mod search;

pub use search::{create_scale_from_scale, find_factors, Factorization};

/// A single labeled basis interval.
#[derive(Clone, Debug, PartialEq)]
pub struct Generator {
    pub label: String,
    pub value: ExactValue,
}

impl Generator {
    pub fn new(label: impl Into<String>, value: ExactValue) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// An ordered table of named generator intervals.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorTable {
    entries: Vec<Generator>,
}

impl GeneratorTable {
    /// Build a table, checking that labels are unique and that every
    /// `1/X` entry is exactly the inverse of the `X` entry.
    pub fn new(entries: Vec<Generator>) -> Result<Self, TableErr> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|other| other.label == entry.label) {
                return Err(TableErr::DuplicateLabel(entry.label.clone()));
            }
        }
        for entry in &entries {
            if let Some(base_label) = entry.label.strip_prefix("1/") {
                match entries.iter().find(|other| other.label == base_label) {
                    Some(base) => {
                        if base.value.recip() != entry.value {
                            return Err(TableErr::InverseMismatch(entry.label.clone()));
                        }
                    }
                    None {} => {
                        return Err(TableErr::MissingInverseTarget(entry.label.clone()));
                    }
                }
            }
        }
        Ok(Self { entries })
    }

    /// Build a table from base generators, appending the `1/X` inverse of
    /// every entry.
    pub fn with_reciprocals(base: Vec<Generator>) -> Result<Self, TableErr> {
        let mut entries = base.clone();
        for generator in base {
            entries.push(Generator::new(
                format!("1/{}", generator.label),
                generator.value.recip(),
            ));
        }
        Self::new(entries)
    }

    pub fn get(&self, label: &str) -> Option<&ExactValue> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| &entry.value)
    }

    pub fn entries(&self) -> &[Generator] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One row of a tone table: a named degree, its symbolic factoring over
/// some generator table, and the exact value of that factoring.
#[derive(Clone, Debug, PartialEq)]
pub struct ToneTableEntry {
    pub name: String,
    pub factors: Vec<String>,
    pub value: ExactValue,
}

#[derive(Debug, PartialEq)]
pub enum TableErr {
    DuplicateLabel(String),
    InverseMismatch(String),
    MissingInverseTarget(String),
}

impl fmt::Display for TableErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableErr::DuplicateLabel(label) => {
                write!(f, "generator table defines the label '{}' twice", label)
            }
            TableErr::InverseMismatch(label) => write!(
                f,
                "generator '{}' is not the exact inverse of its base entry",
                label
            ),
            TableErr::MissingInverseTarget(label) => write!(
                f,
                "generator '{}' refers to a base entry that is not in the table",
                label
            ),
        }
    }
}

impl Error for TableErr {}

#[derive(Debug, PartialEq)]
pub enum SearchErr {
    ZeroMaxTerms,
    EmptyToneTable,
}

impl fmt::Display for SearchErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchErr::ZeroMaxTerms => {
                write!(f, "factorization search needs max_terms >= 1")
            }
            SearchErr::EmptyToneTable => {
                write!(f, "tone-table lookup needs a non-empty tone table")
            }
        }
    }
}

impl Error for SearchErr {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::value::Rational;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_lookup_and_order() {
        let table = GeneratorTable::new(vec![
            Generator::new("T", ExactValue::rational(9, 8)),
            Generator::new("s", ExactValue::rational(16, 15)),
        ])
        .unwrap();
        assert_eq!(table.get("T"), Some(&ExactValue::rational(9, 8)));
        assert_eq!(table.get("x"), None {});
        assert_eq!(table.entries()[0].label, "T");
    }

    #[test]
    fn test_reciprocal_labels_reconcile() {
        let table = GeneratorTable::with_reciprocals(vec![Generator::new(
            "T",
            ExactValue::rational(9, 8),
        )])
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("1/T"), Some(&ExactValue::rational(8, 9)));

        let bad = GeneratorTable::new(vec![
            Generator::new("T", ExactValue::rational(9, 8)),
            Generator::new("1/T", ExactValue::rational(9, 10)),
        ]);
        assert_eq!(bad, Err(TableErr::InverseMismatch("1/T".into())));

        let dangling = GeneratorTable::new(vec![Generator::new(
            "1/T",
            ExactValue::rational(8, 9),
        )]);
        assert_eq!(dangling, Err(TableErr::MissingInverseTarget("1/T".into())));
    }

    #[test]
    fn test_duplicate_labels_rejected() {
        let dup = GeneratorTable::new(vec![
            Generator::new("T", ExactValue::rational(9, 8)),
            Generator::new("T", ExactValue::rational(10, 9)),
        ]);
        assert_eq!(dup, Err(TableErr::DuplicateLabel("T".into())));
    }

    #[test]
    fn test_irrational_reciprocal() {
        let semitone = ExactValue::integer(2).pow(Rational::new(1, 12));
        let table =
            GeneratorTable::with_reciprocals(vec![Generator::new("s", semitone.clone())]).unwrap();
        assert_eq!(
            table.get("1/s"),
            Some(&ExactValue::integer(2).pow(Rational::new(-1, 12)))
        );
    }
}
