use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};

/// Inverse document frequency of every term seen in a collection of units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdfTable {
    idfs: HashMap<String, f64>,
    unit_count: usize,
}

impl IdfTable {
    pub fn get(&self, term: &str) -> Option<f64> {
        self.idfs.get(term).copied()
    }

    /// IDF of `term`, or zero for a term the collection never contained.
    pub fn weight(&self, term: &str) -> f64 {
        self.get(term).unwrap_or(0.0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.idfs.contains_key(term)
    }

    /// Number of units the table was computed over.
    pub const fn unit_count(&self) -> usize {
        self.unit_count
    }

    pub fn len(&self) -> usize {
        self.idfs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idfs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.idfs.iter().map(|(term, idf)| (term.as_str(), *idf))
    }
}

/// Computes `units / units containing term` for every term in `units`.
///
/// Terms are lower-cased, and a term repeated inside one unit is counted once for that
/// unit. Fails with [`Error::EmptyCollection`] when there are no units at all.
pub fn compute_idf<'a, I, S>(units: I) -> Result<IdfTable>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<[String]> + ?Sized + 'a,
{
    let mut unit_count = 0usize;
    let mut containing: HashMap<String, usize> = HashMap::new();

    for tokens in units {
        unit_count += 1;

        let distinct: HashSet<String> = tokens
            .as_ref()
            .iter()
            .map(|token| token.to_lowercase())
            .collect();
        for term in distinct {
            *containing.entry(term).or_insert(0) += 1;
        }
    }

    if unit_count == 0 {
        return Err(Error::EmptyCollection);
    }

    let idfs = containing
        .into_iter()
        .map(|(term, count)| (term, unit_count as f64 / count as f64))
        .collect();

    Ok(IdfTable { idfs, unit_count })
}
