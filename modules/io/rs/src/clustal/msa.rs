use derive_getters::{Dissolve, Getters};
use eyre::{ensure, OptionExt, Result};
use itertools::Itertools;

/// A multiple sequence alignment: named rows of equal length, gaps included.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Getters, Dissolve)]
pub struct Msa {
    ids: Vec<String>,
    rows: Vec<Vec<u8>>,
}

impl Msa {
    pub fn new(rows: Vec<(String, Vec<u8>)>) -> Result<Self> {
        ensure!(
            rows.iter().map(|(_, row)| row.len()).all_equal(),
            "All rows of a multiple sequence alignment must have the same length"
        );
        if let Some(id) = rows.iter().map(|(id, _)| id).duplicates().next() {
            eyre::bail!("Duplicate ID in the multiple sequence alignment: {id}");
        }

        let (ids, rows) = rows.into_iter().unzip();
        Ok(Self { ids, rows })
    }

    /// Number of sequences.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of alignment columns.
    pub fn columns(&self) -> usize {
        self.rows.first().map(|x| x.len()).unwrap_or(0)
    }

    /// Aligned row of the sequence at the given position.
    pub fn sequence(&self, index: usize) -> Result<&[u8]> {
        self.rows
            .get(index)
            .map(|x| x.as_slice())
            .ok_or_eyre(format!(
                "Sequence index {index} is out of range, the alignment has {} sequence(s)",
                self.len()
            ))
    }

    /// Aligned row of the sequence with the given ID.
    pub fn sequence_by_id(&self, id: &str) -> Option<&[u8]> {
        self.ids
            .iter()
            .position(|x| x == id)
            .map(|index| self.rows[index].as_slice())
    }

    /// Symbols of all sequences at the given column.
    pub fn column(&self, index: usize) -> Result<Vec<u8>> {
        ensure!(
            index < self.columns(),
            "Column index {index} is out of range, the alignment has {} column(s)",
            self.columns()
        );
        Ok(self.rows.iter().map(|x| x[index]).collect())
    }

    /// Iterates over `(id, row)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.ids
            .iter()
            .map(|x| x.as_str())
            .zip(self.rows.iter().map(|x| x.as_slice()))
    }
}
