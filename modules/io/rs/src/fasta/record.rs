use derive_getters::{Dissolve, Getters};
use derive_more::Into;
use eyre::Result;
use std::error::Error;

use bioalgo_core_rs::Alignable;

use super::validate;

/// A single FASTA record with the following guarantees:
/// - The ID is non-empty and is represented by an arbitrary UTF-8 string.
/// - The ID can't contain any newline characters (CR or LF).
/// - The sequence must be non-empty and contain only ASCII alphabetic characters.
/// - The sequence is stored uppercase.
#[derive(Debug, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Dissolve, Getters, Into)]
pub struct Record {
    id: String,
    seq: Vec<u8>,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            id: "Default ID".to_string(),
            seq: b"ACGT".to_vec(),
        }
    }
}

impl<ID, SEQ> TryFrom<(ID, SEQ)> for Record
where
    ID: TryInto<String, Error: Error + Send + Sync + 'static>,
    SEQ: TryInto<Vec<u8>, Error: Error + Send + Sync + 'static>,
{
    type Error = eyre::Report;

    fn try_from(value: (ID, SEQ)) -> Result<Self> {
        Self::new(value.0.try_into()?, value.1.try_into()?)
    }
}

impl Record {
    /// Creates a new FASTA record with the given ID and sequence. The sequence is uppercased.
    pub fn new(id: String, mut seq: Vec<u8>) -> Result<Self> {
        validate::id(&id)?;
        validate::seq(&seq)?;
        seq.make_ascii_uppercase();
        Ok(Self { id, seq })
    }

    /// The sequence as a string slice. Always valid since the sequence is ASCII.
    pub fn seq_str(&self) -> &str {
        std::str::from_utf8(&self.seq).unwrap_or_default()
    }

    // Reader-side reuse of the allocations. The caller must call `finalize` afterwards.
    pub(super) fn buffers(&mut self) -> (&mut String, &mut Vec<u8>) {
        (&mut self.id, &mut self.seq)
    }

    pub(super) fn finalize(&mut self) -> Result<()> {
        validate::id(&self.id)?;
        validate::seq(&self.seq)?;
        self.seq.make_ascii_uppercase();
        Ok(())
    }
}

impl Alignable for Record {
    type Symbol = u8;

    #[inline(always)]
    fn len(&self) -> usize {
        self.seq.len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.seq[pos]
    }
}
