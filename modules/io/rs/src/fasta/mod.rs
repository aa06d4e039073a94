use ahash::HashMap;
use eyre::{bail, Result};

mod reader;
mod record;
pub mod validate;

pub use reader::Reader;
pub use record::Record;

/// Maps record IDs to their sequences. Fails on duplicate IDs.
pub fn index(records: impl IntoIterator<Item = Record>) -> Result<HashMap<String, Vec<u8>>> {
    let mut index = HashMap::default();
    for record in records {
        let (id, seq) = record.dissolve();
        if index.contains_key(&id) {
            bail!("Duplicate FASTA ID: {id}");
        }
        index.insert(id, seq);
    }
    Ok(index)
}
