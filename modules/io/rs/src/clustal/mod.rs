mod msa;
mod reader;

pub use msa::Msa;
pub use reader::{read, read_path};
