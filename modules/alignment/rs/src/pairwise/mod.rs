pub use alignment::{Alignment, Column, Op, Step};

pub mod alignment;
pub mod edit;
