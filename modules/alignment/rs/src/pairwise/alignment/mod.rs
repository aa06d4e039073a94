pub use alignment::{Alignment, GAP};
pub use column::Column;
pub use op::Op;
pub use step::Step;

mod alignment;
mod column;
mod op;
mod step;
