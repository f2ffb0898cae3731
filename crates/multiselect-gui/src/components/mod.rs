mod multi_select;
pub mod palette;

pub use multi_select::{MultiSelectResponse, MultiSelectWidget};
