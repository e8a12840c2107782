mod conversion;

pub use conversion::{real, to_f64};
