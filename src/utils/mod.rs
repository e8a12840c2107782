pub mod integer;
pub mod range;
pub mod rational;
pub mod reference;

pub use integer::FixedInt;
