pub mod product;
pub mod raw;

pub use product::*;
pub use raw::*;
