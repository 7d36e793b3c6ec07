pub mod inspect;
pub mod scan;

pub use inspect::*;
pub use scan::*;
