pub mod chart;
pub mod keys;
pub mod pivot;
pub mod record;
pub mod rollup;

pub use chart::*;
pub use keys::*;
pub use pivot::*;
pub use record::*;
pub use rollup::*;
