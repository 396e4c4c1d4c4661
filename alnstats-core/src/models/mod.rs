pub mod alignment;

// re-export for cleaner imports
pub use self::alignment::{Alignment, FastaRecord};
