//! Terminal output

pub mod icons;
pub mod printer;

pub use icons::{Icons, StatusIcon};
pub use printer::StatusPrinter;
