pub mod enumerate;

pub use enumerate::*;
