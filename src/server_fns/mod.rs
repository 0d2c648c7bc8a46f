mod registration;

pub use registration::*;
