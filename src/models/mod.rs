mod registration;

pub use registration::{AppPage, Gender, RegisterBody};
