mod dob_picker;
mod nav;
mod toast;

pub use dob_picker::DobPickerModal;
pub use nav::Nav;
pub use toast::Toast;
