//! Common helper UI components

mod back_button;
mod confirm_dialog;
mod error_display;
mod loading_spinner;

pub use back_button::BackButton;
pub use confirm_dialog::ConfirmDialogView;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
