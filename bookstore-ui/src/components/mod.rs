//! Shared UI components

pub mod admin_header;
pub mod book_detail;
pub mod book_list;
pub mod book_table;
pub mod button;
pub mod helpers;
pub mod icons;
pub mod login;
pub mod modal;
pub mod text_input;

pub use admin_header::AdminHeaderView;
pub use book_detail::{AddBookNoticeView, BookDetailView};
pub use book_list::BookListView;
pub use book_table::BookTableView;
pub use button::{Button, ButtonVariant, ChromelessButton};
pub use helpers::{BackButton, ConfirmDialogView, ErrorDisplay, LoadingSpinner};
pub use icons::{BookOpenIcon, LockIcon, LogOutIcon, PencilIcon, PlusIcon, TrashIcon};
pub use login::LoginView;
pub use modal::Modal;
pub use text_input::{TextInput, TextInputKind};
