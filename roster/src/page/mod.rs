pub mod admin_page;
pub mod dialogs;

pub use admin_page::AdminPage;
pub use dialogs::{Dialogs, ScriptedDialogs};
