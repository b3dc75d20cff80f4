//! UI Components

pub mod account_details;
pub mod connect_panel;
pub mod install_prompt;
pub mod navbar;
pub mod notice;

pub use account_details::AccountDetails;
pub use connect_panel::ConnectPanel;
pub use install_prompt::InstallPrompt;
pub use navbar::Navbar;
pub use notice::Notice;
