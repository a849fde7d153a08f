//! UI Components

pub mod holders_panel;
pub mod navbar;
pub mod ownership_chart;
pub mod progress;
pub mod purchase_modal;
pub mod token_card;
pub mod toast;
pub mod transfers_table;
pub mod wallet_button;

pub use holders_panel::HoldersPanel;
pub use navbar::Navbar;
pub use ownership_chart::OwnershipChart;
pub use progress::ProgressBar;
pub use purchase_modal::PurchaseModal;
pub use token_card::TokenCard;
pub use toast::ToastStack;
pub use transfers_table::TransfersTable;
pub use wallet_button::WalletButton;
