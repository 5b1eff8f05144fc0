//! UI Components

pub mod login_form;
pub mod mint_panel;
pub mod nft_card;

pub use login_form::LoginForm;
pub use mint_panel::MintPanel;
pub use nft_card::NftCard;
