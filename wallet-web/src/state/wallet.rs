//! Wallet state management

use leptos::prelude::*;

/// Login state of the email-link wallet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalletState {
    /// Asking the provider whether a session survived the reload
    Restoring,
    LoggedOut,
    LoggingIn,
    LoggedIn { address: String },
    /// Login failed, the form stays visible with this message
    Error(String),
}

impl WalletState {
    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::LoggedIn { address } => Some(address),
            _ => None,
        }
    }

    /// True while the provider has not answered yet.
    pub fn is_pending(&self) -> bool {
        matches!(self, WalletState::Restoring | WalletState::LoggingIn)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WalletState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
}

impl WalletContext {
    pub fn new() -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Restoring),
        }
    }

    pub fn address(&self) -> Option<String> {
        self.wallet.with(|state| state.address().map(|s| s.to_string()))
    }

    pub fn is_pending(&self) -> bool {
        self.wallet.with(WalletState::is_pending)
    }

    pub fn error(&self) -> Option<String> {
        self.wallet.with(|state| state.error().map(|s| s.to_string()))
    }

    pub fn set_logging_in(&self) {
        self.wallet.set(WalletState::LoggingIn);
    }

    pub fn set_logged_in(&self, address: String) {
        self.wallet.set(WalletState::LoggedIn { address });
    }

    pub fn set_error(&self, error: String) {
        self.wallet.set(WalletState::Error(error));
    }

    pub fn set_logged_out(&self) {
        self.wallet.set(WalletState::LoggedOut);
    }
}

impl Default for WalletContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_wallet_context() -> WalletContext {
    let context = WalletContext::new();
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_accessors() {
        let state = WalletState::LoggedIn {
            address: "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".to_string(),
        };
        assert_eq!(state.address(), Some("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"));
        assert!(!state.is_pending());

        assert!(WalletState::Restoring.is_pending());
        assert!(WalletState::LoggingIn.is_pending());
        assert_eq!(WalletState::LoggingIn.address(), None);
        assert_eq!(WalletState::Error("expired link".to_string()).error(), Some("expired link"));
    }
}
