//! Mint attempt state
//!
//! One attempt moves `Idle → Loading → {Minted | Failed} → Idle`. The loading
//! flag is owned by a [`LoadingGuard`], so it is cleared on every exit path of
//! [`run_attempt`], including an early return or a panic unwinding through it.
//!
//! Logging out bumps the sink's generation. An attempt that finishes in a
//! later generation belonged to the previous wallet and its result is dropped.

use leptos::prelude::*;
use shared::NftMetadata;

use crate::services::mint::MintApi;
use crate::utils::constants::MINT_FAILED_ALERT;

/// What the mint panel renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MintView {
    pub loading: bool,
    pub minted: Option<NftMetadata>,
    /// Bumped by every [`MintContext::clear`]
    pub generation: u64,
}

/// Where an attempt reports its progress.
pub trait MintSink {
    fn is_loading(&self) -> bool;
    fn set_loading(&self, loading: bool);
    fn set_minted(&self, metadata: NftMetadata);
    fn alert(&self, message: &str);
    /// Changes whenever the wallet the results belong to goes away.
    fn generation(&self) -> u64;
}

/// Holds the loading flag for the lifetime of one attempt.
pub struct LoadingGuard<'a, S: MintSink + ?Sized> {
    sink: &'a S,
}

impl<'a, S: MintSink + ?Sized> LoadingGuard<'a, S> {
    /// Set loading, or `None` if an attempt is already in flight.
    pub fn start(sink: &'a S) -> Option<Self> {
        if sink.is_loading() {
            return None;
        }
        sink.set_loading(true);
        Some(Self { sink })
    }
}

impl<S: MintSink + ?Sized> Drop for LoadingGuard<'_, S> {
    fn drop(&mut self) {
        self.sink.set_loading(false);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Token id of the minted NFT
    Minted(String),
    Failed,
    /// Another attempt was still loading
    Skipped,
    /// The wallet logged out while the request was in flight
    Discarded,
}

/// Mint one token to `address`, reporting through `sink`.
pub async fn run_attempt<S, A>(sink: &S, api: &A, address: &str) -> AttemptOutcome
where
    S: MintSink + ?Sized,
    A: MintApi + ?Sized,
{
    let Some(_loading) = LoadingGuard::start(sink) else {
        log::debug!("[MINT] Attempt ignored, one is already in flight");
        return AttemptOutcome::Skipped;
    };
    let generation = sink.generation();

    let result = api.mint(address).await;
    if sink.generation() != generation {
        log::info!("[MINT] Wallet {} logged out during the attempt, result dropped", address);
        return AttemptOutcome::Discarded;
    }

    match result {
        Ok(metadata) => {
            log::info!("[MINT] Minted {} ({})", metadata.id, metadata.display_name());
            let id = metadata.id.clone();
            sink.set_minted(metadata);
            AttemptOutcome::Minted(id)
        }
        Err(e) => {
            log::error!("[MINT] Mint to {} failed: {}", address, e);
            sink.alert(MINT_FAILED_ALERT);
            AttemptOutcome::Failed
        }
    }
}

/// Global mint context
#[derive(Clone, Copy)]
pub struct MintContext {
    pub view: RwSignal<MintView>,
}

impl MintContext {
    pub fn new() -> Self {
        Self {
            view: RwSignal::new(MintView::default()),
        }
    }

    pub fn loading(&self) -> bool {
        self.view.with(|v| v.loading)
    }

    pub fn minted(&self) -> Option<NftMetadata> {
        self.view.with(|v| v.minted.clone())
    }

    /// Forget the last minted token and orphan any attempt in flight (on logout).
    pub fn clear(&self) {
        self.view.update(|v| {
            v.minted = None;
            v.generation += 1;
        });
    }
}

impl Default for MintContext {
    fn default() -> Self {
        Self::new()
    }
}

impl MintSink for MintContext {
    fn is_loading(&self) -> bool {
        self.view.with_untracked(|v| v.loading)
    }

    fn set_loading(&self, loading: bool) {
        self.view.update(|v| v.loading = loading);
    }

    fn set_minted(&self, metadata: NftMetadata) {
        self.view.update(|v| v.minted = Some(metadata));
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("[MINT] No window to alert: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("[MINT] Alert failed: {:?}", e);
        }
    }

    fn generation(&self) -> u64 {
        self.view.with_untracked(|v| v.generation)
    }
}

pub fn provide_mint_context() -> MintContext {
    let context = MintContext::new();
    provide_context(context);
    context
}

pub fn use_mint_context() -> MintContext {
    expect_context::<MintContext>()
}
