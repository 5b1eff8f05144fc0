//! Minted token card

use leptos::prelude::*;
use shared::{resolve_media_url, MediaKind, NftMetadata, DEFAULT_IPFS_GATEWAY};

#[component]
pub fn NftCard(metadata: NftMetadata) -> impl IntoView {
    let name = metadata.display_name();
    let description = metadata.description.clone();

    let media = match metadata.media() {
        Some((MediaKind::Image, url)) => {
            let src = resolve_media_url(url, DEFAULT_IPFS_GATEWAY);
            view! { <img src=src alt=name.clone()/> }.into_any()
        }
        Some((MediaKind::Animation, url)) => {
            let src = resolve_media_url(url, DEFAULT_IPFS_GATEWAY);
            view! { <video src=src controls=true autoplay=true muted=true></video> }
                .into_any()
        }
        None => view! { <p class="address">"No media"</p> }.into_any(),
    };

    view! {
        <div class="nft-card">
            {media}
            <h2>{name}</h2>
            {description.map(|d| view! { <p>{d}</p> })}
            <p class="address">"Token #" {metadata.id}</p>
        </div>
    }
}
