//! # HTTP Request Handlers
//!
//! Axum handlers. Business logic lives in [`crate::services`].
//!
//! ## Handler Modules
//!
//! - **[`mint`]**: NFT drop endpoints
//!   - `POST /api/mint-nft` - Claim one token to an address
//!   - `GET /api/config` - Public facts about the drop
//!
//! ## Error Handling
//!
//! Handlers return `Result<Json<T>, AppError>`. `AppError` renders itself as
//! `{"error": <message>, "code": <kind>}` with the matching status.
//!
//! ## Request/Response Flow
//!
//! ```text
//! Client Request
//!     ↓
//! CORS (tower-http) → Request stamp → Trace span → Logging → Response mapping
//!     ↓
//! Handler → MintService → DropSdk
//!     ↓
//! Client Response (JSON, X-Request-ID)
//! ```

pub mod mint;
