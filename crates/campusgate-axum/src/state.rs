//! Shared application state type.
//!
//! Defines the `AppState` type used across all handlers and routers.

use crate::bootstrap::GatewayContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// An Arc-wrapped `GatewayContext` carrying the resolved configuration
/// and the active gateway mode.
pub type AppState = Arc<GatewayContext>;
