//! # Framework Errors
//!
//! Errors raised by the store runtime itself, independent of any aggregate.
//! Both variants mean the caller is talking to a store that is no longer running, i.e. it is
//! used outside of an active session. That is a wiring bug, so clients surface it instead of
//! swallowing it.

/// Errors that can occur within the store framework itself.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Store closed: no running session owns this store")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
}
