//! # StoreState Trait
//!
//! The `StoreState` trait defines the contract every session aggregate (cart, wishlist, …)
//! implements to be owned by the generic [`StoreActor`](crate::StoreActor). It names the
//! persisted slot the aggregate is mirrored into, the mutation enum it accepts, and the
//! synchronous transition that applies one mutation.
//!
//! # Architecture Note
//! The runtime (message loop, hydration, persistence, publishing) is written *once* against
//! this trait. A `Cart` and a `Wishlist` only describe their own transitions.
//!
//! Transitions are plain `fn`s: each one moves the aggregate from one consistent state to the
//! next without suspending, so no intermediate state can ever be observed by a reader.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// Trait that any aggregate must implement to be managed by a [`StoreActor`](crate::StoreActor).
///
/// The serialized form of the aggregate is exactly what lands in the persisted slot, so
/// implementors usually mark their wrapper `#[serde(transparent)]` and persist the bare
/// collection.
///
/// `Default` is the empty aggregate a store falls back to when the slot is absent or corrupt.
pub trait StoreState:
    Clone + Default + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Name of the persisted slot (e.g. `"cart"`).
    const SLOT: &'static str;

    /// Enum of the mutations this aggregate accepts.
    type Action: Send + Debug;

    /// Value handed back to the caller after a mutation commits.
    type ActionResult: Send + Debug;

    /// Apply one mutation in place.
    fn apply(&mut self, action: Self::Action) -> Self::ActionResult;

    /// Number of entries held, used for structured logging.
    fn item_count(&self) -> usize;
}
