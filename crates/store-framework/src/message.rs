//! # Generic Messages
//!
//! Message types exchanged between a [`StoreClient`](crate::StoreClient) and its
//! [`StoreActor`](crate::StoreActor).

use crate::error::FrameworkError;
use crate::state::StoreState;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by stores.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a store.
///
/// - **Get**: read a snapshot (clone) of the aggregate.
/// - **Apply**: run one [`StoreState::Action`], persist, publish.
/// - **Stop**: refuse further requests; what is already queued is still applied.
#[derive(Debug)]
pub enum StoreRequest<T: StoreState> {
    Get {
        respond_to: Response<T>,
    },
    Apply {
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Stop {
        respond_to: Response<()>,
    },
}
