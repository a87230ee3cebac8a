//! Order Status
//!
//! Lifecycle states of an order. `Draft` is kept for compatibility with
//! stored data but the aggregate factory only produces `Placed` onward.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Initial stage while a cart is still being assembled
    Draft,
    /// Submitted and awaiting payment processing
    Placed,
    /// Payment processed, awaiting fulfillment
    Confirmed,
    /// In transit, awaiting final completion
    Shipped,
    /// Delivered and completed
    Completed,
    /// Cancelled, will not be fulfilled
    Cancelled,
}
