//! Application Layer
//!
//! Use cases and application services.

pub mod get_order;
pub mod order_lifecycle;
pub mod place_order;

// Re-exports
pub use get_order::{GetOrderUseCase, OrderItemView, OrderView};
pub use order_lifecycle::{
    CancelOrderUseCase, CompleteOrderUseCase, ConfirmOrderUseCase, ShipOrderUseCase,
};
pub use place_order::{PlaceOrderInput, PlaceOrderOutput, PlaceOrderUseCase, ProductInput};
