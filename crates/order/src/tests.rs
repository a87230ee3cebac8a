//! Unit tests for order crate
//!
//! Use-case level tests running against the in-memory repository.

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;
    use uuid::Uuid;

    use kernel::id::OrderId;

    use crate::application::get_order::GetOrderUseCase;
    use crate::application::order_lifecycle::{
        CancelOrderUseCase, CompleteOrderUseCase, ConfirmOrderUseCase, ShipOrderUseCase,
    };
    use crate::application::place_order::{
        AddressInput, PlaceOrderInput, PlaceOrderUseCase, ProductInput,
    };
    use crate::domain::value_object::order_status::OrderStatus;
    use crate::error::OrderError;
    use crate::infra::memory::InMemoryOrderRepository;

    fn repo() -> Arc<InMemoryOrderRepository> {
        Arc::new(InMemoryOrderRepository::new())
    }

    fn address_input() -> AddressInput {
        AddressInput {
            street: "123 Main St".to_string(),
            city: "Anytown".to_string(),
            state: "CA".to_string(),
            postal_code: "90210".to_string(),
            country: "USA".to_string(),
        }
    }

    fn product_input(price_cents: i64) -> ProductInput {
        ProductInput {
            product_id: Uuid::new_v4(),
            name: "Widget".to_string(),
            currency: "AUD".to_string(),
            price: Decimal::new(price_cents, 2),
            sku: "SKU-1".to_string(),
        }
    }

    fn place_input(products: Vec<ProductInput>) -> PlaceOrderInput {
        PlaceOrderInput {
            customer_id: Uuid::new_v4(),
            shipping_address: address_input(),
            billing_address: None,
            products,
        }
    }

    async fn place(repo: &Arc<InMemoryOrderRepository>) -> OrderId {
        PlaceOrderUseCase::new(repo.clone())
            .execute(place_input(vec![product_input(1000)]))
            .await
            .unwrap()
            .order_id
    }

    #[tokio::test]
    async fn test_place_then_fetch_order() {
        let repo = repo();
        let place_uc = PlaceOrderUseCase::new(repo.clone());
        let get = GetOrderUseCase::new(repo.clone());

        let input = place_input(vec![product_input(1000), product_input(2550)]);
        let customer_id = input.customer_id;
        let output = place_uc.execute(input).await.unwrap();

        let view = get.by_id(&output.order_id).await.unwrap();
        assert_eq!(view.customer_id, customer_id);
        assert_eq!(view.status, OrderStatus::Placed);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].currency, "AUD");
        assert_eq!(view.items[0].price, Decimal::new(1000, 2));
        assert!(view.billing_address.is_none());
    }

    #[tokio::test]
    async fn test_place_with_no_products_fails() {
        let repo = repo();
        let place_uc = PlaceOrderUseCase::new(repo.clone());

        let err = place_uc.execute(place_input(vec![])).await.unwrap_err();
        assert!(
            err.to_string()
                .contains("An order must contain at least one item.")
        );
        assert_eq!(repo.committed_count().await, 0);
    }

    #[tokio::test]
    async fn test_place_rejects_invalid_inputs() {
        let repo = repo();
        let place_uc = PlaceOrderUseCase::new(repo.clone());

        // Nil customer id
        let mut input = place_input(vec![product_input(1000)]);
        input.customer_id = Uuid::nil();
        assert!(place_uc.execute(input).await.is_err());

        // Non-positive price
        let mut bad_product = product_input(0);
        bad_product.price = Decimal::ZERO;
        let input = place_input(vec![bad_product]);
        assert!(place_uc.execute(input).await.is_err());

        // Empty SKU
        let mut bad_product = product_input(1000);
        bad_product.sku = String::new();
        let input = place_input(vec![bad_product]);
        assert!(place_uc.execute(input).await.is_err());
    }

    #[tokio::test]
    async fn test_full_lifecycle_through_use_cases() {
        let repo = repo();
        let get = GetOrderUseCase::new(repo.clone());
        let order_id = place(&repo).await;

        ConfirmOrderUseCase::new(repo.clone())
            .execute(&order_id)
            .await
            .unwrap();
        assert_eq!(
            get.by_id(&order_id).await.unwrap().status,
            OrderStatus::Confirmed
        );

        ShipOrderUseCase::new(repo.clone())
            .execute(&order_id)
            .await
            .unwrap();
        assert_eq!(
            get.by_id(&order_id).await.unwrap().status,
            OrderStatus::Shipped
        );

        CompleteOrderUseCase::new(repo.clone())
            .execute(&order_id)
            .await
            .unwrap();
        assert_eq!(
            get.by_id(&order_id).await.unwrap().status,
            OrderStatus::Completed
        );
    }

    #[tokio::test]
    async fn test_invalid_transition_leaves_persisted_state_alone() {
        let repo = repo();
        let get = GetOrderUseCase::new(repo.clone());
        let order_id = place(&repo).await;

        // Shipping a placed order is invalid
        let err = ShipOrderUseCase::new(repo.clone())
            .execute(&order_id)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Only a confirmed order"));
        assert_eq!(
            get.by_id(&order_id).await.unwrap().status,
            OrderStatus::Placed
        );
    }

    #[tokio::test]
    async fn test_cancel_before_shipment_and_reject_after() {
        let repo = repo();
        let get = GetOrderUseCase::new(repo.clone());
        let cancel = CancelOrderUseCase::new(repo.clone());

        let cancellable = place(&repo).await;
        cancel.execute(&cancellable).await.unwrap();
        assert_eq!(
            get.by_id(&cancellable).await.unwrap().status,
            OrderStatus::Cancelled
        );

        let shipped = place(&repo).await;
        ConfirmOrderUseCase::new(repo.clone())
            .execute(&shipped)
            .await
            .unwrap();
        ShipOrderUseCase::new(repo.clone())
            .execute(&shipped)
            .await
            .unwrap();

        let err = cancel.execute(&shipped).await.unwrap_err();
        assert!(
            err.to_string()
                .contains("Cannot cancel an order that is already Shipped.")
        );
    }

    #[tokio::test]
    async fn test_not_found_paths() {
        let repo = repo();
        let missing = OrderId::new();

        assert!(matches!(
            GetOrderUseCase::new(repo.clone())
                .by_id(&missing)
                .await
                .unwrap_err(),
            OrderError::NotFound
        ));
        assert!(matches!(
            ConfirmOrderUseCase::new(repo.clone())
                .execute(&missing)
                .await
                .unwrap_err(),
            OrderError::NotFound
        ));
        assert!(matches!(
            CancelOrderUseCase::new(repo.clone())
                .execute(&missing)
                .await
                .unwrap_err(),
            OrderError::NotFound
        ));
    }
}
