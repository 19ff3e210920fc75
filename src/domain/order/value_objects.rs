use serde::{Deserialize, Serialize};

// ============================================================================
// Order Value Objects
// ============================================================================
//
// `NewOrder` / `NewLineItem` are what callers submit (no ids).
// `Order` / `OrderLineItem` are what the store hands back, with every id
// assigned by the store.
//
// ============================================================================

/// One product entry submitted with an order.
///
/// Extra fields such as a display `name` are accepted and dropped.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewLineItem {
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: f64,
}

/// Order payload used for both create and replace.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NewOrder {
    pub order_number: String,
    pub date: String,
    pub final_price: f64,
    #[serde(default)]
    pub products: Vec<NewLineItem>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct OrderLineItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub unit_price: f64,
}

impl OrderLineItem {
    pub fn from_new(id: i64, order_id: i64, item: &NewLineItem) -> Self {
        Self {
            id,
            order_id,
            product_id: item.product_id,
            quantity: item.quantity,
            unit_price: item.unit_price,
        }
    }
}

/// An order together with its owned line items (the aggregate).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub date: String,
    pub final_price: f64,
    pub products: Vec<OrderLineItem>,
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_from_request_body() {
        let body = r#"{
            "order_number": "A1",
            "date": "2024-01-01",
            "final_price": 19.98,
            "products": [
                {"product_id": 1, "quantity": 2, "unit_price": 9.99, "name": "Widget"}
            ]
        }"#;

        let order: NewOrder = serde_json::from_str(body).unwrap();

        assert_eq!(order.order_number, "A1");
        assert_eq!(order.date, "2024-01-01");
        assert_eq!(order.final_price, 19.98);
        assert_eq!(
            order.products,
            vec![NewLineItem {
                product_id: 1,
                quantity: 2,
                unit_price: 9.99,
            }]
        );
    }

    #[test]
    fn test_new_order_without_products() {
        let body = r#"{"order_number": "A2", "date": "2024-02-01", "final_price": 0.0}"#;
        let order: NewOrder = serde_json::from_str(body).unwrap();
        assert!(order.products.is_empty());
    }

    #[test]
    fn test_new_order_rejects_missing_order_number() {
        let body = r#"{"date": "2024-02-01", "final_price": 1.0, "products": []}"#;
        assert!(serde_json::from_str::<NewOrder>(body).is_err());
    }

    #[test]
    fn test_line_item_from_new() {
        let item = NewLineItem {
            product_id: 42,
            quantity: 3,
            unit_price: 1.5,
        };

        let stored = OrderLineItem::from_new(7, 9, &item);

        assert_eq!(stored.id, 7);
        assert_eq!(stored.order_id, 9);
        assert_eq!(stored.product_id, 42);
        assert_eq!(stored.quantity, 3);
        assert_eq!(stored.unit_price, 1.5);
    }

    #[test]
    fn test_order_response_shape() {
        let order = Order {
            id: 1,
            order_number: "A1".to_string(),
            date: "2024-01-01".to_string(),
            final_price: 19.98,
            products: vec![OrderLineItem {
                id: 10,
                order_id: 1,
                product_id: 1,
                quantity: 2,
                unit_price: 9.99,
            }],
        };

        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["order_number"], "A1");
        assert_eq!(json["products"][0]["id"], 10);
        assert_eq!(json["products"][0]["order_id"], 1);
        assert_eq!(json["products"][0]["unit_price"], 9.99);
    }
}
