use crate::{
    domain::requests::CreateOrderItemRequest,
    errors::RepositoryError,
    model::{Product, Table},
};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Largest total an `orders.total_amount NUMERIC(10, 2)` column can hold.
fn max_order_total() -> Decimal {
    Decimal::new(9_999_999_999, 2)
}

/// One order line with the product price frozen at planning time.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftLine {
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftRejection {
    NotFound(String),
    Conflict(String),
}

impl From<DraftRejection> for RepositoryError {
    fn from(value: DraftRejection) -> Self {
        match value {
            DraftRejection::NotFound(msg) => RepositoryError::NotFound(msg),
            DraftRejection::Conflict(msg) => RepositoryError::Conflict(msg),
        }
    }
}

/// A checked order ready to be written: every line is priced and the stock
/// needed per product is known.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub table_id: i32,
    pub lines: Vec<DraftLine>,
    pub total_amount: Decimal,
    pub stock_demand: Vec<(i32, i32)>,
}

impl OrderDraft {
    /// Checks the locked table and product rows against the requested lines.
    ///
    /// Table problems are reported before product problems, and lines are
    /// checked in request order. Stock is compared against the running total
    /// of a product across all lines seen so far.
    pub fn plan(
        table_id: i32,
        table: Option<&Table>,
        products: &[Product],
        items: &[CreateOrderItemRequest],
    ) -> Result<Self, DraftRejection> {
        let table = table.ok_or_else(|| DraftRejection::NotFound("Table not found".into()))?;
        if !table.is_available() {
            return Err(DraftRejection::Conflict("Table is not available".into()));
        }

        let by_id: HashMap<i32, &Product> = products.iter().map(|p| (p.id, p)).collect();

        let mut demand: HashMap<i32, i32> = HashMap::new();
        let mut demand_order = Vec::new();
        let mut lines = Vec::with_capacity(items.len());
        let mut total_amount = Decimal::ZERO;

        for item in items {
            let product = by_id.get(&item.product_id).ok_or_else(|| {
                DraftRejection::NotFound(format!("Product {} not found", item.product_id))
            })?;

            if !product.is_active {
                return Err(DraftRejection::Conflict(format!(
                    "Product {} is not available",
                    product.name
                )));
            }

            let insufficient = || {
                DraftRejection::Conflict(format!(
                    "Insufficient stock for product {}",
                    product.name
                ))
            };

            let requested = demand.entry(product.id).or_insert_with(|| {
                demand_order.push(product.id);
                0
            });
            *requested = requested
                .checked_add(item.quantity)
                .ok_or_else(insufficient)?;

            if *requested > product.stock {
                return Err(insufficient());
            }

            total_amount = product
                .price
                .checked_mul(Decimal::from(item.quantity))
                .and_then(|line_total| total_amount.checked_add(line_total))
                .filter(|total| *total <= max_order_total())
                .ok_or_else(|| {
                    DraftRejection::Conflict("Order total exceeds the allowed maximum".into())
                })?;
            lines.push(DraftLine {
                product_id: product.id,
                quantity: item.quantity,
                unit_price: product.price,
                notes: item.notes.clone(),
            });
        }

        let stock_demand = demand_order
            .into_iter()
            .map(|id| (id, demand[&id]))
            .collect();

        Ok(OrderDraft {
            table_id,
            lines,
            total_amount,
            stock_demand,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableStatus;
    use chrono::Utc;
    use std::str::FromStr;

    fn table(status: TableStatus, is_active: bool) -> Table {
        Table {
            id: 1,
            status,
            capacity: 4,
            is_active,
            created_at: Utc::now(),
        }
    }

    fn product(id: i32, price: &str, stock: i32, is_active: bool) -> Product {
        Product {
            id,
            name: format!("product-{id}"),
            price: Decimal::from_str(price).unwrap(),
            category: "coffee".into(),
            description: None,
            stock,
            is_active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn line(product_id: i32, quantity: i32) -> CreateOrderItemRequest {
        CreateOrderItemRequest {
            product_id,
            quantity,
            notes: None,
        }
    }

    #[test]
    fn prices_lines_and_sums_total() {
        let free = table(TableStatus::Free, true);
        let products = [product(1, "2.50", 10, true), product(2, "1.25", 10, true)];

        let draft =
            OrderDraft::plan(1, Some(&free), &products, &[line(1, 2), line(2, 3)]).unwrap();

        assert_eq!(draft.total_amount, Decimal::from_str("8.75").unwrap());
        assert_eq!(draft.lines.len(), 2);
        assert_eq!(draft.lines[0].unit_price, Decimal::from_str("2.50").unwrap());
        assert_eq!(draft.stock_demand, vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn missing_table_wins_over_product_errors() {
        let err = OrderDraft::plan(1, None, &[], &[line(99, 1)]).unwrap_err();
        assert_eq!(err, DraftRejection::NotFound("Table not found".into()));
    }

    #[test]
    fn busy_or_inactive_table_is_a_conflict() {
        let products = [product(1, "2.50", 10, true)];

        for t in [
            table(TableStatus::Occupied, true),
            table(TableStatus::PendingPayment, true),
            table(TableStatus::Free, false),
        ] {
            let err = OrderDraft::plan(1, Some(&t), &products, &[line(1, 1)]).unwrap_err();
            assert!(matches!(err, DraftRejection::Conflict(_)));
        }
    }

    #[test]
    fn first_bad_line_in_request_order_is_reported() {
        let free = table(TableStatus::Free, true);
        let products = [product(1, "2.50", 0, true), product(2, "1.00", 5, false)];

        let err =
            OrderDraft::plan(1, Some(&free), &products, &[line(2, 1), line(1, 1)]).unwrap_err();
        assert_eq!(
            err,
            DraftRejection::Conflict("Product product-2 is not available".into())
        );

        let err = OrderDraft::plan(1, Some(&free), &products, &[line(7, 1), line(2, 1)])
            .unwrap_err();
        assert_eq!(err, DraftRejection::NotFound("Product 7 not found".into()));
    }

    #[test]
    fn repeated_product_counts_against_stock_cumulatively() {
        let free = table(TableStatus::Free, true);
        let products = [product(1, "2.50", 3, true)];

        let err =
            OrderDraft::plan(1, Some(&free), &products, &[line(1, 2), line(1, 2)]).unwrap_err();
        assert_eq!(
            err,
            DraftRejection::Conflict("Insufficient stock for product product-1".into())
        );

        let draft =
            OrderDraft::plan(1, Some(&free), &products, &[line(1, 2), line(1, 1)]).unwrap();
        assert_eq!(draft.stock_demand, vec![(1, 3)]);
    }

    #[test]
    fn quantity_sum_that_overflows_is_rejected() {
        let free = table(TableStatus::Free, true);
        let products = [product(1, "0.01", 2_100_000_000, true)];

        let err = OrderDraft::plan(
            1,
            Some(&free),
            &products,
            &[line(1, 2_000_000_000), line(1, 2_000_000_000)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            DraftRejection::Conflict("Insufficient stock for product product-1".into())
        );
    }

    #[test]
    fn total_beyond_column_capacity_is_rejected() {
        assert_eq!(max_order_total(), Decimal::from_str("99999999.99").unwrap());

        let free = table(TableStatus::Free, true);
        let products = [product(1, "2.50", 100_000_000, true)];

        let err =
            OrderDraft::plan(1, Some(&free), &products, &[line(1, 50_000_000)]).unwrap_err();
        assert_eq!(
            err,
            DraftRejection::Conflict("Order total exceeds the allowed maximum".into())
        );

        let draft =
            OrderDraft::plan(1, Some(&free), &products, &[line(1, 39_999_999)]).unwrap();
        assert_eq!(draft.total_amount, Decimal::from_str("99999997.50").unwrap());
    }
}
