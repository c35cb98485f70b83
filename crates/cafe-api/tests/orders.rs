mod common;

use axum::http::StatusCode;
use common::TestApp;
use rust_decimal::Decimal;
use serde_json::json;
use shared::model::{OrderStatus, PaymentMethod, TableStatus};
use std::str::FromStr;

#[tokio::test]
async fn placing_an_order_occupies_the_table_and_takes_stock() {
    let app = TestApp::new();
    let admin = app.token_for("admin", "admin").await;
    let table = app.create_table(&admin, 4).await;
    let product = app.create_product(&admin, "Americano", "2.50", 100).await;

    let (status, order) = app
        .post(
            "/orders",
            &admin,
            json!({ "table_id": table, "items": [{ "product_id": product, "quantity": 1 }] }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{order}");
    assert_eq!(order["status"], "pending");
    assert_eq!(order["payment_status"], "pending");
    assert_eq!(order["total_amount"], "2.50");
    assert_eq!(order["items"].as_array().unwrap().len(), 1);
    assert_eq!(order["items"][0]["unit_price"], "2.50");

    assert_eq!(app.store.table(table).unwrap().status, TableStatus::Occupied);
    assert_eq!(app.store.product(product).unwrap().stock, 99);

    let (_, table_view) = app.get(&format!("/tables/{table}"), &admin).await;
    assert_eq!(table_view["status"], "occupied");
}

#[tokio::test]
async fn busy_table_rejects_order_without_side_effects() {
    let app = TestApp::new();
    let admin = app.token_for("admin", "admin").await;
    let cashier = app.token_for("cashier", "cashier").await;
    let table = app.create_table(&admin, 2).await;
    let product = app.create_product(&admin, "Tea", "1.80", 10).await;

    let body = json!({ "table_id": table, "items": [{ "product_id": product, "quantity": 2 }] });
    let (status, _) = app.post("/orders", &cashier, body.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, err) = app.post("/orders", &cashier, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["message"], "Table is not available");

    assert_eq!(app.store.order_count(), 1);
    assert_eq!(app.store.product(product).unwrap().stock, 8);
    assert_eq!(app.store.table(table).unwrap().status, TableStatus::Occupied);
}

#[tokio::test]
async fn multi_item_order_is_all_or_nothing() {
    let app = TestApp::new();
    let admin = app.token_for("admin", "admin").await;
    let table = app.create_table(&admin, 6).await;
    let coffee = app.create_product(&admin, "Flat White", "3.20", 5).await;
    let cake = app.create_product(&admin, "Cheesecake", "4.00", 1).await;

    let (status, err) = app
        .post(
            "/orders",
            &admin,
            json!({
                "table_id": table,
                "items": [
                    { "product_id": coffee, "quantity": 2 },
                    { "product_id": cake, "quantity": 2 }
                ]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["message"], "Insufficient stock for product Cheesecake");
    assert_eq!(app.store.product(coffee).unwrap().stock, 5);
    assert_eq!(app.store.product(cake).unwrap().stock, 1);
    assert_eq!(app.store.table(table).unwrap().status, TableStatus::Free);
    assert_eq!(app.store.order_count(), 0);
    assert_eq!(app.store.item_count(), 0);

    let (status, order) = app
        .post(
            "/orders",
            &admin,
            json!({
                "table_id": table,
                "items": [
                    { "product_id": coffee, "quantity": 2, "notes": "oat milk" },
                    { "product_id": cake, "quantity": 1 }
                ]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["total_amount"], "10.40");
    assert_eq!(order["items"][0]["notes"], "oat milk");
    assert_eq!(app.store.product(coffee).unwrap().stock, 3);
    assert_eq!(app.store.product(cake).unwrap().stock, 0);
}

#[tokio::test]
async fn repeated_product_lines_share_one_stock_check() {
    let app = TestApp::new();
    let admin = app.token_for("admin", "admin").await;
    let table = app.create_table(&admin, 2).await;
    let muffin = app.create_product(&admin, "Muffin", "2.00", 3).await;

    let (status, _) = app
        .post(
            "/orders",
            &admin,
            json!({
                "table_id": table,
                "items": [
                    { "product_id": muffin, "quantity": 2 },
                    { "product_id": muffin, "quantity": 2 }
                ]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.product(muffin).unwrap().stock, 3);
}

#[tokio::test]
async fn unknown_or_inactive_products_are_rejected() {
    let app = TestApp::new();
    let admin = app.token_for("admin", "admin").await;
    let table = app.create_table(&admin, 2).await;
    let retired = app.create_product(&admin, "Eggnog", "3.00", 10).await;
    app.request(
        axum::http::Method::DELETE,
        &format!("/products/{retired}"),
        Some(&admin),
        None,
    )
    .await;

    let (status, err) = app
        .post(
            "/orders",
            &admin,
            json!({ "table_id": table, "items": [{ "product_id": 999, "quantity": 1 }] }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["message"], "Product 999 not found");

    let (status, err) = app
        .post(
            "/orders",
            &admin,
            json!({ "table_id": table, "items": [{ "product_id": retired, "quantity": 1 }] }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["message"], "Product Eggnog is not available");

    let (status, err) = app
        .post(
            "/orders",
            &admin,
            json!({ "table_id": 77, "items": [{ "product_id": retired, "quantity": 1 }] }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["message"], "Table not found");
}

#[tokio::test]
async fn order_requests_are_validated() {
    let app = TestApp::new();
    let admin = app.token_for("admin", "admin").await;
    let table = app.create_table(&admin, 2).await;
    let product = app.create_product(&admin, "Chai", "2.80", 10).await;

    let (status, _) = app
        .post("/orders", &admin, json!({ "table_id": table, "items": [] }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(
            "/orders",
            &admin,
            json!({ "table_id": table, "items": [{ "product_id": product, "quantity": 0 }] }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(
            "/orders",
            &admin,
            json!({ "table_id": table, "items": [{ "product_id": product, "quantity": 1001 }] }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.order_count(), 0);
}

#[tokio::test]
async fn cook_cannot_place_orders() {
    let app = TestApp::new();
    let admin = app.token_for("admin", "admin").await;
    let cook = app.token_for("cook", "cook").await;
    let table = app.create_table(&admin, 2).await;
    let product = app.create_product(&admin, "Cortado", "2.40", 10).await;

    let (status, _) = app
        .post(
            "/orders",
            &cook,
            json!({ "table_id": table, "items": [{ "product_id": product, "quantity": 1 }] }),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(app.store.order_count(), 0);
}

#[tokio::test]
async fn patch_follows_the_lifecycle() {
    let app = TestApp::new();
    let admin = app.token_for("admin", "admin").await;
    let table = app.create_table(&admin, 2).await;
    let product = app.create_product(&admin, "Brownie", "3.00", 10).await;

    let (_, order) = app
        .post(
            "/orders",
            &admin,
            json!({ "table_id": table, "items": [{ "product_id": product, "quantity": 1 }] }),
        )
        .await;
    let id = order["id"].as_i64().unwrap() as i32;
    let uri = format!("/orders/{id}");

    let (status, updated) = app.patch(&uri, &admin, json!({ "notes": "no nuts" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["notes"], "no nuts");
    assert_eq!(updated["status"], "pending");

    let (status, err) = app.patch(&uri, &admin, json!({ "status": "delivered" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        err["message"],
        format!("Order {id} cannot move from pending to delivered")
    );
    assert_eq!(app.store.order(id).unwrap().status, OrderStatus::Pending);

    let (status, updated) = app.patch(&uri, &admin, json!({ "status": "cancelled" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "cancelled");
    assert_eq!(updated["notes"], "no nuts");
    assert_eq!(app.store.product(product).unwrap().stock, 9);

    let (status, _) = app
        .patch(&uri, &admin, json!({ "status": "in_preparation" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn listing_filters_by_status_and_reads_single_orders() {
    let app = TestApp::new();
    let admin = app.token_for("admin", "admin").await;
    let cook = app.token_for("cook", "cook").await;
    let product = app.create_product(&admin, "Soda", "1.50", 10).await;

    let mut ids = Vec::new();
    for _ in 0..3 {
        let table = app.create_table(&admin, 2).await;
        let (_, order) = app
            .post(
                "/orders",
                &admin,
                json!({ "table_id": table, "items": [{ "product_id": product, "quantity": 1 }] }),
            )
            .await;
        ids.push(order["id"].as_i64().unwrap());
    }

    app.post(&format!("/kitchen/orders/{}/start", ids[1]), &cook, json!({}))
        .await;

    let (status, all) = app.get("/orders", &cook).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (_, pending) = app.get("/orders?status=pending", &cook).await;
    let pending_ids: Vec<i64> = pending
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_i64().unwrap())
        .collect();
    assert_eq!(pending_ids, vec![ids[0], ids[2]]);

    let (_, paged) = app.get("/orders?skip=1&limit=1", &cook).await;
    assert_eq!(paged[0]["id"], ids[1]);

    let (status, one) = app.get(&format!("/orders/{}", ids[1]), &cook).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(one["status"], "in_preparation");
    assert_eq!(one["items"][0]["product_id"], product);

    let (status, _) = app.get("/orders/4242", &cook).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn payments_are_listed_per_order() {
    let app = TestApp::new();
    let admin = app.token_for("admin", "admin").await;
    let cashier = app.token_for("cashier", "cashier").await;
    let cook = app.token_for("cook", "cook").await;
    let table = app.create_table(&admin, 2).await;
    let product = app.create_product(&admin, "Panini", "6.00", 10).await;

    let (_, order) = app
        .post(
            "/orders",
            &cashier,
            json!({ "table_id": table, "items": [{ "product_id": product, "quantity": 1 }] }),
        )
        .await;
    let id = order["id"].as_i64().unwrap() as i32;

    app.store
        .add_payment(id, PaymentMethod::Cash, Decimal::from_str("6.00").unwrap());

    let (status, payments) = app.get(&format!("/orders/{id}/payments"), &cashier).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payments.as_array().unwrap().len(), 1);
    assert_eq!(payments[0]["method"], "cash");
    assert_eq!(payments[0]["amount"], "6.00");

    let (status, _) = app.get(&format!("/orders/{id}/payments"), &cook).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.get("/orders/999/payments", &cashier).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
