#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use cafe_api::handler::AppRouter;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use shared::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderQueryRepository, DynPaymentRepository,
        DynProductCommandRepository, DynProductQueryRepository, DynTableCommandRepository,
        DynTableQueryRepository, DynUserRepository, NewUser, OrderCommandRepositoryTrait,
        OrderQueryRepositoryTrait, PaymentRepositoryTrait, ProductCommandRepositoryTrait,
        ProductQueryRepositoryTrait, StatusChange, TableCommandRepositoryTrait,
        TableQueryRepositoryTrait, UserRepositoryTrait,
    },
    config::Config,
    domain::{
        OrderDraft,
        requests::{
            CreateOrderRequest, CreateProductRequest, CreateTableRequest, FindAllOrders,
            FindAllProducts, FindAllTables, UpdateProductRequest, UpdateTableRequest,
        },
    },
    errors::RepositoryError,
    model::{
        Order, OrderItem, OrderStatus, Payment, PaymentMethod, PaymentStatus, Product, Table,
        TableStatus, User,
    },
    repository::{OrderRepository, ProductRepository, Repositories, TableRepository},
    state::AppState,
};
use std::sync::{Arc, Mutex, MutexGuard};
use tower::ServiceExt;

#[derive(Default)]
struct Store {
    users: Vec<User>,
    tables: Vec<Table>,
    products: Vec<Product>,
    orders: Vec<Order>,
    items: Vec<OrderItem>,
    payments: Vec<Payment>,
}

fn page<T: Clone>(rows: impl Iterator<Item = T>, skip: i64, limit: i64) -> Vec<T> {
    rows.skip(skip.max(0) as usize)
        .take(limit.max(0) as usize)
        .collect()
}

/// Rows live in one mutex so every trait call is atomic, standing in for the
/// row locks and transactions of the Postgres repositories.
#[derive(Clone, Default)]
pub struct MemoryStore(Arc<Mutex<Store>>);

impl MemoryStore {
    fn lock(&self) -> MutexGuard<'_, Store> {
        self.0.lock().unwrap()
    }

    pub fn repositories(&self) -> Repositories {
        Repositories {
            user: Arc::new(self.clone()) as DynUserRepository,
            table: TableRepository {
                query: Arc::new(self.clone()) as DynTableQueryRepository,
                command: Arc::new(self.clone()) as DynTableCommandRepository,
            },
            product: ProductRepository {
                query: Arc::new(self.clone()) as DynProductQueryRepository,
                command: Arc::new(self.clone()) as DynProductCommandRepository,
            },
            order: OrderRepository {
                query: Arc::new(self.clone()) as DynOrderQueryRepository,
                command: Arc::new(self.clone()) as DynOrderCommandRepository,
            },
            payment: Arc::new(self.clone()) as DynPaymentRepository,
        }
    }

    pub fn table(&self, id: i32) -> Option<Table> {
        self.lock().tables.iter().find(|t| t.id == id).cloned()
    }

    pub fn product(&self, id: i32) -> Option<Product> {
        self.lock().products.iter().find(|p| p.id == id).cloned()
    }

    pub fn order(&self, id: i32) -> Option<Order> {
        self.lock().orders.iter().find(|o| o.id == id).cloned()
    }

    pub fn order_count(&self) -> usize {
        self.lock().orders.len()
    }

    pub fn item_count(&self) -> usize {
        self.lock().items.len()
    }

    /// Rewrites an order's timestamps, for tests that need elapsed time.
    pub fn set_order_times(&self, id: i32, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
        let mut store = self.lock();
        if let Some(order) = store.orders.iter_mut().find(|o| o.id == id) {
            order.created_at = created_at;
            order.updated_at = updated_at;
        }
    }

    pub fn add_payment(&self, order_id: i32, method: PaymentMethod, amount: Decimal) -> i32 {
        let mut store = self.lock();
        let id = store.payments.len() as i32 + 1;
        store.payments.push(Payment {
            id,
            order_id,
            method,
            amount,
            status: PaymentStatus::Completed,
            external_ref: None,
            created_at: Utc::now(),
        });
        id
    }
}

#[async_trait]
impl UserRepositoryTrait for MemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut store = self.lock();
        if store.users.iter().any(|u| u.username == user.username) {
            return Err(RepositoryError::AlreadyExists(
                "Username already registered".into(),
            ));
        }

        let created = User {
            id: store.users.len() as i32 + 1,
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
            role: user.role,
            is_active: user.is_active,
            created_at: Utc::now(),
            last_login: None,
        };
        store.users.push(created.clone());
        Ok(created)
    }

    async fn touch_last_login(&self, id: i32) -> Result<User, RepositoryError> {
        let mut store = self.lock();
        let user = store
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| RepositoryError::NotFound("User not found".into()))?;
        user.last_login = Some(Utc::now());
        Ok(user.clone())
    }
}

#[async_trait]
impl TableQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self, req: &FindAllTables) -> Result<Vec<Table>, RepositoryError> {
        let store = self.lock();
        let rows = store
            .tables
            .iter()
            .filter(|t| req.include_inactive || t.is_active)
            .cloned();
        Ok(page(rows, req.skip, req.limit))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Table>, RepositoryError> {
        Ok(self.table(id))
    }
}

#[async_trait]
impl TableCommandRepositoryTrait for MemoryStore {
    async fn create_table(&self, req: &CreateTableRequest) -> Result<Table, RepositoryError> {
        let mut store = self.lock();
        let table = Table {
            id: store.tables.len() as i32 + 1,
            status: TableStatus::Free,
            capacity: req.capacity,
            is_active: true,
            created_at: Utc::now(),
        };
        store.tables.push(table.clone());
        Ok(table)
    }

    async fn update_table(
        &self,
        id: i32,
        req: &UpdateTableRequest,
    ) -> Result<Option<Table>, RepositoryError> {
        let mut store = self.lock();
        Ok(store.tables.iter_mut().find(|t| t.id == id).map(|table| {
            if let Some(capacity) = req.capacity {
                table.capacity = capacity;
            }
            if let Some(status) = req.status {
                table.status = status;
            }
            if let Some(is_active) = req.is_active {
                table.is_active = is_active;
            }
            table.clone()
        }))
    }

    async fn update_status(
        &self,
        id: i32,
        status: TableStatus,
    ) -> Result<Option<Table>, RepositoryError> {
        let mut store = self.lock();
        Ok(store.tables.iter_mut().find(|t| t.id == id).map(|table| {
            table.status = status;
            table.clone()
        }))
    }

    async fn deactivate_table(&self, id: i32) -> Result<Option<Table>, RepositoryError> {
        let mut store = self.lock();
        Ok(store.tables.iter_mut().find(|t| t.id == id).map(|table| {
            table.is_active = false;
            table.clone()
        }))
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self, req: &FindAllProducts) -> Result<Vec<Product>, RepositoryError> {
        let store = self.lock();
        let rows = store
            .products
            .iter()
            .filter(|p| !req.active_only || p.is_active)
            .filter(|p| req.category.as_ref().is_none_or(|c| &p.category == c))
            .cloned();
        Ok(page(rows, req.skip, req.limit))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        Ok(self.product(id))
    }

    async fn find_categories(&self) -> Result<Vec<String>, RepositoryError> {
        let mut categories: Vec<String> = self
            .lock()
            .products
            .iter()
            .map(|p| p.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for MemoryStore {
    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let mut store = self.lock();
        let now = Utc::now();
        let product = Product {
            id: store.products.len() as i32 + 1,
            name: req.name.clone(),
            price: req.price,
            category: req.category.clone(),
            description: req.description.clone(),
            stock: req.stock,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        store.products.push(product.clone());
        Ok(product)
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<Option<Product>, RepositoryError> {
        let mut store = self.lock();
        Ok(store.products.iter_mut().find(|p| p.id == id).map(|product| {
            if let Some(name) = &req.name {
                product.name = name.clone();
            }
            if let Some(price) = req.price {
                product.price = price;
            }
            if let Some(category) = &req.category {
                product.category = category.clone();
            }
            if let Some(description) = &req.description {
                product.description = Some(description.clone());
            }
            if let Some(stock) = req.stock {
                product.stock = stock;
            }
            if let Some(is_active) = req.is_active {
                product.is_active = is_active;
            }
            product.updated_at = Utc::now();
            product.clone()
        }))
    }

    async fn update_stock(&self, id: i32, stock: i32) -> Result<Option<Product>, RepositoryError> {
        let mut store = self.lock();
        Ok(store.products.iter_mut().find(|p| p.id == id).map(|product| {
            product.stock = stock;
            product.updated_at = Utc::now();
            product.clone()
        }))
    }

    async fn deactivate_product(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let mut store = self.lock();
        Ok(store.products.iter_mut().find(|p| p.id == id).map(|product| {
            product.is_active = false;
            product.updated_at = Utc::now();
            product.clone()
        }))
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self, req: &FindAllOrders) -> Result<Vec<Order>, RepositoryError> {
        let store = self.lock();
        let rows = store
            .orders
            .iter()
            .filter(|o| req.status.is_none_or(|s| o.status == s))
            .cloned();
        Ok(page(rows, req.skip, req.limit))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        Ok(self.order(id))
    }

    async fn find_items(&self, order_ids: &[i32]) -> Result<Vec<OrderItem>, RepositoryError> {
        Ok(self
            .lock()
            .items
            .iter()
            .filter(|i| order_ids.contains(&i.order_id))
            .cloned()
            .collect())
    }

    async fn find_by_statuses(
        &self,
        statuses: &[OrderStatus],
    ) -> Result<Vec<Order>, RepositoryError> {
        let mut orders: Vec<Order> = self
            .lock()
            .orders
            .iter()
            .filter(|o| statuses.contains(&o.status))
            .cloned()
            .collect();
        orders.sort_by_key(|o| (o.created_at, o.id));
        Ok(orders)
    }

    async fn find_oldest(&self, status: OrderStatus) -> Result<Option<Order>, RepositoryError> {
        Ok(self
            .lock()
            .orders
            .iter()
            .filter(|o| o.status == status)
            .min_by_key(|o| (o.created_at, o.id))
            .cloned())
    }

    async fn find_created_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<Order>, RepositoryError> {
        Ok(self
            .lock()
            .orders
            .iter()
            .filter(|o| o.created_at >= since)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for MemoryStore {
    async fn create_order(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
        let mut store = self.lock();

        let table = store.tables.iter().find(|t| t.id == req.table_id).cloned();
        let products: Vec<Product> = store
            .products
            .iter()
            .filter(|p| req.items.iter().any(|i| i.product_id == p.id))
            .cloned()
            .collect();

        let draft = OrderDraft::plan(req.table_id, table.as_ref(), &products, &req.items)?;

        let now = Utc::now();
        let order = Order {
            id: store.orders.len() as i32 + 1,
            table_id: draft.table_id,
            user_id,
            status: OrderStatus::Pending,
            total_amount: draft.total_amount,
            payment_status: PaymentStatus::Pending,
            notes: req.notes.clone(),
            created_at: now,
            updated_at: now,
        };

        let mut items = Vec::with_capacity(draft.lines.len());
        for line in &draft.lines {
            items.push(OrderItem {
                id: (store.items.len() + items.len()) as i32 + 1,
                order_id: order.id,
                product_id: line.product_id,
                quantity: line.quantity,
                unit_price: line.unit_price,
                notes: line.notes.clone(),
                created_at: now,
            });
        }

        for (product_id, quantity) in &draft.stock_demand {
            if let Some(product) = store.products.iter_mut().find(|p| p.id == *product_id) {
                product.stock -= quantity;
                product.updated_at = now;
            }
        }
        if let Some(table) = store.tables.iter_mut().find(|t| t.id == draft.table_id) {
            table.status = TableStatus::Occupied;
        }

        store.orders.push(order.clone());
        store.items.extend(items.iter().cloned());

        Ok((order, items))
    }

    async fn apply_change(
        &self,
        id: i32,
        change: &StatusChange,
    ) -> Result<Option<Order>, RepositoryError> {
        let mut store = self.lock();
        Ok(store
            .orders
            .iter_mut()
            .find(|o| o.id == id && o.status == change.expected)
            .map(|order| {
                if let Some(to) = change.to {
                    order.status = to;
                }
                if let Some(notes) = &change.notes {
                    order.notes = Some(notes.clone());
                }
                order.updated_at = Utc::now();
                order.clone()
            }))
    }
}

#[async_trait]
impl PaymentRepositoryTrait for MemoryStore {
    async fn find_by_order(&self, order_id: i32) -> Result<Vec<Payment>, RepositoryError> {
        Ok(self
            .lock()
            .payments
            .iter()
            .filter(|p| p.order_id == order_id)
            .cloned()
            .collect())
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".into(),
        jwt_secret: "integration-test-secret".into(),
        run_migrations: false,
        port: 0,
        access_token_expire_minutes: 30,
        bcrypt_cost: 4,
        db_max_connections: 1,
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
}

impl TestApp {
    pub fn new() -> Self {
        let store = MemoryStore::default();
        let state = AppState::with_repositories(&test_config(), store.repositories());

        Self {
            router: AppRouter::build(state),
            store,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn patch(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, uri, Some(token), Some(body)).await
    }

    pub async fn register(&self, username: &str, role: &str) -> (StatusCode, Value) {
        self.request(
            Method::POST,
            "/auth/register",
            None,
            Some(json!({ "username": username, "password": "secret123", "role": role })),
        )
        .await
    }

    /// Registers a user with the given role and returns a bearer token.
    pub async fn token_for(&self, username: &str, role: &str) -> String {
        let (status, _) = self.register(username, role).await;
        assert_eq!(status, StatusCode::CREATED, "register {username}");

        let (status, body) = self
            .request(
                Method::POST,
                "/auth/token",
                None,
                Some(json!({ "username": username, "password": "secret123" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login {username}");

        body["access_token"].as_str().unwrap().to_string()
    }

    pub async fn create_table(&self, admin: &str, capacity: i32) -> i32 {
        let (status, body) = self
            .post("/tables", admin, json!({ "capacity": capacity }))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap() as i32
    }

    pub async fn create_product(&self, admin: &str, name: &str, price: &str, stock: i32) -> i32 {
        let (status, body) = self
            .post(
                "/products",
                admin,
                json!({ "name": name, "price": price, "category": "drinks", "stock": stock }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create product {name}: {body}");
        body["id"].as_i64().unwrap() as i32
    }
}
