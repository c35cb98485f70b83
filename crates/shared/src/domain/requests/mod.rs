mod auth;
mod order;
mod product;
mod table;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::order::{
    CreateOrderItemRequest, CreateOrderRequest, FindAllOrders, UpdateOrderRequest,
};
pub use self::product::{
    CreateProductRequest, FindAllProducts, UpdateProductRequest, UpdateStockRequest,
    validate_price,
};
pub use self::table::{
    CreateTableRequest, FindAllTables, UpdateTableRequest, UpdateTableStatusRequest,
};

pub(crate) fn default_limit() -> i64 {
    100
}
