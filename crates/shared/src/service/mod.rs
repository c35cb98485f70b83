mod auth;
mod gate;
mod kitchen;
mod order;
mod product;
mod table;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::gate::{Identity, RoleGate};
pub use self::kitchen::{KitchenService, KitchenServiceDeps};
pub use self::order::{OrderService, OrderServiceDeps};
pub use self::product::{ProductService, ProductServiceDeps};
pub use self::table::{TableService, TableServiceDeps};
