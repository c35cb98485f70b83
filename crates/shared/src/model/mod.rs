mod order;
mod order_item;
mod payment;
mod product;
mod table;
mod user;

pub use self::order::{Order, OrderStatus};
pub use self::order_item::OrderItem;
pub use self::payment::{Payment, PaymentMethod, PaymentStatus};
pub use self::product::Product;
pub use self::table::{Table, TableStatus};
pub use self::user::{User, UserRole};
