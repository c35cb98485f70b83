mod kitchen;
mod order;
mod payment;
mod product;
mod table;
mod token;
mod user;

pub use self::kitchen::KitchenStatsResponse;
pub use self::order::{OrderItemResponse, OrderResponse};
pub use self::payment::PaymentResponse;
pub use self::product::ProductResponse;
pub use self::table::TableResponse;
pub use self::token::TokenResponse;
pub use self::user::UserResponse;
