mod auth;
mod hashing;
mod jwt;
mod kitchen;
mod order;
mod payment;
mod product;
mod table;
mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::kitchen::{DynKitchenService, KitchenServiceTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait, StatusChange,
};
pub use self::payment::{DynPaymentRepository, PaymentRepositoryTrait};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::table::{
    DynTableCommandRepository, DynTableCommandService, DynTableQueryRepository,
    DynTableQueryService, TableCommandRepositoryTrait, TableCommandServiceTrait,
    TableQueryRepositoryTrait, TableQueryServiceTrait,
};
pub use self::user::{DynUserRepository, NewUser, UserRepositoryTrait};
