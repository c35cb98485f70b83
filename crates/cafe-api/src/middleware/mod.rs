mod auth;
mod validate;

pub use self::auth::{
    AdminOnly, AnyStaff, Authorized, FrontOfHouse, KitchenOnly, KitchenOrAdmin, RolePolicy,
    StockKeepers,
};
pub use self::validate::{SimpleValidatedJson, ValidatedQuery};
