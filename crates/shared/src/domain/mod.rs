mod order_draft;
pub mod requests;
pub mod responses;

pub use self::order_draft::{DraftLine, DraftRejection, OrderDraft};
