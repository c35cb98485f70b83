mod command;
mod query;

pub use self::command::{
    DynTableCommandRepository, DynTableCommandService, TableCommandRepositoryTrait,
    TableCommandServiceTrait,
};
pub use self::query::{
    DynTableQueryRepository, DynTableQueryService, TableQueryRepositoryTrait,
    TableQueryServiceTrait,
};
