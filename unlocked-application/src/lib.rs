#[macro_use]
extern crate log;

mod delete_cities;
mod enrich_city;
mod list_view;
mod operation;
mod save_city;
mod send_weekly_summary;
mod store;

pub mod prelude {
    pub use super::{
        delete_cities::*, enrich_city::*, list_view::*, operation::*, save_city::*,
        send_weekly_summary::*, store::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use unlocked_core::{entities::*, repositories::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use unlocked_db_sqlite::Connections;
}
