mod create_new_city;
mod duplicates;
mod error;
mod filter_cities;
mod stats;
mod store_city_facts;
mod weekly_summary;

#[cfg(test)]
pub mod tests;

pub use self::{
    create_new_city::*, duplicates::*, error::Error, filter_cities::*, stats::*,
    store_city_facts::*, weekly_summary::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
