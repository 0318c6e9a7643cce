pub mod bbox;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use unlocked_entities::{city::*, geo::*, id::*, time::*};
}
