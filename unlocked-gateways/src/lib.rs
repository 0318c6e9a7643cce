pub mod notify;
pub mod user_communication;
pub mod wikidata;
