pub mod config_schema;
pub mod destination;
pub mod dispatcher;
pub mod palette;
pub mod registry;
pub mod workspace;
