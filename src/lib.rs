pub mod collector;
pub mod fetch;
pub mod operator_map;
pub mod parser;
pub mod schema;
pub mod serializer;
pub mod sources;
