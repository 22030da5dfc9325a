pub mod columns;
pub mod error;
pub mod orient;
pub mod pipeline;
pub mod reader;
pub mod schema;
pub mod sites;
