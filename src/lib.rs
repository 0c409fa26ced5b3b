pub mod document;
pub mod error;
pub mod factory;
pub mod history;
pub mod model;
pub mod mutate;
pub mod registry;
pub mod validate;
pub mod wasm;
