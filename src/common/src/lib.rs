pub mod engine;
pub mod error;
pub mod model;
pub mod strategy;
pub mod utility;
pub mod websocket;
