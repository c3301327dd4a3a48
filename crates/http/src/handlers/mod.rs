#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod impact;
pub mod prices;
pub mod resources;
pub mod stories;
