//! Storefront
//!
//! Client-side state layer for a mobile storefront: independent state
//! containers for the product catalog, cart, orders and authentication,
//! each with an explicit asynchronous operation lifecycle, plus the
//! persistence wrapper and cross-store workflows that tie them together.
//!
//! Rendering, navigation and transport internals are out of scope; the
//! containers are driven by a UI event loop and talk to the remote API
//! through the clients in [`api`].

pub mod api;
pub mod auth;
pub mod cart;
pub mod config;
pub mod orders;
pub mod persistence;
pub mod prelude;
pub mod products;
pub mod status;
pub mod validation;
pub mod workflows;
