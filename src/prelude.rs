//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    api::{ApiError, AuthApi, CatalogApi, HttpAuthApi, HttpCatalogApi},
    auth::{AuthError, AuthStore, Credentials, Registration, Session, User},
    cart::{CartLine, CartStore},
    config::{ApiConfig, RegisterMode},
    orders::{
        InMemoryOrderBackend, NewOrder, Order, OrderBackend, OrderError, OrderStatus, OrderStore,
    },
    persistence::{JsonFileStorage, PersistedState, PersistenceError, StateStorage},
    products::{ALL_CATEGORIES, CatalogError, Product, ProductStore},
    status::Status,
    validation::{PasswordValidation, validate_email, validate_password},
    workflows::CheckoutError,
};
