//! Core business logic, independent of the HTTP layer.

/// Menu catalog operations - reads plus administrative CRUD
pub mod catalog;
/// Cart ledger operations - add, view, quantity updates, clear
pub mod cart;
/// Payment confirmation stub over the cart
pub mod payment;
/// Free-text search across the catalog
pub mod search;
