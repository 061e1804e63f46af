//! Yew components built on the [`crate::logic`] view model.

pub mod pagination;

pub use pagination::{Pagination, PaginationProps};
