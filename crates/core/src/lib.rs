//! `mfgerp-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by every module:
//! identifiers, the error model, and the record filtering vocabulary used by
//! each page of the dashboard.

pub mod entity;
pub mod error;
pub mod filter;
pub mod id;
pub mod value_object;

pub use entity::{Entity, find_by_id};
pub use error::{DomainError, DomainResult};
pub use filter::{Facet, RecordFilter, Searchable, TextQuery, count_where, filter_records};
pub use id::{BomId, BomItemId, ManufacturingOrderId, ProductId, StockMovementId, UserId, WorkOrderId};
pub use value_object::ValueObject;
