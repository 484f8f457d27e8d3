//! Data access and transformation for the Contrail trip ETL.
//!
//! Responsibilities:
//! - Decode the airport and aircraft reference catalogs and serve them through
//!   [`contrail_core::CatalogProvider`] from a local mirror or an object store.
//! - Transform raw flight records into rows enriched with origin and
//!   destination airports, great-circle distance and estimated fuel.
//! - Persist transformed rows into the staging or production database.
//!
//! Boundaries:
//! - Do not encode domain rules (live in `contrail-core`).
//! - Configuration is passed in at construction; there is no global state.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod store;
pub mod transform;
