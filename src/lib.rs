//! A catalog for a personal sneaker collection.
//!
//! The [`catalog::Catalog`] owns the records and snapshots them into a
//! [`storage::SnapshotStore`]; everything else here is the terminal front end.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod host;
pub mod logging;
pub mod photo;
pub mod report;
pub mod storage;
