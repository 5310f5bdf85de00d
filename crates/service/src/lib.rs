//! Service layer providing the catalog's business rules on top of models.
//! - Separates business logic from data access through repository traits.
//! - Reuses entity definitions from the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod catalog;
pub mod playlist_links;
#[cfg(test)]
pub mod test_support;
