//! Data model for ontology documentation.
//!
//! The `ontdoc-model` crate holds the plain data every stage of the
//! documentation pipeline exchanges: graph node values, the output format
//! selector, symbolic references between entities, the fixed-shape class,
//! property and named-individual records, and the document metadata.
//!
//! # Example
//!
//! ```
//! use ontdoc_model::{OutputFormat, PropertyKind};
//!
//! let format: OutputFormat = "md".parse().unwrap_or_default();
//! assert_eq!(format.as_str(), "md");
//! assert_eq!(PropertyKind::Functional.code(), "fp");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod model;
pub mod vocab;

pub use model::{
    AgentRole, Agents, CardinalityBound, ClassRecord, CollectionExpr, CollectionOperator,
    Constraint, DocumentMetadata, Literal, NamedIndividualRecord, Node, OutputFormat,
    PropertyKind, PropertyRecord, Quantifier, RefKind, Reference, RestrictionExpr,
};
