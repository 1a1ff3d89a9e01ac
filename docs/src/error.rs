//! Error type for the documentation pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort document generation.
///
/// Everything else (missing titles, unresolvable references, malformed
/// collections) is recovered locally and never surfaces here.
#[derive(Debug, Error)]
pub enum Error {
    /// The graph has no `owl:Ontology` declaration.
    #[error(
        "the RDF source does not define an ontology; it must contain a declaration such as \
         `<...> rdf:type owl:Ontology .`"
    )]
    MissingOntology,

    /// The graph store rejected an operation.
    #[error("graph store error: {0}")]
    Store(String),

    /// The RDF source could not be parsed.
    #[error("cannot parse {path}: {message}")]
    Parse {
        /// Source path, or `<inline>` for in-memory input.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The RDF source syntax is not one this crate reads.
    #[error("unsupported RDF syntax for {0} (expected .ttl or .nt)")]
    UnsupportedSyntax(PathBuf),

    /// A file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// Offending path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is invalid.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
