//! # Hexmesh: benchmark graphs for cops and robbers
//!
//! This library grows hexagonal-motif meshes on an integer lattice, closes
//! their boundary with synthetic anchor vertices and writes them in the text
//! format read by the pursuit-evasion solver.
//!
//! ## Features
//!
//! - **Mesh growth**: exact-coordinate motif tiling over subdivision levels
//! - **Boundary stitching**: pole and east anchors wired to extremal vertices
//! - **Graph files**: writer and strict reader for the solver format
//! - **Statistics**: degree summaries, adjacency matrices, petgraph export
//! - **Digitizer model**: headless two-mode vertex/edge entry for map tracing

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Lattice mesh construction
pub mod mesh;

/// Finished graphs and boundary stitching
pub mod graph;

/// Solver text format
pub mod format;

/// Generator configuration and presets
pub mod config;

/// Headless model of the map digitizer
pub mod digitize;

// Re-export commonly used types
pub use config::{DedupMode, GeneratorConfig};
pub use format::{GameHeader, GraphFile};
pub use graph::{stitch, Graph};
pub use mesh::{grow, GrownMesh, LatticePoint, MeshBuilder};

/// Error types for the library
#[derive(Debug, thiserror::Error)]
pub enum GraphGenError {
    /// Caller passed an argument outside the accepted domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generator configuration failed validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Graph file did not follow the solver format
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// IO error while reading or writing a graph file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON config error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, GraphGenError>;

/// Generate the finished graph file for a configuration.
///
/// Runs growth, stitching and header computation in order.
pub fn generate(config: &GeneratorConfig) -> Result<GraphFile> {
    config.validate()?;
    let grown = grow(config.order, config.dedup)?;
    let graph = stitch(grown);
    let header = GameHeader::new(config.cops, config.robbers, graph.num_vertices())
        .with_max_turn(config.max_turn);
    tracing::info!(
        order = config.order,
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        max_turn = header.max_turn,
        "generated graph"
    );
    Ok(GraphFile::new(header, graph, config.precision))
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        config::{DedupMode, GeneratorConfig},
        format::{parse_graph, write_graph, GameHeader, GraphFile},
        generate,
        graph::{stitch, Graph},
        mesh::{grow, Edge, GrownMesh, LatticePoint, MeshBuilder},
        GraphGenError, Result,
    };
}
