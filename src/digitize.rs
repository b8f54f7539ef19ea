//! Headless model of the map digitizer
//!
//! The interactive editors trace a graph over a background image: clicks add
//! vertices, Enter switches to edge entry, clicks on two vertices join them,
//! and a second Enter saves. This module keeps that state machine and the
//! pixel normalization without any GUI so companion tools can drive it.
//!
//! Saved files list edges in ascending canonical order rather than entry
//! order, and a pair entered twice is written once; `edges()` keeps the raw
//! entry sequence.

use crate::format::{GameHeader, GraphFile, DIGITIZED_PRECISION};
use crate::graph::{Graph, Position};
use crate::{GraphGenError, Result};

/// Default pick radius in pixels
pub const PICK_RADIUS: f64 = 10.0;

/// Map a pixel to [-1, 1] with the origin at the image center and y up
pub fn normalize_pixel(x: f64, y: f64, width: f64, height: f64) -> Position {
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    Position::new((x - half_w) / half_w, (half_h - y) / half_h)
}

/// Input events
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DigitizerEvent {
    /// Pointer click at a pixel
    Click {
        /// Pixel column
        x: f64,
        /// Pixel row, growing downward
        y: f64,
    },
    /// The Enter key
    Enter,
}

/// Which kind of input clicks produce
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryMode {
    /// Clicks place vertices
    Vertices,
    /// Clicks pick edge endpoints
    Edges,
    /// The session is ready to save
    Finished,
}

/// What an event did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A vertex was placed
    VertexAdded(usize),
    /// First endpoint of an edge was picked
    EdgeStarted(usize),
    /// An edge was recorded
    EdgeAdded(usize, usize),
    /// No vertex lies within the pick radius
    NoVertexNearby,
    /// The entry mode changed
    ModeChanged(EntryMode),
    /// The event had no effect
    Ignored,
}

/// One tracing session over an image of fixed size
#[derive(Clone, Debug)]
pub struct DigitizerSession {
    width: f64,
    height: f64,
    radius: f64,
    vertices: Vec<(f64, f64)>,
    edges: Vec<(usize, usize)>,
    mode: EntryMode,
    pending: Option<usize>,
}

impl DigitizerSession {
    /// Start a session for an image of `width` x `height` pixels
    pub fn new(width: f64, height: f64) -> Self {
        DigitizerSession {
            width,
            height,
            radius: PICK_RADIUS,
            vertices: Vec::new(),
            edges: Vec::new(),
            mode: EntryMode::Vertices,
            pending: None,
        }
    }

    /// Override the pick radius
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Current entry mode
    pub fn mode(&self) -> EntryMode {
        self.mode
    }

    /// Placed vertices in pixel coordinates
    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    /// Recorded edges in entry order
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Feed one event
    pub fn handle(&mut self, event: DigitizerEvent) -> Outcome {
        match (self.mode, event) {
            (EntryMode::Finished, _) => Outcome::Ignored,
            (_, DigitizerEvent::Click { x, y }) if !self.inside(x, y) => Outcome::Ignored,
            (EntryMode::Vertices, DigitizerEvent::Click { x, y }) => {
                self.vertices.push((x, y));
                Outcome::VertexAdded(self.vertices.len() - 1)
            }
            (EntryMode::Edges, DigitizerEvent::Click { x, y }) => self.pick(x, y),
            (EntryMode::Vertices, DigitizerEvent::Enter) => {
                if self.vertices.len() > 1 {
                    self.mode = EntryMode::Edges;
                    Outcome::ModeChanged(EntryMode::Edges)
                } else {
                    Outcome::Ignored
                }
            }
            (EntryMode::Edges, DigitizerEvent::Enter) => {
                self.mode = EntryMode::Finished;
                Outcome::ModeChanged(EntryMode::Finished)
            }
        }
    }

    /// Build the graph file from user-supplied header values.
    ///
    /// Entered edges are canonicalized, so repeats and reversed repeats merge.
    pub fn finish(self, header: GameHeader) -> Result<GraphFile> {
        if self.mode != EntryMode::Finished {
            return Err(GraphGenError::InvalidArgument(
                "digitizer session is still collecting input".to_string()
            ));
        }

        let mut graph = Graph::new();
        for &(x, y) in &self.vertices {
            graph.add_vertex(normalize_pixel(x, y, self.width, self.height));
        }
        for &(a, b) in &self.edges {
            graph.connect(a, b);
        }
        Ok(GraphFile::new(header, graph, DIGITIZED_PRECISION))
    }

    fn inside(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }

    fn pick(&mut self, x: f64, y: f64) -> Outcome {
        let nearest = self.nearest(x, y);
        match (self.pending.take(), nearest) {
            (None, Some(i)) => {
                self.pending = Some(i);
                Outcome::EdgeStarted(i)
            }
            (Some(start), Some(i)) if i != start => {
                self.edges.push((start, i));
                Outcome::EdgeAdded(start, i)
            }
            (_, Some(_)) => Outcome::Ignored,
            (_, None) => Outcome::NoVertexNearby,
        }
    }

    /// Closest vertex within the pick radius; the earliest wins ties
    fn nearest(&self, x: f64, y: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &(vx, vy)) in self.vertices.iter().enumerate() {
            let dist = (vx - x).hypot(vy - y);
            if dist <= self.radius && best.map_or(true, |(_, d)| dist < d) {
                best = Some((i, dist));
            }
        }
        best.map(|(i, _)| i)
    }
}
