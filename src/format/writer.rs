//! Serialize graph files

use super::GraphFile;
use crate::Result;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

impl fmt::Display for GraphFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.precision;
        writeln!(f, "Cops: {}", self.header.cops)?;
        writeln!(f, "Robbers: {}", self.header.robbers)?;
        writeln!(f, "Max turn: {}", self.header.max_turn)?;

        writeln!(f, "Vertices: {}", self.graph.num_vertices())?;
        for p in self.graph.positions() {
            writeln!(f, "{:.*} {:.*}", digits, p.x, digits, p.y)?;
        }

        writeln!(f, "Edges: {}", self.graph.num_edges())?;
        for edge in self.graph.edges() {
            writeln!(f, "{} {}", edge.lo(), edge.hi())?;
        }
        Ok(())
    }
}

/// Write a graph file to any sink
pub fn write_graph<W: Write>(file: &GraphFile, mut out: W) -> Result<()> {
    write!(out, "{}", file)?;
    out.flush()?;
    Ok(())
}

impl GraphFile {
    /// Write to `path`, creating or truncating it
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let out = BufWriter::new(File::create(path)?);
        write_graph(self, out)?;
        info!(
            path = %path.display(),
            vertices = self.graph.num_vertices(),
            edges = self.graph.num_edges(),
            "wrote graph file"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::format::{GameHeader, GraphFile};
    use crate::graph::{Graph, Position};

    fn triangle() -> GraphFile {
        let mut graph = Graph::new();
        graph.add_vertex(Position::new(-1.0, 0.0));
        graph.add_vertex(Position::new(0.35, 0.701));
        graph.add_vertex(Position::new(0.0, -0.8));
        graph.connect(1, 0);
        graph.connect(2, 1);
        graph.connect(0, 2);
        GraphFile::new(GameHeader::new(3, 3, 3), graph, 3)
    }

    #[test]
    fn test_text_layout() {
        let expected = "\
Cops: 3
Robbers: 3
Max turn: 6
Vertices: 3
-1.000 0.000
0.350 0.701
0.000 -0.800
Edges: 3
0 1
0 2
1 2
";
        assert_eq!(triangle().to_string(), expected);
    }

    #[test]
    fn test_five_digit_precision() {
        let mut file = triangle();
        file.precision = 5;
        let text = file.to_string();
        assert!(text.contains("\n0.35000 0.70100\n"));
    }

    #[test]
    fn test_write_is_deterministic() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        super::write_graph(&triangle(), &mut a).unwrap();
        super::write_graph(&triangle(), &mut b).unwrap();
        assert_eq!(a, b);
    }
}
