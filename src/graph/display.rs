use super::Graph;
use itertools::Itertools;
use std::fmt;

fn display_header(graph: &Graph, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "+----------------------------------------+")?;
    writeln!(
        f,
        "|{:^40}|",
        format!("{} {} {}", graph.problem(), graph.node_count(), graph.num_arcs())
    )?;
    writeln!(f, "+------------+------------+------------+")?;
    writeln!(f, "|       node |      begin |        end | neighbors")?;
    writeln!(f, "+------------+------------+------------+")
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_header(self, f)?;
        for (v, offsets) in self.nodes().zip(self.row_offsets().windows(2)) {
            writeln!(
                f,
                "|{:>11} |{:>11} |{:>11} | {}",
                v,
                offsets[0],
                offsets[1],
                self.arcs(v)
                    .map(|(target, weight)| format!("{}({})", target, weight))
                    .join(" ")
            )?;
        }
        write!(f, "+------------+------------+------------+")
    }
}
