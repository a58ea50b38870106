use std::io;

use csv::Writer;

use crate::error::Result;
use crate::graph::WeightedGraph;
use crate::solver::Snapshot;

/// Writes one `from,to,hours` row per ordered city pair of `snapshot`.
/// Unreachable pairs are skipped unless `include_unreachable`, in which case
/// their hours are `inf`. Returns the number of rows written.
pub fn write_distances<W: io::Write>(
    graph: &WeightedGraph,
    snapshot: &Snapshot,
    wtr: &mut Writer<W>,
    include_unreachable: bool,
) -> Result<usize> {
    wtr.write_record(["from", "to", "hours"])?;
    let mut written = 0usize;
    for (i, from) in graph.cities().iter().enumerate() {
        for (j, to) in graph.cities().iter().enumerate() {
            let d = snapshot.distance(i, j);
            if d.is_finite() || include_unreachable {
                let val = if d.is_finite() {
                    d.to_string()
                } else {
                    String::from("inf")
                };
                wtr.write_record([from.as_str(), to.as_str(), val.as_str()])?;
                written += 1;
            }
        }
    }
    wtr.flush()?;
    Ok(written)
}
