use periodic_net::net_error::PeriodicNetError;
use periodic_net::prelude::*;

fn main() -> Result<(), PeriodicNetError> {
    // nodes are numbered 1..=4 here; node 0 stays unused and isolated
    let mut net = PeriodicGraph::new(5, 6)?;

    net.try_add_edge(1, 2, [0, 0, 0])?;
    net.try_add_edge(2, 3, [0, 0, 0])?;
    net.try_add_edge(3, 4, [0, 0, 0])?;

    let finder = LoopFinder::new(&net);
    let basis = finder.get_independent_loops()?;
    println!("Found {} loops (no boundary-crossing bonds yet).", basis.rank);

    // the sign of a crossing follows the direction node1 -> node2
    net.try_add_edge(1, 3, [1, 0, 0])?;
    net.try_add_edge(1, 4, [0, -1, 0])?;
    net.try_add_edge(2, 4, [0, -1, 0])?;
    net.try_add_edge(3, 4, [-1, 0, 0])?;

    let report = analyze(&net)?;
    println!(
        "Reduced {} nodes / {} edges to {} nodes / {} edges.",
        report.nodes, report.edges, report.reduced_nodes, report.reduced_edges
    );
    println!("Found {} independent loops.", report.dimensionality());
    for lp in &report.basis.loops {
        println!("Loop: {lp}");
    }
    Ok(())
}
