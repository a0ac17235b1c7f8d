use quaero::{
    problems::missionaries::MissionariesState,
    search::{engine::bfs_with_stats, node::node_to_path},
};

fn main() {
    tracing_subscriber::fmt::init();

    let (solution, stats) = bfs_with_stats(
        MissionariesState::start(),
        |state| state.goal_reached(),
        |state| state.successors(),
    );

    match solution {
        Some(node) => {
            let path = node_to_path(&node);
            println!("Crossed in {} trips:\n", path.len() - 1);
            for (trip, state) in path.iter().enumerate() {
                println!("{:2}. {}", trip, state);
            }
        }
        None => println!("No legal crossing exists."),
    }

    println!(
        "\nexpanded {} states, discovered {}",
        stats.nodes_expanded, stats.nodes_discovered
    );
}
