use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use quaero::{
    problems::maze::{Maze, MazeLocation},
    search::{
        engine::{astar_with_stats, bfs_with_stats, dfs_with_stats},
        heuristics::manhattan_distance,
        node::node_to_path,
        stats::{render_comparison_table, SearchStats},
    },
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 10)]
    rows: usize,

    #[arg(long, default_value_t = 10)]
    cols: usize,

    /// Probability that any given cell is blocked.
    #[arg(long, default_value_t = 0.2)]
    sparseness: f64,

    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Emit results as JSON instead of rendered mazes.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct RunReport {
    algorithm: &'static str,
    path: Option<Vec<MazeLocation>>,
    stats: SearchStats,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let start = MazeLocation::new(0, 0);
    let goal = MazeLocation::new(args.rows - 1, args.cols - 1);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let maze = Maze::random(args.rows, args.cols, args.sparseness, start, goal, &mut rng);

    let (dfs_node, dfs_stats) =
        dfs_with_stats(start, |l| maze.goal_reached(l), |l| maze.successors(l));
    let (bfs_node, bfs_stats) =
        bfs_with_stats(start, |l| maze.goal_reached(l), |l| maze.successors(l));
    let (astar_node, astar_stats) = astar_with_stats(
        start,
        |l| maze.goal_reached(l),
        |l| maze.successors(l),
        manhattan_distance(&goal),
    );

    let runs = [
        ("DFS", dfs_node, dfs_stats),
        ("BFS", bfs_node, bfs_stats),
        ("A*", astar_node, astar_stats),
    ];

    if args.json {
        let reports: Vec<RunReport> = runs
            .iter()
            .map(|(name, node, stats)| RunReport {
                algorithm: *name,
                path: node.as_ref().map(|n| node_to_path(n)),
                stats: stats.clone(),
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).expect("reports serialize")
        );
        return;
    }

    for (name, node, _) in &runs {
        println!("\n{} on a {}x{} maze:", name, args.rows, args.cols);
        match node {
            Some(node) => {
                let mut marked = maze.clone();
                marked.mark_path(&node_to_path(node));
                println!("{}", marked);
            }
            None => println!("no path from {:?} to {:?}", start, goal),
        }
    }

    let rows: Vec<_> = runs
        .iter()
        .map(|(name, node, stats)| {
            (
                *name,
                stats,
                node.as_ref().map(|n| node_to_path(n).len()),
            )
        })
        .collect();
    println!("{}", render_comparison_table(&rows));
}
