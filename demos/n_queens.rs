use clap::Parser;

use quaero::problems::queens::n_queens_csp;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board size.
    #[arg(default_value_t = 8)]
    n: i64,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let n = args.n;

    println!("Solving N-Queens for N={}", n);
    let csp = n_queens_csp(n).expect("every column has a domain");
    let (solution, stats) = csp.solve_with_stats();

    match solution {
        Some(solution) => {
            println!("\nFound a solution:");
            let mut board = vec![vec!['.'; n as usize]; n as usize];
            for column in 1..=n {
                let row = *solution.get(&column).expect("complete assignment");
                board[(row - 1) as usize][(column - 1) as usize] = 'Q';
            }
            for row in board {
                println!("{}", row.iter().collect::<String>());
            }
        }
        None => println!("\nNo solution found."),
    }

    println!(
        "\n{} assignments tried, {} backtracks",
        stats.assignments_tried, stats.backtracks
    );
}
