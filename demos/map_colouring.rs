use clap::Parser;

use quaero::problems::map_colouring::{australia_csp, Colour, ADJACENCIES, REGIONS};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of colours in the palette (1 to 3).
    #[arg(long, default_value_t = 3)]
    colours: usize,

    /// Emit the assignment as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let palette = [Colour::Red, Colour::Green, Colour::Blue];
    let palette = &palette[..args.colours.min(palette.len())];

    let csp = australia_csp(palette).expect("every region has a domain");
    let (solution, stats) = csp.solve_with_stats();

    match solution {
        Some(solution) => {
            if args.json {
                let by_region: std::collections::BTreeMap<&str, &Colour> = REGIONS
                    .iter()
                    .map(|region| (*region, solution.get(region).expect("complete assignment")))
                    .collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&by_region).expect("assignment serializes")
                );
            } else {
                println!(
                    "Coloured {} regions against {} adjacencies:",
                    REGIONS.len(),
                    ADJACENCIES.len()
                );
                for region in REGIONS {
                    println!("  {: <20} {:?}", region, solution.get(&region).unwrap());
                }
            }
        }
        None => println!(
            "No colouring of Australia exists with {} colour(s).",
            palette.len()
        ),
    }
    println!(
        "\n{} assignments tried, {} backtracks",
        stats.assignments_tried, stats.backtracks
    );
}
