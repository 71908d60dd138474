use clap::Parser;

use puzzle_map_generator::gamemap::GameMap;
use puzzle_map_generator::overworld;
use puzzle_map_generator::tile::TILE_OPENING;

#[derive(Parser, Debug)]
#[command(name = "puzzle_map_generator")]
#[command(about = "Generate tile maps from interlocking puzzle pieces")]
struct Args {
    /// Random seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// List the overworld nodes and exit
    #[arg(long)]
    list_nodes: bool,

    /// Tile x of the overworld node to generate from (default: first node)
    #[arg(long)]
    node_x: Option<i32>,

    /// Tile y of the overworld node to generate from
    #[arg(long)]
    node_y: Option<i32>,

    /// Map width in puzzle pieces
    #[arg(long, default_value = "8")]
    pieces_wide: usize,

    /// Map height in puzzle pieces
    #[arg(long, default_value = "5")]
    pieces_high: usize,

    /// Dump the generated map as JSON instead of ASCII
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let ctx = overworld::initialize_overworld_map();

    if args.list_nodes {
        for node in ctx.nodes {
            println!(
                "({:2}, {:2})  difficulty {}  {}",
                node.x, node.y, node.difficulty, node.description
            );
        }
        return;
    }

    let node = match (args.node_x, args.node_y) {
        (Some(x), Some(y)) => match ctx.node_at(x, y) {
            Some(node) => node,
            None => {
                eprintln!("No overworld node at ({}, {})", x, y);
                std::process::exit(1);
            }
        },
        (None, None) => &ctx.nodes[0],
        _ => {
            eprintln!("--node-x and --node-y must be given together");
            std::process::exit(1);
        }
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    println!(
        "Generating '{}' (difficulty {}) with seed {}",
        node.description, node.difficulty, seed
    );

    let map = match ctx.generate_map_for_node(node, args.pieces_wide, args.pieces_high, seed) {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Map generation failed: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&map) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("JSON serialization failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print_ascii(&map);
}

/// Print the map as rows of tile characters: '.' for background, '#' for
/// corridor openings.
fn print_ascii(map: &GameMap) {
    for y in 0..map.height {
        let mut line = String::with_capacity(map.width);
        for x in 0..map.width {
            line.push(if map.tile_at(x, y) == TILE_OPENING {
                '#'
            } else {
                '.'
            });
        }
        println!("{}", line);
    }
}
