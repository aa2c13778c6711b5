use clap::{
    crate_description, crate_name, crate_version, App, AppSettings, Arg, ArgMatches, SubCommand,
};
use derive_more::Display;
use dimacs_csr::{
    dimacs::{BlankLines, DimacsReader, EdgeCountPolicy, FORMAT},
    graph::Graph,
    types::NodeId,
};
use log::info;
use std::error::Error;

#[derive(Debug, Display, PartialEq)]
enum Err {
    #[display(fmt = "invalid node `{}`", _0)]
    InvalidNode(String),
}

impl std::error::Error for Err {}

fn read_graph(matches: &ArgMatches) -> Result<Graph, Box<dyn Error>> {
    let path = matches.value_of("GRAPH").unwrap();
    let reader = DimacsReader::new()
        .edge_count_policy(if matches.is_present("strict-edge-count") {
            EdgeCountPolicy::Strict
        } else {
            EdgeCountPolicy::Advisory
        })
        .blank_lines(if matches.is_present("allow-blank-lines") {
            BlankLines::Ignore
        } else {
            BlankLines::Reject
        });
    let time_now = std::time::Instant::now();
    let graph = reader.read_from_file(path, matches.value_of("format").unwrap())?;
    info!(
        "read {} in {}ms",
        path,
        time_now.elapsed().as_millis()
    );
    Ok(graph)
}

fn handle_info(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    println!("{}", read_graph(matches)?.info());
    Ok(())
}

fn handle_display(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    println!("{}", read_graph(matches)?);
    Ok(())
}

fn handle_neighbors(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let graph = read_graph(matches)?;
    let node = matches.value_of("NODE").unwrap();
    let v = node
        .parse::<NodeId>()
        .ok()
        .filter(|v| (1..=graph.node_count()).contains(v))
        .ok_or_else(|| Err::InvalidNode(String::from(node)))?;
    for (target, weight) in graph.arcs(v) {
        println!("{} {}", target, weight);
    }
    Ok(())
}

fn graph_args<'a, 'b>(subcommand: App<'a, 'b>) -> App<'a, 'b> {
    subcommand
        .arg(
            Arg::with_name("GRAPH")
                .help("DIMACS graph file")
                .required(true),
        )
        .arg(
            Arg::with_name("format")
                .long("format")
                .takes_value(true)
                .default_value(FORMAT)
                .help("Format of the graph file"),
        )
        .arg(
            Arg::with_name("strict-edge-count")
                .long("strict-edge-count")
                .help("Fails when the problem line's edge count differs from the arcs read"),
        )
        .arg(
            Arg::with_name("allow-blank-lines")
                .long("allow-blank-lines")
                .help("Skips blank lines instead of rejecting them"),
        )
}

fn run() -> Result<(), Box<dyn Error>> {
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(graph_args(
            SubCommand::with_name("info").about("Prints a summary of the graph"),
        ))
        .subcommand(graph_args(
            SubCommand::with_name("display").about("Prints the CSR arrays of the graph"),
        ))
        .subcommand(
            graph_args(
                SubCommand::with_name("neighbors").about("Prints the arcs leaving a node"),
            )
            .arg(
                Arg::with_name("NODE")
                    .help("1-based node id")
                    .required(true),
            ),
        )
        .get_matches();
    if let Some(matches) = matches.subcommand_matches("info") {
        handle_info(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("display") {
        handle_display(matches)?;
    } else if let Some(matches) = matches.subcommand_matches("neighbors") {
        handle_neighbors(matches)?;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
