use clap::{Arg, Command};

fn literal_arg() -> Arg {
    Arg::new("literal")
        .value_name("LITERAL")
        .help("A range literal, for instance 1..5, 1..=5, 3.., ..7 or ..")
        .required(true)
}

pub(crate) fn build_cli() -> Command {
    Command::new("ranges")
        .version("0.1")
        .about("Inspect integer range literals")
        .subcommand_required(true)
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .subcommand(
            Command::new("show")
                .about("Describe a range")
                .arg(literal_arg()),
        )
        .subcommand(
            Command::new("contains")
                .about("Test whether a value belongs to a range")
                .arg(literal_arg())
                .arg(
                    Arg::new("value")
                        .value_name("VALUE")
                        .help("The value to test")
                        .required(true)
                        .value_parser(clap::value_parser!(f64)),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List the integers of a bounded range")
                .arg(literal_arg()),
        )
        .subcommand(
            Command::new("slice")
                .about("Select a window of the given items")
                .arg(literal_arg())
                .arg(
                    Arg::new("items")
                        .value_name("ITEM")
                        .help("The items to slice")
                        .num_args(1..),
                ),
        )
}
