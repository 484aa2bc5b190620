use clap::Parser;

use truthtab::Mode;

#[derive(Debug, Parser)]
#[command(author, version, about = "Render the truth table of a propositional-logic expression")]
struct Cli {
    /// Expression, e.g. "(a | b) > c". Connectives: ! & | * > ^
    #[arg(value_name = "EXPR")]
    expression: String,

    /// Emit LaTeX operator notation instead of plain Unicode symbols.
    #[clap(short = 'l', long)]
    latex: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    let mode = if args.latex { Mode::Latex } else { Mode::Plain };

    for line in truthtab::truth_table(&args.expression, mode)? {
        println!("{}", line);
    }

    Ok(())
}
