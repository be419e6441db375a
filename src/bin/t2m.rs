//! typst2mathjax CLI - Convert inline Typst math to MathJax

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use typst2mathjax::{
    adapt_delimiters, typst_to_mathjax_lossy, typst_to_mathjax_with, DelimiterStyle,
    OperatorTables, T2MOptions,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "t2m")]
#[command(version)]
#[command(about = "typst2mathjax - Convert inline Typst math to MathJax", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Emit `$ $` / `$$ $$` instead of `\( \)` / `\[ \]`
    #[arg(long)]
    latex_delimiters: bool,

    /// Keep lines that fail to convert as raw text instead of aborting
    #[arg(long)]
    lossy: bool,

    /// With --lossy: exit with error if any line was left unconverted
    #[arg(long)]
    strict: bool,

    /// Leave quoted text in math as written
    #[arg(long)]
    no_quoted_text: bool,

    /// Extra operator tables (TOML or JSON), appended to the defaults
    #[cfg(feature = "data-loading")]
    #[arg(long)]
    tables: Option<String>,

    /// Verbose logging (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Show version and the built-in operator tables
    Info,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init()
        .ok();

    if let Some(Commands::Info) = cli.command {
        print_info();
        return Ok(());
    }

    let tables = load_tables(&cli);

    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let options = T2MOptions {
        quoted_text: !cli.no_quoted_text,
    };

    let result = if cli.lossy {
        let output = typst_to_mathjax_lossy(&input, &tables, &options);
        for failure in &output.failures {
            eprintln!("⚠ {}", failure);
        }
        if cli.strict && output.has_failures() {
            eprintln!(
                "Error: {} line(s) left unconverted in strict mode",
                output.failures.len()
            );
            std::process::exit(1);
        }
        output.content
    } else {
        match typst_to_mathjax_with(&input, &tables, &options) {
            Ok(output) => output,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    };

    let style = if cli.latex_delimiters {
        DelimiterStyle::Dollar
    } else {
        DelimiterStyle::MathJax
    };
    let result = adapt_delimiters(&result, style);

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            write!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            print!("{}", result);
            io::stdout().flush()?;
        }
    }

    Ok(())
}

#[cfg(all(feature = "cli", feature = "data-loading"))]
fn load_tables(cli: &Cli) -> OperatorTables {
    match cli.tables {
        Some(ref path) => typst2mathjax::load_tables(std::path::Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }),
        None => OperatorTables::default(),
    }
}

#[cfg(all(feature = "cli", not(feature = "data-loading")))]
fn load_tables(_cli: &Cli) -> OperatorTables {
    OperatorTables::default()
}

#[cfg(feature = "cli")]
fn print_info() {
    let tables = OperatorTables::default();
    println!("typst2mathjax - Convert inline Typst math to MathJax");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    for (title, table) in [
        ("Simple operators", &tables.simple),
        ("Symbols", &tables.symbols),
        ("Unary operators", &tables.unary),
    ] {
        println!("{}:", title);
        for (typst, mathjax) in table {
            println!("  {:<10} {}", typst, mathjax);
        }
        println!();
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install typst2mathjax --features cli");
    eprintln!("  t2m [OPTIONS] [INPUT_FILE]");
}
