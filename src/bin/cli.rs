//! Stockpile CLI
//!
//! Command-line front-end: parses arguments, runs one engine command, prints the result.

use clap::{Args as ClapArgs, Parser, Subcommand};
use stockpile::render::{render_error, render_outcome};
use stockpile::{Area, Command, Config, Engine, Record, SearchCriteria};
use tracing_subscriber::{fmt, EnvFilter};

/// Stockpile CLI
#[derive(Parser, Debug)]
#[command(name = "stockpile")]
#[command(about = "Manage CSV product lists: create, add, delete, merge, search")]
#[command(version)]
struct Args {
    /// Root directory holding the list and recap areas
    #[arg(short, long, default_value = ".")]
    root: String,

    /// Directory name of the list area
    #[arg(long, default_value = "liste_csv")]
    list_dir: String,

    /// Directory name of the recap area
    #[arg(long, default_value = "recap_csv")]
    recap_dir: String,

    #[command(subcommand)]
    command: Commands,
}

/// Selects the recap area instead of the list area
#[derive(ClapArgs, Debug)]
struct AreaFlag {
    /// Operate on a recap file
    #[arg(long)]
    recap: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a list file with the product columns
    Create {
        /// File name inside the list area
        file: String,
    },

    /// Add a product to a file
    Add {
        file: String,

        /// Name, quantity, unit price, category
        #[arg(long, required = true, num_args = 4, value_names = ["NAME", "QUANTITY", "PRICE", "CATEGORY"])]
        product: Vec<String>,

        #[command(flatten)]
        area: AreaFlag,
    },

    /// Delete every product with the given name
    Delete {
        file: String,

        /// Product name (exact, case-sensitive)
        #[arg(long)]
        name: String,

        #[command(flatten)]
        area: AreaFlag,
    },

    /// Merge list files into a recap file
    Merge {
        /// Recap file name
        #[arg(long)]
        output: String,

        /// List file names, merged in the order given
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Search products; any matching criterion selects a product
    Search {
        file: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        quantity: Option<String>,

        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[command(flatten)]
        area: AreaFlag,
    },
}

impl Commands {
    fn into_command(self) -> stockpile::Result<Command> {
        let command = match self {
            Commands::Create { file } => Command::Create {
                file,
                area: Area::List,
            },
            Commands::Add {
                file,
                product,
                area,
            } => Command::Add {
                file,
                area: Area::from_recap_flag(area.recap),
                record: Record::from_fields(product)?,
            },
            Commands::Delete { file, name, area } => Command::Delete {
                file,
                area: Area::from_recap_flag(area.recap),
                product: name,
            },
            Commands::Merge { output, inputs } => Command::Merge { inputs, output },
            Commands::Search {
                file,
                name,
                quantity,
                price,
                category,
                area,
            } => Command::Search {
                file,
                area: Area::from_recap_flag(area.recap),
                criteria: SearchCriteria {
                    name,
                    quantity,
                    unit_price: price,
                    category,
                },
            },
        };
        Ok(command)
    }
}

fn main() {
    // Initialize tracing/logging (stderr, so stdout carries only results)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,stockpile=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("Stockpile v{}", stockpile::VERSION);

    let config = Config::builder()
        .root_dir(&args.root)
        .list_dir(args.list_dir)
        .recap_dir(args.recap_dir)
        .build();

    let result = Engine::open(config).and_then(|engine| {
        let command = args.command.into_command()?;
        engine.execute(command)
    });

    match result {
        Ok(outcome) => print!("{}", render_outcome(&outcome)),
        Err(e) => {
            tracing::debug!("command failed: {:?}", e);
            eprintln!("{}", render_error(&e));
            std::process::exit(1);
        }
    }
}
