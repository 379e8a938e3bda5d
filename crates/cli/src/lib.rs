mod logging;
mod members;
mod resolve;
mod schema;
mod view;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use resolve::ResolveArgs;

#[derive(Parser)]
#[command(
    name = "dslscope",
    version,
    about = "Declaration resolution for closure-delegating build scripts",
    long_about = "dslscope answers which members of a script class a name in a build script \
                  may refer to. It understands property sugar (`version` for `getVersion()` / \
                  `setVersion(..)`) and closure delegation (`dependencies { add(..) }`), using \
                  a JSON type universe that describes the visible types."
)]
pub struct Cli {
    /// Mirror log output to stderr
    #[arg(long, global = true)]
    pub log_stderr: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a name used in a script against a class
    #[command(
        long_about = "Reports the candidate members of CLASS that a reference to NAME may denote, \
                      in resolution order. If the reference is a call inside a closure whose \
                      delegate can serve it, nothing is reported and the call is left to the \
                      delegate. Without --name every member of the class is listed."
    )]
    Resolve(ResolveArgs),
    /// List every member visible on a class, overrides collapsed
    Members {
        /// JSON type universe file
        #[arg(long, value_name = "FILE")]
        universe: PathBuf,

        /// Fully qualified class name
        #[arg(long, value_name = "FQN")]
        class: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the JSON schema of the type universe file
    Schema,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let component = match &cli.command {
        Commands::Resolve(_) => "resolve",
        Commands::Members { .. } => "members",
        Commands::Schema => "cli",
    };
    let _guard = logging::init_logging(component, cli.log_stderr);

    match cli.command {
        Commands::Resolve(args) => resolve::run(&args),
        Commands::Members {
            universe,
            class,
            json,
        } => members::run(&universe, &class, json),
        Commands::Schema => schema::run(),
    }
}
