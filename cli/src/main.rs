use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use brine_flat_compiler::{
    decode_resolved_schema, generate_cpp, verify_schema_layouts, wrap_header, write_cpp_header,
    Config, FlatError, SizeTieBreak,
};

#[derive(Parser)]
#[command(name = "brine-flat-cli")]
#[command(about = "Generate C++ accessors and builders from resolved brine-flat schemas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a C++ header from a resolved schema (`.json`)
    GenCpp {
        /// Input resolved schema file
        #[arg(short, long)]
        input: PathBuf,

        /// Directory to write the header into (if omitted, prints to stdout)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Header base name (defaults to the input file stem)
        #[arg(short, long)]
        name: Option<String>,

        /// Enums at or above this sparseness get no name table
        #[arg(long, default_value_t = 5)]
        max_sparseness: i64,

        /// Order equal-sized fields last-declared first in size-sorted tables
        #[arg(long)]
        reverse_ties: bool,

        /// Suffix appended to the header name
        #[arg(long, default_value = ".fb.h")]
        suffix: String,
    },

    /// Verify the byte layout of every fixed struct `gen-cpp` would emit
    Check {
        /// Input resolved schema file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<(), FlatError> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::GenCpp { input, out_dir, name, max_sparseness, reverse_ties, suffix } => {
            let text = fs::read_to_string(input).map_err(FlatError::Io)?;
            let schema = decode_resolved_schema(&text)?;

            let tie_break = if *reverse_ties {
                SizeTieBreak::ReverseDeclarationOrder
            } else {
                SizeTieBreak::DeclarationOrder
            };
            let config = Config::new()
                .max_sparseness(i128::from(*max_sparseness))
                .size_tie_break(tie_break)
                .file_suffix(suffix.clone());

            // Default the header name to the input stem
            let file_name = match name {
                Some(n) => n.clone(),
                None => input
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "schema".to_string()),
            };

            if let Some(dir) = out_dir {
                let out_path = write_cpp_header(&schema, &config, dir, &file_name)?;
                println!("Generated {} → {}", input.display(), out_path.display());
            } else {
                let code = generate_cpp(&schema, &config)?;
                println!("{}", wrap_header(&code, &file_name));
            }
            Ok(())
        }

        Commands::Check { input } => {
            let text = fs::read_to_string(input).map_err(FlatError::Io)?;
            let schema = decode_resolved_schema(&text)?;
            verify_schema_layouts(&schema)?;
            let checked = schema.structs.iter().filter(|d| d.fixed && !d.generated).count();
            println!("{}: {} fixed struct(s) verified", input.display(), checked);
            Ok(())
        }
    }
}
