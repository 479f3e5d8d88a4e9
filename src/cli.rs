use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::{Parser, Subcommand};

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "seqio version ";
const AFTER_STRING: &str = indoc::indoc! {"

   ──────────────────────────────────
   streaming reader for FASTA files"};

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    arg_required_else_help = true,
    flatten_help = true,
    styles = STYLES
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every record as `identifier<TAB>length`
    #[command(arg_required_else_help = true)]
    Ids {
        /// the input FASTA file, or `-` for standard input
        file: String,

        /// the output file (standard output if not given)
        #[arg(short)]
        output: Option<String>,
    },

    /// Write record count and length statistics as JSON
    #[command(arg_required_else_help = true)]
    Stats {
        /// the input FASTA file, or `-` for standard input
        file: String,

        /// the output file (standard output if not given)
        #[arg(short)]
        output: Option<String>,

        /// indent the JSON output
        #[arg(long, action)]
        pretty: bool,
    },
}
