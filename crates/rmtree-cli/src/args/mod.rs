// NOTE: Flag Surface Rationale
//
// Why a single flat command (no subcommands)?
// - The tool does one thing: render the tree for one directory
// - Every flag only toggles decoration or diagnostics, never the data

use crate::types::LogLevel;
use clap::Parser;
use rmtree_engine::DEFAULT_MAX_DEPTH;

#[derive(Debug, Parser)]
#[command(name = "rmtree")]
#[command(about = "Display reMarkable documents and folders as a tree", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        value_name = "PATH",
        help = "Source directory (default: $RMTREE_PATH, then the device xochitl directory)"
    )]
    pub path: Option<String>,

    #[arg(long, help = "Show emoji icons")]
    pub icons: bool,

    #[arg(long, help = "Show document type labels")]
    pub labels: bool,

    #[arg(long, help = "Show document UUIDs")]
    pub uuid: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, help = "Deepest nesting level to render")]
    pub max_depth: usize,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,
}
