//! Command-line arguments.

use std::convert::Infallible;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use concord_config::OutputStyle;
use concord_types::CompositionMode;

#[derive(Debug, Parser)]
#[command(name = "concord", version)]
#[command(about = "Reconcile two cluster-rankings into a contradiction core and a consensus ranking")]
pub struct Cli {
    /// First ranking: inline JSON such as '[1, [2, 3], 4]', or @PATH
    pub ranking_a: RankingSource,
    /// Second ranking, in the same form
    pub ranking_b: RankingSource,
    /// Pretty-print the result
    #[arg(long)]
    pub pretty: bool,
    /// pointwise (default) or relational
    #[arg(long, value_name = "MODE")]
    pub composition: Option<CompositionMode>,
    /// Read settings from PATH instead of ~/.concord/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Output style requested on the command line, if any.
    #[must_use]
    pub fn output(&self) -> Option<OutputStyle> {
        self.pretty.then_some(OutputStyle::Pretty)
    }
}

/// Where a ranking's JSON comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankingSource {
    Inline(String),
    File(PathBuf),
}

impl FromStr for RankingSource {
    type Err = Infallible;

    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        Ok(match arg.strip_prefix('@') {
            Some(path) => Self::File(PathBuf::from(path)),
            None => Self::Inline(arg.to_owned()),
        })
    }
}
