//! Loading rankings from arguments and files.

use std::fs;

use anyhow::{Context, Result};
use concord_types::ClusterRanking;

use crate::args::RankingSource;

/// Read and validate one ranking. `label` names it in error messages.
pub fn load_ranking(source: &RankingSource, label: &str) -> Result<ClusterRanking> {
    let ranking = match source {
        RankingSource::Inline(text) => ClusterRanking::from_json_str(text)
            .with_context(|| format!("ranking {label} is malformed"))?,
        RankingSource::File(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read ranking {label} from {}", path.display()))?;
            ClusterRanking::from_json_str(&text).with_context(|| {
                format!("ranking {label} in {} is malformed", path.display())
            })?
        }
    };
    tracing::debug!(
        ranking = label,
        clusters = ranking.cluster_count(),
        "ranking loaded"
    );
    Ok(ranking)
}
