//! JSON rendering of a reconciliation.
//!
//! ```json
//! {
//!   "stage1": { "contradiction_core": [[1, 2]] },
//!   "stage2": { "cluster_ranking": [[1, 2], 3] }
//! }
//! ```
//!
//! A `diagnostics` object is added only when the consensus classes could not
//! be ordered topologically.

use concord_config::OutputStyle;
use concord_types::{ClusterOrdering, ConsensusRanking, ContradictionCore, Reconciliation};
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    stage1: Stage1<'a>,
    stage2: Stage2<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostics: Option<Diagnostics>,
}

#[derive(Serialize)]
struct Stage1<'a> {
    contradiction_core: &'a ContradictionCore,
}

#[derive(Serialize)]
struct Stage2<'a> {
    cluster_ranking: &'a ConsensusRanking,
}

#[derive(Serialize)]
struct Diagnostics {
    cluster_ordering: ClusterOrdering,
}

pub fn render(result: &Reconciliation, style: OutputStyle) -> serde_json::Result<String> {
    let report = Report {
        stage1: Stage1 {
            contradiction_core: &result.contradiction_core,
        },
        stage2: Stage2 {
            cluster_ranking: &result.consensus,
        },
        diagnostics: result.ordering.is_fallback().then_some(Diagnostics {
            cluster_ordering: result.ordering,
        }),
    };
    match style {
        OutputStyle::Compact => serde_json::to_string(&report),
        OutputStyle::Pretty => serde_json::to_string_pretty(&report),
    }
}
