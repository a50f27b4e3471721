//! Pipeline-board grouping of deals by stage.
//!
//! # Responsibility
//! - Group a deal snapshot into stage columns with per-stage value totals.
//!
//! # Invariants
//! - Columns follow the canonical `STAGES` order.
//! - Deals whose stage matches no canonical stage appear in no column but
//!   still count toward `pipeline_total`.

use crate::model::deal::{Deal, STAGES};

/// One column on the pipeline board.
#[derive(Debug, Clone, PartialEq)]
pub struct StageColumn {
    /// Canonical stage name.
    pub stage: &'static str,
    /// Deals in this stage, in snapshot order.
    pub deals: Vec<Deal>,
    /// Sum of deal values in this stage.
    pub total_value: f64,
}

/// Returns the deals whose stage equals `stage`, in snapshot order.
pub fn deals_in_stage(deals: &[Deal], stage: &str) -> Vec<Deal> {
    deals
        .iter()
        .filter(|deal| deal.stage == stage)
        .cloned()
        .collect()
}

/// Sums the value of deals in `stage`.
pub fn stage_total(deals: &[Deal], stage: &str) -> f64 {
    deals
        .iter()
        .filter(|deal| deal.stage == stage)
        .map(|deal| deal.value)
        .sum()
}

/// Sums the value of every deal in the snapshot, regardless of stage.
pub fn pipeline_total(deals: &[Deal]) -> f64 {
    deals.iter().map(|deal| deal.value).sum()
}

/// Builds the full board: one column per canonical stage.
pub fn pipeline_board(deals: &[Deal]) -> Vec<StageColumn> {
    STAGES
        .into_iter()
        .map(|stage| StageColumn {
            stage,
            deals: deals_in_stage(deals, stage),
            total_value: stage_total(deals, stage),
        })
        .collect()
}
