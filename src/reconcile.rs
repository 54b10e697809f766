// src/reconcile.rs
//! Join projections with board lines and rank the gaps.
//!
//! A board category maps to one or more projection columns; the projected value for the
//! category is their sum. Players missing from either side are simply not compared.

use std::fmt;

use crate::error::ReconcileError;
use crate::types::{DiscrepancyRecord, Lines, Projections, StatVector as SV};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Points,
    Rebounds,
    Assists,
    PointsRebounds,
    PointsAssists,
    ReboundsAssists,
    PtsRebsAsts,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Points,
        Category::Rebounds,
        Category::Assists,
        Category::PointsRebounds,
        Category::PointsAssists,
        Category::ReboundsAssists,
        Category::PtsRebsAsts,
    ];

    /// Printed by default.
    pub const REPORT: [Category; 4] = [
        Category::Points,
        Category::Rebounds,
        Category::Assists,
        Category::PtsRebsAsts,
    ];

    /// The board's label, byte for byte.
    pub fn label(self) -> &'static str {
        match self {
            Category::Points => "Points",
            Category::Rebounds => "Rebounds",
            Category::Assists => "Assists",
            Category::PointsRebounds => "Points + Rebounds",
            Category::PointsAssists => "Points + Assists",
            Category::ReboundsAssists => "Rebounds + Assists",
            Category::PtsRebsAsts => "Pts + Rebs + Asts",
        }
    }

    pub fn indices(self) -> &'static [usize] {
        match self {
            Category::Points => &[SV::POINTS],
            Category::Rebounds => &[SV::REBOUNDS],
            Category::Assists => &[SV::ASSISTS],
            Category::PointsRebounds => &[SV::POINTS, SV::REBOUNDS],
            Category::PointsAssists => &[SV::POINTS, SV::ASSISTS],
            Category::ReboundsAssists => &[SV::REBOUNDS, SV::ASSISTS],
            Category::PtsRebsAsts => &[SV::POINTS, SV::REBOUNDS, SV::ASSISTS],
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Projection columns for a board label; empty for labels we do not model.
pub fn resolve_indices(label: &str) -> &'static [usize] {
    match Category::from_label(label) {
        Some(c) => c.indices(),
        None => {
            logd!("reconcile: `{label}` has no projection columns");
            &[]
        }
    }
}

/// Every comparable player for `label`, largest gap first.
///
/// Ties keep board order. An unknown label is rejected rather than compared against a
/// zero projection.
pub fn best_discrepancies<H>(
    projections: &Projections,
    lines: &Lines<H>,
    label: &str,
) -> Result<Vec<DiscrepancyRecord>, ReconcileError> {
    let Some(category) = Category::from_label(label) else {
        logw!("reconcile: rejecting unknown category `{label}`");
        return Err(ReconcileError::UnknownCategory(s!(label)));
    };
    Ok(discrepancies(projections, lines, category))
}

pub fn discrepancies<H>(projections: &Projections, lines: &Lines<H>, category: Category) -> Vec<DiscrepancyRecord> {
    let indices = category.indices();
    let mut out: Vec<DiscrepancyRecord> = lines
        .iter()
        .filter_map(|(player, player_lines)| {
            let prop = player_lines.get(category.label())?;
            let stats = projections.get(player)?;
            let stat_sum = stats.sum_at(indices);
            Some(DiscrepancyRecord {
                abs_difference: (stat_sum - prop.line).abs(),
                player: player.clone(),
                line: prop.line,
                stat_sum,
            })
        })
        .collect();

    // stable: equal gaps stay in board order
    out.sort_by(|a, b| b.abs_difference.total_cmp(&a.abs_difference));
    out
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryReport {
    pub category: Category,
    pub records: Vec<DiscrepancyRecord>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    pub sections: Vec<CategoryReport>,
}

/// Top `top_n` per category, in the order given.
pub fn report<H>(projections: &Projections, lines: &Lines<H>, categories: &[Category], top_n: usize) -> Report {
    let sections = categories
        .iter()
        .map(|&category| {
            let mut records = discrepancies(projections, lines, category);
            if records.len() < top_n {
                logw!("reconcile: only {} comparable players for {category}", records.len());
            }
            records.truncate(top_n);
            CategoryReport { category, records }
        })
        .collect();
    Report { sections }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "{}:", section.category)?;
            for record in &section.records {
                writeln!(f, "{record}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
