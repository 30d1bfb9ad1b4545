use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAnalysisQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

/// Consumption cost of one item over the period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostAnalysisRow {
    pub item_id: i64,
    pub item_name: String,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub unit_name: Option<String>,
    pub quantity: f64,
    pub unit_cost: f64,
    pub total_cost: f64,
}

impl CostAnalysisRow {
    /// Percent of `total` this row accounts for.
    pub fn share_of(&self, total: f64) -> f64 {
        if total > 0.0 {
            self.total_cost / total * 100.0
        } else {
            0.0
        }
    }
}

pub fn total_cost(rows: &[CostAnalysisRow]) -> f64 {
    rows.iter().map(|r| r.total_cost).sum()
}

/// Share of each row in the overall cost, in percent, in row order.
pub fn cost_shares(rows: &[CostAnalysisRow]) -> Vec<f64> {
    let total = total_cost(rows);
    rows.iter().map(|r| r.share_of(total)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(item_id: i64, total_cost: f64) -> CostAnalysisRow {
        CostAnalysisRow {
            item_id,
            item_name: format!("item {item_id}"),
            category_name: None,
            unit_name: None,
            quantity: 1.0,
            unit_cost: total_cost,
            total_cost,
        }
    }

    #[test]
    fn shares_add_up_to_hundred() {
        let shares = cost_shares(&[row(1, 30.0), row(2, 10.0)]);
        assert_eq!(shares, vec![75.0, 25.0]);
    }

    #[test]
    fn zero_total_gives_zero_shares() {
        assert_eq!(cost_shares(&[row(1, 0.0)]), vec![0.0]);
    }
}
