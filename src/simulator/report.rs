//! Simulation report generation.

use serde::Serialize;

/// Stats recorded for a single simulated contract.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    pub payout: i64,
    pub risk: u32,
    pub rolls: u32,
    pub deaths: u32,
    pub injuries: u32,
    pub team_size: u32,
    pub nodes_selected: u32,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,

    // Payout spread
    pub avg_payout: f64,
    pub min_payout: i64,
    pub max_payout: i64,

    // Heat and damage pressure
    pub avg_risk: f64,
    pub avg_rolls: f64,

    // Crew attrition
    pub total_injuries: u32,
    pub total_deaths: u32,
    pub deaths_per_run: f64,
    /// Runs where no runner was injured or killed
    pub clean_runs: u32,

    // Individual run stats for detailed analysis
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let denom = num_runs.max(1) as f64;

        let avg_payout = runs.iter().map(|r| r.payout as f64).sum::<f64>() / denom;
        let min_payout = runs.iter().map(|r| r.payout).min().unwrap_or(0);
        let max_payout = runs.iter().map(|r| r.payout).max().unwrap_or(0);
        let avg_risk = runs.iter().map(|r| r.risk as f64).sum::<f64>() / denom;
        let avg_rolls = runs.iter().map(|r| r.rolls as f64).sum::<f64>() / denom;
        let total_injuries = runs.iter().map(|r| r.injuries).sum();
        let total_deaths = runs.iter().map(|r| r.deaths).sum::<u32>();
        let deaths_per_run = total_deaths as f64 / denom;
        let clean_runs = runs
            .iter()
            .filter(|r| r.deaths == 0 && r.injuries == 0)
            .count() as u32;

        Self {
            num_runs,
            avg_payout,
            min_payout,
            max_payout,
            avg_risk,
            avg_rolls,
            total_injuries,
            total_deaths,
            deaths_per_run,
            clean_runs,
            run_stats: runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== SIMULATION RESULTS ===\n");
        out.push_str(&format!("Runs:            {}\n", self.num_runs));
        out.push_str(&format!(
            "Payout:          avg {:.0} (min {}, max {})\n",
            self.avg_payout, self.min_payout, self.max_payout
        ));
        out.push_str(&format!("Avg heat gained: {:.2}\n", self.avg_risk));
        out.push_str(&format!("Avg damage rolls:{:.2}\n", self.avg_rolls));
        out.push_str(&format!(
            "Crew attrition:  {} injuries, {} deaths ({:.3} deaths/run)\n",
            self.total_injuries, self.total_deaths, self.deaths_per_run
        ));
        out.push_str(&format!(
            "Clean runs:      {}/{} ({:.1}%)\n",
            self.clean_runs,
            self.num_runs,
            100.0 * self.clean_runs as f64 / self.num_runs.max(1) as f64
        ));
        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(payout: i64, deaths: u32, injuries: u32) -> RunStats {
        RunStats {
            payout,
            risk: 2,
            rolls: 3,
            deaths,
            injuries,
            team_size: 4,
            nodes_selected: 6,
        }
    }

    #[test]
    fn test_report_aggregates() {
        let report = SimReport::from_runs(vec![run(100, 0, 0), run(300, 1, 2)]);
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.avg_payout, 200.0);
        assert_eq!(report.min_payout, 100);
        assert_eq!(report.max_payout, 300);
        assert_eq!(report.total_deaths, 1);
        assert_eq!(report.total_injuries, 2);
        assert_eq!(report.clean_runs, 1);
    }

    #[test]
    fn test_empty_report_does_not_divide_by_zero() {
        let report = SimReport::from_runs(vec![]);
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_payout, 0.0);
    }

    #[test]
    fn test_report_renders() {
        let report = SimReport::from_runs(vec![run(100, 0, 1)]);
        let text = report.to_text();
        assert!(text.contains("SIMULATION RESULTS"));
        assert!(!report.to_json().is_empty());
    }
}
