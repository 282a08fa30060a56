//! Simulation report generation.

use serde::Serialize;

/// Observed vs expected share for one table entry.
#[derive(Debug, Clone, Serialize)]
pub struct EntryStats {
    pub id: String,
    pub label: String,
    pub weight: i64,
    pub count: u32,
    pub expected_share: f64,
    pub observed_share: f64,
}

impl EntryStats {
    /// Observed minus expected, in percentage points.
    pub fn deviation_pct(&self) -> f64 {
        (self.observed_share - self.expected_share) * 100.0
    }
}

/// Aggregated results of a simulation.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub table: String,
    pub num_draws: u32,
    pub seed: Option<u64>,
    pub entries: Vec<EntryStats>,

    // Economy
    pub final_gold: i64,
    pub final_gems: i64,
    pub chests_won: u32,
    /// Draws where gold was clamped at zero
    pub clamped_draws: u32,
}

impl SimReport {
    /// Largest absolute deviation across entries, in percentage points.
    pub fn max_deviation_pct(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.deviation_pct().abs())
            .fold(0.0, f64::max)
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 REWARD TABLE SIMULATION\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Table: {}   Draws: {}\n\n",
            self.table, self.num_draws
        ));

        report.push_str("── DISTRIBUTION ─────────────────────────────────────────────────\n");
        for e in &self.entries {
            let bar_len = (e.observed_share * 100.0 / 2.0) as usize;
            report.push_str(&format!(
                "  {:<16} w={:<4} {:>6.2}% (exp {:>6.2}%, {:+.2}) {}\n",
                e.label,
                e.weight,
                e.observed_share * 100.0,
                e.expected_share * 100.0,
                e.deviation_pct(),
                "█".repeat(bar_len)
            ));
        }
        report.push_str(&format!(
            "\n  Max deviation:       {:.2} pts\n\n",
            self.max_deviation_pct()
        ));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Final Gold:          {}\n", self.final_gold));
        report.push_str(&format!("  Final Gems:          {}\n", self.final_gems));
        report.push_str(&format!("  Chests Won:          {}\n", self.chests_won));
        report.push_str(&format!("  Gold Clamped:        {}\n", self.clamped_draws));

        report
    }

    /// Generate a JSON report.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
