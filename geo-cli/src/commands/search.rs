use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use geo_client::{BooleanOperator, DatasetQuery, GeoRecord, DEFAULT_DB};

use super::create_geo_client;

const SEPARATOR: &str = "──────────────────────────────────";
const MISSING: &str = "—";

/// Candidate field names for the organism line, in priority order
const ORGANISM_KEYS: [&str; 3] = ["taxon", "species", "Organism"];

#[derive(Args, Debug)]
pub struct Search {
    /// One or more keywords to search for
    #[arg(value_name = "KEYWORDS", required = true, num_args = 1..)]
    keywords: Vec<String>,

    /// Maximum number of results to return
    #[arg(long, default_value = "100")]
    max: usize,

    /// Boolean operator to combine multiple keywords
    #[arg(long, value_enum, default_value = "AND")]
    operator: OperatorArg,

    /// Target E-utilities database
    #[arg(long, default_value = DEFAULT_DB)]
    db: String,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum OperatorArg {
    #[value(name = "AND")]
    And,
    #[value(name = "OR")]
    Or,
}

impl From<OperatorArg> for BooleanOperator {
    fn from(arg: OperatorArg) -> Self {
        match arg {
            OperatorArg::And => BooleanOperator::And,
            OperatorArg::Or => BooleanOperator::Or,
        }
    }
}

impl Search {
    pub async fn execute_with_config(&self, email: Option<&str>, tool: &str) -> Result<()> {
        let client = create_geo_client(email, tool)?;

        let query = DatasetQuery::new()
            .keywords(&self.keywords)
            .operator(self.operator.into())
            .db(&self.db)
            .max_results(self.max);
        let term = query.build_term();

        let mut stdout = std::io::stdout();
        writeln!(stdout, "🔍 Searching {} for: '{}' ...", self.db, term)?;
        writeln!(stdout)?;

        let ids = query
            .search(&client)
            .await
            .context("ESearch request failed")?;

        let records = client
            .fetch_summaries(&ids, &self.db)
            .await
            .context("ESummary request failed")?;

        write!(stdout, "{}", render_records(&records))?;

        Ok(())
    }
}

/// Render summary records as human-readable blocks
///
/// An empty record set renders as a single notice line. Each record renders
/// as a fixed-layout block delimited by separator lines, with absent fields
/// shown as a placeholder glyph.
pub fn render_records(records: &[GeoRecord]) -> String {
    if records.is_empty() {
        return "No GEO records found.\n".to_string();
    }

    let mut out = String::new();
    for record in records {
        let accession = record
            .display_value("Accession")
            .unwrap_or_else(|| "(unknown)".to_string());

        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(&format!("📌 Accession: {}\n", accession));
        out.push_str(&format!("🏷  Title:     {}\n", field_or_missing(record, "title")));
        out.push_str(&format!("📚 Type:      {}\n", field_or_missing(record, "gdstype")));
        out.push_str(&format!("🧬 Organism(s): {}\n", organism_display(record)));
        out.push_str(&format!("🔬 Samples:   {}\n", field_or_missing(record, "n_samples")));
        out.push_str(&format!("📝 Summary:   {}\n", field_or_missing(record, "summary")));
        out.push_str(SEPARATOR);
        out.push_str("\n\n");
    }
    out
}

fn field_or_missing(record: &GeoRecord, name: &str) -> String {
    record
        .display_value(name)
        .unwrap_or_else(|| MISSING.to_string())
}

fn organism_display(record: &GeoRecord) -> String {
    ORGANISM_KEYS
        .iter()
        .find_map(|key| record.display_value(key))
        .unwrap_or_else(|| MISSING.to_string())
}
