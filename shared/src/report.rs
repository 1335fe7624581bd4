//! Downloadable pairing reports (CSV, JSON, HTML)

use std::str::FromStr;

use askama::Template;
use chrono::SecondsFormat;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::ReportError;
use crate::models::{DemandLevel, PairingResult};

/// Output format of an exported report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
    Html,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Html => "html",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "text/csv; charset=utf-8",
            ReportFormat::Json => "application/json",
            ReportFormat::Html => "text/html; charset=utf-8",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// Download file name stamped with epoch milliseconds
    pub fn filename(&self, epoch_millis: i64) -> String {
        match self {
            ReportFormat::Html => format!("brewly_ai_report_{}.html", epoch_millis),
            _ => format!("brewly_ai_pairing_{}.{}", epoch_millis, self.extension()),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            "html" => Ok(ReportFormat::Html),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

/// One star per started 20 points
pub fn star_rating(score: u8) -> String {
    "★".repeat((usize::from(score) + 19) / 20)
}

fn money(value: Decimal) -> String {
    format!(
        "${:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

fn generated_at(result: &PairingResult) -> String {
    result.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Two-column `Field,Value` sheet of the headline metrics
pub fn to_csv(result: &PairingResult) -> Result<String, ReportError> {
    let rows = [
        ("Coffee", result.coffee.clone()),
        ("Pastry", result.pastry.clone()),
        ("AI Compatibility Score", format!("{}%", result.score)),
        ("Estimated Profit", money(result.profit)),
        ("Stock Level", format!("{}%", result.avg_stock)),
        ("Demand Level", result.demand.to_string()),
        ("Marketing Text", result.marketing_text.clone()),
        ("Generated At", generated_at(result)),
        ("AI Algorithm", result.algorithm.clone()),
    ];

    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["Field", "Value"])?;
    for (field, value) in &rows {
        wtr.write_record([*field, value.as_str()])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ReportError::CsvWriter(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Full result as pretty-printed JSON
pub fn to_json(result: &PairingResult) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Standalone report page, escaped by the template engine
#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate<'a> {
    coffee: &'a str,
    pastry: &'a str,
    score: u8,
    stars: String,
    profit: String,
    stock: u32,
    demand: DemandLevel,
    marketing: &'a str,
    generated: String,
    algorithm: &'a str,
}

/// Standalone HTML report page
pub fn to_html(result: &PairingResult) -> Result<String, ReportError> {
    let page = ReportTemplate {
        coffee: &result.coffee,
        pastry: &result.pastry,
        score: result.score,
        stars: star_rating(result.score),
        profit: money(result.profit),
        stock: result.avg_stock,
        demand: result.demand,
        marketing: &result.marketing_text,
        generated: result.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        algorithm: &result.algorithm,
    };
    Ok(page.render()?)
}

/// Render a result in the requested format
pub fn render(format: ReportFormat, result: &PairingResult) -> Result<String, ReportError> {
    let body = match format {
        ReportFormat::Csv => to_csv(result)?,
        ReportFormat::Json => to_json(result)?,
        ReportFormat::Html => to_html(result)?,
    };
    tracing::debug!(format = format.as_str(), bytes = body.len(), "rendered pairing report");
    Ok(body)
}
