//! Report export service

use std::sync::Arc;

use shared::report::{self, ReportFormat};
use shared::{Clock, PairingResult};

use crate::error::AppResult;

/// A rendered report ready to be sent as an attachment
#[derive(Debug, Clone)]
pub struct ReportDownload {
    pub content_type: &'static str,
    pub filename: String,
    pub body: String,
}

impl ReportDownload {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Report service for pairing exports
#[derive(Clone)]
pub struct ReportService {
    clock: Arc<dyn Clock + Send + Sync>,
}

impl ReportService {
    pub fn new(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { clock }
    }

    /// Render `result` in the named format (`csv`, `json` or `html`)
    pub fn export(&self, format: &str, result: &PairingResult) -> AppResult<ReportDownload> {
        let format: ReportFormat = format.parse()?;
        let body = report::render(format, result)?;
        let filename = format.filename(self.clock.now().timestamp_millis());

        tracing::info!(format = format.as_str(), %filename, "exported pairing report");

        Ok(ReportDownload {
            content_type: format.content_type(),
            filename,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use chrono::{FixedOffset, TimeZone, Utc};
    use rust_decimal::Decimal;
    use shared::{DemandLevel, FixedClock, PairingMode};

    fn service() -> ReportService {
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2023, 11, 14, 22, 13, 20)
            .unwrap();
        ReportService::new(Arc::new(FixedClock(now)))
    }

    fn result() -> PairingResult {
        PairingResult {
            coffee: "Latte".to_string(),
            pastry: "Danish".to_string(),
            score: 88,
            profit: Decimal::new(512, 2),
            avg_stock: 75,
            coffee_stock: None,
            pastry_stock: None,
            demand: DemandLevel::Medium,
            marketing_text: "B2B STRATEGIC RECOMMENDATION".to_string(),
            timestamp: Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap(),
            season: Some("spring".to_string()),
            best_time: None,
            flavor_profile: None,
            algorithm: "BrewlyAI B2B Analytics Engine".to_string(),
            mode: PairingMode::B2b,
            venue: None,
            target_audience: None,
            profit_margin: None,
            custom_notes: None,
            insights: Vec::new(),
        }
    }

    #[test]
    fn test_export_csv() {
        let download = service().export("csv", &result()).unwrap();
        assert_eq!(download.filename, "brewly_ai_pairing_1700000000000.csv");
        assert_eq!(download.content_type, "text/csv; charset=utf-8");
        assert_eq!(
            download.content_disposition(),
            "attachment; filename=\"brewly_ai_pairing_1700000000000.csv\""
        );
        assert!(download.body.contains("Estimated Profit,$5.12"));
    }

    #[test]
    fn test_export_html_name() {
        let download = service().export("html", &result()).unwrap();
        assert_eq!(download.filename, "brewly_ai_report_1700000000000.html");
    }

    #[test]
    fn test_unknown_format_is_not_found() {
        let err = service().export("xlsx", &result()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
