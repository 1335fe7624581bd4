//! WebAssembly bindings for the Brewly pairing widget
//!
//! Provides client-side:
//! - Catalog, B2B and custom pairing scores
//! - Report export (CSV, JSON, HTML) and download file names
//! - Small display helpers (demand label, star rating)
//!
//! Requests and results cross the boundary as JSON strings.

use wasm_bindgen::prelude::*;

use shared::report::{self, ReportFormat};
use shared::{
    B2bPairingRequest, CatalogPairingRequest, Clock, CustomPairingRequest, DemandLevel,
    PairingError, PairingResult, RandomSource, SystemClock,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// `Math.random()` as a random source
struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Wall clock in the browser's current UTC offset
fn browser_clock() -> SystemClock {
    // getTimezoneOffset() is minutes behind UTC
    let minutes_behind = js_sys::Date::new_0().get_timezone_offset();
    SystemClock::from_offset_minutes(-(minutes_behind as i32))
}

fn to_js_error(message: String) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

fn selection_error(err: PairingError) -> String {
    err.user_message().to_string()
}

fn result_json(result: &PairingResult) -> Result<String, String> {
    serde_json::to_string(result).map_err(|e| format!("Failed to encode result: {}", e))
}

fn catalog_pairing<C: Clock + ?Sized>(request_json: &str, clock: &C) -> Result<String, String> {
    let request: CatalogPairingRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("Invalid pairing request JSON: {}", e))?;
    let result = shared::score_catalog_pairing(&request, clock).map_err(selection_error)?;
    result_json(&result)
}

fn b2b_pairing<C, R>(request_json: &str, clock: &C, rng: &mut R) -> Result<String, String>
where
    C: Clock + ?Sized,
    R: RandomSource + ?Sized,
{
    let request: B2bPairingRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("Invalid B2B request JSON: {}", e))?;
    let result = shared::score_b2b_pairing(&request, clock, rng).map_err(selection_error)?;
    result_json(&result)
}

fn custom_pairing<C, R>(request_json: &str, clock: &C, rng: &mut R) -> Result<String, String>
where
    C: Clock + ?Sized,
    R: RandomSource + ?Sized,
{
    let request: CustomPairingRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("Invalid custom request JSON: {}", e))?;
    let result = shared::score_custom_pairing(&request, clock, rng).map_err(selection_error)?;
    result_json(&result)
}

fn render_report(format: &str, result_json: &str) -> Result<String, String> {
    let format: ReportFormat = format.parse().map_err(|e: shared::ReportError| e.to_string())?;
    let result: PairingResult =
        serde_json::from_str(result_json).map_err(|e| format!("Invalid result JSON: {}", e))?;
    report::render(format, &result).map_err(|e| e.to_string())
}

fn filename_for(format: &str, epoch_millis: i64) -> Result<String, String> {
    let format: ReportFormat = format.parse().map_err(|e: shared::ReportError| e.to_string())?;
    Ok(format.filename(epoch_millis))
}

/// Score a menu pairing; returns the result as JSON
#[wasm_bindgen]
pub fn score_catalog_pairing(request_json: &str) -> Result<String, JsValue> {
    catalog_pairing(request_json, &browser_clock()).map_err(to_js_error)
}

/// Score a business pairing; returns the result as JSON
#[wasm_bindgen]
pub fn score_b2b_pairing(request_json: &str) -> Result<String, JsValue> {
    b2b_pairing(request_json, &browser_clock(), &mut BrowserRandom).map_err(to_js_error)
}

/// Score a freeform pairing; returns the result as JSON
#[wasm_bindgen]
pub fn score_custom_pairing(request_json: &str) -> Result<String, JsValue> {
    custom_pairing(request_json, &browser_clock(), &mut BrowserRandom).map_err(to_js_error)
}

/// Render a pairing result as `csv`, `json` or `html`
#[wasm_bindgen]
pub fn export_report(format: &str, result_json: &str) -> Result<String, JsValue> {
    render_report(format, result_json).map_err(to_js_error)
}

/// Download file name for a report generated now
#[wasm_bindgen]
pub fn report_filename(format: &str) -> Result<String, JsValue> {
    filename_for(format, js_sys::Date::now() as i64).map_err(to_js_error)
}

/// Demand label for an average stock level
#[wasm_bindgen]
pub fn demand_label(avg_stock: u32) -> String {
    DemandLevel::from_stock(avg_stock).to_string()
}

/// Star string shown next to a score
#[wasm_bindgen]
pub fn star_rating(score: u8) -> String {
    report::star_rating(score)
}
