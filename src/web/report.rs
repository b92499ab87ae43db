/// HTML report rendering for scan results
///
/// This module converts classification results into the four-column table
/// shape shown to the viewer and renders the report page. The four-column
/// encoding (exactly one populated cell per row) exists only here; the rest
/// of the crate works with the result enum directly.

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde::Serialize;
use serde_json::json;

use crate::core::classifier::SubtitleResult;
use crate::core::stats::Stats;

/// One table row: 1-based index plus four data cells, of which exactly one
/// is non-empty.
#[derive(Debug, Serialize)]
struct ReportRow {
    index: usize,
    english: String,
    portuguese: String,
    undefined: String,
    error: String,
}

/// Convert results into table rows, in report order.
fn report_rows(results: &[SubtitleResult]) -> Vec<ReportRow> {
    results
        .iter()
        .enumerate()
        .map(|(i, result)| {
            let mut row = ReportRow {
                index: i + 1,
                english: String::new(),
                portuguese: String::new(),
                undefined: String::new(),
                error: String::new(),
            };

            match result {
                SubtitleResult::English { file_stem } => row.english = file_stem.clone(),
                SubtitleResult::Portuguese { file_stem } => row.portuguese = file_stem.clone(),
                SubtitleResult::Undefined { file_stem } => row.undefined = file_stem.clone(),
                SubtitleResult::Error { detail } => row.error = detail.clone(),
            }

            row
        })
        .collect()
}

/// Render the report page for a completed scan.
///
/// # Arguments
///
/// * `results` - Classification results, in scan order
/// * `stats` - Aggregated counts for the same results
///
/// # Returns
///
/// The complete HTML document
pub fn render_report(results: &[SubtitleResult], stats: &Stats) -> Result<String> {
    // Register the Handlebars template engine
    let mut handlebars = Handlebars::new();

    const HTML_TEMPLATE: &str = r#"
    <!DOCTYPE html>
    <html lang="en">
    <head>
        <meta charset="UTF-8">
        <meta name="viewport" content="width=device-width, initial-scale=1.0">
        <title>Subtitle Language Report</title>
        <style>
            body {
                font-family: Arial, sans-serif;
                line-height: 1.6;
                color: #333;
                max-width: 1200px;
                margin: 0 auto;
                padding: 20px;
            }
            h1 {
                color: #2c3e50;
                border-bottom: 2px solid #3498db;
                padding-bottom: 10px;
            }
            h2 {
                color: #2980b9;
                margin-top: 30px;
            }
            .timestamp {
                color: #7f8c8d;
                font-size: 0.9em;
                margin-bottom: 30px;
            }
            .summary {
                background-color: #e8f4f8;
                padding: 15px;
                border-radius: 5px;
                margin-bottom: 30px;
            }
            .summary span {
                background-color: #3498db;
                color: white;
                border-radius: 20px;
                padding: 2px 8px;
                font-size: 0.8em;
                margin-left: 10px;
            }
            table {
                width: 100%;
                border-collapse: collapse;
                box-shadow: 0 2px 5px rgba(0,0,0,0.1);
            }
            th {
                background-color: #3498db;
                color: white;
                text-align: left;
                padding: 10px;
            }
            td {
                padding: 8px 10px;
                border-bottom: 1px solid #eee;
            }
            tr:nth-child(even) {
                background-color: #f8f9fa;
            }
            td.error {
                color: #c0392b;
            }
            .empty {
                color: #7f8c8d;
                font-style: italic;
            }
        </style>
    </head>
    <body>
        <h1>Subtitle Language Report</h1>
        <div class="timestamp">Generated on: {{timestamp}}</div>

        <div class="summary">
            <h2>Scan Summary</h2>
            <p>Files scanned <span>{{stats.total}}</span></p>
            <p>English <span>{{stats.english}}</span></p>
            <p>Portuguese <span>{{stats.portuguese}}</span></p>
            <p>Undetermined <span>{{stats.undefined}}</span></p>
            <p>Errors <span>{{stats.errors}}</span></p>
        </div>

        {{#if rows}}
        <table>
            <thead>
                <tr>
                    <th>#</th>
                    <th>English</th>
                    <th>Portuguese</th>
                    <th>Undetermined</th>
                    <th>Error</th>
                </tr>
            </thead>
            <tbody>
                {{#each rows}}
                <tr>
                    <td>{{index}}</td>
                    <td>{{english}}</td>
                    <td>{{portuguese}}</td>
                    <td>{{undefined}}</td>
                    <td class="error">{{error}}</td>
                </tr>
                {{/each}}
            </tbody>
        </table>
        {{else}}
        <p class="empty">No subtitle files were found.</p>
        {{/if}}
    </body>
    </html>
    "#;

    handlebars
        .register_template_string("report", HTML_TEMPLATE)
        .context("Failed to register HTML template")?;

    // Prepare the template data
    let mut template_data = serde_json::Map::new();
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    template_data.insert("timestamp".to_string(), json!(timestamp));
    template_data.insert("stats".to_string(), json!(stats));
    template_data.insert("rows".to_string(), json!(report_rows(results)));

    handlebars
        .render("report", &template_data)
        .context("Failed to render HTML template")
}
