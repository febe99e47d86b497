use std::io::Write;

use chrono::NaiveDate;
use interfaces_metricool_instagram::index::{FetchError, MetricoolClient};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::config::ReportConfig;
use crate::report::descriptors::all_endpoints;
use crate::utils::date_window::DateWindow;
use crate::utils::item_count::item_count;

/// Decoded payloads keyed by endpoint name, in fetch order.
pub type ReportResults = Vec<(&'static str, Value)>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Fetch {name}")]
    Fetch {
        name: &'static str,
        #[source]
        source: FetchError,
    },

    #[error("WriteOutput")]
    WriteOutput {
        #[source]
        source: std::io::Error,
    },
}

/// Fetches every endpoint one after another. The first failure aborts the
/// rest.
pub async fn fetch_all(
    client: &MetricoolClient,
    window: &DateWindow,
) -> Result<ReportResults, ReportError> {
    let mut results = Vec::new();

    for endpoint in all_endpoints() {
        let params = window.params(endpoint.encoding);

        let document = client
            .fetch(endpoint.path, &params)
            .await
            .map_err(|source| ReportError::Fetch {
                name: endpoint.name,
                source,
            })?;

        info!(endpoint = endpoint.name, items = item_count(&document), "fetched");
        results.push((endpoint.name, document));
    }

    Ok(results)
}

pub fn summary_lines(results: &[(&'static str, Value)]) -> Vec<String> {
    results
        .iter()
        .map(|(name, document)| format!("{name}: {} items", item_count(document)))
        .collect()
}

/// One full run for an already validated config: window, fetches, then the
/// summary written to `out`.
///
/// Nothing is written unless every fetch succeeded.
pub async fn run<W: Write>(
    config: &ReportConfig,
    today: NaiveDate,
    out: &mut W,
) -> Result<(), ReportError> {
    let window = DateWindow::trailing_year(today);

    info!(
        start = %window.start,
        end = %window.end,
        base_url = %config.base_url,
        "fetching trailing year of instagram data"
    );

    let results = fetch_all(&config.client(), &window).await?;

    for line in summary_lines(&results) {
        writeln!(out, "{line}").map_err(|source| ReportError::WriteOutput { source })?;
    }

    Ok(())
}
