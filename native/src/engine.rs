use rayon::prelude::*;

use crate::types::{BatchOptions, ColorParseResult};

/// Parse many color strings in parallel.
///
/// Uses Rayon's `par_iter()`; every input is parsed independently, so one
/// bad input only affects its own entry. Results keep the input order.
///
/// This is the batch entry point called from JS via NAPI.
pub fn parse_css_colors(options: &BatchOptions) -> Vec<ColorParseResult> {
    let results: Vec<ColorParseResult> = options
        .inputs
        .par_iter()
        .map(|input| match crate::parser::parse_css_color(input) {
            Ok(colors) => ColorParseResult {
                input: input.clone(),
                colors: Some(colors),
                error: None,
            },
            Err(err) => {
                tracing::trace!(input = %input, error = %err, "color rejected");
                ColorParseResult {
                    input: input.clone(),
                    colors: None,
                    error: Some(err.to_string()),
                }
            }
        })
        .collect();

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    tracing::debug!(total = results.len(), failed, "parsed css color batch");

    results
}
