//! Default command: logs in, `draft_url` output line out.

use anyhow::{Context, Result};
use draft_url_core::{
    extract_draft_url, read_log_text, write_set_output, DraftUrl, DRAFT_URL_OUTPUT_NAME,
};
use std::io::{Read, Write};

/// Read all of `input`, extract the draft URL and write one `set-output` line to `output`.
/// Nothing is written when no draft URL is found.
pub fn run_extract<R: Read, W: Write>(input: R, mut output: W) -> Result<DraftUrl> {
    let logs = read_log_text(input)?;
    let url = extract_draft_url(&logs)?;
    write_set_output(&mut output, DRAFT_URL_OUTPUT_NAME, url.as_str())
        .context("write draft_url output")?;
    tracing::info!(url = %url, "emitted {} output", DRAFT_URL_OUTPUT_NAME);
    Ok(url)
}
