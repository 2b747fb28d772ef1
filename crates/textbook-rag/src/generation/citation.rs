//! Citation extraction from chunk metadata

use std::collections::HashSet;

use crate::error::Result;
use crate::types::RetrievedChunk;

/// Format a citation as `source` or `source (p. page)`
pub fn format_citation(source: &str, page: Option<&str>) -> String {
    match page {
        Some(page) => format!("{} (p. {})", source, page),
        None => source.to_string(),
    }
}

/// Collect one citation per distinct source, in first-seen order.
///
/// Chunks without a source are skipped. When several chunks share a source
/// the citation built from the first one is kept, page included.
pub fn collect_sources(chunks: &[RetrievedChunk]) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut sources = Vec::new();

    for chunk in chunks {
        let Some(source) = chunk.source()? else {
            continue;
        };

        if seen.contains(&source) {
            continue;
        }

        let page = chunk.page()?;
        sources.push(format_citation(&source, page.as_deref()));
        seen.insert(source);
    }

    Ok(sources)
}
