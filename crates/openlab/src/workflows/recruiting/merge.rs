use std::collections::HashSet;

use super::domain::Notice;

/// Merge notice sources in priority order, deduplicated by id with the first
/// occurrence winning. Callers list sources highest-priority first (live
/// service, then local store, then static seed); relative order within each
/// source is preserved.
pub fn merge_notice_sources(sources: &[&[Notice]]) -> Vec<Notice> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::new();

    for source in sources {
        for notice in *source {
            let id = notice.id.trim();
            if id.is_empty() || !seen.insert(id.to_string()) {
                continue;
            }
            merged.push(notice.clone());
        }
    }

    merged
}
