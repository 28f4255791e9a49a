use kubefind_types::KubernetesObject;

use crate::config::SearchConfig;
use crate::report::{Report, ReportSink};
use crate::store::ObjectStore;

/// Context window around one match, in byte offsets of the original text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snippet {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Totals for one scan pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub scanned: usize,
    pub ignored: usize,
    pub matched_objects: usize,
    pub matches: usize,
}

/// Scans stored objects for the configured pattern
pub struct Matcher {
    config: SearchConfig,
}

impl Matcher {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Scan every object in the store, reporting each match to the sink
    pub fn scan<S: ReportSink>(&self, store: &ObjectStore, sink: &mut S) -> ScanSummary {
        let mut summary = ScanSummary::default();

        for object in store {
            summary.scanned += 1;

            if self.is_excluded(object) {
                summary.ignored += 1;
                sink.ignored(object);
                continue;
            }

            let snippets = self.snippets(&object.text);
            if snippets.is_empty() {
                continue;
            }

            summary.matched_objects += 1;
            summary.matches += snippets.len();

            for snippet in snippets {
                sink.matched(&Report {
                    kind: object.kind,
                    name: object.name.clone(),
                    namespace: object.namespace.clone(),
                    snippet: snippet.text,
                });
            }
        }

        summary
    }

    /// Check the object's `<namespace>/<name>` key against the exclude pattern
    pub fn is_excluded(&self, object: &KubernetesObject) -> bool {
        self.config
            .exclude()
            .is_some_and(|re| re.is_match(&object.exclusion_key()))
    }

    /// Find all non-overlapping matches in the lowercased text and cut the
    /// surrounding windows out of the original text
    pub fn snippets(&self, text: &str) -> Vec<Snippet> {
        let folded = FoldedText::new(text);
        let radius = self.config.radius();

        self.config
            .pattern()
            .find_iter(&folded.text)
            .map(|m| {
                let (match_start, match_end) = folded.original_range(m.start(), m.end());

                let start = floor_char_boundary(text, match_start.saturating_sub(radius));
                let end = ceil_char_boundary(text, match_end.saturating_add(radius).min(text.len()));

                Snippet {
                    start,
                    end,
                    text: text[start..end].replace('\n', " "),
                }
            })
            .collect()
    }
}

/// Lowercased copy of a text with a map back to the original offsets
struct FoldedText<'a> {
    original: &'a str,
    text: String,

    /// Original byte offset of the char behind each folded byte.
    /// `None` while lowercasing kept every char the same length.
    offsets: Option<Vec<usize>>,
}

impl<'a> FoldedText<'a> {
    fn new(original: &'a str) -> Self {
        let mut text = String::with_capacity(original.len());
        let mut offsets: Option<Vec<usize>> = None;

        for (idx, ch) in original.char_indices() {
            let before = text.len();
            text.extend(ch.to_lowercase());

            // Up to here folded and original offsets are identical
            if offsets.is_none() && text.len() - before != ch.len_utf8() {
                offsets = Some((0..before).collect());
            }
            if let Some(offsets) = offsets.as_mut() {
                offsets.resize(text.len(), idx);
            }
        }

        Self {
            original,
            text,
            offsets,
        }
    }

    /// Map a folded match range onto whole chars of the original text
    fn original_range(&self, start: usize, end: usize) -> (usize, usize) {
        let Some(offsets) = &self.offsets else {
            return (start, end);
        };

        let original_start = offsets.get(start).copied().unwrap_or(self.original.len());
        if end <= start {
            return (original_start, original_start);
        }

        let last = offsets[end - 1];
        let last_len = self.original[last..]
            .chars()
            .next()
            .map_or(0, char::len_utf8);

        (original_start, last + last_len)
    }
}

/// Find the largest valid char boundary <= the given byte index
fn floor_char_boundary(s: &str, mut idx: usize) -> usize {
    if idx >= s.len() {
        return s.len();
    }
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Find the smallest valid char boundary >= the given byte index
fn ceil_char_boundary(s: &str, mut idx: usize) -> usize {
    while idx < s.len() && !s.is_char_boundary(idx) {
        idx += 1;
    }
    idx.min(s.len())
}
