//! Applying fixes to source text

use crate::diagnostic::{Diagnostic, Fix, Suggestion};

/// Outcome of applying fixes
#[derive(Debug)]
pub struct FixResult {
    /// The fixed source text
    pub output: String,
    /// Number of diagnostics whose fix was applied
    pub applied: usize,
    /// Number of fixable diagnostics skipped because they overlapped an applied fix
    pub skipped: usize,
}

/// Apply the automatic fixes of all diagnostics
///
/// A diagnostic's replacements are applied together or not at all. When two
/// diagnostics touch overlapping text the earlier one wins; the other can be
/// picked up by linting the output again.
pub fn apply_fixes(source: &str, diagnostics: &[Diagnostic]) -> FixResult {
    let mut candidates: Vec<&Diagnostic> =
        diagnostics.iter().filter(|d| d.is_fixable()).collect();
    candidates.sort_by_key(|d| d.fixes.iter().map(|fix| fix.start).min());

    let mut accepted: Vec<&Fix> = Vec::new();
    let mut applied = 0;
    let mut skipped = 0;
    for diagnostic in candidates {
        if diagnostic.fixes.iter().any(|fix| accepted.iter().any(|other| overlaps(fix, other))) {
            skipped += 1;
            continue;
        }
        accepted.extend(diagnostic.fixes.iter());
        applied += 1;
    }

    FixResult { output: splice(source, accepted), applied, skipped }
}

/// Apply a single suggestion
pub fn apply_suggestion(source: &str, suggestion: &Suggestion) -> String {
    splice(source, suggestion.fixes.iter().collect())
}

fn overlaps(a: &Fix, b: &Fix) -> bool {
    // Two insertions at the same offset would be ambiguous
    if a.start == a.end && b.start == b.end {
        return a.start == b.start;
    }
    a.start < b.end && b.start < a.end
}

fn splice(source: &str, mut fixes: Vec<&Fix>) -> String {
    fixes.sort_by_key(|fix| (fix.start, fix.end));
    let mut output = String::with_capacity(source.len());
    let mut last = 0usize;
    for fix in fixes {
        let start = fix.start as usize;
        let end = fix.end as usize;
        if start < last || end > source.len() {
            continue;
        }
        output.push_str(&source[last..start]);
        output.push_str(&fix.replacement);
        last = end;
    }
    output.push_str(&source[last..]);
    output
}
