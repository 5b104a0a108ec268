/// Sanitize raw report text before entity extraction.
/// Strips control characters, trims each line, and collapses blank lines;
/// clinical punctuation (dosages, ranges, units) is left intact.
pub fn sanitize_report_text(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
