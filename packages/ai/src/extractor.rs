// ABOUTME: Section extraction from generated specification text
// ABOUTME: Ordered header conventions with a length acceptance check and placeholder fallback

use regex::Regex;
use specgen_core::types::GeneratedContent;
use tracing::debug;

/// Minimum body length for an accepted match; shorter captures are treated as
/// header-only noise
const MIN_SECTION_LEN: usize = 50;

/// The eight section titles, in document order
pub const SECTION_TITLES: [&str; 8] = [
    "Executive Summary",
    "Project Scope",
    "Requirements",
    "Technical Specifications",
    "Compliance & Standards",
    "Evaluation Criteria",
    "Timeline & Milestones",
    "Budget Considerations",
];

/// Placeholder emitted when no convention yields an acceptable body
pub fn section_placeholder(title: &str) -> String {
    format!(
        "Content for {} section would be generated here based on the provided requirements.",
        title
    )
}

/// Locate a section body by trying each header convention in priority order:
/// bold numbered ("**1. Title:**"), plain numbered ("1. Title"), then markdown
/// ("## Title"). The body runs from the header to the next header of the same
/// convention, and is accepted only when longer than the minimum length.
fn find_section(text: &str, title: &str) -> Option<String> {
    let escaped = regex::escape(title);
    let conventions: [(String, &str); 3] = [
        (
            format!(r"(?i)\*\*\d*\.?\s*{}:?\*\*", escaped),
            r"\*\*\d+\.|\*\*[A-Z][\w\s&]+:",
        ),
        (
            format!(r"(?im)^\d*\.?[ \t]*{}:?", escaped),
            r"\n\d+\.|\n[A-Z][\w\s&]+:",
        ),
        (format!(r"(?i)#+[ \t]*{}", escaped), r"\n#+"),
    ];

    for (header_pattern, terminator_pattern) in &conventions {
        let Ok(header) = Regex::new(header_pattern) else {
            continue;
        };
        let Ok(terminator) = Regex::new(terminator_pattern) else {
            continue;
        };

        if let Some(found) = header.find(text) {
            let rest = &text[found.end()..];
            let end = terminator.find(rest).map(|t| t.start()).unwrap_or(rest.len());
            let body = rest[..end].trim();
            if body.len() > MIN_SECTION_LEN {
                return Some(body.to_string());
            }
        }
    }

    None
}

fn extract_section(text: &str, title: &str) -> String {
    match find_section(text, title) {
        Some(body) => body,
        None => {
            debug!("No acceptable match for section '{}', using placeholder", title);
            section_placeholder(title)
        }
    }
}

/// Recover all eight sections from generated text. Never fails: sections that
/// cannot be recovered are filled with their placeholder sentence, so the
/// result always carries exactly eight non-empty sections.
pub fn extract_content(text: &str) -> GeneratedContent {
    GeneratedContent {
        executive_summary: extract_section(text, "Executive Summary"),
        scope: extract_section(text, "Project Scope"),
        requirements: extract_section(text, "Requirements"),
        technical_specs: extract_section(text, "Technical Specifications"),
        compliance: extract_section(text, "Compliance & Standards"),
        evaluation: extract_section(text, "Evaluation Criteria"),
        timeline: extract_section(text, "Timeline & Milestones"),
        budget: extract_section(text, "Budget Considerations"),
    }
}
