//! The `explain` use case: look up rule category documentation.

use profileguard_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the category.
    Found(Explanation),
    /// Unknown category; includes the known ones.
    NotFound {
        category: String,
        available: &'static [&'static str],
    },
}

/// Look up an explanation for a rule category.
pub fn run_explain(category: &str) -> ExplainOutput {
    match explain::lookup_explanation(category) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            category: category.to_string(),
            available: explain::all_categories(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Configuration\n");
    out.push_str("-------------\n");
    out.push_str(exp.configuration);
    out.push_str("\n\n");
    out.push_str("Example\n");
    out.push_str("-------\n\n");
    out.push_str("```toml\n");
    out.push_str(exp.example);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(category: &str, available: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown rule category: {}\n\n", category));
    out.push_str("Known categories:\n");
    for c in available {
        out.push_str(&format!("  - {}\n", c));
    }

    out
}
