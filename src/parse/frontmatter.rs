//! Frontmatter extraction
//!
//! A document starting with a `---` line and containing a later `---` line
//! has frontmatter between them. Text that is not a YAML mapping is not
//! frontmatter: it is left in the body and a warning is logged.

use serde_yaml::{Mapping, Value};

use crate::models::document::FRONTMATTER_DELIMITER;
use crate::models::Frontmatter;

/// Returns the frontmatter (if any) and how many lines it occupied
pub fn extract_frontmatter(lines: &[&str]) -> (Option<Frontmatter>, usize) {
    if lines.first() != Some(&FRONTMATTER_DELIMITER) {
        return (None, 0);
    }
    let Some(close) = lines
        .iter()
        .skip(1)
        .position(|line| *line == FRONTMATTER_DELIMITER)
        .map(|offset| offset + 1)
    else {
        log::debug!("Opening frontmatter delimiter has no closing delimiter");
        return (None, 0);
    };

    let inner = &lines[1..close];
    match parse_properties(&inner.join("\n")) {
        Some(properties) => {
            let source = inner.iter().map(|line| line.to_string()).collect();
            (Some(Frontmatter::from_source(properties, source)), close + 1)
        }
        None => (None, 0),
    }
}

fn parse_properties(yaml: &str) -> Option<Mapping> {
    match serde_yaml::from_str::<Value>(yaml) {
        Ok(Value::Mapping(properties)) => Some(properties),
        Ok(Value::Null) => Some(Mapping::new()),
        Ok(other) => {
            log::warn!("Frontmatter is not a property map ({:?}), treating as absent", other);
            None
        }
        Err(e) => {
            log::warn!("Failed to parse frontmatter, treating as absent: {}", e);
            None
        }
    }
}
