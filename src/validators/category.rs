//! Category field check: present, a YAML string, and at least two
//! characters after trimming.

use crate::submission::{self, FrontMatter};

pub fn validate(content: &str, rel_path: &str) -> Option<String> {
    // Absent front matter is the front-matter validator's finding.
    let (yaml, _) = submission::split_front_matter(content)?;

    let front_matter = match FrontMatter::parse(yaml) {
        Ok(front_matter) => front_matter,
        Err(err) => {
            return Some(format!(
                "Error parsing front matter in {rel_path} for category validation: {err}"
            ));
        }
    };

    let value = match front_matter.category {
        None | Some(serde_yaml::Value::Null) => {
            return Some(format!(
                "Missing required field 'category' in front matter of {rel_path}"
            ));
        }
        Some(serde_yaml::Value::String(value)) => value,
        Some(_) => {
            return Some(format!(
                "Field 'category' must be a string in front matter of {rel_path}"
            ));
        }
    };

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!(
            "Field 'category' cannot be empty in front matter of {rel_path}"
        ));
    }
    if trimmed.chars().count() < 2 {
        return Some(format!(
            "Field 'category' must be at least 2 characters long in front matter of {rel_path}. Found: \"{trimmed}\""
        ));
    }

    None
}
