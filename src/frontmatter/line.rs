//! Line-based header parsing, used when YAML support is unavailable

use super::{FieldValue, Fields, FrontmatterError, FrontmatterParser};

/// Best-effort `key: value` parser.
///
/// Understands flat scalars, one level of nested `key: value` blocks and
/// `- item` lists. Anything else is skipped, so it never reports an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFrontmatter;

impl FrontmatterParser for LineFrontmatter {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn parse_header(&self, header: &str) -> Result<Fields, FrontmatterError> {
        let mut fields = Fields::new();
        // Key whose value is an indented block or list below it
        let mut open_key: Option<String> = None;

        for raw in header.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let indented = raw.starts_with(' ') || raw.starts_with('\t');

            if let Some(item) = line.strip_prefix('-') {
                let Some(key) = &open_key else { continue };
                let Some(slot) = fields.get_mut(key) else { continue };
                // First item turns the (still empty) block into a list
                if matches!(slot, FieldValue::Map(m) if m.is_empty()) {
                    *slot = FieldValue::List(Vec::new());
                }
                if let FieldValue::List(items) = slot {
                    items.push(unquote(item.trim()).to_string());
                }
                continue;
            }

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim().to_string();
            let value = unquote(value.trim());

            if indented {
                if let Some(Some(FieldValue::Map(map))) =
                    open_key.as_ref().map(|k| fields.get_mut(k))
                {
                    if !value.is_empty() {
                        map.insert(key, FieldValue::Scalar(value.to_string()));
                    }
                    continue;
                }
            }

            if value.is_empty() {
                fields.insert(key.clone(), FieldValue::Map(Fields::new()));
                open_key = Some(key);
            } else {
                fields.insert(key, FieldValue::Scalar(value.to_string()));
                open_key = None;
            }
        }

        Ok(fields)
    }
}

/// Strip one layer of matching quotes
fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}
