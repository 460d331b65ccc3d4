//! Output formatter implementations.

use serde::Serialize;

use crate::Result;

use super::OutputFormatter;

/// Document shape shared by the JSON and YAML formatters.
#[derive(Serialize)]
struct MaskDocument<'a> {
    paths: &'a [String],
}

/// Formatter printing one path per line.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, paths: &[String]) -> Result<String> {
        let mut output = String::new();
        for path in paths {
            output.push_str(path);
            output.push('\n');
        }
        Ok(output)
    }
}

/// Formatter for pretty-printed JSON.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, paths: &[String]) -> Result<String> {
        let mut output = serde_json::to_string_pretty(&MaskDocument { paths })?;
        output.push('\n');
        Ok(output)
    }
}

/// Formatter for YAML documents.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, paths: &[String]) -> Result<String> {
        Ok(serde_yaml::to_string(&MaskDocument { paths })?)
    }
}

/// Formatter for the comma-joined field-mask form.
///
/// An empty mask renders as nothing, like [`TextFormatter`].
pub struct MaskFormatter;

impl OutputFormatter for MaskFormatter {
    fn format(&self, paths: &[String]) -> Result<String> {
        if paths.is_empty() {
            return Ok(String::new());
        }
        let mut output = paths.join(",");
        output.push('\n');
        Ok(output)
    }
}
