use crate::args::OutputFormat;
use citymatch_core::CityNames;

/// Render search results for stdout. `None` means there is nothing to print
/// on stdout (the `lines` format with no matches).
pub fn render(names: &CityNames, format: OutputFormat) -> anyhow::Result<Option<String>> {
    let out = match format {
        OutputFormat::List => Some(names.to_string()),
        OutputFormat::Lines if names.is_empty() => None,
        OutputFormat::Lines => Some(names.as_slice().join("\n")),
        OutputFormat::Json => Some(serde_json::to_string(names)?),
    };
    Ok(out)
}
