use crate::infrastructure::fatsecret::UpstreamRequest;

/// A required inbound parameter is missing or malformed
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct InvalidParam(pub String);

/// Non-empty value after trimming
pub fn require_text(name: &str, value: Option<String>) -> Result<String, InvalidParam> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| InvalidParam(format!("Missing required parameter: {}", name)))
}

/// Numeric identifier such as `food_id` or `recipe_id`
pub fn require_digits(name: &str, value: Option<String>) -> Result<String, InvalidParam> {
    let value = require_text(name, value)?;
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidParam(format!("{} must contain only digits", name)));
    }
    Ok(value)
}

/// GTIN-13 barcode, exactly 13 digits
pub fn require_barcode(value: Option<String>) -> Result<String, InvalidParam> {
    let value = require_text("barcode", value)?;
    if value.len() != 13 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidParam(
            "barcode must be exactly 13 digits (GTIN-13)".to_string(),
        ));
    }
    Ok(value)
}

/// Default an omitted page size and keep it within 1..=cap
pub fn clamp_max_results(value: Option<u32>, default: u32, cap: u32) -> u32 {
    value.unwrap_or(default).clamp(1, cap)
}

/// Accept only one of the documented values, falling back to a default when omitted
pub fn one_of(
    name: &str,
    value: Option<String>,
    allowed: &[&'static str],
    default: Option<&'static str>,
) -> Result<Option<String>, InvalidParam> {
    match value {
        None => Ok(default.map(str::to_string)),
        Some(v) if allowed.contains(&v.as_str()) => Ok(Some(v)),
        Some(v) => Err(InvalidParam(format!(
            "{} must be one of {}, got '{}'",
            name,
            allowed.join(", "),
            v
        ))),
    }
}

/// Drop blank optional values so they are not sent upstream as empty strings
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Forward the caller's `region` and `language` when they were given
pub fn with_locale(
    request: UpstreamRequest,
    region: Option<String>,
    language: Option<String>,
) -> UpstreamRequest {
    request
        .param_opt("region", non_blank(region))
        .param_opt("language", non_blank(language))
}
