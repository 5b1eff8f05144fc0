//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate email format (basic check).
///
/// Exactly one `@`, a non-empty local part and a dotted domain.
pub fn validate_email(email: &str) -> Result<(), String> {
    let email = email.trim();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err("Invalid email format".to_string())
    }
}

/// Validate that a URL uses the http or https scheme and has a host.
pub fn validate_http_url(url: &str, field_name: &str) -> Result<(), String> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| format!("{} must start with http:// or https://", field_name))?;

    if rest.split('/').next().unwrap_or_default().is_empty() {
        return Err(format!("{} is missing a host", field_name));
    }

    Ok(())
}

/// Validate that `value` lies in `min..=max`.
pub fn validate_range(value: u64, min: u64, max: u64, field_name: &str) -> Result<(), String> {
    if value < min || value > max {
        Err(format!("{} must be between {} and {}", field_name, min, max))
    } else {
        Ok(())
    }
}
