//! Form field checks shared by the login, hotel and client forms.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Loose address check: one `@`, a non-empty local part, and a dotted domain
/// with no empty labels. The backend remains the authority.
pub fn is_valid_email(raw: &str) -> bool {
    let value = raw.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Trimmed value, or `None` when nothing but whitespace was entered.
pub fn required(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() { None } else { Some(value.to_owned()) }
}
