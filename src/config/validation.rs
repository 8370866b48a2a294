//! Input validation and name normalization

use regex::Regex;
use std::sync::LazyLock;

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("pattern compiles"));

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("pattern compiles"));

static INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("pattern compiles"));

static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("pattern compiles"));

static PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("pattern compiles"));

/// Allow-list for template repository URLs. Conservative by design: anything
/// outside the character class is rejected, including shell metacharacters.
static GIT_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?://|git@|git://)[\w.@:/~-]+$").expect("pattern compiles")
});

/// Convert a free-form display name into a package identifier
///
/// `"My Awesome App"`, `"MyAwesomeApp"` and `"my_awesome_app"` all become
/// `"my-awesome-app"`. The result is empty when the input carries no
/// alphanumeric characters.
#[must_use]
pub fn to_package_name(display_name: &str) -> String {
    let trimmed = display_name.trim();
    let kebab = CAMEL_BOUNDARY.replace_all(trimmed, "$1-$2");
    let hyphenated = SEPARATOR_RUN.replace_all(&kebab, "-");
    let lowered = hyphenated.to_lowercase();
    let cleaned = INVALID_CHARS.replace_all(&lowered, "");
    let collapsed = HYPHEN_RUN.replace_all(&cleaned, "-");

    collapsed.trim_matches('-').to_owned()
}

/// True iff `name` is already a valid package identifier (no normalization)
#[must_use]
pub fn is_valid_package_name(name: &str) -> bool {
    PACKAGE_NAME.is_match(name)
}

/// True iff the display name normalizes to a valid package identifier
#[must_use]
pub fn is_valid_display_name(display_name: &str) -> bool {
    if display_name.trim().is_empty() {
        return false;
    }

    let package_name = to_package_name(display_name);
    !package_name.is_empty() && is_valid_package_name(&package_name)
}

/// Allow-list check for git clone URLs
///
/// Accepts `https://`, `http://`, `git@host:path` and `git://` forms, with
/// or without a `.git` suffix. The template fetcher layers a forbidden-flag
/// check on top of this before shelling out.
#[must_use]
pub fn is_valid_git_url(url: &str) -> bool {
    GIT_URL.is_match(url)
}

/// Validate an OIDC authority URL: `https://` required, `http://localhost`
/// exempt
///
/// # Errors
///
/// Returns the message to show the user when the input is rejected.
pub fn validate_oidc_authority(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        return Err("OIDC authority URL is required".to_owned());
    }

    let secure = input
        .strip_prefix("https://")
        .is_some_and(|rest| !rest.is_empty());
    if secure || input.starts_with("http://localhost") {
        return Ok(());
    }

    Err("OIDC authority must be a valid HTTPS URL (or HTTP for localhost)".to_owned())
}

/// Validate a generic `http(s)://` URL field
///
/// # Errors
///
/// Returns the message to show the user when the input is rejected.
pub fn validate_http_url(input: &str, field_name: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        return Err(format!("{field_name} is required"));
    }

    let rest = input
        .strip_prefix("https://")
        .or_else(|| input.strip_prefix("http://"));
    match rest {
        Some(body) if !body.is_empty() => Ok(()),
        _ => Err(format!("{field_name} must be a valid URL")),
    }
}

/// Validate a required free-form field
///
/// # Errors
///
/// Returns the message to show the user when the input is empty.
pub fn validate_required(input: &str, field_name: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        return Err(format!("{field_name} is required"));
    }

    Ok(())
}
