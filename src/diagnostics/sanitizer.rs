// SPDX-License-Identifier: MPL-2.0
//! Strips user file paths from diagnostic messages.
//!
//! Backend errors sometimes quote the settings path or a library location
//! inside the user's home directory. Device nodes (`/dev/...`) are kept
//! because they identify which camera failed.

use std::sync::LazyLock;

use regex::Regex;

/// User-owned locations: home and temp directories, system config, and
/// Windows drive or UNC paths. A path runs until whitespace, a quote, a
/// bracket, or a separator that ends a clause.
static PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?:/home/|/Users/|/tmp/|/var/|/etc/|/opt/|/run/user/|~/)"#,
        r#"[^\s"'()\[\],;:]+"#,
        r#"|[A-Za-z]:\\[^\s"'()\[\],;]+"#,
        r#"|\\\\[^\s"'()\[\],;]+"#,
    ))
    .expect("path pattern should compile")
});

/// Replaces every user path in `message` with `<path>`.
///
/// ```
/// use emotion_lens::diagnostics::sanitize_message;
///
/// assert_eq!(
///     sanitize_message("cannot open /home/user/.config/EmotionLens/settings.toml"),
///     "cannot open <path>"
/// );
/// assert_eq!(sanitize_message("open /dev/video0 failed"), "open /dev/video0 failed");
/// ```
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    PATH_PATTERN.replace_all(message, "<path>").into_owned()
}
