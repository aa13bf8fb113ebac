//! HTMX attribute helpers
//!
//! Build the `hx-*` attributes the dialog templates emit. Values are inserted
//! unescaped, so callers pass only catalog ids and fixed routes.
//!
//! ```rust
//! use site_builder::template::helpers::hx_get;
//!
//! let attrs = hx_get("/sections/templates", "#section-grid", "innerHTML");
//! assert_eq!(
//!     attrs,
//!     r##"hx-get="/sections/templates" hx-target="#section-grid" hx-swap="innerHTML""##
//! );
//! ```

use serde::Serialize;

/// Generate hx-get attribute with target and swap
#[must_use]
pub fn hx_get(url: &str, target: &str, swap: &str) -> String {
    format!(r#"hx-get="{url}" hx-target="{target}" hx-swap="{swap}""#)
}

/// Generate hx-post attribute with target and swap
#[must_use]
pub fn hx_post(url: &str, target: &str, swap: &str) -> String {
    format!(r#"hx-post="{url}" hx-target="{target}" hx-swap="{swap}""#)
}

/// Generate hx-trigger attribute
#[must_use]
pub fn hx_trigger(trigger: &str) -> String {
    format!(r#"hx-trigger="{trigger}""#)
}

/// Generate hx-include attribute
#[must_use]
pub fn hx_include(selector: &str) -> String {
    format!(r#"hx-include="{selector}""#)
}

/// Generate hx-vals attribute from serializable values
///
/// Returns an empty string if the values cannot be serialized.
#[must_use]
pub fn hx_vals<T: Serialize>(values: &T) -> String {
    serde_json::to_string(values)
        .map(|json| format!("hx-vals='{json}'"))
        .unwrap_or_default()
}

/// Join attributes with single spaces
#[must_use]
pub fn attrs<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .filter(|part| !part.as_ref().is_empty())
        .fold(String::new(), |mut out, part| {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(part.as_ref());
            out
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hx_post() {
        assert_eq!(
            hx_post("/sections/select", "#selection", "innerHTML"),
            r##"hx-post="/sections/select" hx-target="#selection" hx-swap="innerHTML""##
        );
    }

    #[test]
    fn test_hx_vals() {
        let vals = hx_vals(&json!({"category": "hero-sections"}));
        assert_eq!(vals, r#"hx-vals='{"category":"hero-sections"}'"#);
    }

    #[test]
    fn test_attrs_skips_empty() {
        let joined = attrs([hx_trigger("click"), String::new(), hx_include("#section-filter")]);
        assert_eq!(joined, r##"hx-trigger="click" hx-include="#section-filter""##);
    }
}
