use dioxus::document::eval;

use crate::vm::ShareOutcome;

const PREFERS_DARK_SCRIPT: &str = r#"
    return !!(window.matchMedia && window.matchMedia("(prefers-color-scheme: dark)").matches);
"#;

const SHARE_SCRIPT_TEMPLATE: &str = r#"
    const text = {text};
    if (navigator.share) {
        try { await navigator.share({ text }); return "shared"; } catch (_) {}
    }
    if (navigator.clipboard && navigator.clipboard.writeText) {
        try { await navigator.clipboard.writeText(text); return "copied"; } catch (_) {}
    }
    return "failed";
"#;

fn focus_script(element_id: &str) -> String {
    format!("document.getElementById({element_id:?})?.focus();")
}

fn share_script(text: &str) -> String {
    SHARE_SCRIPT_TEMPLATE.replace("{text}", &format!("{text:?}"))
}

pub fn focus_element(element_id: &str) {
    let _ = eval(&focus_script(element_id));
}

/// Whether the system asks for a dark color scheme.
pub async fn prefers_dark_scheme() -> bool {
    eval(PREFERS_DARK_SCRIPT)
        .join::<bool>()
        .await
        .unwrap_or(false)
}

/// Offer `text` to the share sheet, falling back to the clipboard.
pub async fn share_text(text: &str) -> ShareOutcome {
    match eval(&share_script(text)).join::<String>().await {
        Ok(status) => ShareOutcome::from_status(&status),
        Err(err) => {
            tracing::debug!(?err, "share script failed");
            ShareOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_script_quotes_text() {
        let script = share_script("I scored \"90%\"!");
        assert!(script.contains(r#"const text = "I scored \"90%\"!";"#));
        assert!(script.contains(r#"return "copied";"#));
        assert!(script.contains("navigator.share({ text })"));
    }

    #[test]
    fn focus_script_targets_element() {
        assert_eq!(
            focus_script("choice-0"),
            r#"document.getElementById("choice-0")?.focus();"#
        );
    }
}
