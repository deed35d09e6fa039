use crate::{form::MAX_STYLES, submission::Page};
use std::fmt::Write;

pub fn render_page(page: &Page) -> String {
    let form = &page.form;
    let mut out = String::new();
    let _ = writeln!(out, "\n👗 AI Fashion Stylist");
    let _ = writeln!(out, "  gender        : {}", form.gender);
    let _ = writeln!(out, "  color         : {}", blank_or(&form.color, "(any)"));
    let _ = writeln!(out, "  clothing item : {}", blank_or(&form.clothing_item, "(required)"));
    let styles = if form.selected_styles().is_empty() { "(none)".to_string() } else {
        form.selected_styles().iter().map(|s| format!("[{s}]")).collect::<Vec<_>>().join(" ")
    };
    let _ = writeln!(out, "  styles {}/{}    : {}", form.selected_styles().len(), MAX_STYLES, styles);
    if !form.pending_style_input.is_empty() {
        let _ = writeln!(out, "  style box     : {}", form.pending_style_input);
    }
    let _ = writeln!(
        out,
        "  controls      : add style {} | submit {}",
        if form.can_add_style() { "enabled" } else { "disabled" },
        if page.can_submit() { "enabled" } else { "disabled" },
    );

    if page.submission.is_loading {
        let _ = writeln!(out, "\n⏳ Getting style recommendations...");
    } else if let Some(recs) = page.visible_recommendations() {
        let when = page.submission.received_at.map(|t| t.format("%H:%M:%S UTC").to_string()).unwrap_or_default();
        let _ = writeln!(out, "\n⭐ Recommendations for {} {} ({when})", form.color.trim(), form.clothing_item.trim());
        let _ = writeln!(out, "{}", serde_json::to_string_pretty(recs).unwrap_or_else(|_| recs.to_string()));
    }
    out
}

fn blank_or<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() { placeholder } else { value }
}
