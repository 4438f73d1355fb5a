//! Theme resolution

use checkout_flow::ThemeColors;

fn css_variable(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let style = window.get_computed_style(&root).ok()??;
    style.get_property_value(name).ok()
}

/// Read `--primary` and `--primary-hover` from the document root, once
pub fn resolve() -> ThemeColors {
    ThemeColors::resolve(
        css_variable("--primary").as_deref(),
        css_variable("--primary-hover").as_deref(),
    )
}
