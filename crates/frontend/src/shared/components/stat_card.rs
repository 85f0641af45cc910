use crate::shared::icons::icon;
use leptos::prelude::*;

/// Groups digits with a no-break space (U+00A0): 12345 -> "12 345".
fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed below the value
    #[prop(into)]
    label: Signal<String>,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Accent modifier: "blue", "purple" or "green"
    accent: &'static str,
    #[prop(into)] value: Signal<u64>,
) -> impl IntoView {
    let class = format!("stat-card stat-card--{}", accent);

    view! {
        <div class=class>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__value">{move || format_thousands(value.get())}</div>
                <div class="stat-card__label">{move || label.get()}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(12345), "12\u{00a0}345");
        assert_eq!(format_thousands(1234567), "1\u{00a0}234\u{00a0}567");
    }
}
