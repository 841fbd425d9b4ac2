use leptos::prelude::*;

/// Inline width of the filled part of the bar.
///
/// The value is passed through verbatim: negative or >100 inputs render an
/// empty or overflowing bar.
pub fn fill_width_style(percentage: i64) -> String {
    format!("width: {}%", percentage)
}

/// Thin horizontal bar filled proportionally to `percentage`.
#[component]
pub fn ProgressBar(
    /// Completion percentage, nominally 0..=100
    percentage: i64,
) -> impl IntoView {
    view! {
        <div class="w-48 bg-white/30 rounded-full h-1.5 mt-1">
            <div class="bg-white h-1.5 rounded-full" style=fill_width_style(percentage)></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_width_matches_percentage() {
        assert_eq!(fill_width_style(0), "width: 0%");
        assert_eq!(fill_width_style(55), "width: 55%");
        assert_eq!(fill_width_style(100), "width: 100%");
    }

    #[test]
    fn test_fill_is_proportional_over_full_range() {
        for v in 0..=100 {
            assert_eq!(fill_width_style(v), format!("width: {}%", v));
        }
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        assert_eq!(fill_width_style(-10), "width: -10%");
        assert_eq!(fill_width_style(150), "width: 150%");
    }
}
