use contracts::dashboards::d100_onboarding::IconKind;
use leptos::prelude::*;

/// Size and colour classes applied when the caller passes none.
pub fn default_class(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Home | IconKind::Calendar | IconKind::Document | IconKind::Team => "h-6 w-6",
        IconKind::CheckCircle => "h-8 w-8",
        IconKind::Pencil | IconKind::MeetTeam | IconKind::FirstWeek => "h-8 w-8 text-blue-500",
    }
}

fn path_data(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Home => "M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6",
        IconKind::Calendar => "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z",
        IconKind::Document => "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
        IconKind::Team => "M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.653-.125-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.653.125-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z",
        IconKind::CheckCircle => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
        IconKind::Pencil => "M11 5H6a2 2 0 00-2 2v11a2 2 0 002 2h11a2 2 0 002-2v-5m-1.414-9.414a2 2 0 112.828 2.828L11.828 15H9v-2.828l8.586-8.586z",
        IconKind::MeetTeam => "M12 4.354a4 4 0 110 5.292M15 21H3v-1a6 6 0 0112 0v1zm0 0h6v-1a6 6 0 00-9-5.197M15 21a6 6 0 00-9-5.197M15 11a3 3 0 11-6 0 3 3 0 016 0z",
        IconKind::FirstWeek => "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2zM12 18a3 3 0 100-6 3 3 0 000 6z",
    }
}

/// Outline icon; `class` replaces the default size/colour classes.
pub fn icon(kind: IconKind, class: Option<&'static str>) -> AnyView {
    let class = class.unwrap_or_else(|| default_class(kind));
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" class=class fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" d=path_data(kind)/>
        </svg>
    }
    .into_any()
}

/// Solid person silhouette used on the buddy card.
pub fn avatar_icon() -> AnyView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" class="h-10 w-10 text-slate-400" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true">
            <path fill-rule="evenodd" d="M10 9a3 3 0 100-6 3 3 0 000 6zm-7 9a7 7 0 1114 0H3z" clip-rule="evenodd"/>
        </svg>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [IconKind; 8] = [
        IconKind::Home,
        IconKind::Calendar,
        IconKind::Document,
        IconKind::Team,
        IconKind::CheckCircle,
        IconKind::Pencil,
        IconKind::MeetTeam,
        IconKind::FirstWeek,
    ];

    #[test]
    fn test_every_icon_has_a_distinct_shape() {
        let mut shapes: Vec<&str> = ALL.iter().map(|k| path_data(*k)).collect();
        shapes.sort_unstable();
        shapes.dedup();
        assert_eq!(shapes.len(), ALL.len());
    }

    #[test]
    fn test_default_classes() {
        assert_eq!(default_class(IconKind::Home), "h-6 w-6");
        assert_eq!(default_class(IconKind::CheckCircle), "h-8 w-8");
        assert_eq!(default_class(IconKind::Pencil), "h-8 w-8 text-blue-500");
    }
}
