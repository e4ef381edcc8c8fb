use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};
use leptos_use::use_window_scroll;

use super::theme::use_theme;
use super::transition::AppRoute;

/// Offset below which downward scrolling never hides the bar, to avoid
/// flicker near the top of the page.
const HIDE_THRESHOLD: f64 = 80.0;

/// Visibility policy for one scroll sample: at or above the top shows the
/// bar, moving upward shows it, moving downward hides it once past the
/// threshold.
fn nav_visible(last_offset: f64, current: f64, threshold: f64) -> bool {
    if current <= 0.0 {
        true
    } else if current < last_offset {
        true
    } else {
        current <= threshold
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();
    let pathname = use_location().pathname;
    let active = move |route: AppRoute| AppRoute::parse(&pathname.get()) == route;
    let link_class = move |route: AppRoute| {
        if active(route) {
            "font-bold px-6 py-2 rounded-full bg-accent text-background"
        } else {
            "font-bold px-6 py-2 rounded-full text-foreground"
        }
    };

    let (_scroll_x, scroll_y) = use_window_scroll();
    let last_offset = StoredValue::new(0.0_f64);
    let (visible, set_visible) = signal(true);
    Effect::new(move |_| {
        let current = scroll_y.get();
        set_visible.set(nav_visible(last_offset.get_value(), current, HIDE_THRESHOLD));
        last_offset.set_value(current);
    });

    view! {
        <nav class=move || {
            if visible.get() {
                "navigation-grad fixed top-0 w-full py-3 px-4 z-50 transition-transform duration-300"
            } else {
                "navigation-grad fixed top-0 w-full py-3 px-4 z-50 transition-transform duration-300 -translate-y-full"
            }
        }>
            <div class="max-w-7xl mx-auto flex justify-between items-center">
                <A href="/" attr:class="flex items-center shrink-0">
                    <div class="w-12 h-12 rounded-full border-2 border-foreground overflow-hidden">
                        <img src="/logo.png" alt="Logo" class="object-cover w-full h-full" />
                    </div>
                </A>
                <div class="flex justify-center items-center rounded-full px-2 py-2 border-2 border-foreground bg-surface">
                    <A href="/" attr:class=move || link_class(AppRoute::Home)>
                        "Home"
                    </A>
                    <A href="/profile" attr:class=move || link_class(AppRoute::Profile)>
                        "Profile"
                    </A>
                    <A href="/projects" attr:class=move || link_class(AppRoute::Projects)>
                        "Projects"
                    </A>
                </div>
                <button
                    class="text-2xl px-3 py-1 rounded-full border-2 border-foreground hover:text-accent transition-colors"
                    aria-label="Toggle color theme"
                    aria-pressed=move || theme.is_dark().to_string()
                    on:click=move |_| theme.toggle()
                >
                    {move || theme.theme().toggle_icon()}
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: f64 = 80.0;

    #[test]
    fn visible_at_the_top() {
        assert!(nav_visible(500.0, 0.0, T));
        assert!(nav_visible(0.0, 0.0, T));
    }

    #[test]
    fn scrolling_down_past_threshold_hides() {
        assert!(!nav_visible(100.0, 150.0, T));
        assert!(!nav_visible(500.0, 600.0, T));
    }

    #[test]
    fn scrolling_down_within_threshold_keeps_it_shown() {
        assert!(nav_visible(10.0, 50.0, T));
    }

    #[test]
    fn scrolling_up_shows_at_any_offset() {
        assert!(nav_visible(600.0, 599.0, T));
        assert!(nav_visible(150.0, 100.0, T));
    }

    #[test]
    fn down_then_up_one_increment_shows_again() {
        assert!(!nav_visible(200.0, 300.0, T));
        assert!(nav_visible(300.0, 299.0, T));
    }
}
