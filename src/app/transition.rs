use std::time::Duration;

use leptos::either::EitherOf4;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::home::HomePage;
use super::profile::ProfilePage;
use super::projects::ProjectsPage;

/// How long the exit animation plays before the incoming page is swapped in.
/// Matches the `page-exit` animation duration in the stylesheet.
const EXIT_MS: u64 = 200;

/// The full routing surface of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Profile,
    Projects,
    NotFound,
}

impl AppRoute {
    pub fn parse(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Self::Home,
            "/profile" => Self::Profile,
            "/projects" => Self::Projects,
            _ => Self::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Home | Self::NotFound => "/",
            Self::Profile => "/profile",
            Self::Projects => "/projects",
        }
    }
}

/// Renders the page for the current location with an exit/enter animation
/// between routes. The swap follows a "wait" policy: the outgoing page plays
/// its exit animation and is fully removed before the incoming page is
/// presented. Navigating again mid-transition restarts the sequence toward
/// the newest target; the generation counter discards the stale swap.
#[component]
pub fn PageTransition() -> impl IntoView {
    let pathname = use_location().pathname;
    let (shown, set_shown) = signal(AppRoute::parse(&pathname.get_untracked()));
    let (exiting, set_exiting) = signal(false);
    let generation = StoredValue::new(0_u64);

    Effect::new(move |_| {
        let next = AppRoute::parse(&pathname.get());
        if next == shown.get_untracked() {
            return;
        }
        let scheduled = generation.with_value(|g| g + 1);
        generation.set_value(scheduled);
        set_exiting.set(true);
        set_timeout(
            move || {
                if generation.get_value() == scheduled {
                    set_shown.set(next);
                    set_exiting.set(false);
                }
            },
            Duration::from_millis(EXIT_MS),
        );
    });

    view! {
        <div class=move || {
            if exiting.get() { "page-wrap page-exit" } else { "page-wrap page-enter" }
        }>
            {move || match shown.get() {
                AppRoute::Home => EitherOf4::A(view! { <HomePage /> }),
                AppRoute::Profile => EitherOf4::B(view! { <ProfilePage /> }),
                AppRoute::Projects => EitherOf4::C(view! { <ProjectsPage /> }),
                AppRoute::NotFound => {
                    EitherOf4::D(view! { <p class="text-center py-24">"Page not found."</p> })
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_three_navigable_paths() {
        assert_eq!(AppRoute::parse("/"), AppRoute::Home);
        assert_eq!(AppRoute::parse("/profile"), AppRoute::Profile);
        assert_eq!(AppRoute::parse("/projects"), AppRoute::Projects);
    }

    #[test]
    fn tolerates_trailing_slash() {
        assert_eq!(AppRoute::parse("/profile/"), AppRoute::Profile);
        assert_eq!(AppRoute::parse("/projects/"), AppRoute::Projects);
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(AppRoute::parse("/blog"), AppRoute::NotFound);
        assert_eq!(AppRoute::parse("/projects/42"), AppRoute::NotFound);
    }

    #[test]
    fn route_paths_round_trip() {
        for route in [AppRoute::Home, AppRoute::Profile, AppRoute::Projects] {
            assert_eq!(AppRoute::parse(route.path()), route);
        }
    }
}
