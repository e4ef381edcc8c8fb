mod contact;
mod home;
mod navbar;
mod profile;
mod projects;
mod theme;
mod transition;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use navbar::Navbar;
use theme::provide_theme;
use transition::PageTransition;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // One shared theme store for every page and component.
    provide_theme();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Eloïc Harenarisoa - {title}") />

        <Router>
            <Navbar />
            <main class="flex flex-col flex-grow mx-auto w-full">
                // A single catch-all route keeps the transition wrapper
                // mounted across navigations so it can sequence exit/enter.
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/*any") view=PageTransition />
                </Routes>
            </main>
        </Router>
    }
}
