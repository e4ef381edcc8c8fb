use leptos::prelude::*;
use leptos_meta::Title;

use crate::projects::{self, CategoryFilter, Project};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (filter, set_filter) = signal(CategoryFilter::All);
    let (search, set_search) = signal(String::new());

    let shown = move || projects::visible_projects(filter.get(), &search.get());

    view! {
        <Title text="Projects" />
        <div class="container mx-auto px-4 pt-24 pb-12">
            <div class="max-w-5xl mx-auto">
                <div class="flex flex-col md:flex-row justify-between items-center mb-12 gap-4">
                    <div>
                        <h1 class="text-3xl font-bold mb-2">"My Projects"</h1>
                        <p class="text-muted">"Discover my achievements and experiences"</p>
                    </div>
                    <div class="relative">
                        <input
                            type="text"
                            placeholder="Search a project..."
                            class="bg-surface px-4 py-2 rounded-lg placeholder:text-muted focus:outline-none focus:ring-2 focus:ring-accent"
                            prop:value=move || search.get()
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="flex flex-wrap gap-3 mb-8">
                    {CategoryFilter::OPTIONS
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class=move || {
                                        if filter.get() == option {
                                            "px-4 py-2 rounded-full transition-colors bg-accent text-background"
                                        } else {
                                            "px-4 py-2 rounded-full transition-colors bg-surface hover:bg-accent hover:text-background"
                                        }
                                    }
                                    on:click=move |_| set_filter.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {move || {
                    let shown = shown();
                    if shown.is_empty() {
                        view! {
                            <div class="text-center py-12">
                                <h3 class="text-xl font-bold mb-2">"No project found"</h3>
                                <p class="text-muted">"Try modifying your filters or your search"</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                {shown
                                    .into_iter()
                                    .map(|project| view! { <ProjectCard project=project /> })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="bg-surface rounded-xl overflow-hidden hover:shadow-lg transition-shadow group border border-muted/50">
            <div class="relative aspect-video">
                <img src=project.image alt=project.title class="w-full h-full object-cover" />
                <div class="absolute inset-0 bg-black/70 opacity-0 group-hover:opacity-100 transition-opacity flex items-center justify-center gap-4">
                    {(!project.github_link.is_empty())
                        .then(|| {
                            view! {
                                <a
                                    href=project.github_link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="p-2 bg-white rounded-full text-black hover:bg-accent transition-colors"
                                    aria-label="Source on GitHub"
                                >
                                    <i class="devicon-github-plain text-2xl"></i>
                                </a>
                            }
                        })}
                    {(project.has_demo && !project.live_link.is_empty())
                        .then(|| {
                            view! {
                                <a
                                    href=project.live_link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="p-2 bg-white rounded-full text-black hover:bg-accent transition-colors"
                                    aria-label="Live demo"
                                >
                                    <i class="extra-link text-2xl"></i>
                                </a>
                            }
                        })}
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                <p class="text-muted mb-4">
                    {project
                        .description
                        .iter()
                        .map(|line| {
                            view! {
                                <span>{*line}</span>
                                <br />
                            }
                        })
                        .collect_view()}
                </p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-background rounded-full text-sm">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
