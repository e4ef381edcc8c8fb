use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{self, Side, SkillGroup, TimelineEvent};

use super::contact::ContactForm;
use super::theme::use_theme;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <Title text="Profile" />
        <div class="container mx-auto px-4 py-24">
            <div class="max-w-5xl mx-auto">
                <ProfileHeader />
                <div class="grid md:grid-cols-2 gap-8 mt-12">
                    <div class="space-y-8">
                        <ProfileSection title="Academic & Professional Timeline" icon="extra-graduation-cap">
                            <Timeline />
                        </ProfileSection>
                        <ProfileSection title="Expertise" icon="extra-briefcase">
                            <p class="text-muted text-justify m-2">
                                "I have always paid special attention to visual aspects, which has led me to a passion for drawing, design, and currently web development. I strive to perfect every detail. I don't limit myself to development; fulfillment lies in openness, and I regularly train to meet market needs."
                            </p>
                        </ProfileSection>
                    </div>
                    <div class="space-y-8">
                        <ProfileSection title="Hard Skills" icon="extra-code">
                            <div class="space-y-6">
                                {content::skill_groups()
                                    .iter()
                                    .map(|group| view! { <SkillGroupView group=group /> })
                                    .collect_view()}
                            </div>
                        </ProfileSection>
                        <ProfileSection title="Soft Skills" icon="extra-brain">
                            <ul class="space-y-3">
                                {content::soft_skills()
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <li class="flex items-start gap-3">
                                                <span class="w-2 h-2 bg-accent rounded-full mt-2"></span>
                                                <span class="text-muted">{*skill}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </ProfileSection>
                    </div>
                </div>
                <section class="mt-16">
                    <h2 class="text-3xl font-bold mb-6 text-center">"Let's Talk"</h2>
                    <p class="text-muted text-sm mb-6 text-center">
                        "Have a project in mind? Want to collaborate? I'm just a message away. Fill out the form below."
                    </p>
                    <div class="max-w-2xl mx-auto bg-surface/50 backdrop-blur-sm rounded-2xl p-6 shadow-xl border border-foreground/10">
                        <ContactForm show_whatsapp=true />
                    </div>
                </section>
            </div>
        </div>
    }
}

#[component]
fn ProfileHeader() -> impl IntoView {
    view! {
        <div class="flex flex-col md:flex-row items-center md:items-start gap-8">
            <div class="w-48 h-48 relative rounded-full border-2 border-foreground shrink-0">
                <img
                    src="/portrait.jpg"
                    alt="Portrait"
                    class="w-full h-full object-cover rounded-full"
                />
            </div>
            <div class="flex-1 text-center md:text-left">
                <h1 class="text-4xl font-bold mb-2">"HARENARISOA Eloïc"</h1>
                <h2 class="text-xl font-semibold mb-4">
                    "Software Engineer / Web Developer / UI-UX Designer"
                </h2>
                <p class="text-lg text-muted max-w-2xl">
                    "With a few beginnings already in place, I am always looking for new challenges to grow in the professional field. Successfully completing fulfilling projects and ensuring client satisfaction are my main goals."
                </p>
            </div>
        </div>
    }
}

#[component]
fn ProfileSection(title: &'static str, icon: &'static str, children: Children) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class=move || {
            if theme.is_dark() {
                "bg-surface/80 backdrop-blur-sm rounded-xl p-6"
            } else {
                "bg-white/95 shadow-lg rounded-xl p-6"
            }
        }>
            <div class="flex items-center gap-3 mb-4">
                <i class=format!("{icon} text-accent text-2xl")></i>
                <h2 class="text-xl font-bold text-accent">{title}</h2>
            </div>
            {children()}
        </div>
    }
}

/// Alternating left/right event cards along a vertical path.
#[component]
fn Timeline() -> impl IntoView {
    view! {
        <div class="relative w-full py-6">
            <div class="absolute left-1/2 top-0 w-1 h-full bg-gradient-to-b from-accent to-surface -translate-x-1/2"></div>
            {content::timeline()
                .iter()
                .map(|event| view! { <TimelineCard event=event /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn TimelineCard(event: &'static TimelineEvent) -> impl IntoView {
    let flipped = event.side == Side::Left;
    view! {
        <div class=if flipped {
            "flex items-center gap-4 mb-10 flex-row-reverse"
        } else {
            "flex items-center gap-4 mb-10"
        }>
            <div class="absolute left-1/2 -translate-x-1/2">
                <div class="w-4 h-4 bg-surface border-2 border-accent rounded-full"></div>
            </div>
            <div class=if flipped {
                "w-[calc(50%-1.5rem)] text-right"
            } else {
                "w-[calc(50%-1.5rem)] text-left"
            }>
                <div class="bg-surface/90 p-4 rounded-xl border border-accent/30 hover:border-accent transition-colors">
                    <div class=if flipped {
                        "flex items-center gap-2 mb-1 justify-end"
                    } else {
                        "flex items-center gap-2 mb-1"
                    }>
                        <i class=format!("{} text-accent", event.icon.class())></i>
                        <span class="text-accent font-bold">{event.year}</span>
                    </div>
                    <h3 class="text-lg font-bold mb-1">{event.title}</h3>
                    <p class="text-muted text-sm">{event.description}</p>
                </div>
            </div>
            <div class="w-[calc(50%-1.5rem)]"></div>
        </div>
    }
}

#[component]
fn SkillGroupView(group: &'static SkillGroup) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-sm font-semibold uppercase tracking-wider text-muted mb-3">
                {group.category}
            </h4>
            <div class="flex flex-wrap gap-2">
                {group
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <span class="bg-background px-4 py-2 rounded-full text-sm font-medium">
                                {*skill}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
