use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::contact::{settle_submission, ContactRequest, SubmissionStatus};

use super::theme::use_theme;

/// How long the modal lingers on the success message before closing itself.
const CLOSE_DELAY_MS: u64 = 2000;

/// Validates and relays one contact submission. Validation already ran in the
/// browser; it runs again here because the endpoint is reachable without the
/// form. Provider credentials stay on the server and come from the
/// environment, never from the client bundle.
#[server]
pub async fn send_contact_message(
    name: String,
    email: String,
    whatsapp: String,
    message: String,
) -> Result<(), ServerFnError> {
    use crate::contact::relay::{self, RelayConfig};

    let request = ContactRequest {
        name,
        email,
        whatsapp,
        message,
    };
    request
        .validate()
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let config = RelayConfig::from_env().map_err(|e| ServerFnError::new(e.to_string()))?;
    relay::send(&config, &request)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(())
}

/// One parameterized submission flow shared by the standalone form and the
/// modal. The WhatsApp field and the auto-close callback are the only
/// differences between the two hosts.
#[component]
pub fn ContactForm(
    #[prop(default = false)] show_whatsapp: bool,
    #[prop(optional)] on_success: Option<Callback<()>>,
) -> impl IntoView {
    let theme = use_theme();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (whatsapp, set_whatsapp) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (status, set_status) = signal(SubmissionStatus::Idle);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // The submit control is disabled while sending, but guard anyway.
        if status.get_untracked().is_sending() {
            return;
        }

        let request = ContactRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            whatsapp: whatsapp.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(err) = request.validate() {
            set_status.set(SubmissionStatus::Error(err.to_string()));
            return;
        }

        set_status.set(SubmissionStatus::Sending);
        spawn_local(async move {
            let outcome = send_contact_message(
                request.name,
                request.email,
                request.whatsapp,
                request.message,
            )
            .await
            .map_err(|err| {
                log::warn!("contact relay failed: {err}");
                err.to_string()
            });

            let (next, clear_fields) = settle_submission(outcome);
            if clear_fields {
                set_name.set(String::new());
                set_email.set(String::new());
                set_whatsapp.set(String::new());
                set_message.set(String::new());
                if let Some(close) = on_success {
                    set_timeout(
                        move || close.run(()),
                        Duration::from_millis(CLOSE_DELAY_MS),
                    );
                }
            }
            set_status.set(next);
        });
    };

    let input_class = move || {
        if theme.is_dark() {
            "w-full bg-surface/50 border-foreground/10 placeholder:text-foreground/30 rounded-lg p-3 border focus:outline-none focus:ring-2 focus:ring-accent/50 transition-all duration-300"
        } else {
            "w-full bg-gray-50/50 border-gray-200 placeholder:text-gray-400 rounded-lg p-3 border focus:outline-none focus:ring-2 focus:ring-accent/50 transition-all duration-300"
        }
    };

    view! {
        {move || {
            status
                .get()
                .error()
                .map(|err| {
                    view! {
                        <div class="bg-red-500/10 border border-red-500/20 text-red-400 p-3 rounded-lg mb-4 text-sm">
                            {err.to_string()}
                        </div>
                    }
                })
        }}
        {move || {
            (status.get() == SubmissionStatus::Success)
                .then(|| {
                    view! {
                        <div class="bg-green-500/10 border border-green-500/20 text-green-400 p-3 rounded-lg mb-4 text-sm">
                            "Message sent successfully! I'll get back to you soon."
                        </div>
                    }
                })
        }}
        <form class="space-y-4" on:submit=submit>
            <div>
                <label class="block text-sm mb-1.5">"Full Name"</label>
                <input
                    type="text"
                    placeholder="How should I address you?"
                    class=input_class
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label class="block text-sm mb-1.5">"Email"</label>
                <input
                    type="email"
                    placeholder="Your preferred contact email"
                    class=input_class
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>
            {show_whatsapp
                .then(|| {
                    view! {
                        <div>
                            <label class="block text-sm mb-1.5">"WhatsApp (Optional)"</label>
                            <input
                                type="tel"
                                placeholder="+1234567890 (with country code)"
                                class=input_class
                                prop:value=move || whatsapp.get()
                                on:input=move |ev| set_whatsapp.set(event_target_value(&ev))
                            />
                        </div>
                    }
                })}
            <div>
                <label class="block text-sm mb-1.5">"Message"</label>
                <textarea
                    rows="4"
                    placeholder="What's on your mind? Share your project ideas, questions, or just say hello!"
                    class=move || format!("{} resize-none", input_class())
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button
                type="submit"
                disabled=move || status.get().is_sending()
                class=move || {
                    if status.get().is_sending() {
                        "w-full font-medium py-3 rounded-lg bg-accent/50 cursor-not-allowed"
                    } else {
                        "w-full font-medium py-3 rounded-lg bg-accent hover:shadow-lg hover:shadow-accent/20 transition-all duration-300"
                    }
                }
            >
                {move || if status.get().is_sending() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}

#[component]
pub fn ContactModal(#[prop(into)] open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50 p-4">
                <div class="bg-surface rounded-xl max-w-md w-full relative p-6">
                    <button
                        class="absolute right-4 top-4 text-muted hover:text-foreground"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                    <h2 class="text-2xl font-bold mb-6">"Contact me"</h2>
                    <div class="flex justify-center gap-4 mb-6">
                        <a
                            href="https://linkedin.com/in/harenarisoa-eloic"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-2 bg-background rounded-full hover:text-accent transition-colors"
                            aria-label="LinkedIn Profile"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                        <a
                            href="https://github.com/Harson10"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-2 bg-background rounded-full hover:text-accent transition-colors"
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                    </div>
                    <ContactForm on_success=on_close />
                </div>
            </div>
        </Show>
    }
}
