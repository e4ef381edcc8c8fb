use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;
use wasm_bindgen::JsCast;

use super::contact::ContactModal;

const RESUME_PATH: &str = "/CV_Eloic_2024.pdf";

/// Triggers a browser download of the résumé by clicking a synthetic anchor;
/// no server round trip involved.
fn download_resume() {
    let document = document();
    let Ok(element) = document.create_element("a") else {
        return;
    };
    let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() else {
        return;
    };
    anchor.set_href(RESUME_PATH);
    anchor.set_download("CV_Eloic_2024.pdf");
    let Some(body) = document.body() else {
        return;
    };
    if body.append_child(&anchor).is_ok() {
        anchor.click();
        let _ = body.remove_child(&anchor);
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (contact_open, set_contact_open) = signal(false);

    view! {
        <Title text="Home" />
        <div class="container mx-auto px-4 pt-16">
            <div class="flex flex-col md:flex-row md:h-[80vh] items-center">
                <div class="md:w-2/3">
                    <div class="flex flex-col justify-center items-center space-y-8">
                        <h1 class="text-4xl font-bold text-center">
                            "Hello, my name is " <span class="text-highlight">"Eloïc"</span>
                            <br />
                            <span class="text-xl font-bold">
                                "I'm a " <span class="text-highlight">"fullstack web developer"</span>
                            </span>
                        </h1>
                        <div class="space-y-3 text-center">
                            <button
                                class="hover:text-accent transition-colors block mx-auto"
                                on:click=move |_| download_resume()
                            >
                                "Resume"
                            </button>
                            <button
                                class="hover:text-accent transition-colors block mx-auto"
                                on:click=move |_| set_contact_open.set(true)
                            >
                                "Contacts"
                            </button>
                            <A href="/projects" attr:class="hover:text-accent transition-colors block">
                                "My projects →"
                            </A>
                        </div>
                    </div>
                </div>
                <div class="md:w-1/3 mt-8 md:mt-0">
                    <div class="relative max-w-xs mx-auto overflow-hidden">
                        <div class="rounded-[79%_27%_26%_85%/66%_58%_47%_34%] border-2 border-foreground overflow-hidden shadow-xl">
                            <img src="/portrait.jpeg" alt="Portrait" class="object-cover w-full" />
                        </div>
                    </div>
                </div>
            </div>
        </div>
        <ContactModal open=contact_open on_close=Callback::new(move |_| set_contact_open.set(false)) />
    }
}
