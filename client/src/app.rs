//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{about::AboutPage, job::JobPage, jobs::JobsPage};
use crate::state::{jobs::JobsState, ui::UiState};
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the job list and UI chrome state to every page and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let jobs = RwSignal::new(JobsState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(jobs);
    provide_context(ui);

    // Effects only run in the browser, so SSR always renders the light theme.
    Effect::new(move || {
        let theme = dark_mode::read_preference();
        dark_mode::apply(theme);
        ui.update(|u| u.theme = theme);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/brigade.css"/>
        <Title text="Brigade"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=JobsPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=(StaticSegment("jobs"), ParamSegment("id")) view=JobPage/>
            </Routes>
        </Router>
    }
}
