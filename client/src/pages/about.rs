//! Static "about" page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <header class="about-page__header">
                <a class="about-page__home" href="/">"← Jobs"</a>
                <h1>"Built for the people who run the pass"</h1>
                <p class="about-page__lede">
                    "Brigade matches cooks, servers, bartenders, and dish crews with restaurants "
                    "that need them, by the skills they actually bring to a shift."
                </p>
            </header>

            <section class="about-page__section">
                <h2>"For kitchen and floor staff"</h2>
                <p>
                    "Every posting lists the skills a role expects and how deep each one goes, "
                    "from first day on the line to running the station. No résumé theatre: "
                    "see the pay, the hours, and what the kitchen needs before you apply."
                </p>
            </section>

            <section class="about-page__section">
                <h2>"For restaurants"</h2>
                <p>
                    "Post a role once and reach people who already know the difference between "
                    "a brunoise and a julienne. Featured listings sit at the top of the board "
                    "during your busiest hiring weeks."
                </p>
            </section>

            <section class="about-page__section">
                <h2>"How skill levels work"</h2>
                <ul class="about-page__tiers">
                    <li><strong>"Unskilled"</strong>": no prior experience needed."</li>
                    <li><strong>"Beginner"</strong>": a few months on the job."</li>
                    <li><strong>"Intermediate"</strong>": holds a station through a rush."</li>
                    <li><strong>"Advanced"</strong>": trains others, covers any station."</li>
                    <li><strong>"Master"</strong>": runs the kitchen or the floor."</li>
                </ul>
            </section>
        </div>
    }
}
