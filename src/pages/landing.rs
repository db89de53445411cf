use yew::prelude::*;

use crate::config::ShowcaseConfig;
use crate::pages::showcase::Showcase;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-content">
                <h1>{"MERN STACK INTERNSHIP "}<span class="light">{"SAMPLE"}</span></h1>
                <h2>{"TASK"}</h2>
                <p>{"Scroll down to explore features"}</p>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ClosingProps {
    pub organization_url: AttrValue,
}

#[function_component(Closing)]
pub fn closing(props: &ClosingProps) -> Html {
    let label = props
        .organization_url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .to_string();

    html! {
        <section class="closing">
            <div class="closing-content">
                <h2>{"Task Complete"}</h2>
                <p class="closing-subtitle">{"Created with Rust + Yew"}</p>
                <p class="closing-link">
                    <a href={props.organization_url.clone()}>{label}</a>
                </p>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: ShowcaseConfig,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    html! {
        <div class="landing-page">
            <Hero />
            <Showcase config={props.config.clone()} />
            <Closing organization_url={props.config.organization_url.clone()} />
            <style>
                {r#"
                    .landing-page {
                        background: #ffffff;
                        font-family: system-ui, -apple-system, sans-serif;
                    }

                    .hero {
                        height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #ffffff;
                    }

                    .hero-content {
                        text-align: center;
                        padding: 0 1rem;
                    }

                    .hero h1 {
                        font-size: 4.5rem;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 1rem;
                    }

                    .hero h1 .light { font-weight: 400; }

                    .hero h2 {
                        font-size: 3.75rem;
                        font-weight: 700;
                        color: #111827;
                        margin-bottom: 2rem;
                    }

                    .hero p {
                        font-size: 1.25rem;
                        font-weight: 300;
                        color: #4b5563;
                    }

                    .closing {
                        height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(to bottom right, #111827, #1f2937, #111827);
                    }

                    .closing-content {
                        text-align: center;
                        color: #ffffff;
                        padding: 0 1rem;
                    }

                    .closing h2 {
                        font-size: 3.75rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }

                    .closing-subtitle {
                        font-size: 1.5rem;
                        opacity: 0.8;
                        margin-bottom: 2rem;
                    }

                    .closing-link {
                        font-size: 1.125rem;
                        opacity: 0.7;
                    }

                    .closing-link a {
                        color: inherit;
                        text-decoration: underline;
                        transition: color 0.3s ease;
                    }

                    .closing-link a:hover { color: #22d3ee; }

                    @media (max-width: 768px) {
                        .hero h1 { font-size: 2.25rem; }
                        .hero h2 { font-size: 1.875rem; }
                        .closing h2 { font-size: 2.25rem; }
                        .closing-subtitle { font-size: 1.25rem; }
                    }
                "#}
            </style>
        </div>
    }
}
