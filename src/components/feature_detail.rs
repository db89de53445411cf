use yew::prelude::*;

use crate::showcase::catalog::Feature;

#[derive(Properties, PartialEq)]
pub struct FeatureDetailProps {
    pub feature: &'static Feature,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
}

#[function_component(FeatureDetail)]
pub fn feature_detail(props: &FeatureDetailProps) -> Html {
    let FeatureDetailProps { feature, on_previous, on_next } = props;

    let previous = {
        let on_previous = on_previous.clone();
        Callback::from(move |_: MouseEvent| on_previous.emit(()))
    };
    let next = {
        let on_next = on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    html! {
        <div class="feature-detail">
            <h3 class="feature-subtitle">{feature.subtitle}</h3>
            <h2 class="feature-title">{feature.title}</h2>
            <div class="feature-description">
                { for feature.description.iter().map(|line| html! {
                    <p>{*line}</p>
                }) }
            </div>

            <div class="feature-arrows">
                <button class="arrow-button" onclick={previous} aria-label="Previous feature">
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <polyline points="15 18 9 12 15 6" />
                    </svg>
                </button>
                <button class="arrow-button" onclick={next} aria-label="Next feature">
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <polyline points="9 18 15 12 9 6" />
                    </svg>
                </button>
            </div>
        </div>
    }
}
