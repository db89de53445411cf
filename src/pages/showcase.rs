use log::warn;
use yew::prelude::*;

use crate::components::feature_detail::FeatureDetail;
use crate::components::feature_list::FeatureList;
use crate::components::phone_mockup::PhoneMockup;
use crate::config::ShowcaseConfig;
use crate::showcase::catalog::{catalog, feature_at};
use crate::showcase::observer::use_showcase_observer;
use crate::showcase::progress::ProgressMapper;
use crate::showcase::state::{InteractionState, ShowcaseAction};

#[derive(Properties, PartialEq)]
pub struct ShowcaseProps {
    pub config: ShowcaseConfig,
}

#[function_component(Showcase)]
pub fn showcase(props: &ShowcaseProps) -> Html {
    let config = &props.config;
    let region = use_node_ref();
    let state = {
        let epsilon = config.progress_epsilon;
        use_reducer_eq(move || {
            InteractionState::new(ProgressMapper::new(catalog().len(), epsilon))
        })
    };

    use_showcase_observer(region.clone(), state.dispatcher());

    let on_previous = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(ShowcaseAction::Previous))
    };
    let on_next = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(ShowcaseAction::Next))
    };
    let on_select = {
        let dispatcher = state.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(ShowcaseAction::Select(index)))
    };

    let Some(feature) = feature_at(state.active_index) else {
        warn!("active feature {} outside catalog", state.active_index);
        return html! {};
    };
    let region_height = format!("min-height: {}vh;", config.showcase_height_vh(catalog().len()));

    html! {
        <section ref={region} class="showcase" style={region_height}>
            <div class="showcase-sticky">
                <header class="showcase-header">
                    <h1>{config.organization_name.clone()}</h1>
                </header>

                <div class="showcase-body">
                    <div class="showcase-left">
                        <FeatureDetail {feature} {on_previous} {on_next} />
                    </div>
                    <div class="showcase-center">
                        <PhoneMockup active={state.active_index} theme={feature.theme} />
                    </div>
                    <div class="showcase-right">
                        <FeatureList active={state.active_index} {on_select} />
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .showcase {
                        position: relative;
                        background: #ffffff;
                    }

                    .showcase-sticky {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        overflow: hidden;
                        background: #ffffff;
                    }

                    .showcase-header {
                        background: #111827;
                        color: #ffffff;
                        padding: 1rem 3rem;
                    }

                    .showcase-header h1 {
                        font-size: 1.5rem;
                        font-weight: 300;
                        margin: 0;
                    }

                    .showcase-body {
                        height: calc(100vh - 64px);
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 0 6rem;
                    }

                    .showcase-left { width: 41%; }
                    .showcase-center { width: 33%; display: flex; justify-content: center; }
                    .showcase-right { width: 25%; }

                    .feature-subtitle {
                        color: #06b6d4;
                        font-size: 1.25rem;
                        font-weight: 500;
                    }

                    .feature-title {
                        font-size: 3rem;
                        font-weight: 700;
                        color: #111827;
                        margin: 1.5rem 0;
                    }

                    .feature-description p {
                        color: #4b5563;
                        line-height: 1.6;
                        margin: 0.75rem 0;
                    }

                    .feature-arrows {
                        display: flex;
                        gap: 1rem;
                        padding-top: 1rem;
                    }

                    .arrow-button {
                        width: 2.75rem;
                        height: 2.75rem;
                        padding: 0.5rem;
                        border-radius: 9999px;
                        border: 2px solid #d1d5db;
                        background: transparent;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }

                    .arrow-button:hover {
                        border-color: #06b6d4;
                        color: #06b6d4;
                    }

                    .phone-frame {
                        position: relative;
                        width: 20rem;
                        height: 640px;
                        background: #000000;
                        border-radius: 3rem;
                        padding: 0.5rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }

                    .phone-notch {
                        position: absolute;
                        top: 0;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 9rem;
                        height: 1.5rem;
                        background: #000000;
                        border-radius: 0 0 1.5rem 1.5rem;
                        z-index: 20;
                    }

                    .phone-screen {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        border-radius: 2.5rem;
                        overflow: hidden;
                        color: #ffffff;
                    }

                    .status-bar {
                        position: absolute;
                        top: 0.75rem;
                        left: 1.5rem;
                        right: 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        font-size: 0.875rem;
                        font-weight: 600;
                    }

                    .status-icons { display: flex; gap: 0.375rem; align-items: center; }
                    .mail-icon { width: 1rem; height: 1rem; }
                    .signal { display: flex; gap: 2px; align-items: flex-end; }
                    .signal .bar { width: 2px; background: #ffffff; border-radius: 9999px; }
                    .signal .b1 { height: 0.5rem; }
                    .signal .b2 { height: 0.625rem; }
                    .signal .b3 { height: 0.75rem; }
                    .signal .b4 { height: 0.875rem; }

                    .screen-overlay {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: flex-end;
                        padding-right: 2rem;
                    }

                    .overlay-list { text-align: right; }

                    .overlay-entry {
                        font-size: 0.875rem;
                        font-weight: 300;
                        opacity: 0.4;
                        margin: 0.625rem 0;
                        transition: all 0.3s ease;
                    }

                    .overlay-entry.active {
                        font-weight: 700;
                        color: #67e8f9;
                        opacity: 1;
                        transform: scale(1.1);
                    }

                    .screen-actions {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        gap: 4rem;
                    }

                    .screen-action {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.15);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .screen-action svg { width: 1.75rem; height: 1.75rem; }

                    .home-indicator {
                        position: absolute;
                        bottom: 0.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 8rem;
                        height: 0.25rem;
                        background: rgba(255, 255, 255, 0.8);
                        border-radius: 9999px;
                    }

                    .feature-list-panel h3 {
                        font-size: 1.5rem;
                        font-weight: 600;
                        color: #111827;
                        margin-bottom: 1.5rem;
                    }

                    .feature-entry {
                        display: block;
                        width: 100%;
                        text-align: left;
                        padding: 0.75rem 1rem;
                        margin: 0.25rem 0;
                        border: none;
                        border-left: 4px solid transparent;
                        border-radius: 0.5rem;
                        background: transparent;
                        color: #4b5563;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }

                    .feature-entry:hover { background: #f3f4f6; }

                    .feature-entry.active {
                        background: #06b6d4;
                        color: #ffffff;
                        border-left-color: #0891b2;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    }

                    @media (max-width: 768px) {
                        .showcase-body {
                            flex-direction: column;
                            padding: 2rem 1.5rem;
                        }

                        .showcase-left,
                        .showcase-center,
                        .showcase-right {
                            width: 100%;
                            margin-bottom: 2rem;
                        }

                        .feature-title { font-size: 1.875rem; }

                        .phone-frame {
                            width: 16rem;
                            height: 520px;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
