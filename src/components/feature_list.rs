use yew::prelude::*;

use crate::showcase::catalog::catalog;

pub fn current_marker(active: usize, index: usize) -> Option<&'static str> {
    (active == index).then_some("true")
}

pub fn entry_class(active: usize, index: usize) -> &'static str {
    if active == index {
        "feature-entry active"
    } else {
        "feature-entry"
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureListProps {
    pub active: usize,
    pub on_select: Callback<usize>,
}

/// Always-visible selector over the whole catalog.
#[function_component(FeatureList)]
pub fn feature_list(props: &FeatureListProps) -> Html {
    html! {
        <div class="feature-list-panel">
            <h3>{"Feature Showcase"}</h3>
            <div class="feature-entries">
                { for catalog().iter().enumerate().map(|(index, feature)| {
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(index))
                    };
                    html! {
                        <button
                            key={feature.id}
                            class={entry_class(props.active, index)}
                            aria-current={current_marker(props.active, index)}
                            {onclick}
                        >
                            <span>{feature.title}</span>
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_entry_is_distinguished() {
        assert_eq!(entry_class(2, 2), "feature-entry active");
        assert_eq!(entry_class(2, 0), "feature-entry");
    }

    #[test]
    fn only_the_active_entry_is_marked_current() {
        let marked: Vec<Option<&str>> = (0..5).map(|i| current_marker(1, i)).collect();
        assert_eq!(marked, vec![None, Some("true"), None, None, None]);
    }
}
