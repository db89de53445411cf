use stylist::css;
use yew::prelude::*;

use crate::showcase::catalog::{catalog, Theme};

/// CSS background for the mockup screen of a theme.
pub fn screen_gradient(theme: Theme) -> String {
    let (from, via, to) = theme.gradient();
    format!("linear-gradient(to bottom right, {} 0%, {} 50%, {} 100%)", from, via, to)
}

/// Envelope glyph shown next to the signal bars.
pub const MAIL_ICON_PATHS: [&str; 2] = [
    "M2.003 5.884L10 9.882l7.997-3.998A2 2 0 0016 4H4a2 2 0 00-1.997 1.884z",
    "M18 8.118l-8 4-8-4V14a2 2 0 002 2h12a2 2 0 002-2V8.118z",
];

pub fn overlay_entry_class(active: usize, index: usize) -> &'static str {
    if active == index {
        "overlay-entry active"
    } else {
        "overlay-entry"
    }
}

#[derive(Properties, PartialEq)]
pub struct PhoneMockupProps {
    pub active: usize,
    pub theme: Theme,
}

#[function_component(PhoneMockup)]
pub fn phone_mockup(props: &PhoneMockupProps) -> Html {
    let screen = css!(
        r#"
            background: ${background};
            transition: background 0.7s ease;
        "#,
        background = screen_gradient(props.theme)
    );

    html! {
        <div class="phone-frame">
            <div class="phone-notch"></div>
            <div class={classes!("phone-screen", screen)}>
                <div class="status-bar">
                    <span>{"9:41"}</span>
                    <div class="status-icons">
                        <div class="signal">
                            <span class="bar b1"></span>
                            <span class="bar b2"></span>
                            <span class="bar b3"></span>
                            <span class="bar b4"></span>
                        </div>
                        <svg class="mail-icon" viewBox="0 0 20 20" fill="currentColor">
                            { for MAIL_ICON_PATHS.iter().map(|d| html! { <path d={*d} /> }) }
                        </svg>
                    </div>
                </div>

                <div class="screen-overlay">
                    <div class="overlay-list">
                        { for catalog().iter().enumerate().map(|(index, feature)| html! {
                            <div key={feature.id} class={overlay_entry_class(props.active, index)}>
                                {feature.title}
                            </div>
                        }) }
                    </div>
                </div>

                <div class="screen-actions">
                    <span class="screen-action">
                        <svg viewBox="0 0 20 20" fill="currentColor">
                            <path d="M2 3a1 1 0 011-1h2.153a1 1 0 01.986.836l.74 4.435a1 1 0 01-.54 1.06l-1.548.773a11.037 11.037 0 006.105 6.105l.774-1.548a1 1 0 011.059-.54l4.435.74a1 1 0 01.836.986V17a1 1 0 01-1 1h-2C7.82 18 2 12.18 2 5V3z" />
                        </svg>
                    </span>
                    <span class="screen-action">
                        <svg viewBox="0 0 20 20" fill="currentColor">
                            <path fill-rule="evenodd" clip-rule="evenodd" d="M4 5a2 2 0 00-2 2v8a2 2 0 002 2h12a2 2 0 002-2V7a2 2 0 00-2-2h-1.586a1 1 0 01-.707-.293l-1.121-1.121A2 2 0 0011.172 3H8.828a2 2 0 00-1.414.586L6.293 4.707A1 1 0 015.586 5H4zm6 9a3 3 0 100-6 3 3 0 000 6z" />
                        </svg>
                    </span>
                </div>

                <div class="home-indicator"></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_uses_all_three_stops() {
        assert_eq!(
            screen_gradient(Theme::Ocean),
            "linear-gradient(to bottom right, #3b82f6 0%, #06b6d4 50%, #2dd4bf 100%)"
        );
    }

    #[test]
    fn mail_icon_is_a_closed_envelope() {
        assert_eq!(MAIL_ICON_PATHS.len(), 2);
        assert!(MAIL_ICON_PATHS.iter().all(|d| d.starts_with('M') && d.ends_with('z')));
    }

    #[test]
    fn only_the_active_overlay_entry_is_highlighted() {
        let classes: Vec<&str> = (0..5).map(|i| overlay_entry_class(3, i)).collect();
        assert_eq!(classes.iter().filter(|c| c.contains("active")).count(), 1);
        assert_eq!(classes[3], "overlay-entry active");
    }
}
