/// Colour theme of the phone mockup screen for one feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Sunset,
    Ocean,
    Meadow,
    Ember,
    Blossom,
}

impl Theme {
    /// Gradient stops (from, via, to) for the mockup screen.
    pub fn gradient(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Theme::Sunset => ("#a855f7", "#ec4899", "#fb923c"),
            Theme::Ocean => ("#3b82f6", "#06b6d4", "#2dd4bf"),
            Theme::Meadow => ("#22c55e", "#10b981", "#22d3ee"),
            Theme::Ember => ("#eab308", "#f97316", "#f87171"),
            Theme::Blossom => ("#ec4899", "#f43f5e", "#fb923c"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Feature {
    pub id: u32,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static [&'static str],
    pub theme: Theme,
}

/// Everything the showcase can display, in scroll order.
pub static FEATURES: [Feature; 5] = [
    Feature {
        id: 1,
        title: "Smart Booking & Dashboard",
        subtitle: "Feature No.1",
        description: &[
            "• Real-time availability tracking across locations.",
            "• Intuitive calendar-based booking interface.",
            "• Automated confirmation and reminder system.",
            "• Comprehensive dashboard with analytics.",
        ],
        theme: Theme::Sunset,
    },
    Feature {
        id: 2,
        title: "AI-Powered App Suite",
        subtitle: "Feature No.2",
        description: &[
            "• Smart recommendations based on user behavior.",
            "• Predictive analytics for business insights.",
            "• Natural language processing for queries.",
            "• Machine learning optimization.",
        ],
        theme: Theme::Ocean,
    },
    Feature {
        id: 3,
        title: "Insights & Reports",
        subtitle: "Feature No.3",
        description: &[
            "• Detailed performance metrics and KPIs.",
            "• Customizable report generation.",
            "• Visual data representation with charts.",
            "• Export options in multiple formats.",
        ],
        theme: Theme::Meadow,
    },
    Feature {
        id: 4,
        title: "Payment Records & History",
        subtitle: "Feature No.4",
        description: &[
            "• Complete transaction history tracking.",
            "• Secure payment gateway integration.",
            "• Automated receipt generation.",
            "• Financial reconciliation tools.",
        ],
        theme: Theme::Ember,
    },
    Feature {
        id: 5,
        title: "Billing & GST-Compliant Invoicing",
        subtitle: "Feature No.5",
        description: &[
            "• Instant digital invoice generation for every transaction.",
            "• GST-ready formats with automatic tax calculation.",
            "• Multiple payment modes supported: cash, UPI, card, online link.",
            "• Integrated daily/weekly revenue reporting.",
        ],
        theme: Theme::Blossom,
    },
];

pub fn catalog() -> &'static [Feature] {
    &FEATURES
}

pub fn feature_at(index: usize) -> Option<&'static Feature> {
    FEATURES.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_ordered() {
        let ids: Vec<u32> = catalog().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn every_feature_has_bullets() {
        for feature in catalog() {
            assert!(!feature.description.is_empty(), "{} has no bullets", feature.title);
            assert!(feature.description.iter().all(|line| line.starts_with('•')));
        }
    }

    #[test]
    fn third_entry_is_insights() {
        assert_eq!(catalog()[2].title, "Insights & Reports");
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        assert_eq!(feature_at(99), None);
        assert_eq!(feature_at(FEATURES.len()), None);
        assert_eq!(feature_at(4).map(|f| f.id), Some(5));
    }
}
