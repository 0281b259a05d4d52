//! Skill badge: a skill name colored by its tier.

#[cfg(test)]
#[path = "skill_badge_test.rs"]
mod skill_badge_test;

use leptos::prelude::*;
use listings::{SkillLevel, SkillTier};

/// Rendered size of a [`SkillBadge`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BadgeSize {
    fn css_modifier(self) -> &'static str {
        match self {
            Self::Small => "skill-badge--sm",
            Self::Medium => "skill-badge--md",
            Self::Large => "skill-badge--lg",
        }
    }
}

fn badge_class(tier: SkillTier, size: BadgeSize, active: bool) -> String {
    let mut class = format!("skill-badge {} {}", tier.css_modifier(), size.css_modifier());
    if active {
        class.push_str(" skill-badge--active");
    }
    class
}

/// Filled and empty pips, one per level step.
fn pips(level: SkillLevel) -> String {
    let filled = usize::from(level.value());
    let empty = usize::from(SkillLevel::MAX) - filled;
    format!("{}{}", "●".repeat(filled), "○".repeat(empty))
}

/// Badge showing a skill label, its tier name, and level pips.
#[component]
pub fn SkillBadge(
    level: SkillLevel,
    #[prop(into)] label: String,
    #[prop(optional)] size: BadgeSize,
    #[prop(optional)] active: bool,
) -> impl IntoView {
    let tier = level.tier();
    let title = format!("{label}: {} ({}/{})", tier.label(), level.value(), SkillLevel::MAX);

    view! {
        <span
            class=badge_class(tier, size, active)
            style=format!("--skill-accent: {}", tier.color())
            title=title
        >
            <span class="skill-badge__label">{label}</span>
            <span class="skill-badge__tier">{tier.label()}</span>
            <span class="skill-badge__pips" aria-hidden="true">{pips(level)}</span>
        </span>
    }
}
