use leptos::prelude::*;

/// Colour of a [`Badge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Error,
    #[default]
    Neutral,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge badge--primary",
            BadgeVariant::Success => "badge badge--success",
            BadgeVariant::Warning => "badge badge--warning",
            BadgeVariant::Error => "badge badge--error",
            BadgeVariant::Neutral => "badge badge--neutral",
        }
    }
}

/// Small coloured label; the text is a translation key.
#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    label_key: &'static str,
) -> impl IntoView {
    let i18n = crate::shared::i18n::use_i18n();
    view! { <span class=variant.class()>{move || i18n.t(label_key)}</span> }
}
