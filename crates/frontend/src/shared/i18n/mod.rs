//! English/Arabic localization.
//!
//! Catalogs are flat `key -> string` maps fetched from
//! `/locales/{lang}.json` and cached per language. A key missing from the
//! active catalog falls back to the built-in English string, then to the
//! key itself. Arabic switches the document to right-to-left.

pub mod fallback;

use std::collections::HashMap;
use std::sync::Arc;

use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::config;
use crate::shared::local_storage;

const LANGUAGE_STORAGE_KEY: &str = "app-language";

pub type Catalog = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Name of the language in itself, for the switcher.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Ar)
    }

    pub fn dir(&self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }
}

/// Resolves `key` against the loaded catalog, then the English fallback.
pub fn lookup(catalog: Option<&Catalog>, key: &str) -> String {
    catalog
        .and_then(|c| c.get(key))
        .cloned()
        .or_else(|| fallback::english(key).map(str::to_string))
        .unwrap_or_else(|| key.to_string())
}

/// Replaces `{name}` placeholders.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{name}}}"), value)
    })
}

#[derive(Clone, Copy)]
pub struct I18nContext {
    pub language: RwSignal<Language>,
    catalogs: RwSignal<HashMap<Language, Arc<Catalog>>>,
}

impl I18nContext {
    fn new(initial: Language) -> Self {
        Self {
            language: RwSignal::new(initial),
            catalogs: RwSignal::new(HashMap::new()),
        }
    }

    /// Translated string; reactive on language and catalog loading.
    pub fn t(&self, key: &str) -> String {
        let language = self.language.get();
        self.catalogs
            .with(|c| lookup(c.get(&language).map(Arc::as_ref), key))
    }

    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.t(key), args)
    }

    pub fn is_rtl(&self) -> bool {
        self.language.get().is_rtl()
    }

    pub fn is_rtl_untracked(&self) -> bool {
        self.language.get_untracked().is_rtl()
    }

    pub fn set_language(&self, language: Language) {
        local_storage::set_item(LANGUAGE_STORAGE_KEY, language.code());
        apply_document_direction(language);
        self.language.set(language);
        self.ensure_catalog(language);
    }

    pub fn toggle_language(&self) {
        let next = match self.language.get_untracked() {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        };
        self.set_language(next);
    }

    fn ensure_catalog(&self, language: Language) {
        if self
            .catalogs
            .with_untracked(|c| c.contains_key(&language))
        {
            return;
        }
        let catalogs = self.catalogs;
        spawn_local(async move {
            match fetch_catalog(language).await {
                Ok(catalog) => {
                    log::debug!("loaded {} strings for '{}'", catalog.len(), language.code());
                    catalogs.update(|c| {
                        c.insert(language, Arc::new(catalog));
                    });
                }
                Err(e) => log::warn!("locale '{}' unavailable: {e}", language.code()),
            }
        });
    }
}

async fn fetch_catalog(language: Language) -> Result<Catalog, gloo_net::Error> {
    let url = format!(
        "{}/{}.json",
        config().locales_path,
        urlencoding::encode(language.code())
    );
    Request::get(&url).send().await?.json::<Catalog>().await
}

fn apply_document_direction(language: Language) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("lang", language.code());
    let _ = root.set_attribute("dir", language.dir());
}

fn load_language_from_storage() -> Language {
    local_storage::get_item(LANGUAGE_STORAGE_KEY)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

#[component]
pub fn I18nProvider(children: Children) -> impl IntoView {
    let initial = load_language_from_storage();
    let ctx = I18nContext::new(initial);
    apply_document_direction(initial);
    ctx.ensure_catalog(initial);
    provide_context(ctx);

    children()
}

pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nContext not found. Wrap your app with I18nProvider.")
}

/// Language toggle for the top header.
#[component]
pub fn LanguageSwitch() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <button
            class="top-header__icon-btn top-header__lang"
            on:click=move |_| i18n.toggle_language()
            title=move || i18n.t("header.language")
        >
            {move || match i18n.language.get() {
                Language::En => Language::Ar.native_name(),
                Language::Ar => Language::En.native_name(),
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loaded_catalog_wins_over_fallback() {
        let mut ar = Catalog::new();
        ar.insert("common.save".into(), "حفظ".into());
        assert_eq!(lookup(Some(&ar), "common.save"), "حفظ");
    }

    #[test]
    fn missing_key_falls_back_to_english_then_key() {
        let ar = Catalog::new();
        assert_eq!(lookup(Some(&ar), "common.save"), "Save");
        assert_eq!(lookup(None, "common.cancel"), "Cancel");
        assert_eq!(lookup(Some(&ar), "no.such.key"), "no.such.key");
    }

    #[test]
    fn interpolation_replaces_named_placeholders() {
        assert_eq!(
            interpolate("Delete {name}?", &[("name", "Flour")]),
            "Delete Flour?"
        );
        assert_eq!(interpolate("{a} of {b}", &[("a", "1"), ("b", "3")]), "1 of 3");
    }

    #[test]
    fn arabic_is_right_to_left() {
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::from_code("ar"), Some(Language::Ar));
        assert_eq!(Language::from_code("fr"), None);
    }
}
