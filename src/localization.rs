use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::FluentResource;
use std::collections::HashMap;
use std::fs;
use std::sync::{Arc, LazyLock};
use unic_langid::LanguageIdentifier;

/// Localization manager for the QR code generator bot
pub struct LocalizationManager {
    bundles: HashMap<String, Arc<FluentBundle<FluentResource>>>,
}

impl LocalizationManager {
    /// Create a new localization manager with the English bundle loaded
    pub fn new() -> Self {
        let mut bundles = HashMap::new();

        let en_locale: LanguageIdentifier = "en".parse().unwrap_or_default();
        let bundle = Self::create_bundle(&en_locale);
        bundles.insert("en".to_string(), Arc::new(bundle));

        Self { bundles }
    }

    /// Create a fluent bundle for a specific locale
    fn create_bundle(locale: &LanguageIdentifier) -> FluentBundle<FluentResource> {
        let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);

        // Load the main resource file
        let resource_path = format!("./locales/{}/main.ftl", locale);
        if let Ok(content) = fs::read_to_string(&resource_path) {
            if let Ok(resource) = FluentResource::try_new(content) {
                let _ = bundle.add_resource(resource);
            }
        }

        bundle
    }

    /// Get a localized message
    pub fn get_message(&self, key: &str) -> String {
        let bundle = match self.bundles.get("en") {
            Some(bundle) => bundle,
            None => return format!("Missing translation: {}", key),
        };

        let msg = match bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {}", key),
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {}", key),
        };

        let mut value = String::new();
        let _ = bundle.write_pattern(&mut value, pattern, None, &mut vec![]);

        value
    }
}

impl Default for LocalizationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Global localization instance, loaded on first use
static LOCALIZATION: LazyLock<LocalizationManager> = LazyLock::new(LocalizationManager::new);

/// Convenience function to get a localized message
pub fn t(key: &str) -> String {
    LOCALIZATION.get_message(key)
}
