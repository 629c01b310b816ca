//! Fixed names and paths used throughout rebrand.

/// Branding document name, looked up in the project root unless overridden.
pub const CONFIG_FILE: &str = "branding.json";

/// Hyphenated package slug of the upstream project.
pub const LEGACY_SLUG: &str = "kilo-code";

/// Unhyphenated identifier of the upstream project (publisher, command prefixes).
pub const LEGACY_IDENTIFIER: &str = "kilocode";

/// Two-word product phrase used in user-facing locale strings.
pub const LEGACY_PHRASE: &str = "Kilo Code";

/// Single-word brand token used in user-facing locale strings.
pub const LEGACY_TOKEN: &str = "Kilo";

/// Concatenated brand identifier used in user-facing locale strings.
pub const LEGACY_CONCATENATED: &str = "Kilocode";

/// Default manifest location, relative to the project root.
pub const DEFAULT_MANIFEST_PATH: &str = "src/package.json";

/// Default localization map location, relative to the project root.
pub const DEFAULT_NLS_PATH: &str = "src/package.nls.json";

/// Directory receiving branded icons, relative to the project root.
pub const ICONS_DIR: &str = "src/assets/icons";

/// English locale directory of the webview, relative to the project root.
pub const LOCALES_DIR: &str = "webview-ui/src/i18n/locales/en";

/// Extension of the locale files that get rewritten.
pub const LOCALE_EXTENSION: &str = ".json";
