//! Search parameter model.
//!
//! Every field of [`SearchParameters`] is optional. `None` means "not set":
//! the field is left out of the query string and the server default applies.
//! Identifier types ([`Category`], [`EngineName`], [`Plugin`], [`Language`])
//! are open sets. The associated constants only catalogue the values a stock
//! SearXNG instance knows about; anything else is passed through unchanged.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Query-string keys owned by [`SearchParameters`] fields, in serialization order.
pub const RECOGNIZED_KEYS: [&str; 15] = [
    "categories",
    "engines",
    "lang",
    "pageno",
    "time_range",
    "format",
    "results_on_new_tab",
    "image_proxy",
    "autocomplete",
    "safesearch",
    "theme",
    "enabled_plugins",
    "disabled_plugins",
    "enabled_engines",
    "disabled_engines",
];

/// Key of the search terms. Always set from the query argument.
pub const QUERY_KEY: &str = "q";

/// Search category tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    General,
    Translate,
    Web,
    Wikimedia,
    Images,
    Videos,
    News,
    Map,
    Music,
    Lyrics,
    Radio,
    It,
    Packages,
    QAndA,
    Repos,
    SoftwareWikis,
    Science,
    ScientificPublications,
    Files,
    Apps,
    SocialMedia,
    /// A category this crate does not catalogue.
    Other(String),
}

impl Category {
    /// Returns the wire name of the category.
    pub fn as_str(&self) -> &str {
        match self {
            Self::General => "general",
            Self::Translate => "translate",
            Self::Web => "web",
            Self::Wikimedia => "wikimedia",
            Self::Images => "images",
            Self::Videos => "videos",
            Self::News => "news",
            Self::Map => "map",
            Self::Music => "music",
            Self::Lyrics => "lyrics",
            Self::Radio => "radio",
            Self::It => "it",
            Self::Packages => "packages",
            Self::QAndA => "q&a",
            Self::Repos => "repos",
            Self::SoftwareWikis => "software_wikis",
            Self::Science => "science",
            Self::ScientificPublications => "scientific_publications",
            Self::Files => "files",
            Self::Apps => "apps",
            Self::SocialMedia => "social_media",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        match value {
            "general" => Self::General,
            "translate" => Self::Translate,
            "web" => Self::Web,
            "wikimedia" => Self::Wikimedia,
            "images" => Self::Images,
            "videos" => Self::Videos,
            "news" => Self::News,
            "map" => Self::Map,
            "music" => Self::Music,
            "lyrics" => Self::Lyrics,
            "radio" => Self::Radio,
            "it" => Self::It,
            "packages" => Self::Packages,
            "q&a" => Self::QAndA,
            "repos" => Self::Repos,
            "software_wikis" => Self::SoftwareWikis,
            "science" => Self::Science,
            "scientific_publications" => Self::ScientificPublications,
            "files" => Self::Files,
            "apps" => Self::Apps,
            "social_media" => Self::SocialMedia,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        match value {
            Category::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! identifier {
    ($(#[$meta:meta])* $ty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $ty(Cow<'static, str>);

        impl $ty {
            /// Creates an identifier from any string.
            pub fn new(name: impl Into<String>) -> Self {
                Self(Cow::Owned(name.into()))
            }

            /// Returns the wire name.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the name is part of the built-in catalogue.
            pub fn is_catalogued(&self) -> bool {
                Self::CATALOGUE.contains(&self.as_str())
            }
        }

        impl From<&str> for $ty {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $ty {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

macro_rules! catalogue {
    ($ty:ident { $($name:ident => $value:literal),* $(,)? }) => {
        impl $ty {
            $(
                #[doc = concat!("`", $value, "`")]
                pub const $name: $ty = $ty(Cow::Borrowed($value));
            )*

            /// Every name in the built-in catalogue.
            pub const CATALOGUE: &'static [&'static str] = &[$($value),*];
        }
    };
}

identifier!(
    /// Name of a search engine configured on the server.
    EngineName
);

identifier!(
    /// Name of a server-side plugin.
    Plugin
);

catalogue!(EngineName {
    TORRENT_1337X => "1337x",
    NINEGAG => "9gag",
    AHMIA => "ahmia",
    ALPINELINUX => "alpinelinux",
    ANNAS_ARCHIVE => "annas_archive",
    APKMIRROR => "apkmirror",
    APPLE_APP_STORE => "apple_app_store",
    APPLE_MAPS => "apple_maps",
    ARCHLINUX => "archlinux",
    ARTIC => "artic",
    ARXIV => "arxiv",
    ASK => "ask",
    BANDCAMP => "bandcamp",
    BASE => "base",
    BILIBILI => "bilibili",
    BING => "bing",
    BING_IMAGES => "bing_images",
    BING_NEWS => "bing_news",
    BING_VIDEOS => "bing_videos",
    BPB => "bpb",
    BRAVE => "brave",
    BT4G => "bt4g",
    BTDIGG => "btdigg",
    CCC_MEDIA => "ccc_media",
    CHEFKOCH => "chefkoch",
    COMMAND => "command",
    CORE => "core",
    CPPREFERENCE => "cppreference",
    CRATES => "crates",
    CROSSREF => "crossref",
    CURRENCY_CONVERT => "currency_convert",
    DAILYMOTION => "dailymotion",
    DEEPL => "deepl",
    DEEZER => "deezer",
    DEMO_OFFLINE => "demo_offline",
    DEMO_ONLINE => "demo_online",
    DESTATIS => "destatis",
    DEVIANTART => "deviantart",
    DICTZONE => "dictzone",
    DIGBT => "digbt",
    DISCOURSE => "discourse",
    DOCKER_HUB => "docker_hub",
    DOKU => "doku",
    DUCKDUCKGO => "duckduckgo",
    DUCKDUCKGO_DEFINITIONS => "duckduckgo_definitions",
    DUCKDUCKGO_EXTRA => "duckduckgo_extra",
    DUCKDUCKGO_WEATHER => "duckduckgo_weather",
    DUDEN => "duden",
    DUMMY_OFFLINE => "dummy-offline",
    DUMMY => "dummy",
    EBAY => "ebay",
    ELASTICSEARCH => "elasticsearch",
    EMOJIPEDIA => "emojipedia",
    FDROID => "fdroid",
    FINDTHATMEME => "findthatmeme",
    FLICKR => "flickr",
    FLICKR_NOAPI => "flickr_noapi",
    FREESOUND => "freesound",
    FRINKIAC => "frinkiac",
    FYYD => "fyyd",
    GENIUS => "genius",
    GITEA => "gitea",
    GITHUB => "github",
    GOODREADS => "goodreads",
    GOOGLE => "google",
    GOOGLE_IMAGES => "google_images",
    GOOGLE_NEWS => "google_news",
    GOOGLE_PLAY => "google_play",
    GOOGLE_SCHOLAR => "google_scholar",
    GOOGLE_VIDEOS => "google_videos",
    HACKERNEWS => "hackernews",
    HEX => "hex",
    IMDB => "imdb",
    IMGUR => "imgur",
    INA => "ina",
    INTERNET_ARCHIVE_SCHOLAR => "internet_archive_scholar",
    INVIDIOUS => "invidious",
    JISHO => "jisho",
    JSON_ENGINE => "json_engine",
    KICKASS => "kickass",
    LEMMY => "lemmy",
    LIB_RS => "lib_rs",
    LIBRETRANSLATE => "libretranslate",
    LINGVA => "lingva",
    LIVESPACE => "livespace",
    LOC => "loc",
    MASTODON => "mastodon",
    MATERIAL_ICONS => "material_icons",
    MEDIATHEKVIEWWEB => "mediathekviewweb",
    MEDIAWIKI => "mediawiki",
    MEILISEARCH => "meilisearch",
    METACPAN => "metacpan",
    MIXCLOUD => "mixcloud",
    MOJEEK => "mojeek",
    MONGODB => "mongodb",
    MOVIEPILOT => "moviepilot",
    MOZHI => "mozhi",
    MRS => "mrs",
    MULLVAD_LETA => "mullvad_leta",
    MWMBL => "mwmbl",
    MYSQL_SERVER => "mysql_server",
    NPM => "npm",
    NYAA => "nyaa",
    ODYSEE => "odysee",
    OPEN_METEO => "open_meteo",
    OPENSEMANTIC => "opensemantic",
    OPENSTREETMAP => "openstreetmap",
    OPENVERSE => "openverse",
    PDBE => "pdbe",
    PEERTUBE => "peertube",
    PHOTON => "photon",
    PINTEREST => "pinterest",
    PIPED => "piped",
    PIRATEBAY => "piratebay",
    PIXIV => "pixiv",
    PKG_GO_DEV => "pkg_go_dev",
    PODCASTINDEX => "podcastindex",
    POSTGRESQL => "postgresql",
    PRESEARCH => "presearch",
    PUBMED => "pubmed",
    PYPI => "pypi",
    QWANT => "qwant",
    RADIO_BROWSER => "radio_browser",
    RECOLL => "recoll",
    REDDIT => "reddit",
    REDIS_SERVER => "redis_server",
    ROTTENTOMATOES => "rottentomatoes",
    RUMBLE => "rumble",
    SCANR_STRUCTURES => "scanr_structures",
    SEARCHCODE_CODE => "searchcode_code",
    SEARX_ENGINE => "searx_engine",
    SEEKR => "seekr",
    SEMANTIC_SCHOLAR => "semantic_scholar",
    SEPIASEARCH => "sepiasearch",
    SEZNAM => "seznam",
    SJP => "sjp",
    SOLIDTORRENTS => "solidtorrents",
    SOLR => "solr",
    SOUNDCLOUD => "soundcloud",
    SPOTIFY => "spotify",
    SPRINGER => "springer",
    SQLITE => "sqlite",
    STACKEXCHANGE => "stackexchange",
    STARTPAGE => "startpage",
    STRACT => "stract",
    SVGREPO => "svgrepo",
    TAGESSCHAU => "tagesschau",
    TINEYE => "tineye",
    TOKYOTOSHOKAN => "tokyotoshokan",
    TOOTFINDER => "tootfinder",
    TORZNAB => "torznab",
    TRANSLATED => "translated",
    UNSPLASH => "unsplash",
    VIMEO => "vimeo",
    VOIDLINUX => "voidlinux",
    WALLHAVEN => "wallhaven",
    WIKICOMMONS => "wikicommons",
    WIKIDATA => "wikidata",
    WIKIPEDIA => "wikipedia",
    WOLFRAMALPHA_API => "wolframalpha_api",
    WOLFRAMALPHA_NOAPI => "wolframalpha_noapi",
    WORDNIK => "wordnik",
    WTTR => "wttr",
    WWW1X => "www1x",
    XPATH => "xpath",
    YACY => "yacy",
    YAHOO => "yahoo",
    YAHOO_NEWS => "yahoo_news",
    YANDEX_MUSIC => "yandex_music",
    YEP => "yep",
    YOUTUBE_API => "youtube_api",
    YOUTUBE_NOAPI => "youtube_noapi",
    YUMMLY => "yummly",
    ZLIBRARY => "zlibrary",
});

catalogue!(Plugin {
    HASH_PLUGIN => "Hash_plugin",
    SELF_INFORMATION => "Self_Information",
    TRACKER_URL_REMOVER => "Tracker_URL_remover",
    AHMIA_BLACKLIST => "Ahmia_blacklist",
    HOSTNAMES_PLUGIN => "Hostnames_plugin",
    OPEN_ACCESS_DOI_REWRITE => "Open_Access_DOI_rewrite",
    VIM_LIKE_HOTKEYS => "Vim-like_hotkeys",
    TOR_CHECK_PLUGIN => "Tor_check_plugin",
});

/// Search language: automatic detection or an explicit locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    Auto,
    Locale(String),
}

impl Language {
    /// Locale tags a stock instance offers.
    pub const LOCALES: &'static [&'static str] = &[
        "af", "ar", "bg", "bn", "bo", "ca", "cs", "cy", "da", "de", "dv", "el-GR", "en", "eo",
        "es", "et", "eu", "fa-IR", "fi", "fil", "fr", "gl", "he", "hr", "hu", "ia", "id", "it",
        "ja", "ko", "lt", "lv", "ml", "ms", "nb-NO", "nl", "nl-BE", "oc", "pa", "pap", "pl",
        "pt", "pt-BR", "ro", "ru", "si", "sk", "sl", "sr", "sv", "szl", "ta", "te", "th", "tr",
        "uk", "vi", "zh-HK", "zh-Hans-CN", "zh-Hant-TW",
    ];

    /// Creates a language from a locale tag.
    pub fn locale(tag: impl Into<String>) -> Self {
        Self::from(tag.into())
    }

    /// Returns the wire value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Auto => "auto",
            Self::Locale(tag) => tag,
        }
    }
}

impl From<&str> for Language {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        if value == "auto" {
            Self::Auto
        } else {
            Self::Locale(value)
        }
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        match value {
            Language::Auto => "auto".to_string(),
            Language::Locale(tag) => tag,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time range filter for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Day,
    Week,
    Month,
    Year,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

/// Response format requested from the server.
///
/// Only [`Format::Json`] bodies can be decoded by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Csv,
    Rss,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Rss => "rss",
        }
    }
}

/// Safe search level.
///
/// Serializes by name; deserializes from the name or the wire level `0`..`2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SafeSearch {
    /// No filtering.
    #[default]
    Off = 0,
    /// Moderate filtering.
    Moderate = 1,
    /// Strict filtering.
    Strict = 2,
}

impl SafeSearch {
    /// Returns the level for a wire value, if it is one.
    pub fn from_level(level: u64) -> Option<Self> {
        match level {
            0 => Some(Self::Off),
            1 => Some(Self::Moderate),
            2 => Some(Self::Strict),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for SafeSearch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Level(u64),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Level(level) => Self::from_level(level).ok_or_else(|| {
                serde::de::Error::custom(format!(
                    "invalid safesearch level {}, expected 0, 1 or 2",
                    level
                ))
            }),
            Repr::Name(name) => match name.as_str() {
                "off" | "0" => Ok(Self::Off),
                "moderate" | "1" => Ok(Self::Moderate),
                "strict" | "2" => Ok(Self::Strict),
                other => Err(serde::de::Error::unknown_variant(
                    other,
                    &["off", "moderate", "strict"],
                )),
            },
        }
    }
}

/// Autocomplete provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Autocomplete {
    Google,
    Dbpedia,
    Duckduckgo,
    Mwmbl,
    Startpage,
    Wikipedia,
    Stract,
    Swisscows,
    Qwant,
}

impl Autocomplete {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Dbpedia => "dbpedia",
            Self::Duckduckgo => "duckduckgo",
            Self::Mwmbl => "mwmbl",
            Self::Startpage => "startpage",
            Self::Wikipedia => "wikipedia",
            Self::Stract => "stract",
            Self::Swisscows => "swisscows",
            Self::Qwant => "qwant",
        }
    }
}

/// User interface theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Simple,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
        }
    }
}

/// Query parameters for one search call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParameters {
    pub categories: Option<Vec<Category>>,
    pub engines: Option<Vec<EngineName>>,
    pub lang: Option<Language>,
    /// Page number (1-indexed).
    pub pageno: Option<u32>,
    pub time_range: Option<TimeRange>,
    pub format: Option<Format>,
    pub results_on_new_tab: Option<bool>,
    pub image_proxy: Option<bool>,
    pub autocomplete: Option<Autocomplete>,
    pub safesearch: Option<SafeSearch>,
    pub theme: Option<Theme>,
    pub enabled_plugins: Option<Vec<Plugin>>,
    pub disabled_plugins: Option<Vec<Plugin>>,
    pub enabled_engines: Option<Vec<EngineName>>,
    pub disabled_engines: Option<Vec<EngineName>>,
    /// Parameters this crate has no field for, sent verbatim.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
}

impl SearchParameters {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters every client starts from: `format=json`, `lang=auto`.
    pub fn builtin_defaults() -> Self {
        Self::new()
            .with_format(Format::Json)
            .with_lang(Language::Auto)
    }

    pub fn with_categories<I, C>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Category>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_engines<I, E>(mut self, engines: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<EngineName>,
    {
        self.engines = Some(engines.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_lang(mut self, lang: impl Into<Language>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_pageno(mut self, pageno: u32) -> Self {
        self.pageno = Some(pageno);
        self
    }

    pub fn with_time_range(mut self, range: TimeRange) -> Self {
        self.time_range = Some(range);
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_results_on_new_tab(mut self, enabled: bool) -> Self {
        self.results_on_new_tab = Some(enabled);
        self
    }

    pub fn with_image_proxy(mut self, enabled: bool) -> Self {
        self.image_proxy = Some(enabled);
        self
    }

    pub fn with_autocomplete(mut self, provider: Autocomplete) -> Self {
        self.autocomplete = Some(provider);
        self
    }

    pub fn with_safesearch(mut self, level: SafeSearch) -> Self {
        self.safesearch = Some(level);
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_enabled_plugins<I, P>(mut self, plugins: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Plugin>,
    {
        self.enabled_plugins = Some(plugins.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_disabled_plugins<I, P>(mut self, plugins: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Plugin>,
    {
        self.disabled_plugins = Some(plugins.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_enabled_engines<I, E>(mut self, engines: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<EngineName>,
    {
        self.enabled_engines = Some(engines.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_disabled_engines<I, E>(mut self, engines: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<EngineName>,
    {
        self.disabled_engines = Some(engines.into_iter().map(Into::into).collect());
        self
    }

    /// Adds a parameter with no dedicated field. A later value for the same
    /// key replaces the earlier one.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        set_extra(&mut self.extra, key.into(), value.into());
        self
    }

    /// Overlays `overrides` on top of `self`. Fields set in `overrides` win.
    pub fn merge(&self, overrides: &SearchParameters) -> SearchParameters {
        fn pick<T: Clone>(base: &Option<T>, top: &Option<T>) -> Option<T> {
            top.as_ref().or(base.as_ref()).cloned()
        }

        let mut extra = self.extra.clone();
        for (key, value) in &overrides.extra {
            set_extra(&mut extra, key.clone(), value.clone());
        }

        SearchParameters {
            categories: pick(&self.categories, &overrides.categories),
            engines: pick(&self.engines, &overrides.engines),
            lang: pick(&self.lang, &overrides.lang),
            pageno: pick(&self.pageno, &overrides.pageno),
            time_range: pick(&self.time_range, &overrides.time_range),
            format: pick(&self.format, &overrides.format),
            results_on_new_tab: pick(&self.results_on_new_tab, &overrides.results_on_new_tab),
            image_proxy: pick(&self.image_proxy, &overrides.image_proxy),
            autocomplete: pick(&self.autocomplete, &overrides.autocomplete),
            safesearch: pick(&self.safesearch, &overrides.safesearch),
            theme: pick(&self.theme, &overrides.theme),
            enabled_plugins: pick(&self.enabled_plugins, &overrides.enabled_plugins),
            disabled_plugins: pick(&self.disabled_plugins, &overrides.disabled_plugins),
            enabled_engines: pick(&self.enabled_engines, &overrides.enabled_engines),
            disabled_engines: pick(&self.disabled_engines, &overrides.disabled_engines),
            extra,
        }
    }

    /// Formats every parameter as a `(key, value)` pair.
    ///
    /// Recognized fields come first in [`RECOGNIZED_KEYS`] order, with `None`
    /// for unset fields. Extras follow in insertion order; an extra that
    /// names `q` or a recognized key is dropped.
    pub fn to_pairs(&self) -> Vec<(String, Option<String>)> {
        let values = [
            self.categories.as_deref().map(join),
            self.engines.as_deref().map(join),
            self.lang.as_ref().map(|lang| lang.as_str().to_string()),
            self.pageno.map(|pageno| pageno.to_string()),
            self.time_range.map(|range| range.as_str().to_string()),
            self.format.map(|format| format.as_str().to_string()),
            self.results_on_new_tab.map(|on| (if on { "1" } else { "0" }).to_string()),
            self.image_proxy.map(|on| on.to_string()),
            self.autocomplete.map(|provider| provider.as_str().to_string()),
            self.safesearch.map(|level| (level as u8).to_string()),
            self.theme.map(|theme| theme.as_str().to_string()),
            self.enabled_plugins.as_deref().map(join),
            self.disabled_plugins.as_deref().map(join),
            self.enabled_engines.as_deref().map(join),
            self.disabled_engines.as_deref().map(join),
        ];

        let mut pairs: Vec<(String, Option<String>)> = RECOGNIZED_KEYS
            .iter()
            .zip(values)
            .map(|(key, value)| (key.to_string(), value))
            .collect();

        for (key, value) in &self.extra {
            if key == QUERY_KEY || RECOGNIZED_KEYS.contains(&key.as_str()) {
                warn!(key = %key, "Dropping extra parameter that shadows a recognized key");
                continue;
            }
            pairs.push((key.clone(), Some(value.clone())));
        }

        pairs
    }
}

fn set_extra(extra: &mut Vec<(String, String)>, key: String, value: String) {
    match extra.iter_mut().find(|(existing, _)| *existing == key) {
        Some(slot) => slot.1 = value,
        None => extra.push((key, value)),
    }
}

fn join<T: AsRef<str>>(items: &[T]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}
