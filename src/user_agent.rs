//! User-agent classification.
//!
//! Reduces a raw `User-Agent` header to the handful of facts block selection
//! needs: bot or not, device class, and browser family. Only the Googlebot,
//! IE and Firefox families drive selection; the others are reported for
//! diagnostics.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Category;

static BOT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(bot\b|bot/|crawl|spider|slurp|mediapartners|facebookexternalhit|ia_archiver|feedfetcher|curl/|wget/|python-requests|httpclient)",
    )
    .expect("bot pattern compiles")
});

static GOOGLEBOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)googlebot").expect("googlebot pattern compiles"));

static EDGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(Edge|Edg|EdgA|EdgiOS)/\d").expect("edge pattern compiles"));

static OPERA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(OPR/\d|Opera)").expect("opera pattern compiles"));

static IE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"MSIE \d|Trident/\d.*\brv:\d").expect("ie pattern compiles")
});

static FIREFOX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(Firefox|FxiOS)/\d").expect("firefox pattern compiles"));

static CHROME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(Chrome|CriOS|Chromium)/\d").expect("chrome pattern compiles"));

static SAFARI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Version/\d.*\bSafari/\d").expect("safari pattern compiles")
});

static TABLET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(ipad|tablet|kindle|silk/|playbook|nexus (7|9|10)\b)")
        .expect("tablet pattern compiles")
});

static ANDROID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)android").expect("android pattern compiles"));

static MOBILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(iphone|ipod|windows phone|iemobile|blackberry|bb10|opera mini|opera mobi|mobile)",
    )
    .expect("mobile pattern compiles")
});

static DESKTOP_OS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(Windows NT|Macintosh|Mac OS X|X11|Linux x86_64|Linux i686|CrOS)")
        .expect("desktop os pattern compiles")
});

/// Browser family, as far as block selection cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserFamily {
    Googlebot,
    Ie,
    Firefox,
    Edge,
    Opera,
    Chrome,
    Safari,
    Other,
}

impl fmt::Display for BrowserFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BrowserFamily::Googlebot => "Googlebot",
            BrowserFamily::Ie => "IE",
            BrowserFamily::Firefox => "Firefox",
            BrowserFamily::Edge => "Edge",
            BrowserFamily::Opera => "Opera",
            BrowserFamily::Chrome => "Chrome",
            BrowserFamily::Safari => "Safari",
            BrowserFamily::Other => "Other",
        };
        f.write_str(name)
    }
}

/// Facts derived from one `User-Agent` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserAgent {
    family: BrowserFamily,
    is_bot: bool,
    is_mobile: bool,
    is_tablet: bool,
    is_pc: bool,
}

impl UserAgent {
    /// Classify a raw header. Never fails; unknown agents get all-false facts
    /// and [`BrowserFamily::Other`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let family = if GOOGLEBOT.is_match(raw) {
            BrowserFamily::Googlebot
        } else if EDGE.is_match(raw) {
            BrowserFamily::Edge
        } else if OPERA.is_match(raw) {
            BrowserFamily::Opera
        } else if IE.is_match(raw) {
            BrowserFamily::Ie
        } else if FIREFOX.is_match(raw) {
            BrowserFamily::Firefox
        } else if CHROME.is_match(raw) {
            BrowserFamily::Chrome
        } else if SAFARI.is_match(raw) {
            BrowserFamily::Safari
        } else {
            BrowserFamily::Other
        };

        let is_bot = family == BrowserFamily::Googlebot || BOT.is_match(raw);
        let android = ANDROID.is_match(raw);
        let is_tablet = TABLET.is_match(raw) || (android && !raw.contains("Mobile"));
        let is_mobile = !is_tablet && (android || MOBILE.is_match(raw));
        let is_pc = !is_tablet && !is_mobile && !android && DESKTOP_OS.is_match(raw);

        Self {
            family,
            is_bot,
            is_mobile,
            is_tablet,
            is_pc,
        }
    }

    #[must_use]
    pub fn family(&self) -> BrowserFamily {
        self.family
    }

    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.is_bot
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    #[must_use]
    pub fn is_tablet(&self) -> bool {
        self.is_tablet
    }

    #[must_use]
    pub fn is_pc(&self) -> bool {
        self.is_pc
    }

    /// Whether the fact behind `category` holds for this agent.
    ///
    /// `all` always matches. `none` and custom categories never do; they are
    /// reached only through the fallback in block selection.
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        match category {
            Category::All => true,
            Category::Bot => self.is_bot,
            Category::Googlebot => self.family == BrowserFamily::Googlebot,
            Category::Ie => self.family == BrowserFamily::Ie,
            Category::Ff => self.family == BrowserFamily::Firefox,
            Category::Mobile => self.is_mobile,
            Category::Desktop => self.is_pc,
            Category::Tablet => self.is_tablet,
            Category::None | Category::Custom(_) => false,
        }
    }
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (bot: {}, mobile: {}, tablet: {}, pc: {})",
            self.family, self.is_bot, self.is_mobile, self.is_tablet, self.is_pc
        )
    }
}
