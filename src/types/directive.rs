use std::fmt;

macro_rules! directives {
    ($($variant:ident => $token:literal,)+) => {
        /// A directive token from the known vocabulary.
        ///
        /// Resolution works on plain strings; this enum names the tokens the
        /// effect handlers react to. Anything else passes through inertly.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Directive {
            $($variant,)+
        }

        impl Directive {
            /// Every known directive, in declaration order.
            pub const ALL: &'static [Directive] = &[$(Directive::$variant,)+];

            /// The URL token for this directive.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Directive::$variant => $token,)+
                }
            }

            /// Look up a token. `None` for anything outside the vocabulary.
            #[must_use]
            pub fn parse(token: &str) -> Option<Self> {
                match token {
                    $($token => Some(Directive::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

directives! {
    Response301 => "response_301",
    Response302 => "response_302",
    Response303 => "response_303",
    Response307 => "response_307",
    Response308 => "response_308",
    Response400 => "response_400",
    Response401 => "response_401",
    Response403 => "response_403",
    Response404 => "response_404",
    Response410 => "response_410",
    Response418 => "response_418",
    Response500 => "response_500",
    Response503 => "response_503",

    H1On => "h1_on",
    H1Off => "h1_off",
    H1Multiple => "h1_multiple",

    RandomTitle => "random_title",

    MetaFollow => "meta_follow",
    MetaNofollow => "meta_nofollow",
    MetaIndex => "meta_index",
    MetaNoindex => "meta_noindex",
    HeaderFollow => "header_follow",
    HeaderNofollow => "header_nofollow",
    HeaderIndex => "header_index",
    HeaderNoindex => "header_noindex",

    CanonicalNextBlock => "canonical_next_block",
    CanonicalRandom => "canonical_random",
    CanonicalSelf => "canonical_self",
    CanonicalHome => "canonical_home",
    HeaderCanonicalNextBlock => "header_canonical_next_block",
    HeaderCanonicalRandom => "header_canonical_random",
    HeaderCanonicalSelf => "header_canonical_self",
    HeaderCanonicalHome => "header_canonical_home",
    HtmlCanonicalNextBlock => "html_canonical_next_block",
    HtmlCanonicalRandom => "html_canonical_random",
    HtmlCanonicalSelf => "html_canonical_self",
    HtmlCanonicalHome => "html_canonical_home",

    VaryAcceptEncoding => "vary_accept_encoding",
    VaryUserAgent => "vary_user_agent",
    VaryCookie => "vary_cookie",
    VaryReferer => "vary_referer",
    VaryReferrer => "vary_referrer",

    Delay1 => "delay_1",
    Delay2 => "delay_2",
    Delay3 => "delay_3",
    Delay4 => "delay_4",
    Delay5 => "delay_5",
}

impl Directive {
    /// Whether `directives` contains this token.
    #[must_use]
    pub fn is_in<S: AsRef<str>>(self, directives: &[S]) -> bool {
        let token = self.as_str();
        directives.iter().any(|d| d.as_ref() == token)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
