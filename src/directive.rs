use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A directive supported by the builder, per Content Security Policy Level 3.
///
/// Variants are declared in the order their clauses appear in a serialized
/// policy. [`Directive::ALL`] lists them in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Directive {
    /// `base-uri`
    BaseUri,
    /// `child-src`
    ChildSrc,
    /// `connect-src`
    ConnectSrc,
    /// `default-src`
    DefaultSrc,
    /// `font-src`
    FontSrc,
    /// `form-action`
    FormAction,
    /// `frame-ancestors`
    FrameAncestors,
    /// `frame-src`
    FrameSrc,
    /// `img-src`
    ImgSrc,
    /// `manifest-src`
    ManifestSrc,
    /// `media-src`
    MediaSrc,
    /// `object-src`
    ObjectSrc,
    /// `report-to`
    ReportTo,
    /// `sandbox`
    Sandbox,
    /// `script-src`
    ScriptSrc,
    /// `script-src-attr`
    ScriptSrcAttr,
    /// `script-src-elem`
    ScriptSrcElem,
    /// `style-src`
    StyleSrc,
    /// `style-src-attr`
    StyleSrcAttr,
    /// `style-src-elem`
    StyleSrcElem,
    /// `webrtc`
    WebRtc,
    /// `worker-src`
    WorkerSrc,
}

/// Whether a directive holds a list of sources or a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// An ordered list of source tokens.
    List,
    /// A single token.
    Scalar,
}

impl Directive {
    /// Every directive, in serialization order.
    pub const ALL: [Directive; 22] = [
        Directive::BaseUri,
        Directive::ChildSrc,
        Directive::ConnectSrc,
        Directive::DefaultSrc,
        Directive::FontSrc,
        Directive::FormAction,
        Directive::FrameAncestors,
        Directive::FrameSrc,
        Directive::ImgSrc,
        Directive::ManifestSrc,
        Directive::MediaSrc,
        Directive::ObjectSrc,
        Directive::ReportTo,
        Directive::Sandbox,
        Directive::ScriptSrc,
        Directive::ScriptSrcAttr,
        Directive::ScriptSrcElem,
        Directive::StyleSrc,
        Directive::StyleSrcAttr,
        Directive::StyleSrcElem,
        Directive::WebRtc,
        Directive::WorkerSrc,
    ];

    /// Returns the directive name as it appears in the header.
    pub const fn name(self) -> &'static str {
        match self {
            Directive::BaseUri => "base-uri",
            Directive::ChildSrc => "child-src",
            Directive::ConnectSrc => "connect-src",
            Directive::DefaultSrc => "default-src",
            Directive::FontSrc => "font-src",
            Directive::FormAction => "form-action",
            Directive::FrameAncestors => "frame-ancestors",
            Directive::FrameSrc => "frame-src",
            Directive::ImgSrc => "img-src",
            Directive::ManifestSrc => "manifest-src",
            Directive::MediaSrc => "media-src",
            Directive::ObjectSrc => "object-src",
            Directive::ReportTo => "report-to",
            Directive::Sandbox => "sandbox",
            Directive::ScriptSrc => "script-src",
            Directive::ScriptSrcAttr => "script-src-attr",
            Directive::ScriptSrcElem => "script-src-elem",
            Directive::StyleSrc => "style-src",
            Directive::StyleSrcAttr => "style-src-attr",
            Directive::StyleSrcElem => "style-src-elem",
            Directive::WebRtc => "webrtc",
            Directive::WorkerSrc => "worker-src",
        }
    }

    /// Returns the value shape of this directive.
    ///
    /// Only `report-to`, `sandbox` and `webrtc` are scalar.
    pub const fn shape(self) -> ValueShape {
        match self {
            Directive::ReportTo | Directive::Sandbox | Directive::WebRtc => ValueShape::Scalar,
            _ => ValueShape::List,
        }
    }

    /// Returns `true` if this directive holds a single token.
    pub const fn is_scalar(self) -> bool {
        matches!(self.shape(), ValueShape::Scalar)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Directive {
    type Err = Error;

    /// Looks up a directive by its exact on-wire name.
    ///
    /// # Examples
    ///
    /// ```
    /// use csp_core::Directive;
    ///
    /// let d: Directive = "script-src".parse().unwrap();
    /// assert_eq!(d, Directive::ScriptSrc);
    /// assert!("Script-Src".parse::<Directive>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Directive::ALL.iter().find(|d| d.name() == s) {
            Some(d) => Ok(*d),
            None => {
                tracing::debug!(name = %s, "unknown directive name");
                Err(Error::UnknownDirective {
                    name: s.to_string(),
                })
            }
        }
    }
}
