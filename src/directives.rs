use crate::directive::Directive;

/// The set of directives making up a policy.
///
/// Each field holds the raw value of one directive. List-valued fields keep
/// their tokens in order; scalar fields hold a single token. Empty fields are
/// left out of the serialized policy.
///
/// Construct with struct-update syntax or through [`Directives::with`]:
///
/// ```
/// use csp_core::{Directive, Directives, SOURCE_SELF};
///
/// let a = Directives {
///     default_src: vec![SOURCE_SELF.to_string()],
///     report_to: "csp-endpoint".to_string(),
///     ..Default::default()
/// };
///
/// let b = Directives::new()
///     .with(Directive::DefaultSrc, ["self"])
///     .with(Directive::ReportTo, ["csp-endpoint"]);
///
/// assert_eq!(a.to_string(), b.to_string());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case", default))]
pub struct Directives {
    /// `base-uri`
    pub base_uri: Vec<String>,
    /// `child-src`
    pub child_src: Vec<String>,
    /// `connect-src`
    pub connect_src: Vec<String>,
    /// `default-src`
    pub default_src: Vec<String>,
    /// `font-src`
    pub font_src: Vec<String>,
    /// `form-action`
    pub form_action: Vec<String>,
    /// `frame-ancestors`
    pub frame_ancestors: Vec<String>,
    /// `frame-src`
    pub frame_src: Vec<String>,
    /// `img-src`
    pub img_src: Vec<String>,
    /// `manifest-src`
    pub manifest_src: Vec<String>,
    /// `media-src`
    pub media_src: Vec<String>,
    /// `object-src`
    pub object_src: Vec<String>,
    /// `report-to`
    pub report_to: String,
    /// `sandbox`
    pub sandbox: String,
    /// `script-src`
    pub script_src: Vec<String>,
    /// `script-src-attr`
    pub script_src_attr: Vec<String>,
    /// `script-src-elem`
    pub script_src_elem: Vec<String>,
    /// `style-src`
    pub style_src: Vec<String>,
    /// `style-src-attr`
    pub style_src_attr: Vec<String>,
    /// `style-src-elem`
    pub style_src_elem: Vec<String>,
    /// `webrtc`
    pub webrtc: String,
    /// `worker-src`
    pub worker_src: Vec<String>,
}

/// A borrowed view of one directive's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveValue<'a> {
    /// Tokens of a list-valued directive.
    List(&'a [String]),
    /// Token of a scalar-valued directive.
    Scalar(&'a str),
}

impl DirectiveValue<'_> {
    /// Returns `true` if this value produces a clause when serialized.
    ///
    /// A list is present when it has at least one token, even a blank one.
    /// A scalar is present when it is non-empty after trimming.
    pub fn is_present(&self) -> bool {
        match self {
            DirectiveValue::List(tokens) => !tokens.is_empty(),
            DirectiveValue::Scalar(token) => !token.trim().is_empty(),
        }
    }
}

enum SlotMut<'a> {
    List(&'a mut Vec<String>),
    Scalar(&'a mut String),
}

impl Directives {
    /// Creates an empty directive set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of `directive`.
    pub fn get(&self, directive: Directive) -> DirectiveValue<'_> {
        use DirectiveValue::{List, Scalar};

        match directive {
            Directive::BaseUri => List(&self.base_uri),
            Directive::ChildSrc => List(&self.child_src),
            Directive::ConnectSrc => List(&self.connect_src),
            Directive::DefaultSrc => List(&self.default_src),
            Directive::FontSrc => List(&self.font_src),
            Directive::FormAction => List(&self.form_action),
            Directive::FrameAncestors => List(&self.frame_ancestors),
            Directive::FrameSrc => List(&self.frame_src),
            Directive::ImgSrc => List(&self.img_src),
            Directive::ManifestSrc => List(&self.manifest_src),
            Directive::MediaSrc => List(&self.media_src),
            Directive::ObjectSrc => List(&self.object_src),
            Directive::ReportTo => Scalar(&self.report_to),
            Directive::Sandbox => Scalar(&self.sandbox),
            Directive::ScriptSrc => List(&self.script_src),
            Directive::ScriptSrcAttr => List(&self.script_src_attr),
            Directive::ScriptSrcElem => List(&self.script_src_elem),
            Directive::StyleSrc => List(&self.style_src),
            Directive::StyleSrcAttr => List(&self.style_src_attr),
            Directive::StyleSrcElem => List(&self.style_src_elem),
            Directive::WebRtc => Scalar(&self.webrtc),
            Directive::WorkerSrc => List(&self.worker_src),
        }
    }

    fn slot_mut(&mut self, directive: Directive) -> SlotMut<'_> {
        use SlotMut::{List, Scalar};

        match directive {
            Directive::BaseUri => List(&mut self.base_uri),
            Directive::ChildSrc => List(&mut self.child_src),
            Directive::ConnectSrc => List(&mut self.connect_src),
            Directive::DefaultSrc => List(&mut self.default_src),
            Directive::FontSrc => List(&mut self.font_src),
            Directive::FormAction => List(&mut self.form_action),
            Directive::FrameAncestors => List(&mut self.frame_ancestors),
            Directive::FrameSrc => List(&mut self.frame_src),
            Directive::ImgSrc => List(&mut self.img_src),
            Directive::ManifestSrc => List(&mut self.manifest_src),
            Directive::MediaSrc => List(&mut self.media_src),
            Directive::ObjectSrc => List(&mut self.object_src),
            Directive::ReportTo => Scalar(&mut self.report_to),
            Directive::Sandbox => Scalar(&mut self.sandbox),
            Directive::ScriptSrc => List(&mut self.script_src),
            Directive::ScriptSrcAttr => List(&mut self.script_src_attr),
            Directive::ScriptSrcElem => List(&mut self.script_src_elem),
            Directive::StyleSrc => List(&mut self.style_src),
            Directive::StyleSrcAttr => List(&mut self.style_src_attr),
            Directive::StyleSrcElem => List(&mut self.style_src_elem),
            Directive::WebRtc => Scalar(&mut self.webrtc),
            Directive::WorkerSrc => List(&mut self.worker_src),
        }
    }

    /// Replaces the value of `directive` with `tokens`.
    ///
    /// Scalar directives receive the tokens joined by a single space, so
    /// `sandbox` can be given as `["allow-forms", "allow-scripts"]`. The
    /// joined value is normalized as one token when serialized, so a bare
    /// keyword among several scalar tokens is not quoted: `["allow-forms",
    /// "self"]` on `sandbox` emits `sandbox allow-forms self;`, while the same
    /// tokens on a list directive emit `'self'`.
    pub fn set<I, S>(&mut self, directive: Directive, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = tokens.into_iter().map(Into::<String>::into);
        match self.slot_mut(directive) {
            SlotMut::List(slot) => *slot = tokens.collect(),
            SlotMut::Scalar(slot) => *slot = tokens.collect::<Vec<_>>().join(" "),
        }
    }

    /// Builder form of [`Directives::set`].
    pub fn with<I, S>(mut self, directive: Directive, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(directive, tokens);
        self
    }

    /// Returns `true` if no directive would be emitted.
    pub fn is_empty(&self) -> bool {
        !Directive::ALL.iter().any(|d| self.get(*d).is_present())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::ValueShape;

    #[test]
    fn default_is_empty() {
        let ds = Directives::new();
        assert!(ds.is_empty());
        for d in Directive::ALL {
            assert!(!ds.get(d).is_present(), "{}", d);
        }
    }

    #[test]
    fn accessor_shape_matches_directive_shape() {
        let ds = Directives::new();
        for d in Directive::ALL {
            let shape = match ds.get(d) {
                DirectiveValue::List(_) => ValueShape::List,
                DirectiveValue::Scalar(_) => ValueShape::Scalar,
            };
            assert_eq!(shape, d.shape(), "{}", d);
        }
    }

    #[test]
    fn set_reaches_the_matching_field() {
        for d in Directive::ALL {
            let ds = Directives::new().with(d, [d.name()]);
            for other in Directive::ALL {
                assert_eq!(ds.get(other).is_present(), other == d, "{} / {}", d, other);
            }
        }
    }

    #[test]
    fn set_list_replaces_tokens() {
        let mut ds = Directives::new();
        ds.set(Directive::ImgSrc, ["a.com", "b.com"]);
        ds.set(Directive::ImgSrc, ["c.com"]);
        assert_eq!(ds.img_src, vec!["c.com"]);
    }

    #[test]
    fn set_scalar_joins_tokens() {
        let ds = Directives::new().with(Directive::Sandbox, ["allow-forms", "allow-scripts"]);
        assert_eq!(ds.sandbox, "allow-forms allow-scripts");
    }

    #[test]
    fn joined_scalar_is_normalized_as_one_token() {
        let scalar = Directives::new().with(Directive::Sandbox, ["allow-forms", "self"]);
        let list = Directives::new().with(Directive::FormAction, ["allow-forms", "self"]);
        assert_eq!(scalar.to_string(), "sandbox allow-forms self;");
        assert_eq!(list.to_string(), "form-action allow-forms 'self';");

        let single = Directives::new().with(Directive::Sandbox, ["self"]);
        assert_eq!(single.to_string(), "sandbox 'self';");
    }

    #[test]
    fn blank_scalar_is_absent() {
        let ds = Directives {
            webrtc: "   ".to_string(),
            ..Default::default()
        };
        assert!(!ds.get(Directive::WebRtc).is_present());
        assert!(ds.is_empty());
    }

    #[test]
    fn list_with_blank_token_is_present() {
        let ds = Directives {
            font_src: vec![String::new()],
            ..Default::default()
        };
        assert!(ds.get(Directive::FontSrc).is_present());
        assert!(!ds.is_empty());
    }
}
