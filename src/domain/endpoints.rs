//! Endpoints - Server URL Construction
//!
//! Builds the three kinds of URL the client hands to the server: named views,
//! inspector fragments and network downloads.

use reqwest::Url;

use crate::domain::encoding::EncodedParams;
use crate::error::{Error, Result};

/// Identifier of a network segment that can be inspected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubjectId(pub u32);

impl SubjectId {
    /// Close sentinel, never sent to the server
    pub const NONE: SubjectId = SubjectId(0);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl From<u32> for SubjectId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named server views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewTarget {
    /// Landing page
    #[default]
    Index,
    /// Traffic flow map
    Flow,
    /// Emissions map
    Emissions,
    /// Network creator (login required on the server)
    Create,
}

impl ViewTarget {
    pub fn path_segment(self) -> &'static str {
        match self {
            ViewTarget::Index => "index",
            ViewTarget::Flow => "flow",
            ViewTarget::Emissions => "emissions",
            ViewTarget::Create => "create",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewTarget::Index => "Home",
            ViewTarget::Flow => "Traffic Flow",
            ViewTarget::Emissions => "Emissions",
            ViewTarget::Create => "Network Creator",
        }
    }

    /// Text shown on the loading overlay while navigating to this view
    pub fn loading_message(self) -> &'static str {
        match self {
            ViewTarget::Index => "Loading",
            ViewTarget::Flow => "Loading Flow Map",
            ViewTarget::Emissions => "Loading Emissions Map",
            ViewTarget::Create => "Loading Network Creator",
        }
    }

    pub fn all() -> &'static [ViewTarget] {
        &[
            ViewTarget::Index,
            ViewTarget::Flow,
            ViewTarget::Emissions,
            ViewTarget::Create,
        ]
    }
}

/// URL builder rooted at the server base
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base: Url) -> Result<Self> {
        if base.cannot_be_a_base() {
            return Err(Error::Url {
                message: format!("{base} cannot be used as a base URL"),
            });
        }
        Ok(Self { base })
    }

    pub fn parse(base: &str) -> Result<Self> {
        let url = Url::parse(base).map_err(|e| Error::Url {
            message: format!("{base}: {e}"),
        })?;
        Self::new(url)
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `{base}/{target}/`
    pub fn view(&self, target: ViewTarget) -> Result<Url> {
        self.with_segments(&[target.path_segment(), ""])
    }

    /// `{base}/inspector/{subject}/{params}`
    pub fn inspector(&self, subject: SubjectId, params: &EncodedParams) -> Result<Url> {
        if subject.is_none() {
            return Err(Error::Invalid {
                message: "subject 0 is the close sentinel".to_string(),
            });
        }
        let subject = subject.to_string();
        self.with_segments(&["inspector", &subject, params.as_str()])
    }

    /// `{base}/download/{archive}/{params}`
    pub fn download(&self, archive: &str, params: &EncodedParams) -> Result<Url> {
        if archive.is_empty() {
            return Err(Error::Invalid {
                message: "archive name is empty".to_string(),
            });
        }
        self.with_segments(&["download", archive, params.as_str()])
    }

    fn with_segments(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Url {
                message: format!("{} cannot be used as a base URL", self.base),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::encoding::encode;
    use crate::domain::modifiers::ParameterSnapshot;

    fn endpoints() -> Endpoints {
        Endpoints::parse("http://localhost:8000").expect("valid base")
    }

    #[test]
    fn test_view_url() {
        let url = endpoints().view(ViewTarget::Flow).expect("url");
        assert_eq!(url.as_str(), "http://localhost:8000/flow/");
    }

    #[test]
    fn test_inspector_url() {
        let params = encode(&ParameterSnapshot::default());
        let url = endpoints().inspector(SubjectId(42), &params).expect("url");
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/inspector/42/1,1,1,1,1,65.1,10,true,0,100"
        );
    }

    #[test]
    fn test_inspector_refuses_sentinel() {
        let params = encode(&ParameterSnapshot::default());
        assert!(endpoints().inspector(SubjectId::NONE, &params).is_err());
    }

    #[test]
    fn test_download_url_with_prefixed_base() {
        let endpoints = Endpoints::parse("https://mdt.example.org/app/").expect("valid base");
        let params = encode(&ParameterSnapshot::default());
        let url = endpoints.download("network.zip", &params).expect("url");
        assert_eq!(
            url.as_str(),
            "https://mdt.example.org/app/download/network.zip/1,1,1,1,1,65.1,10,true,0,100"
        );
    }

    #[test]
    fn test_rejects_non_base_url() {
        assert!(Endpoints::parse("mailto:someone@example.org").is_err());
        assert!(Endpoints::parse("not a url").is_err());
    }
}
