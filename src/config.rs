//! Site configuration: where the static export is deployed and which paper
//! the guide cites.

use url::Url;

use crate::content::PAPER_DOI_URL;
use crate::error::{GuideError, Result};
use crate::page::{HEADER_OFFSET, SCROLL_THRESHOLD};

pub const DEFAULT_BASE_PATH: &str = "/cfa-brm/";
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1280.0, 800.0];

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Always starts and ends with `/`
    base_path: String,
    paper_url: Url,
    pub window_size: [f32; 2],
    pub scroll_threshold: f32,
    pub header_offset: f32,
}

impl SiteConfig {
    pub fn new(base_path: &str, paper_url: &str) -> Result<Self> {
        Ok(Self {
            base_path: normalize_base_path(base_path)?,
            paper_url: parse_paper_url(paper_url)?,
            window_size: DEFAULT_WINDOW_SIZE,
            scroll_threshold: SCROLL_THRESHOLD,
            header_offset: HEADER_OFFSET,
        })
    }

    /// Defaults for the published guide.
    pub fn standard() -> Result<Self> {
        Self::new(DEFAULT_BASE_PATH, PAPER_DOI_URL)
    }

    pub fn with_base_path(mut self, base_path: &str) -> Result<Self> {
        self.base_path = normalize_base_path(base_path)?;
        Ok(self)
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn paper_url(&self) -> &Url {
        &self.paper_url
    }

    /// Site-absolute link to `rel` under the base path.
    pub fn asset_href(&self, rel: &str) -> String {
        format!("{}{}", self.base_path, rel.trim_start_matches('/'))
    }
}

/// Validate a deployment base path and normalize it to `/segment/.../`.
pub fn normalize_base_path(raw: &str) -> Result<String> {
    let invalid = |reason| GuideError::InvalidBasePath { value: raw.to_string(), reason };

    if raw.chars().any(char::is_whitespace) {
        return Err(invalid("contains whitespace"));
    }
    if raw.contains('?') || raw.contains('#') {
        return Err(invalid("contains a query or fragment"));
    }
    if Url::parse(raw).is_ok() || raw.starts_with("//") {
        return Err(invalid("must be a path, not a URL"));
    }

    let segments: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
    if segments.iter().any(|s| *s == "." || *s == "..") {
        return Err(invalid("contains relative segments"));
    }
    if segments.is_empty() {
        return Ok("/".to_string());
    }
    Ok(format!("/{}/", segments.join("/")))
}

pub fn parse_paper_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|source| GuideError::InvalidPaperUrl {
        value: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(GuideError::InvalidPaperUrl {
            value: raw.to_string(),
            source: url::ParseError::RelativeUrlWithoutBase,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_config() {
        let cfg = SiteConfig::standard().unwrap();
        assert_eq!(cfg.base_path(), "/cfa-brm/");
        assert_eq!(cfg.paper_url().host_str(), Some("doi.org"));
        assert_eq!(cfg.paper_url().path(), "/10.3758/s13428-024-02375-7");
        assert_eq!(cfg.scroll_threshold, 50.0);
        assert_eq!(cfg.header_offset, 100.0);
    }

    #[test]
    fn base_path_is_normalized() {
        assert_eq!(normalize_base_path("cfa-brm").unwrap(), "/cfa-brm/");
        assert_eq!(normalize_base_path("/cfa-brm").unwrap(), "/cfa-brm/");
        assert_eq!(normalize_base_path("docs//guide/").unwrap(), "/docs/guide/");
        assert_eq!(normalize_base_path("").unwrap(), "/");
        assert_eq!(normalize_base_path("/").unwrap(), "/");
    }

    #[test]
    fn bad_base_paths_are_rejected() {
        for raw in ["my site", "/a?b", "/a#b", "https://example.org/x/", "//cdn/x", "/a/../b"] {
            assert!(
                matches!(normalize_base_path(raw), Err(GuideError::InvalidBasePath { .. })),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn asset_links_sit_under_base() {
        let cfg = SiteConfig::standard().unwrap().with_base_path("/guide").unwrap();
        assert_eq!(cfg.asset_href("models/bifactor.svg"), "/guide/models/bifactor.svg");
        assert_eq!(cfg.asset_href("/assets/hero.svg"), "/guide/assets/hero.svg");
    }

    #[test]
    fn paper_url_must_be_web() {
        assert!(parse_paper_url("ftp://example.org/paper").is_err());
        assert!(parse_paper_url("not a url").is_err());
    }
}
