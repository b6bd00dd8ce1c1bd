//! Genome-browser link construction
//!
//! The core contract is the `(chrom, left, right)` coordinate triple; the
//! URL text around it is presentation. The default template targets the
//! JBrowse 2 demo instance the original SV-call tables were browsed in,
//! and every piece of it can be overridden through configuration.

use serde::{Deserialize, Serialize};

use crate::derive::LinkInterval;

/// Template parameters for browser-navigation URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTemplate {
    /// Browser base URL, including any fixed query parameters
    pub base_url: String,
    /// Assembly name passed to the browser
    pub assembly: String,
    /// Fixed set of track identifiers to open alongside the locus
    pub tracks: Vec<String>,
}

impl Default for LinkTemplate {
    fn default() -> Self {
        Self {
            base_url: "https://jbrowse.org/code/jb2/v2.6.3/?config=/demos/hg002_demo/config.json"
                .to_string(),
            assembly: "hg19".to_string(),
            tracks: vec!["hg002_sv_calls".to_string(), "hg19_genes".to_string()],
        }
    }
}

impl LinkTemplate {
    /// The `chrom:left-right` locus string shown as the link text.
    pub fn locus(&self, chrom: &str, interval: LinkInterval) -> String {
        format!("{}:{}-{}", chrom, interval.left, interval.right)
    }

    /// Build the full browser URL for a padded interval.
    pub fn url(&self, chrom: &str, interval: LinkInterval) -> String {
        let mut url = format!(
            "{}&assembly={}&loc={}",
            self.base_url,
            self.assembly,
            self.locus(chrom, interval)
        );
        if !self.tracks.is_empty() {
            url.push_str("&tracks=");
            url.push_str(&self.tracks.join(","));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locus() {
        let template = LinkTemplate::default();
        let locus = template.locus("22", LinkInterval { left: 66, right: 233 });
        assert_eq!(locus, "22:66-233");
    }

    #[test]
    fn test_url_embeds_coordinates_and_tracks() {
        let template = LinkTemplate {
            base_url: "https://browser.example/?config=c.json".to_string(),
            assembly: "hg19".to_string(),
            tracks: vec!["calls".to_string(), "genes".to_string()],
        };
        let url = template.url("22", LinkInterval { left: 66, right: 233 });
        assert_eq!(
            url,
            "https://browser.example/?config=c.json&assembly=hg19&loc=22:66-233&tracks=calls,genes"
        );
    }

    #[test]
    fn test_url_without_tracks() {
        let template = LinkTemplate {
            base_url: "https://browser.example/?x=1".to_string(),
            assembly: "hg38".to_string(),
            tracks: Vec::new(),
        };
        let url = template.url("chr1", LinkInterval { left: -5, right: 10 });
        assert_eq!(url, "https://browser.example/?x=1&assembly=hg38&loc=chr1:-5-10");
    }
}
