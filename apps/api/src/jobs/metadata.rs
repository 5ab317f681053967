//! Metadata assembler: domain classification → bespoke title rule → generic fallback.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::jobs::platforms::{classify_domain, OTHER_PLATFORM};
use crate::jobs::title::{parse_generic, TitleParts, TitleRule};

/// A scraped job posting as handed over by the scraper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPostingSource {
    pub url: String,
    pub title: String,
    /// Page body. Carried along for the caller; extraction only reads url and title.
    pub text: String,
}

impl JobPostingSource {
    pub fn extract(&self) -> ExtractedMetadata {
        extract_metadata(&self.url, &self.title, &self.text)
    }
}

/// Structured metadata inferred from a job posting's URL and title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMetadata {
    /// Registry platform name, or "Other". Never empty.
    pub platform: String,
    pub company: String,
    pub position: String,
    pub url: String,
}

/// How much of the company/position pair the title yielded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchQuality {
    Full,
    Partial,
    None,
}

impl ExtractedMetadata {
    pub fn match_quality(&self) -> MatchQuality {
        match (self.company.is_empty(), self.position.is_empty()) {
            (false, false) => MatchQuality::Full,
            (true, true) => MatchQuality::None,
            _ => MatchQuality::Partial,
        }
    }

    pub fn is_unknown_platform(&self) -> bool {
        self.platform == OTHER_PLATFORM
    }
}

/// Infers platform, company and position for a job posting.
///
/// Total over its inputs: malformed URLs classify as "Other" and unreadable
/// titles leave company/position empty.
pub fn extract_metadata(url: &str, title: &str, _body_text: &str) -> ExtractedMetadata {
    let platform = classify_domain(url);

    let parts = if title.is_empty() {
        TitleParts::default()
    } else {
        parse_title(platform, title)
    };

    let metadata = ExtractedMetadata {
        platform: platform.to_string(),
        company: parts.company,
        position: parts.position,
        url: url.to_string(),
    };

    debug!(
        platform = %metadata.platform,
        quality = ?metadata.match_quality(),
        "extracted job metadata"
    );

    metadata
}

/// Bespoke rule first; the generic parser only runs when there is no rule or
/// the rule produced nothing at all. A partial bespoke result is kept.
fn parse_title(platform: &str, title: &str) -> TitleParts {
    let bespoke = TitleRule::for_platform(platform).map(|rule| rule.parse(title));

    match bespoke {
        Some(parts) if !parts.is_empty() => parts,
        _ => parse_generic(title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(
        url: &str,
        title: &str,
        platform: &str,
        company: &str,
        position: &str,
    ) -> ExtractedMetadata {
        let got = extract_metadata(url, title, "");
        assert_eq!(got.platform, platform, "platform for {title:?}");
        assert_eq!(got.company, company, "company for {title:?}");
        assert_eq!(got.position, position, "position for {title:?}");
        assert_eq!(got.url, url);
        got
    }

    #[test]
    fn test_linkedin_posting() {
        let got = check(
            "https://www.linkedin.com/jobs/view/123",
            "Senior Backend Engineer at Acme Corp | LinkedIn",
            "LinkedIn",
            "Acme Corp",
            "Senior Backend Engineer",
        );
        assert_eq!(got.match_quality(), MatchQuality::Full);
        assert!(!got.is_unknown_platform());
    }

    #[test]
    fn test_indeed_posting() {
        check(
            "https://www.indeed.com/viewjob?jk=1",
            "Data Analyst - Beta LLC - Austin, TX | Indeed.com",
            "Indeed",
            "Beta LLC",
            "Data Analyst",
        );
    }

    #[test]
    fn test_glassdoor_posting() {
        check(
            "https://www.glassdoor.com/job-listing/1",
            "Gamma Inc hiring Product Manager in Seattle, WA | Glassdoor",
            "Glassdoor",
            "Gamma Inc",
            "Product Manager",
        );
    }

    #[test]
    fn test_welcome_to_the_jungle_posting() {
        check(
            "https://www.welcometothejungle.com/en/companies/doctolib/jobs/backend",
            "Doctolib - Backend Developer | Welcome to the Jungle (formerly Otta)",
            "Welcome to the Jungle",
            "Doctolib",
            "Backend Developer",
        );
    }

    #[test]
    fn test_unknown_platform_uses_generic_dash_split() {
        let got = check(
            "https://jobs.example-startup.io/posting/7",
            "DevOps Engineer - Delta Systems",
            "Other",
            "DevOps Engineer",
            "Delta Systems",
        );
        assert!(got.is_unknown_platform());
    }

    #[test]
    fn test_empty_title_yields_empty_fields() {
        let got = check("https://careers.unknownsite.com/x", "", "Other", "", "");
        assert_eq!(got.match_quality(), MatchQuality::None);
        assert!(got.is_unknown_platform());
    }

    #[test]
    fn test_bespoke_miss_falls_back_to_generic() {
        // No " at " for the LinkedIn rule; the fallback splits on the dash.
        check(
            "https://www.linkedin.com/jobs/view/9",
            "Hooli - Staff Engineer | LinkedIn",
            "LinkedIn",
            "Hooli",
            "Staff Engineer",
        );
    }

    #[test]
    fn test_bespoke_partial_result_is_kept() {
        // WTTJ rule yields a position only; no fallback.
        let got = check(
            "https://www.welcometothejungle.com/en/jobs/1",
            "Product Designer | Welcome to the Jungle",
            "Welcome to the Jungle",
            "",
            "Product Designer",
        );
        assert_eq!(got.match_quality(), MatchQuality::Partial);
    }

    #[test]
    fn test_platform_without_bespoke_rule_uses_generic() {
        check(
            "https://jobs.lever.co/acme/42",
            "Acme - Platform Engineer",
            "Lever",
            "Acme",
            "Platform Engineer",
        );
    }

    #[test]
    fn test_malformed_url_is_other_but_title_still_parsed() {
        check(
            "not a url",
            "Initech - QA Lead",
            "Other",
            "Initech",
            "QA Lead",
        );
    }

    #[test]
    fn test_pipe_title_without_branding_is_not_empty() {
        let got = extract_metadata(
            "https://careers.acme.dev/jobs/3",
            "Site Reliability Engineer | Acme Careers",
            "",
        );
        assert_eq!(got.position, "Site Reliability Engineer");
        assert_ne!(got.match_quality(), MatchQuality::None);
    }

    #[test]
    fn test_platform_is_never_empty() {
        let urls = ["", "::", "https://", "ftp://files.example", "https://indeed.com"];
        let titles = ["", "|", " - ", "LinkedIn", "a at b"];
        for url in urls {
            for title in titles {
                assert!(!extract_metadata(url, title, "").platform.is_empty());
            }
        }
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let url = "https://www.glassdoor.com/job-listing/1";
        let title = "Gamma Inc hiring Product Manager in Seattle, WA | Glassdoor";
        let first = extract_metadata(url, title, "body");
        let second = extract_metadata(url, title, "body");
        assert_eq!(first, second);
    }

    #[test]
    fn test_body_text_does_not_affect_result() {
        let url = "https://www.indeed.com/viewjob?jk=1";
        let title = "Data Analyst - Beta LLC - Austin, TX | Indeed.com";
        assert_eq!(
            extract_metadata(url, title, ""),
            extract_metadata(url, title, "Acme is hiring at scale - apply now")
        );
    }

    #[test]
    fn test_source_extract_matches_free_function() {
        let source = JobPostingSource {
            url: "https://www.linkedin.com/jobs/view/123".to_string(),
            title: "Senior Backend Engineer at Acme Corp | LinkedIn".to_string(),
            text: String::new(),
        };
        assert_eq!(
            source.extract(),
            extract_metadata(&source.url, &source.title, &source.text)
        );
    }

    #[test]
    fn test_metadata_serializes_with_expected_keys() {
        let got = extract_metadata("https://www.linkedin.com/jobs/view/1", "A at B", "");
        let value = serde_json::to_value(&got).unwrap();
        assert_eq!(value["platform"], "LinkedIn");
        assert_eq!(value["company"], "B");
        assert_eq!(value["position"], "A");
        assert_eq!(value["url"], "https://www.linkedin.com/jobs/view/1");
    }
}
