//! Platform registry and domain classifier.
//!
//! The registry is an ordered slice scanned linearly: several fragments can
//! occur in the same host, and the earlier entry always wins.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use url::Url;

/// Platform label used when no registry entry matches the host.
pub const OTHER_PLATFORM: &str = "Other";

/// Domain fragment → platform display name. Order is significant.
pub const PLATFORM_DOMAINS: &[(&str, &str)] = &[
    ("linkedin.com", "LinkedIn"),
    ("indeed.com", "Indeed"),
    ("glassdoor.com", "Glassdoor"),
    ("ziprecruiter.com", "ZipRecruiter"),
    ("monster.com", "Monster"),
    ("dice.com", "Dice"),
    ("lever.co", "Lever"),
    ("greenhouse.io", "Greenhouse"),
    ("workday.com", "Workday"),
    ("myworkdayjobs.com", "Workday"),
    ("smartrecruiters.com", "SmartRecruiters"),
    ("angel.co", "AngelList"),
    ("wellfound.com", "Wellfound"),
    ("builtin.com", "Built In"),
    ("simplyhired.com", "SimplyHired"),
    ("careerbuilder.com", "CareerBuilder"),
    ("welcometothejungle.com", "Welcome to the Jungle"),
];

/// Informal brand names that show up in page titles but not in the registry.
const PLATFORM_ALIASES: &[&str] = &[
    "linkedin",
    "indeed",
    "indeed.com",
    "glassdoor",
    "glassdoor.com",
    "otta",
    "welcome to the jungle",
];

/// Lowercase platform names plus aliases, used to spot site-branding title segments.
static PLATFORM_NAMES: LazyLock<BTreeSet<String>> = LazyLock::new(|| {
    PLATFORM_DOMAINS
        .iter()
        .map(|(_, name)| name.to_lowercase())
        .chain(PLATFORM_ALIASES.iter().map(|alias| alias.to_string()))
        .collect()
});

/// Returns the lowercased host of `url` without a leading `www.`.
///
/// Unparsable URLs and URLs without a host yield an empty string.
pub fn normalize_host(url: &str) -> String {
    let host = Url::parse(url.trim())
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_lowercase))
        .unwrap_or_default();

    match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    }
}

/// Maps a URL to the first registry platform whose domain fragment occurs in its host.
pub fn classify_domain(url: &str) -> &'static str {
    let host = normalize_host(url);
    if host.is_empty() {
        return OTHER_PLATFORM;
    }

    PLATFORM_DOMAINS
        .iter()
        .find(|(fragment, _)| host.contains(fragment))
        .map(|(_, platform)| *platform)
        .unwrap_or(OTHER_PLATFORM)
}

/// True when a title segment mentions any known platform name or alias.
///
/// Plain substring match: a company called "Indeed Solutions" is treated as branding too.
pub fn is_platform_branding(segment: &str) -> bool {
    let lowered = segment.trim().to_lowercase();
    PLATFORM_NAMES
        .iter()
        .any(|name| lowered.contains(name.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_host_strips_leading_www_and_lowercases() {
        assert_eq!(
            normalize_host("https://www.LinkedIn.com/jobs/123"),
            "linkedin.com"
        );
        assert_eq!(normalize_host("https://jobs.lever.co/acme/1"), "jobs.lever.co");
    }

    #[test]
    fn test_normalize_host_only_strips_prefix() {
        assert_eq!(
            normalize_host("https://careers.www.example.com/"),
            "careers.www.example.com"
        );
    }

    #[test]
    fn test_normalize_host_malformed_url_is_empty() {
        assert_eq!(normalize_host(""), "");
        assert_eq!(normalize_host("not a url"), "");
        assert_eq!(normalize_host("linkedin.com/jobs/view/1"), "");
        assert_eq!(normalize_host("mailto:jobs@example.com"), "");
    }

    #[test]
    fn test_classify_domain_is_case_insensitive_and_ignores_www() {
        let a = classify_domain("https://www.LinkedIn.com/jobs/123");
        let b = classify_domain("https://linkedin.com/jobs/123");
        assert_eq!(a, "LinkedIn");
        assert_eq!(a, b);
    }

    #[test]
    fn test_classify_domain_known_platforms() {
        assert_eq!(classify_domain("https://www.indeed.com/viewjob?jk=1"), "Indeed");
        assert_eq!(classify_domain("https://uk.indeed.com/viewjob?jk=1"), "Indeed");
        assert_eq!(
            classify_domain("https://www.glassdoor.com/job-listing/1"),
            "Glassdoor"
        );
        assert_eq!(
            classify_domain("https://acme.wd5.myworkdayjobs.com/en-US/careers/job/1"),
            "Workday"
        );
        assert_eq!(classify_domain("https://builtin.com/job/1"), "Built In");
        assert_eq!(
            classify_domain("https://app.welcometothejungle.com/jobs/abc"),
            "Welcome to the Jungle"
        );
    }

    #[test]
    fn test_classify_domain_unknown_and_malformed_is_other() {
        assert_eq!(
            classify_domain("https://jobs.example-startup.io/posting/7"),
            OTHER_PLATFORM
        );
        assert_eq!(classify_domain(""), OTHER_PLATFORM);
        assert_eq!(classify_domain("::::"), OTHER_PLATFORM);
    }

    #[test]
    fn test_classify_domain_earlier_registry_entry_wins() {
        // Both "linkedin.com" and "indeed.com" occur in this host.
        let url = "https://indeed.com.linkedin.com.example.net/job";
        assert_eq!(classify_domain(url), "LinkedIn");

        // "dice.com" precedes "lever.co".
        let url = "https://lever.co.dice.com/job";
        assert_eq!(classify_domain(url), "Dice");
    }

    #[test]
    fn test_classify_domain_is_deterministic() {
        let url = "https://boards.greenhouse.io/acme/jobs/42";
        let first = classify_domain(url);
        for _ in 0..10 {
            assert_eq!(classify_domain(url), first);
        }
        assert_eq!(first, "Greenhouse");
    }

    #[test]
    fn test_platform_names_include_registry_names_and_aliases() {
        assert!(PLATFORM_NAMES.contains("ziprecruiter"));
        assert!(PLATFORM_NAMES.contains("built in"));
        assert!(PLATFORM_NAMES.contains("otta"));
        assert!(PLATFORM_NAMES.contains("indeed.com"));
        assert!(!PLATFORM_NAMES.contains("other"));
    }

    #[test]
    fn test_is_platform_branding_substring_match() {
        assert!(is_platform_branding(" LinkedIn "));
        assert!(is_platform_branding("Indeed.com"));
        assert!(is_platform_branding("Welcome to the Jungle (formerly Otta)"));
        assert!(!is_platform_branding("Acme Corp"));
    }

    #[test]
    fn test_is_platform_branding_keeps_company_false_positives() {
        assert!(is_platform_branding("Indeed Solutions"));
        assert!(is_platform_branding("Clever Robotics"));
    }
}
