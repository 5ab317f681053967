//! Title parsers: one bespoke rule per platform with a known title grammar,
//! plus a platform-agnostic fallback.

use std::sync::LazyLock;

use regex::Regex;

use crate::jobs::platforms::is_platform_branding;

fn compile_static(pattern: &str, name: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|e| panic!("static pattern {name} ({pattern}) failed to compile: {e}"))
}

/// "Senior Engineer at Acme | LinkedIn"
static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_static(
        r"^(.+?)\s+at\s+(.+?)(?:\s*\||\s*[-–]|\s*$)",
        "LINKEDIN_RE",
    )
});

/// "Acme hiring Senior Engineer in Seattle, WA | Glassdoor"
static GLASSDOOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_static(
        r"^(.+?)\s+hiring\s+(.+?)(?:\s+in\s+|\s*\|)",
        "GLASSDOOR_RE",
    )
});

/// Hyphen or en dash, absorbing surrounding whitespace.
static DASH_RE: LazyLock<Regex> = LazyLock::new(|| compile_static(r"\s*[-–]\s*", "DASH_RE"));

static PIPE_RE: LazyLock<Regex> = LazyLock::new(|| compile_static(r"\s*\|\s*", "PIPE_RE"));

/// Company and position recovered from a page title. Either may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleParts {
    pub company: String,
    pub position: String,
}

impl TitleParts {
    fn new(company: &str, position: &str) -> Self {
        Self {
            company: company.trim().to_string(),
            position: position.trim().to_string(),
        }
    }

    fn position_only(position: &str) -> Self {
        Self::new("", position)
    }

    /// Both fields empty.
    pub fn is_empty(&self) -> bool {
        self.company.is_empty() && self.position.is_empty()
    }
}

/// Platforms whose page titles follow a fixed grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleRule {
    /// `<position> at <company> [| brand]`
    LinkedIn,
    /// `<position> - <company> - <location> | brand`
    Indeed,
    /// `<company> hiring <position> in <location> | brand`
    Glassdoor,
    /// `<company> - <position> | brand`
    WelcomeToTheJungle,
}

impl TitleRule {
    /// Looks up the bespoke rule for a classified platform, if there is one.
    pub fn for_platform(platform: &str) -> Option<Self> {
        match platform {
            "LinkedIn" => Some(Self::LinkedIn),
            "Indeed" => Some(Self::Indeed),
            "Glassdoor" => Some(Self::Glassdoor),
            "Welcome to the Jungle" => Some(Self::WelcomeToTheJungle),
            _ => None,
        }
    }

    /// Applies the rule. A title that does not fit the grammar yields empty parts.
    pub fn parse(self, title: &str) -> TitleParts {
        match self {
            Self::LinkedIn => parse_linkedin(title),
            Self::Indeed => parse_indeed(title),
            Self::Glassdoor => parse_glassdoor(title),
            Self::WelcomeToTheJungle => parse_welcome_to_the_jungle(title),
        }
    }
}

fn parse_linkedin(title: &str) -> TitleParts {
    LINKEDIN_RE
        .captures(title)
        .map(|caps| TitleParts::new(&caps[2], &caps[1]))
        .unwrap_or_default()
}

fn parse_indeed(title: &str) -> TitleParts {
    let parts: Vec<&str> = DASH_RE.split(title).collect();
    if parts.len() >= 2 {
        TitleParts::new(parts[1], parts[0])
    } else {
        TitleParts::default()
    }
}

fn parse_glassdoor(title: &str) -> TitleParts {
    GLASSDOOR_RE
        .captures(title)
        .map(|caps| TitleParts::new(&caps[1], &caps[2]))
        .unwrap_or_default()
}

fn parse_welcome_to_the_jungle(title: &str) -> TitleParts {
    let main = PIPE_RE.split(title).next().unwrap_or("");
    split_company_position(main)
}

/// Splits on the first dash only: `Company - Role` or a bare role.
fn split_company_position(segment: &str) -> TitleParts {
    let mut parts = DASH_RE.splitn(segment, 2);
    let first = parts.next().unwrap_or("");
    match parts.next() {
        Some(second) => TitleParts::new(first, second),
        None => TitleParts::position_only(first),
    }
}

/// Fallback heuristic for unknown platforms and titles a bespoke rule could not read.
///
/// Drops pipe segments that look like site branding (unless that would drop all
/// of them), then splits the first remaining segment as `Company - Role`.
pub fn parse_generic(title: &str) -> TitleParts {
    let segments: Vec<&str> = PIPE_RE.split(title).collect();

    let content: Vec<&str> = segments
        .iter()
        .filter(|segment| !is_platform_branding(segment))
        .map(|segment| segment.trim())
        .collect();
    let content = if content.is_empty() {
        segments.iter().map(|segment| segment.trim()).collect()
    } else {
        content
    };

    content
        .first()
        .map(|main| split_company_position(main))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(company: &str, position: &str) -> TitleParts {
        TitleParts {
            company: company.to_string(),
            position: position.to_string(),
        }
    }

    #[test]
    fn test_for_platform_maps_bespoke_platforms_only() {
        assert_eq!(TitleRule::for_platform("LinkedIn"), Some(TitleRule::LinkedIn));
        assert_eq!(TitleRule::for_platform("Indeed"), Some(TitleRule::Indeed));
        assert_eq!(TitleRule::for_platform("Glassdoor"), Some(TitleRule::Glassdoor));
        assert_eq!(
            TitleRule::for_platform("Welcome to the Jungle"),
            Some(TitleRule::WelcomeToTheJungle)
        );
        assert_eq!(TitleRule::for_platform("Lever"), None);
        assert_eq!(TitleRule::for_platform("Other"), None);
    }

    #[test]
    fn test_linkedin_position_at_company_with_brand() {
        let got = TitleRule::LinkedIn.parse("Senior Backend Engineer at Acme Corp | LinkedIn");
        assert_eq!(got, parts("Acme Corp", "Senior Backend Engineer"));
    }

    #[test]
    fn test_linkedin_company_stops_at_dash() {
        let got = TitleRule::LinkedIn.parse("Data Engineer at Initech – Remote | LinkedIn");
        assert_eq!(got, parts("Initech", "Data Engineer"));
    }

    #[test]
    fn test_linkedin_without_brand_runs_to_end() {
        let got = TitleRule::LinkedIn.parse("Staff SRE at Hooli");
        assert_eq!(got, parts("Hooli", "Staff SRE"));
    }

    #[test]
    fn test_linkedin_first_at_splits() {
        let got = TitleRule::LinkedIn.parse("Engineer at Large at Acme | LinkedIn");
        assert_eq!(got, parts("Large at Acme", "Engineer"));
    }

    #[test]
    fn test_linkedin_no_match_is_empty() {
        assert!(TitleRule::LinkedIn.parse("LinkedIn Jobs").is_empty());
        assert!(TitleRule::LinkedIn.parse("").is_empty());
    }

    #[test]
    fn test_indeed_takes_first_two_dash_segments() {
        let got = TitleRule::Indeed.parse("Data Analyst - Beta LLC - Austin, TX | Indeed.com");
        assert_eq!(got, parts("Beta LLC", "Data Analyst"));
    }

    #[test]
    fn test_indeed_en_dash() {
        let got = TitleRule::Indeed.parse("Nurse – Mercy Hospital");
        assert_eq!(got, parts("Mercy Hospital", "Nurse"));
    }

    #[test]
    fn test_indeed_without_dash_is_empty() {
        assert!(TitleRule::Indeed.parse("Jobs in Austin | Indeed.com").is_empty());
    }

    #[test]
    fn test_glassdoor_hiring_in_location() {
        let got = TitleRule::Glassdoor
            .parse("Gamma Inc hiring Product Manager in Seattle, WA | Glassdoor");
        assert_eq!(got, parts("Gamma Inc", "Product Manager"));
    }

    #[test]
    fn test_glassdoor_hiring_then_pipe() {
        let got = TitleRule::Glassdoor.parse("Gamma Inc hiring Product Manager | Glassdoor");
        assert_eq!(got, parts("Gamma Inc", "Product Manager"));
    }

    #[test]
    fn test_glassdoor_needs_terminator() {
        assert!(TitleRule::Glassdoor
            .parse("Gamma Inc hiring Product Manager")
            .is_empty());
    }

    #[test]
    fn test_wttj_company_dash_role() {
        let got = TitleRule::WelcomeToTheJungle
            .parse("Doctolib - Backend Developer | Welcome to the Jungle (formerly Otta)");
        assert_eq!(got, parts("Doctolib", "Backend Developer"));
    }

    #[test]
    fn test_wttj_splits_on_first_dash_only() {
        let got = TitleRule::WelcomeToTheJungle.parse("Qonto - Senior Engineer - Payments | WTTJ");
        assert_eq!(got, parts("Qonto", "Senior Engineer - Payments"));
    }

    #[test]
    fn test_wttj_without_dash_is_position_only() {
        let got = TitleRule::WelcomeToTheJungle.parse("Product Designer | Welcome to the Jungle");
        assert_eq!(got, parts("", "Product Designer"));
    }

    #[test]
    fn test_generic_dash_split_without_pipe() {
        let got = parse_generic("Delta Systems - DevOps Engineer");
        assert_eq!(got, parts("Delta Systems", "DevOps Engineer"));
    }

    #[test]
    fn test_generic_drops_branding_segments() {
        let got = parse_generic("Monster | Acme - Platform Engineer | Careers");
        assert_eq!(got, parts("Acme", "Platform Engineer"));
    }

    #[test]
    fn test_generic_reverts_when_every_segment_is_branding() {
        let got = parse_generic("LinkedIn | Indeed.com");
        assert_eq!(got, parts("", "LinkedIn"));
    }

    #[test]
    fn test_generic_pipe_title_without_branding_is_not_empty() {
        let got = parse_generic("Site Reliability Engineer | Acme Careers");
        assert_eq!(got, parts("", "Site Reliability Engineer"));
    }

    #[test]
    fn test_generic_filters_company_containing_platform_name() {
        // "Indeed Solutions" reads as branding and is skipped.
        let got = parse_generic("Indeed Solutions - Analyst | Careers Portal");
        assert_eq!(got, parts("", "Careers Portal"));
    }

    #[test]
    fn test_generic_single_segment_is_position() {
        assert_eq!(parse_generic("Barista"), parts("", "Barista"));
    }

    #[test]
    fn test_generic_empty_title() {
        assert!(parse_generic("").is_empty());
    }
}
