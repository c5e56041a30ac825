use chrono::NaiveDate;

use super::{ContentKind, Entry};

struct Bundled {
    slug: &'static str,
    title: &'static str,
    excerpt: &'static str,
    published: (i32, u32, u32),
    body: &'static str,
}

const BLOG: &[Bundled] = &[
    Bundled {
        slug: "fcra-compliance-checklist",
        title: "The FCRA Compliance Checklist for Growing Teams",
        excerpt: "Disclosure, authorization and adverse action: the three steps every employer has to get right.",
        published: (2025, 6, 12),
        body: "Background checks for employment are consumer reports under the FCRA. Before ordering one you need a standalone disclosure and written authorization from the candidate. If the report influences a negative decision, a pre-adverse action notice with a copy of the report comes first, followed by a waiting period and the final adverse action notice.",
    },
    Bundled {
        slug: "ai-document-verification",
        title: "How AI Speeds Up Document Verification",
        excerpt: "Machine reading of diplomas, licences and IDs cuts turnaround from days to minutes.",
        published: (2025, 8, 4),
        body: "Document intelligence models extract fields, compare them against issuing-authority templates and flag inconsistencies for human review. Reviewers only see the documents that need judgement, which is where the turnaround gains come from.",
    },
];

const CASE_STUDIES: &[Bundled] = &[
    Bundled {
        slug: "regional-hospital-network",
        title: "Credentialing 4,000 Clinicians for a Regional Hospital Network",
        excerpt: "License monitoring and sanctions screening moved from spreadsheets to continuous checks.",
        published: (2025, 2, 20),
        body: "The network replaced quarterly manual license lookups with continuous monitoring across state boards and federal exclusion lists. Lapsed credentials now surface the day they change.",
    },
    Bundled {
        slug: "staffing-agency-turnaround",
        title: "Halving Screening Turnaround for a National Staffing Agency",
        excerpt: "Automated identity verification and parallel county searches for high-volume placements.",
        published: (2024, 11, 7),
        body: "Parallel county court searches and automated identity verification brought the median report time from four days to under two, with no change in accuracy.",
    },
];

pub(super) fn entries(kind: ContentKind) -> Vec<Entry> {
    let bundled = match kind {
        ContentKind::Blog => BLOG,
        ContentKind::CaseStudy => CASE_STUDIES,
    };
    bundled
        .iter()
        .filter_map(|item| {
            let (year, month, day) = item.published;
            Some(Entry {
                slug: item.slug.to_string(),
                title: item.title.to_string(),
                excerpt: item.excerpt.to_string(),
                published_at: NaiveDate::from_ymd_opt(year, month, day)?,
                body: item.body.to_string(),
                cover_image: None,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bundled_date_is_valid() {
        assert_eq!(entries(ContentKind::Blog).len(), BLOG.len());
        assert_eq!(entries(ContentKind::CaseStudy).len(), CASE_STUDIES.len());
    }
}
