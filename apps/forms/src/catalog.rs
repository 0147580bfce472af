#![allow(dead_code)]

//! Static catalog of open positions. Read-only data: selecting a listing
//! seeds a `JobApplication` draft, nothing here is user-editable.

use crate::models::job::JobApplication;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListing {
    pub title: &'static str,
    pub department: &'static str,
    pub location: &'static str,
    pub employment_type: &'static str,
    pub salary_range: &'static str,
    pub description: &'static str,
    pub detailed_description: &'static str,
    pub responsibilities: &'static [&'static str],
    pub requirements: &'static [&'static str],
}

impl JobListing {
    /// Starts an application draft for this opening. The position field is
    /// derived from the listing and not edited independently.
    pub fn start_application(&self) -> JobApplication {
        JobApplication {
            position: self.title.to_string(),
            ..Default::default()
        }
    }

    fn matches(&self, needle: &str) -> bool {
        [self.title, self.department, self.location, self.employment_type]
            .iter()
            .any(|haystack| haystack.to_lowercase().contains(needle))
    }
}

/// Case-insensitive filter over title, department, location and type — the
/// search box behavior on the openings page. An empty term returns everything.
pub fn search(term: &str) -> Vec<&'static JobListing> {
    let needle = term.trim().to_lowercase();
    OPENINGS
        .iter()
        .filter(|listing| needle.is_empty() || listing.matches(&needle))
        .collect()
}

pub const OPENINGS: &[JobListing] = &[
    JobListing {
        title: "Senior Cybersecurity Analyst",
        department: "Cybersecurity",
        location: "Remote/Hybrid",
        employment_type: "Full-time",
        salary_range: "₹8-12 LPA",
        description: "Lead security assessments, implement security protocols, and develop incident response strategies.",
        detailed_description: "As a Senior Cybersecurity Analyst, you will be responsible for protecting our organization and clients from cyber threats. You will conduct comprehensive security assessments, develop and implement security protocols, and lead incident response efforts.",
        responsibilities: &[
            "Conduct regular security assessments and vulnerability testing",
            "Develop and maintain security policies and procedures",
            "Lead incident response and forensic analysis",
            "Monitor security systems and analyze threat intelligence",
            "Collaborate with cross-functional teams on security initiatives",
            "Stay updated on latest cybersecurity trends and threats",
        ],
        requirements: &[
            "5+ years in cybersecurity",
            "CISSP or CEH certification preferred",
            "Experience with security tools and frameworks",
            "Strong analytical and problem-solving skills",
        ],
    },
    JobListing {
        title: "Full Stack Developer",
        department: "Web Development",
        location: "On-site",
        employment_type: "Full-time",
        salary_range: "₹6-10 LPA",
        description: "Develop and maintain modern web applications using React, Node.js, and cloud technologies.",
        detailed_description: "Join our development team to build cutting-edge web applications that serve thousands of users. You will work with modern technologies including React, Node.js, and cloud platforms to create scalable, responsive applications.",
        responsibilities: &[
            "Develop responsive web applications using React and TypeScript",
            "Build robust backend APIs using Node.js and Express",
            "Implement database solutions and optimize queries",
            "Deploy applications on cloud platforms (AWS/Azure)",
            "Collaborate with designers to implement UI/UX requirements",
            "Write clean, maintainable, and well-documented code",
        ],
        requirements: &[
            "3+ years in full-stack development",
            "Proficiency in React, Node.js, TypeScript",
            "Experience with cloud platforms (AWS/Azure)",
            "Knowledge of database systems",
        ],
    },
    JobListing {
        title: "UI/UX Designer",
        department: "Design",
        location: "Hybrid",
        employment_type: "Full-time",
        salary_range: "₹4-7 LPA",
        description: "Create intuitive and engaging user experiences for web and mobile applications.",
        detailed_description: "Shape the user experience of our digital products by creating intuitive, engaging, and accessible designs. You will work closely with product managers and developers to translate user needs into beautiful, functional interfaces.",
        responsibilities: &[
            "Conduct user research and create user personas",
            "Design wireframes, mockups, and interactive prototypes",
            "Develop and maintain design systems and style guides",
            "Collaborate with developers to ensure design implementation",
            "Conduct usability testing and iterate on designs",
            "Stay updated on design trends and best practices",
        ],
        requirements: &[
            "2+ years in UI/UX design",
            "Proficiency in Figma, Adobe Creative Suite",
            "Strong portfolio demonstrating design skills",
            "Understanding of user-centered design principles",
        ],
    },
    JobListing {
        title: "DevOps Engineer",
        department: "Infrastructure",
        location: "Remote",
        employment_type: "Full-time",
        salary_range: "₹7-11 LPA",
        description: "Manage CI/CD pipelines, cloud infrastructure, and deployment automation.",
        detailed_description: "Join our infrastructure team to build and maintain robust, scalable systems that support our applications and services. You will work with cutting-edge DevOps tools and practices to ensure smooth deployments.",
        responsibilities: &[
            "Design and maintain CI/CD pipelines",
            "Manage cloud infrastructure on AWS/Azure/GCP",
            "Implement monitoring and alerting systems",
            "Automate deployment processes and infrastructure provisioning",
            "Collaborate with development teams on deployment strategies",
            "Ensure security and compliance in infrastructure",
        ],
        requirements: &[
            "3+ years in DevOps/Infrastructure",
            "Experience with Docker, Kubernetes",
            "Knowledge of AWS/Azure cloud services",
            "Scripting skills in Python or Bash",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_returns_all_openings() {
        assert_eq!(search("").len(), OPENINGS.len());
        assert_eq!(search("   ").len(), OPENINGS.len());
    }

    #[test]
    fn test_search_by_title_is_case_insensitive() {
        let hits = search("cybersecurity");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Senior Cybersecurity Analyst");
    }

    #[test]
    fn test_search_by_location() {
        let hits = search("remote");
        assert!(hits.iter().any(|l| l.title == "DevOps Engineer"));
        assert!(hits.iter().any(|l| l.title == "Senior Cybersecurity Analyst"));
    }

    #[test]
    fn test_search_by_type_matches_everything() {
        assert_eq!(search("full-time").len(), OPENINGS.len());
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(search("astronaut").is_empty());
    }

    #[test]
    fn test_start_application_seeds_position_only() {
        let draft = OPENINGS[2].start_application();
        assert_eq!(draft.position, "UI/UX Designer");
        assert!(draft.name.is_empty());
        assert!(draft.resume.is_none());
    }
}
