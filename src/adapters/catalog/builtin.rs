use crate::domain::model::{Price, Service, ServiceDetails, ServiceId};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The three offerings the business publishes by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

#[async_trait]
impl CatalogSource for BuiltinCatalog {
    async fn fetch_services(&self) -> Result<Vec<Service>> {
        Ok(builtin_services())
    }

    fn describe(&self) -> String {
        "builtin catalog".to_string()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn builtin_services() -> Vec<Service> {
    vec![
        Service {
            id: ServiceId(1),
            title: "Grade 6-10 Alberta Curriculum".to_string(),
            image: "/images/teacher-tutor-student-librarian-1137620335.jpg".to_string(),
            description: "Comprehensive tutoring aligned with Alberta curriculum standards"
                .to_string(),
            price: Price(500),
            features: strings(&[
                "One-on-one personalized sessions",
                "Homework help and review",
                "Regular progress assessments",
            ]),
            details: ServiceDetails {
                subjects: Some(strings(&[
                    "Mathematics",
                    "Science",
                    "English Language Arts",
                    "Social Studies",
                ])),
                approach: strings(&[
                    "Personalized learning plans",
                    "Regular homework support",
                    "Practice tests and assessments",
                    "Progress tracking",
                    "Parent-teacher communication",
                ]),
                schedule: "Flexible scheduling available".to_string(),
                location: "In-person (Calgary) or online".to_string(),
            },
        },
        Service {
            id: ServiceId(2),
            title: "SAT Preparation".to_string(),
            image: "/images/2017_11_30_Mines Tutoring at College View Middle School_JDN_5191.jpg"
                .to_string(),
            description: "Expert SAT prep with practice tests and personalized strategies"
                .to_string(),
            price: Price(600),
            features: strings(&[
                "Full-length practice tests",
                "Personalized study plans",
                "Score improvement tracking",
            ]),
            details: ServiceDetails {
                subjects: Some(strings(&[
                    "Math (Algebra, Geometry, Advanced Math)",
                    "Evidence-Based Reading",
                    "Writing & Language",
                    "Optional Essay Writing",
                ])),
                approach: strings(&[
                    "Initial diagnostic assessment",
                    "Customized study plan",
                    "Weekly practice tests",
                    "Test-taking strategies",
                    "Time management skills",
                    "Score prediction and tracking",
                ]),
                schedule: "12-week preparation program".to_string(),
                location: "In-person or online sessions".to_string(),
            },
        },
        Service {
            id: ServiceId(3),
            title: "University Counselling".to_string(),
            image: "/images/admission-counseling-banner.png".to_string(),
            description: "Comprehensive US and Canadian university application guidance"
                .to_string(),
            price: Price(800),
            features: strings(&[
                "Application strategy",
                "Essay review & feedback",
                "Interview preparation",
            ]),
            details: ServiceDetails {
                subjects: Some(strings(&[
                    "University Selection Strategy",
                    "Application Process",
                    "Essay Writing",
                    "Interview Skills",
                ])),
                approach: strings(&[
                    "Personalized university shortlist",
                    "Common App and OUAC guidance",
                    "Letter of recommendation strategy",
                    "Application tracking system",
                    "Scholarship search and applications",
                    "Visa and documentation support",
                ]),
                schedule: "6-month guidance program".to_string(),
                location: "In-person or virtual meetings".to_string(),
            },
        },
    ]
}
