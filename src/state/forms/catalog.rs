//! Declarative step tables for the intake wizards

use super::draft::IdentityField;
use super::field::FieldSpec;
use serde::{Deserialize, Serialize};

const SERVICES: &[&str] = &[
    "Logo Design",
    "Business Cards",
    "Agentic AI",
    "Web Design & Development",
    "Meta & Google Ads",
    "Posts & Banners",
    "Brochures",
    "Posters",
    "Book Covers",
];

const BUDGETS: &[&str] = &[
    "Low (Starter)",
    "Medium (Standard)",
    "High (Premium)",
    "Custom",
];

const TIMELINES: &[&str] = &["Urgent", "1-2 Weeks", "1 Month+", "Flexible"];

const JOB_ROLES: &[&str] = &[
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "UI/UX Designer",
    "Digital Marketing Specialist",
    "Content Writer",
    "Business Development Executive",
];

const EXPERIENCE_LEVELS: &[&str] = &["Fresher", "Experienced"];

const INTERNSHIP_ROLES: &[&str] = &[
    "Web Development Intern",
    "Video Editing Intern",
    "Sales Intern",
    "Graphic Designing Intern",
    "Outreach Intern",
    "Business Analyst Intern",
    "HR Intern",
    "Accountant Intern",
    "Legal Advisor Intern",
    "Digital Marketing Intern",
    "Social Media Manager Intern",
    "Content Writer Intern",
];

const DURATIONS: &[&str] = &["1 Month", "3 Months", "6 Months"];

const WORK_MODES: &[&str] = &["Remote", "Onsite", "Hybrid"];

pub const PURPOSE_SERVICE: &str = "Apply for Service";
pub const PURPOSE_JOB: &str = "Job Application";
pub const PURPOSE_INTERNSHIP: &str = "Internship";
pub const PURPOSE_GENERAL: &str = "General Enquiry";

const PURPOSES: &[&str] = &[PURPOSE_SERVICE, PURPOSE_JOB, PURPOSE_INTERNSHIP, PURPOSE_GENERAL];

const CONTACT_SERVICES: &[&str] = &["Web Development", "Digital Marketing", "Agentic AI", "Branding"];

/// The intake flows offered on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardKind {
    ServiceRequest,
    JobApplication,
    Internship,
    Contact,
}

impl WizardKind {
    pub const ALL: [WizardKind; 4] = [
        WizardKind::ServiceRequest,
        WizardKind::JobApplication,
        WizardKind::Internship,
        WizardKind::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ServiceRequest => "Apply for Service",
            Self::JobApplication => "Apply for Job",
            Self::Internship => "Apply for Internship",
            Self::Contact => "Send Message",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Self::ServiceRequest => "Tell us about your project. Serious inquiries only.",
            Self::JobApplication => "We hire people with passion, not just resumes.",
            Self::Internship => "Real work, real learning and real growth.",
            Self::Contact => "Questions, applications or a quick hello.",
        }
    }

    /// Heading of the success panel
    pub fn success_title(&self) -> &'static str {
        match self {
            Self::ServiceRequest => "Request Received",
            Self::JobApplication | Self::Internship => "Application Received",
            Self::Contact => "Message Sent!",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Self::ServiceRequest => {
                "Our team will review your request and contact you within 24 hours."
            }
            Self::JobApplication => {
                "Our HR team will review your profile and get back to you if your skills match."
            }
            Self::Internship => "Your journey starts here.",
            Self::Contact => "Thank you. We will get back to you within 24 hours.",
        }
    }

    /// Label of the action that starts a fresh draft after success
    pub fn restart_label(&self) -> &'static str {
        match self {
            Self::Contact => "Send Another",
            _ => "Submit another",
        }
    }

    /// Step table for this wizard
    pub fn definition(&self) -> WizardDefinition {
        match self {
            Self::ServiceRequest => service_request(),
            Self::JobApplication => job_application(),
            Self::Internship => internship(),
            Self::Contact => contact(),
        }
    }
}

/// Fields shown together on one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSpec {
    pub title: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl StepSpec {
    pub fn new(title: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self { title, fields }
    }
}

/// Ordered steps making up one wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardDefinition {
    pub kind: WizardKind,
    pub steps: Vec<StepSpec>,
}

impl WizardDefinition {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Every field of every step, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.steps.iter().flat_map(|s| s.fields.iter())
    }

    /// First declaration of a field across all steps
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields().find(|f| f.name == name)
    }
}

#[cfg(test)]
impl WizardDefinition {
    /// Step by 1-based index
    pub fn step(&self, number: usize) -> Option<&StepSpec> {
        number.checked_sub(1).and_then(|i| self.steps.get(i))
    }
}

fn full_name() -> FieldSpec {
    FieldSpec::text("fullName", "Full Name")
        .required()
        .prefilled_from(IdentityField::Name)
}

fn email() -> FieldSpec {
    FieldSpec::text("email", "Email Address")
        .required()
        .prefilled_from(IdentityField::Email)
}

fn mobile() -> FieldSpec {
    FieldSpec::text("mobile", "Mobile Number")
        .required()
        .prefilled_from(IdentityField::Mobile)
}

fn service_request() -> WizardDefinition {
    WizardDefinition {
        kind: WizardKind::ServiceRequest,
        steps: vec![
            StepSpec::new(
                "Basic Details",
                vec![
                    full_name(),
                    FieldSpec::text("company", "Company Name"),
                    email(),
                    mobile(),
                    FieldSpec::text("location", "Location"),
                ],
            ),
            StepSpec::new(
                "Service Selection",
                vec![FieldSpec::choice("service", "Select Service", SERVICES).required()],
            ),
            StepSpec::new(
                "Project Details",
                vec![
                    FieldSpec::multiline("description", "Project Description").required(),
                    FieldSpec::choice("budget", "Budget Range", BUDGETS),
                    FieldSpec::choice("timeline", "Timeline", TIMELINES),
                ],
            ),
        ],
    }
}

fn job_application() -> WizardDefinition {
    WizardDefinition {
        kind: WizardKind::JobApplication,
        steps: vec![
            StepSpec::new(
                "Personal Info",
                vec![
                    full_name(),
                    FieldSpec::text("location", "Current Location"),
                    email(),
                    mobile(),
                ],
            ),
            StepSpec::new(
                "Job Details",
                vec![
                    FieldSpec::choice("role", "Job Role", JOB_ROLES).required(),
                    FieldSpec::choice("experienceLevel", "Experience Level", EXPERIENCE_LEVELS)
                        .with_default("Fresher"),
                    // Collected for experienced applicants but never enforced.
                    FieldSpec::text("yearsOfExperience", "Years of Experience")
                        .visible_when("experienceLevel", "Experienced"),
                ],
            ),
            StepSpec::new(
                "Professional Info",
                vec![
                    FieldSpec::text("resume", "Resume Link").required(),
                    FieldSpec::text("portfolio", "Portfolio / LinkedIn URL"),
                    FieldSpec::text("skills", "Key Skills"),
                    FieldSpec::multiline("whyJoin", "Why do you want to join?").required(),
                ],
            ),
        ],
    }
}

fn internship() -> WizardDefinition {
    WizardDefinition {
        kind: WizardKind::Internship,
        steps: vec![
            StepSpec::new(
                "Student Details",
                vec![
                    full_name(),
                    FieldSpec::text("degree", "Degree & Year"),
                    email(),
                    mobile(),
                    FieldSpec::text("college", "College / Institution Name"),
                ],
            ),
            StepSpec::new(
                "Internship Selection",
                vec![
                    FieldSpec::choice("role", "Internship Role", INTERNSHIP_ROLES).required(),
                    FieldSpec::multiline("whyJoin", "Why do you want this internship?"),
                    FieldSpec::multiline("learningGoal", "What skills do you want to learn?"),
                ],
            ),
            StepSpec::new(
                "Availability",
                vec![
                    FieldSpec::choice("duration", "Duration", DURATIONS),
                    FieldSpec::choice("mode", "Mode", WORK_MODES),
                ],
            ),
        ],
    }
}

/// Single-step message form. The purpose picks which `subject` input is shown.
fn contact() -> WizardDefinition {
    WizardDefinition {
        kind: WizardKind::Contact,
        steps: vec![StepSpec::new(
            "Send Message",
            vec![
                FieldSpec::choice("purpose", "Purpose", PURPOSES)
                    .required()
                    .with_default(PURPOSE_SERVICE),
                FieldSpec::text("name", "Your Name")
                    .required()
                    .prefilled_from(IdentityField::Name),
                FieldSpec::text("mobile", "Mobile Number")
                    .required()
                    .prefilled_from(IdentityField::Mobile),
                FieldSpec::text("email", "Email Address")
                    .required()
                    .prefilled_from(IdentityField::Email),
                FieldSpec::choice("subject", "Service Interested In", CONTACT_SERVICES)
                    .required()
                    .visible_when("purpose", PURPOSE_SERVICE),
                FieldSpec::text("subject", "Role Applying For")
                    .required()
                    .visible_when("purpose", PURPOSE_JOB),
                FieldSpec::text("subject", "Internship Domain")
                    .required()
                    .visible_when("purpose", PURPOSE_INTERNSHIP),
                FieldSpec::multiline("message", "Message").required(),
            ],
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_step_counts() {
        for kind in WizardKind::ALL {
            let def = kind.definition();
            assert_eq!(def.kind, kind);
            let expected = if kind == WizardKind::Contact { 1 } else { 3 };
            assert_eq!(def.step_count(), expected, "{kind:?}");
        }
    }

    #[test]
    fn test_repeated_names_are_mutually_exclusive() {
        for kind in WizardKind::ALL {
            let def = kind.definition();
            let fields: Vec<_> = def.fields().collect();
            for (i, a) in fields.iter().enumerate() {
                for b in fields.iter().skip(i + 1).filter(|b| b.name == a.name) {
                    let (Some(ca), Some(cb)) = (a.visible_when, b.visible_when) else {
                        panic!("{kind:?} repeats {} without conditions", a.name);
                    };
                    assert_eq!(ca.field, cb.field);
                    assert_ne!(ca.equals, cb.equals, "{kind:?} {}", a.name);
                }
            }
        }
    }

    #[test]
    fn test_every_wizard_prefills_each_identity_value_once() {
        for kind in WizardKind::ALL {
            let def = kind.definition();
            for source in [IdentityField::Name, IdentityField::Email, IdentityField::Mobile] {
                let seeded: Vec<_> = def.fields().filter(|f| f.prefill == Some(source)).collect();
                assert_eq!(seeded.len(), 1, "{kind:?} {source:?}");
                assert!(seeded[0].required);
                assert!(def.steps[0].fields.contains(seeded[0]));
            }
        }
    }

    #[test]
    fn test_visibility_conditions_reference_choice_options() {
        for kind in WizardKind::ALL {
            let def = kind.definition();
            for field in def.fields() {
                if let Some(cond) = field.visible_when {
                    let source = def.field(cond.field).expect("condition field exists");
                    assert!(source.options().contains(&cond.equals));
                }
            }
        }
    }

    #[test]
    fn test_defaults_are_valid_options() {
        for kind in WizardKind::ALL {
            for field in kind.definition().fields() {
                if let Some(value) = field.default_value {
                    assert!(field.options().contains(&value), "{kind:?} {}", field.name);
                }
            }
        }
    }

    #[test]
    fn test_service_options_match_catalogue() {
        let def = WizardKind::ServiceRequest.definition();
        let service = def.field("service").unwrap();
        assert_eq!(service.options().len(), 9);
        assert_eq!(service.options()[0], "Logo Design");
        assert_eq!(def.step(2).unwrap().fields.len(), 1);
        assert!(def.field("description").unwrap().is_multiline());
        assert!(!def.field("budget").unwrap().options().contains(&"Please Select"));
    }

    #[test]
    fn test_experience_level_defaults_to_fresher() {
        let def = WizardKind::JobApplication.definition();
        let level = def.field("experienceLevel").unwrap();
        assert_eq!(level.default_value, Some("Fresher"));
        assert!(!level.required);

        let years = def.field("yearsOfExperience").unwrap();
        assert!(!years.required);
        assert_eq!(years.visible_when.unwrap().equals, "Experienced");
    }

    #[test]
    fn test_resume_is_required_only_for_jobs() {
        assert!(WizardKind::JobApplication.definition().field("resume").unwrap().required);
        assert!(WizardKind::Internship.definition().field("resume").is_none());
        assert!(WizardKind::ServiceRequest.definition().field("resume").is_none());
    }

    #[test]
    fn test_why_join_required_for_jobs_only() {
        assert!(WizardKind::JobApplication.definition().field("whyJoin").unwrap().required);
        assert!(!WizardKind::Internship.definition().field("whyJoin").unwrap().required);
    }

    #[test]
    fn test_internship_has_nothing_required_after_role() {
        let def = WizardKind::Internship.definition();
        assert_eq!(def.field("role").unwrap().options().len(), 12);
        let required: Vec<_> = def.steps[1..]
            .iter()
            .flat_map(|s| s.fields.iter())
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(required, vec!["role"]);
    }

    #[test]
    fn test_contact_subject_depends_on_purpose() {
        let def = WizardKind::Contact.definition();
        let subjects: Vec<_> = def.fields().filter(|f| f.name == "subject").collect();
        assert_eq!(subjects.len(), 3);
        assert!(subjects[0].is_choice());
        assert!(!subjects[1].is_choice());
        let purposes: Vec<_> = subjects
            .iter()
            .map(|f| f.visible_when.unwrap().equals)
            .collect();
        assert_eq!(purposes, vec![PURPOSE_SERVICE, PURPOSE_JOB, PURPOSE_INTERNSHIP]);
        assert_eq!(def.field("purpose").unwrap().default_value, Some(PURPOSE_SERVICE));
    }

    #[test]
    fn test_step_lookup_is_one_based() {
        let def = WizardKind::ServiceRequest.definition();
        assert!(def.step(0).is_none());
        assert_eq!(def.step(1).unwrap().title, "Basic Details");
        assert_eq!(def.step(3).unwrap().title, "Project Details");
        assert!(def.step(4).is_none());
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&WizardKind::ServiceRequest).unwrap();
        assert_eq!(json, "\"service_request\"");
        assert_eq!(serde_json::to_string(&WizardKind::Contact).unwrap(), "\"contact\"");
    }
}
