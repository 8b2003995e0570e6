//! Static page copy.

pub const OWNER_NAME: &str = "Punith Infant D";
pub const OWNER_EMAIL: &str = "punithinfant5@gmail.com";
pub const RESUME_URL: &str = "/resume.pdf";
pub const RESUME_FILE_NAME: &str = "Punith_Infant_D_Resume.pdf";

/// Section ids in document order with their navigation labels.
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Headline numbers. Targets are kept as attribute text and parsed on reveal.
pub const STATS: &[(&str, &str)] = &[
    ("Projects Completed", "15"),
    ("Technologies", "12"),
    ("Cups of Coffee", "250"),
    ("Years Learning", "3"),
];

pub const SKILLS: &[(&str, &str)] = &[
    ("HTML5 & CSS3", "95%"),
    ("JavaScript", "88%"),
    ("React.js", "80%"),
    ("PHP & MySQL", "75%"),
    ("UI/UX Design", "70%"),
];

pub const SUBJECTS: &[(&str, &str)] = &[
    ("project", "Project Collaboration"),
    ("job", "Job Opportunity"),
    ("freelance", "Freelance Work"),
    ("other", "Something Else"),
];

pub fn project_image(project_id: &str) -> String {
    format!("/images/projects/{project_id}.webp")
}
