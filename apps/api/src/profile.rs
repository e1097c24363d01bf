//! Plaintext recruiter profile — a pure formatting function over one
//! canonical record. Section layout follows the exported PDF profile:
//! header, contact, education, skills, projects.

use crate::models::student::Student;

/// Renders the full profile document for one student.
pub fn render_profile(student: &Student) -> String {
    let mut doc = String::new();

    heading(&mut doc, if student.name.is_empty() {
        "Student Profile"
    } else {
        &student.name
    });

    heading(&mut doc, "Contact Information");
    line(&mut doc, "Email", nonempty_or(&student.email, "Not provided"));
    line(&mut doc, "Phone", nonempty_or(&student.phone, "Not provided"));
    if !student.github.is_empty() {
        line(&mut doc, "GitHub", &student.github);
    }
    if !student.linkedin.is_empty() {
        line(&mut doc, "LinkedIn", &student.linkedin);
    }
    doc.push('\n');

    heading(&mut doc, "Education");
    line(
        &mut doc,
        "University",
        nonempty_or(&student.university, "Not specified"),
    );
    line(&mut doc, "Major", nonempty_or(&student.major, "Not specified"));
    match student.gpa {
        Some(gpa) => line(&mut doc, "GPA", &format!("{gpa}")),
        None => line(&mut doc, "GPA", "Not specified"),
    }
    match student.graduation_year {
        Some(year) => line(&mut doc, "Expected Graduation", &year.to_string()),
        None => line(&mut doc, "Expected Graduation", "Not specified"),
    }
    doc.push('\n');

    if !student.skills.is_empty() {
        heading(&mut doc, "Skills");
        doc.push_str(&student.skills.join(", "));
        doc.push_str("\n\n");
    }

    if !student.projects.is_empty() {
        heading(&mut doc, "Projects");
        for project in &student.projects {
            if !project.title.is_empty() {
                doc.push_str(&project.title);
                doc.push('\n');
            }
            if !project.description.is_empty() {
                doc.push_str(&project.description);
                doc.push('\n');
            }
            if !project.technologies.is_empty() {
                line(&mut doc, "Technologies", &project.technologies);
            }
            if !project.link.is_empty() {
                line(&mut doc, "Link", &project.link);
            }
            doc.push('\n');
        }
    }

    doc
}

fn heading(doc: &mut String, text: &str) {
    doc.push_str(text);
    doc.push('\n');
    for _ in text.chars() {
        doc.push('=');
    }
    doc.push_str("\n\n");
}

fn line(doc: &mut String, label: &str, value: &str) {
    doc.push_str(label);
    doc.push_str(": ");
    doc.push_str(value);
    doc.push('\n');
}

fn nonempty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
