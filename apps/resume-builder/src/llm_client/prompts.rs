// Prompt fragments sent alongside the user's prompt file.
// The prompt file itself is always forwarded verbatim.

/// Optional system prompt describing the YAML layout the renderer understands.
/// Sent only when `--schema-hint` is passed.
pub const YAML_SCHEMA_SYSTEM: &str = "\
You write tailored resumes. Respond with a single YAML document and nothing else. \
Use exactly these top-level keys:
personal_details:
  - name: <full name>
    email: <email address>
    github: <profile URL, optional>
    linkedin: <profile URL, optional>
resume:
  - summary: <professional summary>
    skills:
      - category: <skill category>
        skill: <comma separated skills>
    education:
      - Name: <institution>
        Credential:
          - Name: <degree or diploma>
            Points: [<detail>, ...]
    certificates:
      - Name: <certificate>
        Issuer: <issuing body>
    work:
      - Title: <job title>
        Company: <company>
        Date: <date range>
        Points: [<achievement>, ...]
    projects:
      - Name: <project name>
        Points: [<detail>, ...]
resume_sections:
  - type: <one of Professional Summary, Skills, Experience, Education, Projects>
List resume_sections in the order they should appear.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_hint_names_every_section_title() {
        for title in crate::models::resume::SectionKind::ALL.iter().map(|k| k.title()) {
            assert!(YAML_SCHEMA_SYSTEM.contains(title), "missing {title}");
        }
    }
}
