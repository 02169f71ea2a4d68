//! Schema Contract — the declarative shape each oracle call must return.
//!
//! Every prompt embeds a rendered contract so the oracle knows the exact
//! field names, types, and required-ness. The contract is advisory for the
//! oracle but load-bearing for us: the adapter rejects responses that are not
//! syntactically valid JSON, while required-field ABSENCE is not fatal — the
//! merge engine falls back per field instead.

use std::fmt::Write;

/// The type a contract field must carry.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Text,
    Number,
    TextList,
    NumberList,
    ObjectList(&'static [FieldSpec]),
}

/// One named field in a contract.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn required(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        required: true,
    }
}

const fn optional(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        required: false,
    }
}

/// A complete per-use-case response contract.
#[derive(Debug, Clone, Copy)]
pub struct SchemaContract {
    pub fields: &'static [FieldSpec],
}

impl SchemaContract {
    /// Renders the contract as the schema block embedded in a prompt.
    pub fn render(&self) -> String {
        let mut out = String::new();
        render_object(&mut out, self.fields, 0);
        out
    }
}

fn render_object(out: &mut String, fields: &[FieldSpec], depth: usize) {
    let pad = "  ".repeat(depth);
    let inner = "  ".repeat(depth + 1);
    out.push_str("{\n");
    for (i, field) in fields.iter().enumerate() {
        let _ = write!(out, "{inner}\"{}\": ", field.name);
        render_kind(out, field.kind, depth + 1);
        if field.required {
            out.push_str("  // required");
        }
        if i + 1 < fields.len() {
            out.push(',');
        }
        out.push('\n');
    }
    let _ = write!(out, "{pad}}}");
}

fn render_kind(out: &mut String, kind: FieldKind, depth: usize) {
    match kind {
        FieldKind::Text => out.push_str("\"string\""),
        FieldKind::Number => out.push_str("number"),
        FieldKind::TextList => out.push_str("[\"string\"]"),
        FieldKind::NumberList => out.push_str("[number]"),
        FieldKind::ObjectList(fields) => {
            out.push('[');
            render_object(out, fields, depth);
            out.push(']');
        }
    }
}

const EXPERIENCE_PATCH_FIELDS: &[FieldSpec] = &[
    required("id", FieldKind::Text),
    optional("description", FieldKind::TextList),
];

/// Initial resume parse. No identifiers here — the merge engine assigns them.
pub const fn parse_schema() -> SchemaContract {
    const EXPERIENCE: &[FieldSpec] = &[
        optional("company", FieldKind::Text),
        optional("role", FieldKind::Text),
        optional("startDate", FieldKind::Text),
        optional("endDate", FieldKind::Text),
        optional("description", FieldKind::TextList),
    ];
    const EDUCATION: &[FieldSpec] = &[
        optional("institution", FieldKind::Text),
        optional("degree", FieldKind::Text),
        optional("year", FieldKind::Text),
    ];
    const LINKS: &[FieldSpec] = &[
        optional("label", FieldKind::Text),
        optional("url", FieldKind::Text),
    ];
    const FIELDS: &[FieldSpec] = &[
        required("name", FieldKind::Text),
        optional("email", FieldKind::Text),
        optional("phone", FieldKind::Text),
        optional("location", FieldKind::Text),
        optional("summary", FieldKind::Text),
        optional("skills", FieldKind::TextList),
        optional("experience", FieldKind::ObjectList(EXPERIENCE)),
        optional("education", FieldKind::ObjectList(EDUCATION)),
        optional("links", FieldKind::ObjectList(LINKS)),
    ];
    SchemaContract { fields: FIELDS }
}

/// Tailoring call: rewritten summary/skills/experience plus side artifacts.
pub const fn tailor_schema() -> SchemaContract {
    const FIELDS: &[FieldSpec] = &[
        required("tailoredSummary", FieldKind::Text),
        optional("tailoredSkills", FieldKind::TextList),
        required("tailoredExperience", FieldKind::ObjectList(EXPERIENCE_PATCH_FIELDS)),
        required("coverLetter", FieldKind::Text),
        optional("matchScore", FieldKind::Number),
        optional("keywords", FieldKind::TextList),
    ];
    SchemaContract { fields: FIELDS }
}

/// Resume condensation: skills by index, experience/education by identifier.
pub const fn condense_resume_schema() -> SchemaContract {
    const FIELDS: &[FieldSpec] = &[
        required("selectedSkillIndices", FieldKind::NumberList),
        required("condensedExperience", FieldKind::ObjectList(EXPERIENCE_PATCH_FIELDS)),
        optional("educationIds", FieldKind::TextList),
    ];
    SchemaContract { fields: FIELDS }
}

/// Cover-letter condensation: a single scalar.
pub const fn condense_letter_schema() -> SchemaContract {
    const FIELDS: &[FieldSpec] = &[required("condensedLetter", FieldKind::Text)];
    SchemaContract { fields: FIELDS }
}

/// Best-effort company research call.
pub const fn research_schema() -> SchemaContract {
    const SOURCES: &[FieldSpec] = &[
        required("title", FieldKind::Text),
        required("url", FieldKind::Text),
    ];
    const FIELDS: &[FieldSpec] = &[
        required("summary", FieldKind::Text),
        optional("sources", FieldKind::ObjectList(SOURCES)),
    ];
    SchemaContract { fields: FIELDS }
}
