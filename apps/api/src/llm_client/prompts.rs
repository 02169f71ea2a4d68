#![allow(dead_code)]

// Shared prompt constants and prompt-building utilities.
// Each use-case defines its own prompt templates in actions::prompts.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction that pins list reconciliation to stable identifiers.
/// Embedded in every prompt whose schema carries `id` fields.
pub const IDENTIFIER_INSTRUCTION: &str = "\
    CRITICAL: Every experience or education entry you return MUST carry the \
    exact `id` value it was given in the input. \
    Do NOT invent new ids, do NOT renumber, do NOT omit the id field. \
    You may reorder and omit entire entries; you may never change an id.";
