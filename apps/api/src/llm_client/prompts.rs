// Cross-cutting prompt fragments. Survey-specific templates live in
// survey::prompts alongside the engine that fills them.

/// System prompt that enforces JSON-only output across all model calls.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise user-research assistant. \
    You MUST respond with valid JSON only — a JSON array of question objects. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
