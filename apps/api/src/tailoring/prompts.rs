// Prompt constants for resume tailoring and application-question answering.
// Templates use `{placeholder}` markers filled in one pass by `fill_template`.

/// Tailoring user message. Replace `{resume_text}`, `{jd_text}` and `{json_only}`.
/// The caller's own tailoring prompt is prepended as the system part.
pub const TAILOR_PROMPT_TEMPLATE: &str = r#"Here are the two inputs:

=== CANDIDATE RESUME ===
{resume_text}

=== JOB DESCRIPTION ===
{jd_text}

=== INSTRUCTIONS ===
Apply every phase from your system prompt to these inputs.

IMPORTANT: Return ONLY the tailored resume as a JSON object with this exact structure (no change log, no interview prep — just the resume):

```json
{
  "name": "Candidate Name",
  "title": "Tailored Job Title",
  "contact": "Location | email",
  "summary": "The full summary paragraph",
  "skills": [
    {"category": "Category Name", "items": "skill1, skill2, skill3"}
  ],
  "experience": [
    {
      "job_title": "Title",
      "company": "Company Name",
      "context": "Domain context tag",
      "dates": "MM/YYYY - MM/YYYY",
      "location": "City, ST or Remote",
      "bullets": ["bullet 1", "bullet 2"]
    }
  ],
  "education": {
    "degree": "Degree Name",
    "school": "School Name",
    "dates": "MM/YYYY - MM/YYYY",
    "location": "City, ST"
  }
}
```

{json_only}
"#;

pub const TAILOR_MAX_TOKENS: u32 = 8000;

/// System prompt for answering job application questions.
pub const ANSWER_SYSTEM: &str = "You are an expert job application assistant. You help candidates write compelling,
authentic answers to job application questions. You have deep context about:
1. The candidate's background (their tailored resume)
2. The specific job they are applying for (the job description)

Rules:
- Write answers in FIRST PERSON as the candidate
- Keep answers concise but substantive (3-6 sentences per question unless it clearly needs more)
- Ground every answer in REAL experience from the resume — never fabricate
- Mirror the tone and keywords from the job description naturally
- Show enthusiasm for the specific role and company
- If a question asks about something not covered in the resume, craft an honest answer
  that pivots to relevant strengths rather than making things up
- For salary questions, suggest the candidate research market rates rather than giving a number
- For \"why this company\" questions, reference specific things from the JD that align with the candidate's experience";

/// Question-answering user message. Replace `{resume_text}`, `{jd_text}`, `{questions}` and `{json_only}`.
pub const ANSWER_PROMPT_TEMPLATE: &str = r#"Here is the candidate's resume:

{resume_text}

Here is the job description they are applying to:

{jd_text}

Please answer each of the following application questions. Format your response as a JSON array where each
element has "question" (the original question) and "answer" (your crafted response).

Questions:
{questions}

{json_only} Example format:
[{"question": "Why do you want this role?", "answer": "Your answer here..."}]"#;

pub const ANSWER_MAX_TOKENS: u32 = 4000;
