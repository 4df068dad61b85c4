//! Coach prompt set.
//!
//! The prompt wording the coaching flavour of the engine runs with. The core
//! engine takes these as plain configuration; nothing below is referenced
//! from motiva-core.

use motiva_core::engine::EnginePrompts;

/// System prompt framing every completion request.
pub const COACH_SYSTEM_PROMPT: &str = "You are an expert in motivational interviewing, \
skilled at helping clients explore and resolve ambivalence about behaviour change, \
specifically focused on physical activity. Use open-ended questions, affirmations, \
reflective listening, and summaries to guide the conversation about physical activity \
and its benefits.";

/// Greeting shown when the REPL starts. Display only; never appended to the
/// conversation log, so analytics and summaries ignore it.
pub const WELCOME_MESSAGE: &str = "Welcome! I'm a coach specializing in motivational \
interviewing for physical activity. How can I assist you today with your physical \
activity goals?";

/// Preamble placed before the flattened transcript in summary requests.
pub const SUMMARY_PREAMBLE: &str =
    "Please summarize the following conversation about physical activity:";

/// Builds the engine prompt set for the coaching flavour.
pub fn coach_prompts() -> EnginePrompts {
    EnginePrompts {
        system_prompt: COACH_SYSTEM_PROMPT.to_string(),
        summary_preamble: SUMMARY_PREAMBLE.to_string(),
    }
}
