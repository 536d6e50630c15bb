//! Audience personas controlling answer style.
//!
//! Each persona owns a fixed instruction block and a few-shot example block
//! that the prompt assembler injects verbatim.

use std::fmt;

/// Audience-style selector for answer generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Persona {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Persona {
    /// Resolve user input to a persona.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace. The
    /// long-form labels (`student (advanced)` etc.) are accepted as well.
    /// Anything unrecognized falls back to `Beginner`; resolution never fails.
    pub fn resolve(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "intermediate" | "student (intermediate)" => Persona::Intermediate,
            "advanced" | "student (advanced)" => Persona::Advanced,
            _ => Persona::Beginner,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Beginner => "beginner",
            Persona::Intermediate => "intermediate",
            Persona::Advanced => "advanced",
        }
    }

    /// Label used when addressing the model ("Answer for a ...").
    pub fn label(&self) -> &'static str {
        match self {
            Persona::Beginner => "student (beginner)",
            Persona::Intermediate => "student (intermediate)",
            Persona::Advanced => "student (advanced)",
        }
    }

    /// Behavioral instructions injected into the system prompt.
    pub fn instructions(&self) -> &'static str {
        match self {
            Persona::Beginner => {
                "Explain concepts simply, use analogies, avoid jargon, and break down \
                 complex ideas. If the question is unclear, ask a clarifying question first."
            }
            Persona::Intermediate => {
                "Give clear, step-by-step explanations. Use code snippets and bullet \
                 points. If the question is vague, ask for clarification."
            }
            Persona::Advanced => {
                "Provide in-depth, technical answers. Use code, discuss trade-offs, and \
                 suggest improvements. If the question is ambiguous, request more detail."
            }
        }
    }

    /// Few-shot Q&A block demonstrating the persona's register.
    pub fn example(&self) -> &'static str {
        match self {
            Persona::Beginner => {
                "Q: What does this repo do?\n\
                 A: This project is like a recipe book for computers. It helps you do X by following simple steps.\n\
                 \n\
                 Q: What is a function here?\n\
                 A: A function is like a mini-machine that does a specific job, such as adding numbers."
            }
            Persona::Intermediate => {
                "Q: How does the main module work?\n\
                 A: The main module loads data, processes it, and outputs results. It uses functions like load_data() and process().\n\
                 \n\
                 Q: What is the role of the dependency manifest?\n\
                 A: It lists the packages needed to build and run the project."
            }
            Persona::Advanced => {
                "Q: How is error handling implemented?\n\
                 A: The code catches failures close to the I/O boundary, especially in data loading and API calls, and surfaces typed errors.\n\
                 \n\
                 Q: How would you refactor the main loop?\n\
                 A: Consider extracting logic into smaller functions and tightening the data flow for clarity."
            }
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
