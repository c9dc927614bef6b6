//! Verification flow as seen by a front end.
//!
//! A [`Session`] holds the pasted text and a closed [`VerificationState`]:
//! idle, waiting on the analyzer, or showing a verdict. Safe verdicts show one
//! of [`SAFE_MESSAGES`], chosen with a caller-supplied random source.

use rand::Rng;
use serde::Serialize;

use crate::{analyze, validate_input, AnalysisResult, DangerReason, InputError};

/// Affirmations shown for a safe verdict.
pub const SAFE_MESSAGES: &[&str] = &[
    "Tudo certo! Este link parece seguro.",
    "Análise concluída. Pode confiar.",
    "Verificado! Nenhuma ameaça encontrada.",
];

/// Picks one of [`SAFE_MESSAGES`] uniformly.
pub fn pick_safe_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SAFE_MESSAGES[rng.gen_range(0..SAFE_MESSAGES.len())]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VerificationState {
    Idle,
    Loading,
    Safe {
        message: &'static str,
    },
    Danger {
        reason: DangerReason,
        message: &'static str,
    },
}

impl VerificationState {
    /// Heading shown above the state's content.
    pub fn title(&self) -> &'static str {
        match self {
            VerificationState::Idle => "Verificador de Segurança",
            VerificationState::Loading => "Verificando...",
            VerificationState::Safe { .. } => "Parece Seguro",
            VerificationState::Danger { .. } => "Perigoso",
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            VerificationState::Idle | VerificationState::Loading => None,
            VerificationState::Safe { message } | VerificationState::Danger { message, .. } => {
                Some(*message)
            }
        }
    }

    pub fn is_verdict(&self) -> bool {
        matches!(
            self,
            VerificationState::Safe { .. } | VerificationState::Danger { .. }
        )
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    input: String,
    state: VerificationState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            state: VerificationState::Idle,
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &VerificationState {
        &self.state
    }

    /// Moves to `Loading` if the current input can be analyzed.
    ///
    /// Blank input is rejected and leaves the state untouched.
    pub fn begin(&mut self) -> Result<(), InputError> {
        validate_input(&self.input)?;
        self.state = VerificationState::Loading;
        log::trace!("Verification started ({} bytes)", self.input.len());
        Ok(())
    }

    /// Shows `result` if a verification is still pending.
    ///
    /// Returns `false` when the session was reset or already shows a verdict;
    /// the result is then dropped.
    pub fn complete<R: Rng + ?Sized>(&mut self, result: &AnalysisResult, rng: &mut R) -> bool {
        if self.state != VerificationState::Loading {
            log::debug!("Ignoring result for a verification that is no longer pending");
            return false;
        }
        self.state = match result {
            AnalysisResult::Safe { .. } => VerificationState::Safe {
                message: pick_safe_message(rng),
            },
            AnalysisResult::Danger {
                reason, message, ..
            } => VerificationState::Danger {
                reason: *reason,
                message: *message,
            },
        };
        true
    }

    /// Runs the whole flow on the current input and returns the verdict.
    pub fn verify<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&VerificationState, InputError> {
        self.begin()?;
        let result = analyze(&self.input);
        self.complete(&result, rng);
        Ok(&self.state)
    }

    /// Clears the input and returns to `Idle`.
    pub fn reset(&mut self) {
        self.input.clear();
        self.state = VerificationState::Idle;
    }
}
