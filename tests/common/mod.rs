#![allow(clippy::unwrap_used, dead_code)]
//! Test doubles shared by the integration tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::Path;

use anyhow::{Result, anyhow};
use tempfile::TempDir;

use deeplcmd::config::{Credential, CredentialStore, Settings};
use deeplcmd::translation::{AdapterError, LanguageCode, Translator};
use deeplcmd::ui::Prompter;

/// One recorded adapter invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub target: String,
    pub credential: String,
}

/// Translator that answers with a canned reply and records every call.
pub struct FakeTranslator {
    reply: Result<String, AdapterError>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeTranslator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(err: AdapterError) -> Self {
        Self {
            reply: Err(err),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, target: &LanguageCode, credential: &Credential) {
        self.calls.borrow_mut().push(Call {
            target: target.to_string(),
            credential: credential.expose().to_string(),
        });
    }
}

impl Translator for FakeTranslator {
    async fn translate_text(
        &self,
        _text: &str,
        target: &LanguageCode,
        credential: &Credential,
    ) -> Result<String, AdapterError> {
        self.record(target, credential);
        self.reply.clone()
    }

    async fn translate_document(
        &self,
        _input: &Path,
        output: &Path,
        target: &LanguageCode,
        credential: &Credential,
    ) -> Result<(), AdapterError> {
        self.record(target, credential);
        let text = self.reply.clone()?;
        std::fs::write(output, text).map_err(|e| AdapterError::Unrecognized(e.to_string()))
    }
}

/// Prompter that replays scripted answers and remembers the questions.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(ToString::to_string).collect(),
            questions: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, message: &str) -> Result<String> {
        self.questions.push(message.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("unexpected prompt: {message}"))
    }

    fn ask_secret(&mut self, message: &str) -> Result<String> {
        self.ask(message)
    }
}

/// Settings backed by a credential file inside `temp_dir`.
pub fn settings_in(temp_dir: &TempDir) -> Settings {
    Settings::load(CredentialStore::at(temp_dir.path().join("credentials")))
}

/// Settings with `key` already saved by a previous login.
pub fn settings_with_saved_key(temp_dir: &TempDir, key: &str) -> Settings {
    let store = CredentialStore::at(temp_dir.path().join("credentials"));
    store.persist(&Credential::new(key).unwrap()).unwrap();
    Settings::load(store)
}
