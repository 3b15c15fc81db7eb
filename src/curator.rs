use crate::debug_log;
use crate::error::CurateError;
use crate::related::{find_related_words, is_auto_accepted};
use crate::wordfile::{WordAppender, WordlistPaths, load_history, load_source};
use std::io;

/// Everything the curator needs from the person at the console.
pub trait CuratorInterface {
    fn display_related_accepted(&mut self, words: &[&str]);
    fn display_related_rejected(&mut self, words: &[&str]);
    /// Ask a yes/no question. Empty input yields `default`.
    fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool>;
}

/// Prior decisions, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decisions {
    pub accepted: Vec<String>,
    pub rejected: Vec<String>,
}

impl Decisions {
    /// Read both decision files. Missing files count as no history.
    pub fn load(paths: &WordlistPaths) -> Result<Self, CurateError> {
        Ok(Self {
            accepted: load_history(&paths.accepted)?,
            rejected: load_history(&paths.rejected)?,
        })
    }

    pub fn is_decided(&self, word: &str) -> bool {
        self.accepted.iter().any(|w| w == word) || self.rejected.iter().any(|w| w == word)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Skipped,
    AutoAccepted,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub skipped: usize,
    pub auto_accepted: usize,
    pub accepted: usize,
    pub rejected: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Skipped => self.skipped += 1,
            Outcome::AutoAccepted => self.auto_accepted += 1,
            Outcome::Accepted => self.accepted += 1,
            Outcome::Rejected => self.rejected += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.skipped + self.auto_accepted + self.accepted + self.rejected
    }
}

/// Decision files opened for appending for the length of one run.
struct Outputs {
    accepted: WordAppender,
    rejected: WordAppender,
}

pub struct Curator<I: CuratorInterface> {
    paths: WordlistPaths,
    interface: I,
}

impl<I: CuratorInterface> Curator<I> {
    pub fn new(paths: WordlistPaths, interface: I) -> Self {
        Self { paths, interface }
    }

    pub fn into_interface(self) -> I {
        self.interface
    }

    /// Load prior decisions from disk and classify every source word.
    pub fn run(&mut self) -> Result<RunSummary, CurateError> {
        let mut decisions = Decisions::load(&self.paths)?;
        log::info!(
            "loaded {} accepted and {} rejected words",
            decisions.accepted.len(),
            decisions.rejected.len()
        );
        self.curate(&mut decisions)
    }

    /// Classify every source word against `decisions`, growing it and the
    /// decision files in lockstep.
    pub fn curate(&mut self, decisions: &mut Decisions) -> Result<RunSummary, CurateError> {
        let source = load_source(&self.paths.source)?;
        log::info!(
            "read {} candidate words from {}",
            source.len(),
            self.paths.source.display()
        );

        let mut outputs = Outputs {
            accepted: WordAppender::open(&self.paths.accepted)?,
            rejected: WordAppender::open(&self.paths.rejected)?,
        };
        log::info!(
            "appending decisions to {} and {}",
            outputs.accepted.path().display(),
            outputs.rejected.path().display()
        );

        let mut summary = RunSummary::default();
        for word in &source {
            let outcome = self.decide_word(word, decisions, &mut outputs)?;
            debug_log!("{word:?} -> {outcome:?}");
            summary.record(outcome);
        }
        log::info!("curation finished: {summary:?}");
        Ok(summary)
    }

    fn decide_word(
        &mut self,
        word: &str,
        decisions: &mut Decisions,
        outputs: &mut Outputs,
    ) -> Result<Outcome, CurateError> {
        if decisions.is_decided(word) {
            return Ok(Outcome::Skipped);
        }

        if is_auto_accepted(word) {
            outputs.accepted.append(word)?;
            decisions.accepted.push(word.to_string());
            return Ok(Outcome::AutoAccepted);
        }

        let related_accepted = find_related_words(word, &decisions.accepted);
        if !related_accepted.is_empty() {
            self.interface.display_related_accepted(&related_accepted);
        }
        let related_rejected = find_related_words(word, &decisions.rejected);
        if !related_rejected.is_empty() {
            self.interface.display_related_rejected(&related_rejected);
        }

        let message = format!("accept \"{}\"?", word.trim());
        if self
            .interface
            .confirm(&message, true)
            .map_err(CurateError::Prompt)?
        {
            outputs.accepted.append(word)?;
            decisions.accepted.push(word.to_string());
            Ok(Outcome::Accepted)
        } else {
            outputs.rejected.append(word)?;
            decisions.rejected.push(word.to_string());
            Ok(Outcome::Rejected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::fs;

    #[derive(Default)]
    struct Scripted {
        answers: VecDeque<bool>,
        prompts: Vec<String>,
        related: Vec<String>,
    }

    impl CuratorInterface for Scripted {
        fn display_related_accepted(&mut self, words: &[&str]) {
            self.related.push(format!("accepted: {}", words.join(", ")));
        }

        fn display_related_rejected(&mut self, words: &[&str]) {
            self.related.push(format!("rejected: {}", words.join(", ")));
        }

        fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool> {
            assert!(default);
            self.prompts.push(message.to_string());
            self.answers
                .pop_front()
                .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))
        }
    }

    fn scripted(answers: &[bool]) -> Scripted {
        Scripted {
            answers: answers.iter().copied().collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_is_decided_is_exact_match() {
        let decisions = Decisions {
            accepted: vec!["Cat".to_string()],
            rejected: vec!["dog".to_string()],
        };
        assert!(decisions.is_decided("Cat"));
        assert!(decisions.is_decided("dog"));
        assert!(!decisions.is_decided("cat"));
        assert!(!decisions.is_decided("Dog"));
    }

    #[test]
    fn test_cats_cat_dog_example() {
        let dir = tempfile::tempdir().unwrap();
        let paths = WordlistPaths::in_dir(dir.path());
        fs::write(&paths.source, "cats\ncat\ndog\n").unwrap();

        let mut curator = Curator::new(paths.clone(), scripted(&[true, false]));
        let summary = curator.run().unwrap();
        let interface = curator.into_interface();

        assert_eq!(interface.prompts, vec!["accept \"cat\"?", "accept \"dog\"?"]);
        assert_eq!(interface.related, vec!["accepted: cats"]);
        assert_eq!(
            summary,
            RunSummary {
                skipped: 0,
                auto_accepted: 1,
                accepted: 1,
                rejected: 1
            }
        );
        assert_eq!(fs::read_to_string(&paths.accepted).unwrap(), "cats\ncat\n");
        assert_eq!(fs::read_to_string(&paths.rejected).unwrap(), "dog\n");
    }

    #[test]
    fn test_curate_updates_decisions_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        let paths = WordlistPaths::in_dir(dir.path());
        fs::write(&paths.source, "ant\nant\nbee\n").unwrap();

        let mut decisions = Decisions {
            accepted: Vec::new(),
            rejected: vec!["bee".to_string()],
        };
        let mut curator = Curator::new(paths, scripted(&[true]));
        let summary = curator.curate(&mut decisions).unwrap();

        assert_eq!(decisions.accepted, vec!["ant"]);
        assert_eq!(decisions.rejected, vec!["bee"]);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn test_related_rejected_shown() {
        let dir = tempfile::tempdir().unwrap();
        let paths = WordlistPaths::in_dir(dir.path());
        fs::write(&paths.source, "hat\n").unwrap();
        fs::write(&paths.rejected, "hats\nha\nthat\n").unwrap();

        let mut curator = Curator::new(paths, scripted(&[false]));
        curator.run().unwrap();
        let interface = curator.into_interface();
        assert_eq!(interface.related, vec!["rejected: hats, that"]);
    }

    #[test]
    fn test_prompt_failure_keeps_earlier_decisions() {
        let dir = tempfile::tempdir().unwrap();
        let paths = WordlistPaths::in_dir(dir.path());
        fs::write(&paths.source, "elephant\nfox\nowl\n").unwrap();

        let mut curator = Curator::new(paths.clone(), scripted(&[false]));
        let err = curator.run().unwrap_err();
        assert!(matches!(err, CurateError::Prompt(_)));
        assert_eq!(fs::read_to_string(&paths.accepted).unwrap(), "elephant\n");
        assert_eq!(fs::read_to_string(&paths.rejected).unwrap(), "fox\n");
    }
}
