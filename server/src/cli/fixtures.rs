//! Generator for pseudo-realistic fixture strings, used by the database seed command.

use ring::rand::{SecureRandom, SystemRandom};

const NAME_PREFIXES: &[&str] = &[
    "Northwind", "Vertex", "Acme", "Lakeside", "Orbital", "Cascade", "Redwood", "Meridian",
    "Bluefin", "Harbor", "Quartz", "Summit",
];

const NAME_SUFFIXES: &[&str] = &[
    "Labs", "Systems", "Group", "Industries", "Solutions", "Collective", "Partners", "Works",
];

const FILLER_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed",
    "eiusmod", "tempor", "incididunt", "labore", "dolore", "magna", "aliqua", "veniam", "quis",
    "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip", "commodo", "consequat",
];

const QUESTION_OPENERS: &[&str] = &[
    "What is the status of",
    "How do we handle",
    "When can we expect",
    "Who is responsible for",
    "Why did we choose",
];

/// Generator for pseudo-realistic fixture strings.
///
/// Internally a xorshift PRNG over fixed word lists. [FixtureGenerator::new] seeds it from the
/// system RNG, so every seed run produces different strings; [FixtureGenerator::with_seed] gives
/// a deterministic sequence for tests.
pub struct FixtureGenerator {
    state: u64,
}

impl FixtureGenerator {
    #[allow(clippy::new_without_default)] // We always want to explicitly create these objects
    pub fn new() -> Self {
        let mut seed = [0u8; 8];
        SystemRandom::new()
            .fill(&mut seed)
            .expect("System RNG not available");
        Self::with_seed(u64::from_le_bytes(seed))
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            // xorshift must not start at zero
            state: if seed == 0 { 0x9e3779b97f4a7c15 } else { seed },
        }
    }

    /// An organization-style label, e.g. "Vertex Labs".
    pub fn organization_name(&mut self) -> String {
        format!("{} {}", self.pick(NAME_PREFIXES), self.pick(NAME_SUFFIXES))
    }

    /// A paragraph of filler text, usable as a description field.
    pub fn filler_paragraph(&mut self) -> String {
        let sentence_count = 3 + (self.next() % 3) as usize;
        let mut paragraph = String::new();
        for i in 0..sentence_count {
            if i > 0 {
                paragraph.push(' ');
            }
            paragraph.push_str(&self.filler_sentence());
        }
        paragraph
    }

    /// A single question-shaped sentence.
    pub fn question_sentence(&mut self) -> String {
        let subject_length = 2 + (self.next() % 3) as usize;
        format!(
            "{} {}?",
            self.pick(QUESTION_OPENERS),
            self.words(subject_length).join(" ")
        )
    }

    fn filler_sentence(&mut self) -> String {
        let word_count = 6 + (self.next() % 6) as usize;
        let sentence = self.words(word_count).join(" ");
        let mut chars = sentence.chars();
        match chars.next() {
            Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
            None => sentence,
        }
    }

    fn words(&mut self, count: usize) -> Vec<&'static str> {
        (0..count).map(|_| self.pick(FILLER_WORDS)).collect()
    }

    fn pick(&mut self, options: &'static [&'static str]) -> &'static str {
        options[(self.next() % options.len() as u64) as usize]
    }

    fn next(&mut self) -> u64 {
        // xorshift64
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}
