use crate::{
    config::ScenarioParams,
    frontier::{EntryGenerator, FrontierEntry, FrontierStore, Strategy},
    quiz::{Question, QuizError},
    random::RandomSource,
    statistics::SessionStats,
};

/// One quiz instance, owning its frontier exclusively.
///
/// Nothing happens at construction time beyond validating the parameters. Each call
/// to [`QuizSession::next_scenario`] replaces the frontier with a fresh random one
/// and picks the strategy the learner is asked about.
pub struct QuizSession<R: RandomSource> {
    params: ScenarioParams,
    generator: EntryGenerator,
    store: FrontierStore,
    rng: R,
    question: Option<Question>,
    stats: SessionStats,
}

impl<R: RandomSource> QuizSession<R> {
    pub fn new(params: ScenarioParams, rng: R) -> Result<Self, QuizError> {
        Ok(QuizSession {
            generator: EntryGenerator::new(&params)?,
            params,
            store: FrontierStore::new(),
            rng,
            question: None,
            stats: SessionStats::new(),
        })
    }

    /// Generates a new frontier, then chooses the question to ask about it.
    pub fn next_scenario(&mut self) -> Result<Question, QuizError> {
        let count = self
            .rng
            .int_in_range(self.params.min_entries, self.params.max_entries)
            as usize;
        self.store
            .populate_random(count, &self.generator, &mut self.rng);

        let index = self
            .rng
            .int_in_range(self.params.first_question, self.params.last_question);
        let question = Question::new(Strategy::from_index(index as usize)?);

        self.stats.bump_scenarios(count);
        tracing::info!(
            "scenario {}: {count} entries, asking about {}",
            self.stats.get_scenarios(),
            question.strategy()
        );

        self.question = Some(question);
        Ok(question)
    }

    pub fn question(&self) -> Option<Question> {
        self.question
    }

    pub fn store(&self) -> &FrontierStore {
        &self.store
    }

    /// Mutable access for callers staging a hand-built scenario.
    pub fn store_mut(&mut self) -> &mut FrontierStore {
        &mut self.store
    }

    pub fn params(&self) -> &ScenarioParams {
        &self.params
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Accepted answers to the current question.
    pub fn answers(&self) -> Result<Vec<usize>, QuizError> {
        let question = self.question.ok_or(QuizError::NoActiveQuestion)?;
        Ok(question.answers(&self.store)?)
    }

    pub fn check_answer(&self, answer: usize) -> Result<bool, QuizError> {
        let question = self.question.ok_or(QuizError::NoActiveQuestion)?;
        let correct = question.is_correct(&self.store, answer)?;
        tracing::debug!("answer {answer} to \"{}\": {correct}", question.prompt());
        Ok(correct)
    }

    /// Expands the frontier the way the current question's strategy would.
    pub fn expand(&mut self) -> Result<FrontierEntry, QuizError> {
        let question = self.question.ok_or(QuizError::NoActiveQuestion)?;
        Ok(self.store.remove_next(question.strategy())?)
    }
}
