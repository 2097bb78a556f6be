use crate::config::AppConfig;
use crate::documents::{BylawsGenerator, FormationGenerator, TemplateRegistry};

/// Shared, read-only state handed to every request handler.
pub struct AppState {
    pub config: AppConfig,
    pub formation: FormationGenerator,
    pub bylaws: BylawsGenerator,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let registry = TemplateRegistry::builtin();
        Self {
            config,
            formation: FormationGenerator::new(registry),
            bylaws: BylawsGenerator::new(registry),
        }
    }

    /// Replace the generators, e.g. to pin the document date in tests.
    pub fn with_generators(mut self, formation: FormationGenerator, bylaws: BylawsGenerator) -> Self {
        self.formation = formation;
        self.bylaws = bylaws;
        self
    }
}
