//! Utterance Compiler
//!
//! One compiler run: load templates, then for every language (in parallel)
//! create its build directory, merge contributed templates, expand, validate,
//! assemble and dispatch to the platform generators.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::assemble::assemble;
use crate::config::CompilerConfig;
use crate::discovery::{merge_templates, TemplateMap, TemplateStore, UtteranceTemplateService};
use crate::dispatch::{dispatch, ensure_output_dir, first_error, PlatformGenerator};
use crate::entity::EntityCatalog;
use crate::error::CompilerError;
use crate::fingerprint::fingerprint;
use crate::intent::{Intent, IntentConfiguration};
use crate::resolver::expand_intent_templates;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageReport {
    pub language: String,
    pub output_dir: PathBuf,
    pub intents: usize,
    pub utterances: usize,
    pub fingerprint: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
    pub languages: Vec<LanguageReport>,
}

pub struct UtteranceCompiler {
    utterance_path: PathBuf,
    template_file_name: String,
    catalog: Arc<dyn EntityCatalog>,
    intents: Vec<Intent>,
    platform_generators: Vec<Box<dyn PlatformGenerator>>,
    template_services: Vec<Box<dyn UtteranceTemplateService>>,
}

impl UtteranceCompiler {
    pub fn new(config: &CompilerConfig, catalog: Arc<dyn EntityCatalog>) -> Self {
        Self {
            utterance_path: config.utterance_path.clone(),
            template_file_name: config.template_file_name.clone(),
            catalog,
            intents: config.declared_intents(),
            platform_generators: Vec::new(),
            template_services: Vec::new(),
        }
    }

    /// Replace the declared intents
    pub fn with_intents(mut self, intents: Vec<Intent>) -> Self {
        self.intents = intents;
        self
    }

    pub fn with_platform_generator(mut self, generator: impl PlatformGenerator + 'static) -> Self {
        self.platform_generators.push(Box::new(generator));
        self
    }

    pub fn with_template_service(
        mut self,
        service: impl UtteranceTemplateService + 'static,
    ) -> Self {
        self.template_services.push(Box::new(service));
        self
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// Merge, expand, validate and assemble one language. No I/O.
    pub fn compile_language(
        &self,
        language: &str,
        base_templates: &TemplateMap,
    ) -> Result<Vec<IntentConfiguration>, CompilerError> {
        let templates = merge_templates(base_templates, &self.template_services, language)?;

        let expanded = templates
            .iter()
            .map(|(key, templates)| {
                debug!(%language, template_key = %key, "Expanding templates");
                (
                    key.clone(),
                    expand_intent_templates(templates, language, self.catalog.as_ref()),
                )
            })
            .collect::<BTreeMap<_, _>>();

        assemble(&self.intents, &expanded, language, self.catalog.as_ref())
    }

    /// Run the full build below `build_root`. Every language and every
    /// generator runs to completion before the first failure is reported.
    pub fn execute(&self, build_root: &Path) -> Result<BuildReport, CompilerError> {
        let store = TemplateStore::load(&self.utterance_path, &self.template_file_name)?;

        info!(
            languages = store.languages().len(),
            intents = self.intents.len(),
            generators = self.platform_generators.len(),
            entities = self.catalog.known_names().len(),
            "Compiling utterance templates"
        );
        debug!(entities = ?self.catalog.known_names(), "Entity catalog");

        let outcomes: Vec<(Option<LanguageReport>, Vec<Result<(), CompilerError>>)> = store
            .languages()
            .par_iter()
            .map(|(language, templates)| match self.build_language(build_root, language, templates) {
                Ok((report, results)) => (Some(report), results),
                Err(err) => (None, vec![Err(err)]),
            })
            .collect();

        let mut report = BuildReport::default();
        let mut results = Vec::new();
        for (language_report, language_results) in outcomes {
            report.languages.extend(language_report);
            results.extend(language_results);
        }
        first_error(results)?;

        info!(languages = report.languages.len(), "Utterance compilation finished");
        Ok(report)
    }

    fn build_language(
        &self,
        build_root: &Path,
        language: &str,
        templates: &TemplateMap,
    ) -> Result<(LanguageReport, Vec<Result<(), CompilerError>>), CompilerError> {
        let output_dir = ensure_output_dir(build_root, language)?;
        let configurations = self.compile_language(language, templates)?;

        let report = LanguageReport {
            language: language.to_string(),
            output_dir: output_dir.clone(),
            intents: configurations.len(),
            utterances: configurations.iter().map(|c| c.utterances.len()).sum(),
            fingerprint: fingerprint(&configurations)?,
        };
        info!(
            %language,
            intents = report.intents,
            utterances = report.utterances,
            fingerprint = %report.fingerprint,
            "Language compiled"
        );

        let results = dispatch(
            language,
            &output_dir,
            &configurations,
            &self.platform_generators,
        );
        Ok((report, results))
    }
}
