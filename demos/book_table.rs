use std::collections::BTreeMap;
use std::sync::Arc;

use utterance_compiler::{
    plain_text, CompilerConfig, EntityMapping, EntityValue, GenericIntent, Intent,
    StaticEntityCatalog, UtteranceCompiler,
};

fn main() {
    let catalog = StaticEntityCatalog::new().with_entity(
        "partySize",
        EntityMapping::of_type("NUMBER").with_values(
            "en",
            vec![EntityValue::new("2", &["two"]), EntityValue::new("3", &[])],
        ),
    );

    let mut templates = BTreeMap::new();
    templates.insert(
        "bookTableIntent".to_string(),
        vec!["book a {table|seat} for {{-|partySize}}".to_string()],
    );
    templates.insert(
        "helpGenericIntent".to_string(),
        vec!["{help|what can I say}".to_string()],
    );

    let compiler = UtteranceCompiler::new(&CompilerConfig::new("."), Arc::new(catalog))
        .with_intents(vec![
            Intent::explicit("bookTable"),
            Intent::Generic(GenericIntent::Help),
            Intent::Generic(GenericIntent::Cancel),
        ]);

    match compiler.compile_language("en", &templates) {
        Ok(configurations) => {
            for configuration in configurations {
                println!(
                    "{} ({} utterances, entities: {:?})",
                    configuration.intent,
                    configuration.utterances.len(),
                    configuration.entities
                );
                for utterance in &configuration.utterances {
                    println!("  {}  ->  {}", utterance, plain_text(utterance));
                }
            }
        }
        Err(err) => eprintln!("error[{}]: {}", err.code(), err),
    }
}
