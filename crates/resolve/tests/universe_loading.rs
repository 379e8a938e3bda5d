use std::io::Write;

use dslscope_api::ApiError;
use dslscope_api::models::{ClosureScope, Reference, TypeRef};
use dslscope_resolve::{CollectingProcessor, DeclarationResolver, GradleDslDelegation, TypeUniverse};

const BUILD_SCRIPT: &str = r#"{
    "imports": ["org.gradle.api.*", "org.gradle.api.artifacts.dsl.*"],
    "types": [
        {
            "fqn": "org.gradle.api.Project",
            "kind": "interface",
            "members": [
                { "name": "getVersion", "type": "java.lang.Object", "parameters": [] },
                { "name": "setVersion", "type": "void",
                  "parameters": [{ "name": "version", "type": "java.lang.Object" }] },
                { "name": "dependencies", "type": "void",
                  "parameters": [{ "name": "body", "type": "groovy.lang.Closure" }] }
            ]
        },
        {
            "fqn": "org.gradle.api.artifacts.dsl.DependencyHandler",
            "kind": "interface",
            "members": [
                { "name": "add", "type": "java.lang.Object",
                  "parameters": [
                    { "name": "configuration", "type": "java.lang.String" },
                    { "name": "notation", "type": "java.lang.Object" }
                  ] }
            ]
        },
        {
            "fqn": "build_gradle",
            "interfaces": ["org.gradle.api.Project"],
            "members": [
                { "name": "add", "type": "void",
                  "parameters": [{ "name": "task", "type": "java.lang.String" },
                                 { "name": "action", "type": "java.lang.Object" }] }
            ]
        }
    ],
    "closures": [{ "scope": 9, "type": "DependencyHandler", "strategy": "owner_only" }]
}"#;

fn write_universe(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn universe_file_drives_property_resolution() {
    let file = write_universe(BUILD_SCRIPT);
    let universe = TypeUniverse::load(file.path()).unwrap();
    let ts = universe.type_system().unwrap();
    let delegation = GradleDslDelegation::with_overrides(universe.delegation());
    let resolver = DeclarationResolver::new(&ts, &delegation).with_context(universe.context());

    let mut found = CollectingProcessor::new();
    let outcome = resolver.resolve("build_gradle", &Reference::write("version"), &mut (), &mut found);

    assert!(outcome.resolved);
    assert_eq!(found.names(), vec!["setVersion"]);
}

#[test]
fn built_in_block_delegate_claims_the_call() {
    let file = write_universe(BUILD_SCRIPT);
    let universe = TypeUniverse::load(file.path()).unwrap();
    let ts = universe.type_system().unwrap();
    let delegation = GradleDslDelegation::with_overrides(universe.delegation());
    let resolver = DeclarationResolver::new(&ts, &delegation).with_context(universe.context());
    let args = vec![TypeRef::id("java.lang.String"), TypeRef::id("java.lang.String")];

    let mut found = CollectingProcessor::new();
    let reference = Reference::call("add", args.clone()).inside(ClosureScope::block(3, "dependencies"));
    let outcome = resolver.resolve("build_gradle", &reference, &mut (), &mut found);
    assert!(found.candidates.is_empty());
    assert!(!outcome.resolved);

    // Scope 9 is registered explicitly as owner-only, so the script's own
    // `add` is reported even inside a `dependencies` block.
    let mut found = CollectingProcessor::new();
    let reference = Reference::call("add", args).inside(ClosureScope::block(9, "dependencies"));
    let outcome = resolver.resolve("build_gradle", &reference, &mut (), &mut found);
    assert_eq!(found.names(), vec!["add"]);
    assert_eq!(found.candidates[0].declaring_type, "build_gradle");
    assert!(outcome.resolved);
}

#[test]
fn missing_universe_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = TypeUniverse::load(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(ApiError::Io(_))));
}
