//! Integration tests that verify generated code compiles successfully.
//!
//! These tests generate Java code from several manifests and run `javac`
//! over the result. They need a JDK on the PATH, so they are ignored by
//! default: run them with `cargo test -- --ignored`.

use std::str::FromStr;

use fluent_codegen::{
    pipeline::Pipeline,
    testing::{JavaChecker, assert_generates_valid_code},
};
use fluent_codegen_java::{Generator, LanguageCodegen};
use fluent_manifest::Manifest;

/// Generate code from a manifest and verify it compiles with `javac`.
fn assert_generated_code_compiles(manifest_toml: &str) {
    let manifest = Manifest::from_str(manifest_toml).expect("Failed to parse manifest");
    let ctx = Pipeline::new().run(manifest).expect("Pipeline failed");
    let generator = Generator::from_context(&ctx);

    assert_generates_valid_code(
        |dir| {
            generator.generate(dir)?;
            Ok(())
        },
        &JavaChecker,
    )
    .unwrap();
}

#[test]
#[ignore = "requires javac"]
fn test_chain_compiles() {
    assert_generated_code_compiles(
        r#"
        [generator]
        package = "com.acme"

        [[class]]
        name = "Base"
        abstract = true

        [[class.field]]
        name = "id"
        type = "long"

        [[class]]
        name = "Mid"
        extends = "Base"

        [[class.field]]
        name = "name"
        type = "string"

        [[class]]
        name = "Leaf"
        extends = "Mid"

        [[class.field]]
        name = "tags"
        type = "string[]"
        "#,
    );
}

#[test]
#[ignore = "requires javac"]
fn test_immutable_lists_compile() {
    assert_generated_code_compiles(
        r#"
        [generator]
        package = "shop"
        policy = "immutable"

        [[class]]
        name = "Order"

        [[class.field]]
        name = "lines"
        type = "list<Line>"

        [[class.field]]
        name = "VERSION"
        type = "int"
        static = true

        [[class]]
        name = "Line"

        [[class.field]]
        name = "quantities"
        type = "int[]"
        "#,
    );
}

#[test]
#[ignore = "requires javac"]
fn test_skipped_builder_compiles() {
    assert_generated_code_compiles(
        r#"
        [generator]
        package = "legacy"

        [[class]]
        name = "Root"

        [[class.field]]
        name = "id"
        type = "int"

        [[class]]
        name = "Middle"
        extends = "Root"
        nested = ["Builder"]

        [[class]]
        name = "Edge"
        extends = "Middle"

        [[class.field]]
        name = "weight"
        type = "double"
        "#,
    );
}
