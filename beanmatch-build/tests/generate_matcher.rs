use std::fs;
use std::path::{Path, PathBuf};

use beanmatch_build::{
    CheckStatus, MatcherClassGenerator, MethodNaming, ModulePath, TypeDescriptor, generate_matcher_for,
    generate_matchers, provenance,
};

const GOLDEN: &str = include_str!("../../beanmatch/tests/fixtures/simple_pojo_matcher.rs");
const DESCRIPTION_GOLDEN: &str = include_str!("../../beanmatch/tests/fixtures/description_matcher.rs");
const HOLDER_GOLDEN: &str = include_str!("../../beanmatch/tests/fixtures/holder_matcher.rs");

/// Write `code` to `file` below `dir` and describe `name` as declared there.
fn declared(dir: &Path, file: &str, code: &str, name: &str, module: &str) -> TypeDescriptor {
    let path = dir.join(file);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, code).unwrap();
    TypeDescriptor::new(name, ModulePath::parse(module)).with_source(&path, Vec::new())
}

fn normalize(source: &str) -> String {
    prettyplease::unparse(&syn::parse_file(source).unwrap())
}

fn method_count(source: &str) -> usize {
    source.matches("pub fn with").count()
}

#[test]
fn test_simple_pojo_matcher_is_generated_next_to_its_type() {
    let sources = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let ty = declared(
        sources.path(),
        "pojos.rs",
        "pub struct SimplePojo { pub simple_prop: String }",
        "SimplePojo",
        "crate::pojos",
    );

    let path = generate_matcher_for(&ty, output.path()).unwrap();
    assert_eq!(path, output.path().join("pojos").join("simple_pojo_matcher.rs"));

    let source = fs::read_to_string(&path).unwrap();
    assert_eq!(method_count(&source), 1);
    assert!(source.contains("pub struct SimplePojoMatcher"));
    assert!(source.contains("pub fn with_simple_prop<M>(mut self, matcher: M) -> Self"));
    assert!(source.contains("pub fn new() -> Self"));
    assert!(source.contains("fn describe_to(&self, description: &mut ::beanmatch::Description)"));
    assert!(source.contains("fn matches_safely(&self, item: &SimplePojo) -> bool"));
    assert!(source.contains("fn describe_mismatch_safely("));
    assert!(source.contains("pub fn is_simple_pojo() -> SimplePojoMatcher"));

    let origin = provenance::read(&source).unwrap();
    assert_eq!(origin.generated_by, "beanmatch-build");
    assert_eq!(origin.based_on, "crate::pojos::SimplePojo");
}

#[test]
fn test_output_matches_checked_in_fixture() {
    let sources = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let ty = declared(
        sources.path(),
        "lib.rs",
        "#[derive(Debug)]\npub struct SimplePojo {\n    pub simple_prop: String,\n}\n",
        "SimplePojo",
        "crate",
    );

    let artifact = MatcherClassGenerator::new(output.path()).render_matcher_for(&ty).unwrap();
    assert_eq!(artifact.file_path, output.path().join("simple_pojo_matcher.rs"));

    let header: Vec<&str> = artifact.source_text.lines().take(2).collect();
    let golden_header: Vec<&str> = GOLDEN.lines().take(2).collect();
    assert_eq!(header, golden_header);
    assert_eq!(normalize(&artifact.source_text), normalize(GOLDEN));
}

#[test]
fn test_unusual_beans_match_checked_in_fixtures() {
    let sources = tempfile::tempdir().unwrap();
    let generator = MatcherClassGenerator::new(sources.path().join("out"));
    let code = "pub struct Description { pub text: String }\n\
                pub struct Opaque { pub code: u8 }\n\
                pub struct Holder { pub inner: Opaque, pub label: String }\n";

    for (name, golden) in [("Description", DESCRIPTION_GOLDEN), ("Holder", HOLDER_GOLDEN)] {
        let ty = declared(sources.path(), "lib.rs", code, name, "crate");
        let artifact = generator.render_matcher_for(&ty).unwrap();
        assert_eq!(normalize(&artifact.source_text), normalize(golden), "{name}");
    }
}

#[test]
fn test_regeneration_is_byte_identical() {
    let sources = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let ty = declared(
        sources.path(),
        "models/order.rs",
        "pub struct Order { pub id: u64, pub lines: Vec<String>, pub note: Option<String> }",
        "Order",
        "crate::models::order",
    );

    let first_path = generate_matcher_for(&ty, output.path()).unwrap();
    let first = fs::read(&first_path).unwrap();
    let second_path = generate_matcher_for(&ty, output.path()).unwrap();
    let second = fs::read(&second_path).unwrap();

    assert_eq!(first_path, second_path);
    assert_eq!(first, second);
}

#[test]
fn test_one_fluent_method_per_property() {
    let sources = tempfile::tempdir().unwrap();
    let generator = MatcherClassGenerator::new(sources.path().join("out"));

    for count in [0usize, 1, 5] {
        let fields: Vec<String> = (0..count).map(|i| format!("pub field_{i}: u32")).collect();
        let ty = declared(
            sources.path(),
            &format!("wide_{count}.rs"),
            &format!("pub struct Wide {{ {} }}", fields.join(", ")),
            "Wide",
            "crate",
        );
        let source = generator.render_matcher_for(&ty).unwrap().source_text;
        assert_eq!(method_count(&source), count);
        assert_eq!(source.matches("pub fn new()").count(), 1);
        assert_eq!(source.matches("pub fn is_wide()").count(), 1);
        for protocol in ["fn describe_to(", "fn matches_safely(", "fn describe_mismatch_safely("] {
            assert_eq!(source.matches(protocol).count(), 1, "{protocol}");
        }
    }
}

#[test]
fn test_camel_case_method_names() {
    let sources = tempfile::tempdir().unwrap();
    let ty = declared(
        sources.path(),
        "lib.rs",
        "#[allow(non_snake_case)]\npub struct Legacy { pub id: u32, pub URL: String, pub aBc: bool }",
        "Legacy",
        "crate",
    );

    let source = MatcherClassGenerator::new(sources.path().join("out"))
        .naming(MethodNaming::Camel)
        .render_matcher_for(&ty)
        .unwrap()
        .source_text;
    assert!(source.contains("pub fn withId<M>"));
    assert!(source.contains("pub fn withURL<M>"));
    assert!(source.contains("pub fn withABc<M>"));
    assert!(source.contains("pub fn isLegacy() -> LegacyMatcher"));
    assert!(source.contains("non_snake_case"));
}

#[test]
fn test_failed_introspection_yields_zero_method_matcher() {
    let output = tempfile::tempdir().unwrap();
    let ghost = TypeDescriptor::new("Ghost", ModulePath::parse("crate::gone"))
        .with_source(output.path().join("missing.rs"), Vec::new());

    let path = generate_matcher_for(&ghost, output.path()).unwrap();
    let source = fs::read_to_string(path).unwrap();
    assert_eq!(method_count(&source), 0);
    assert!(source.contains("impl ::beanmatch::TypeSafeMatcher<Ghost> for GhostMatcher"));
    assert!(source.contains("pub fn is_ghost() -> GhostMatcher"));
    assert!(syn::parse_file(&source).is_ok());
}

#[test]
fn test_batch_generation_and_check() {
    let project = tempfile::tempdir().unwrap();
    let src = project.path().join("src");
    fs::create_dir_all(src.join("models")).unwrap();
    fs::write(src.join("lib.rs"), "pub mod models;\n").unwrap();
    fs::write(src.join("models/mod.rs"), "pub mod account;\npub struct Catalog { pub name: String }\n").unwrap();
    fs::write(
        src.join("models/account.rs"),
        "pub struct Account { pub id: u64, pub owner: String }\n\n#[cfg(test)]\nmod tests {\n    struct Helper;\n}\n",
    )
    .unwrap();
    let out = src.join("generated");

    let batch = || {
        generate_matchers()
            .scan_path(&src)
            .package("crate::models")
            .output_dir(&out)
    };

    let written = batch().run().unwrap();
    let expected: Vec<PathBuf> = vec![
        out.join("models/catalog_matcher.rs"),
        out.join("models/account/account_matcher.rs"),
    ];
    assert_eq!(written, expected);

    // The generated files live under the scanned directory but are not picked up again.
    assert_eq!(batch().run().unwrap(), expected);

    let reports = batch().check().unwrap();
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.status == CheckStatus::UpToDate));

    fs::write(src.join("models/account.rs"), "pub struct Account { pub id: u64 }\n").unwrap();
    let reports = batch().check().unwrap();
    let account = reports.iter().find(|r| r.type_name == "crate::models::account::Account").unwrap();
    assert_eq!(account.status, CheckStatus::Stale);
    let account_matcher = fs::read_to_string(&expected[1]).unwrap();
    assert!(account_matcher.contains("with_owner"), "check must not rewrite files");
}
