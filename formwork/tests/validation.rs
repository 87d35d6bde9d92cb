//! End-to-end validation scenarios: default registry, spec parsing,
//! validator construction and form lifecycle working together.

use std::sync::Arc;

use formwork::Value;
use formwork::error::ConfigError;
use formwork::form::ChangeSet;
use formwork::form::Form;
use formwork::form::Insertable;
use formwork::rules::Registry;
use formwork::validator::ValidatorCache;
use formwork::validator::ValidatorFactory;

fn factory() -> ValidatorFactory {
    ValidatorFactory::new(Arc::new(Registry::defaults()))
}

fn field(name: &str, spec: &str) -> Insertable<String> {
    Insertable::new(name, spec.to_string()).unwrap()
}

#[test]
fn spec_string_to_errors() {
    let validator = factory()
        .compile("required|blacklist:hi,ho|regex:this string", false)
        .unwrap();
    let cx = Default::default();

    assert!(validator.run(&Value::from("this string"), &cx).is_empty());
    assert_eq!(
        validator.run(&Value::from("hi"), &cx),
        vec!["blacklist", "regex"]
    );
    // empty + required reports nothing but "required"
    assert_eq!(validator.run(&Value::from(""), &cx), vec!["required"]);
}

#[test]
fn multi_valued_field_reports_per_element() {
    let validator = factory().compile("whitelist:good", false).unwrap();
    let value = Value::from(vec![
        "good".to_string(),
        "bad".to_string(),
        "good".to_string(),
        "bad".to_string(),
    ]);
    assert_eq!(
        validator.run(&value, &Default::default()),
        vec!["whitelist", "whitelist"]
    );
}

#[test]
fn unknown_rule_fails_at_build_not_at_validation() {
    let err = factory().compile("email|bogus", false).unwrap_err();
    assert_eq!(err, ConfigError::unknown_rule("bogus"));
}

#[test]
fn full_form_lifecycle() {
    let factory = factory();
    let mut run = |form: Form<String>, force: bool| {
        form.validate(
            |spec, required| Ok(Arc::new(factory.compile(spec, required)?)),
            force,
        )
        .unwrap()
    };

    let form = Form::from_fields([
        field("username", "min:3|max:12").value("ab"),
        field("email", "email").required(true),
        field("color", "whitelist:red,green,blue").value("red"),
    ]);

    // nothing is dirty yet, a plain validate changes nothing
    let untouched = run(form.clone(), false);
    assert_eq!(untouched, form);
    assert!(!untouched.is_valid());

    // forced validation classifies everything
    let checked = run(form.clone(), true);
    assert_eq!(checked.errors()["username"], vec!["min".to_string()]);
    assert_eq!(checked.errors()["email"], vec!["required".to_string()]);
    assert!(checked.errors()["color"].is_empty());

    // fix the failing fields one edit at a time
    let fixed = run(
        checked.update(&ChangeSet::new("username").value("abcd")),
        false,
    );
    assert!(fixed.get("username").unwrap().is_valid());
    assert!(fixed.get("email").unwrap().is_invalid());

    let fixed = run(
        fixed.update(&ChangeSet::new("email").value("user@example.com")),
        false,
    );
    assert!(fixed.is_valid());
}

#[test]
fn cross_field_rule_sees_sibling_values() {
    let factory = factory();
    let form = Form::from_fields([
        field("password", "min:8").value("hunter22"),
        field("confirm", "matches:password").value("hunter22"),
    ]);
    let form = form
        .validate(
            |spec, required| Ok(Arc::new(factory.compile(spec, required)?)),
            true,
        )
        .unwrap();
    assert!(form.is_valid());

    let form = form
        .update(&ChangeSet::new("confirm").value("hunter23"))
        .validate(
            |spec, required| Ok(Arc::new(factory.compile(spec, required)?)),
            false,
        )
        .unwrap();
    assert_eq!(form.errors()["confirm"], vec!["matches".to_string()]);
}

#[test]
fn context_is_one_snapshot_per_pass() {
    // both fields reference each other; a single shared snapshot means
    // the pass is order-independent
    let factory = factory();
    let form = Form::from_fields([
        field("a", "matches:b").value("same"),
        field("b", "matches:a").value("same"),
    ]);
    let form = form
        .validate(
            |spec, required| Ok(Arc::new(factory.compile(spec, required)?)),
            true,
        )
        .unwrap();
    assert!(form.is_valid());
}

#[test]
fn cached_validation_through_a_cache() {
    let mut cache = ValidatorCache::with_registry(Arc::new(Registry::defaults()));
    let form = Form::from_fields([
        field("email", "email").required(true),
        field("backup", "email"),
    ]);

    let form = form
        .validate(|spec, required| cache.validator(spec, required), true)
        .unwrap();
    assert!(form.get("email").unwrap().is_invalid());
    assert!(form.get("backup").unwrap().is_valid());
    // two distinct (spec, required) keys were compiled
    assert_eq!(cache.len(), 2);

    let form = form
        .update(&ChangeSet::new("email").value("a@b.com"))
        .validate(|spec, required| cache.validator(spec, required), false)
        .unwrap();
    assert!(form.is_valid());
    assert_eq!(cache.len(), 2);
}

#[test]
fn legacy_required_spec_still_works() {
    let factory = factory();
    // requiredness declared inline in the spec, flag left false
    let form = Form::from_fields([field("email", "required|email")]);
    let form = form
        .validate(
            |spec, required| Ok(Arc::new(factory.compile(spec, required)?)),
            true,
        )
        .unwrap();
    assert_eq!(form.errors()["email"], vec!["required".to_string()]);
}

#[test]
fn form_snapshot_serializes() {
    let form = Form::from_fields([field("email", "email").value("a@b.com")]);
    let json = serde_json::to_value(&form).unwrap();
    assert_eq!(json["fields"][0]["name"], "email");
    assert_eq!(json["fields"][0]["value"], "a@b.com");
}
