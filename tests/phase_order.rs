//! End-to-end phase ordering through the public API
//!
//! Everything here goes through `LifecycleRegistry`, the same path the
//! CLI uses.

use mason::{
    Alias, DEFAULT, Lifecycle, LifecycleProvider, LifecycleRegistry, Phase, STANDARD_PHASES,
    TreeLifecycle,
};

struct FixedProvider(Vec<Lifecycle>);

impl LifecycleProvider for FixedProvider {
    fn provides(&self) -> Vec<Lifecycle> {
        self.0.clone()
    }
}

fn compute(lifecycle: TreeLifecycle) -> Vec<String> {
    let id = lifecycle.id().to_string();
    let provider = FixedProvider(vec![Lifecycle::Tree(lifecycle)]);
    let registry = LifecycleRegistry::with_providers(&[&provider]).expect("valid lifecycle");
    let found = registry.get(&id).expect("just registered");
    registry.compute_phases(found).expect("computable")
}

#[test]
fn default_lifecycle_matches_the_standard_sequence() {
    let registry = LifecycleRegistry::standard().expect("built-ins are valid");
    let default_lifecycle = registry.get(DEFAULT).expect("default is built in");
    let phases = registry
        .compute_phases(default_lifecycle)
        .expect("computable");
    assert_eq!(phases, STANDARD_PHASES);
}

#[test]
fn all_builtin_lifecycles_compute() {
    let registry = LifecycleRegistry::standard().expect("built-ins are valid");
    for lifecycle in registry.iter() {
        let phases = registry.compute_phases(lifecycle).expect("computable");
        assert!(!phases.is_empty(), "{} has phases", lifecycle.id());
    }
}

#[test]
fn nested_phases_run_before_the_parent() {
    let order = compute(
        TreeLifecycle::new("ci")
            .phase(
                Phase::new("build")
                    .child(Phase::new("compile"))
                    .child(Phase::new("test")),
            )
            .phase(Phase::new("release")),
    );
    assert_eq!(order, ["compile", "test", "build", "release"]);
}

#[test]
fn post_alias_lands_between_target_and_its_successor() {
    let order = compute(
        TreeLifecycle::new("ci")
            .phase(
                Phase::new("build")
                    .child(Phase::new("compile"))
                    .child(Phase::new("test")),
            )
            .phase(Phase::new("release"))
            .alias(Alias::new("package", "post:build")),
    );
    assert_eq!(order, ["compile", "test", "build", "package", "release"]);
}

#[test]
fn unqualified_alias_runs_after_nested_pre_work() {
    let order = compute(
        TreeLifecycle::new("ci")
            .phase(Phase::new("build").child(Phase::new("compile")))
            .alias(Alias::new("process-classes", "build")),
    );
    assert_eq!(order, ["compile", "process-classes", "build"]);
}

#[test]
fn after_link_pulls_a_phase_behind_its_dependency() {
    let order = compute(
        TreeLifecycle::new("docs")
            .phase(Phase::new("render"))
            .phase(Phase::new("publish").after("render")),
    );
    assert_eq!(order, ["render", "publish"]);
}

#[test]
fn dangling_alias_is_rejected_through_the_registry() {
    let lifecycle = TreeLifecycle::new("broken")
        .phase(Phase::new("compile"))
        .alias(Alias::new("prep", "pre:assemble"));
    let provider = FixedProvider(vec![Lifecycle::Tree(lifecycle)]);
    let registry = LifecycleRegistry::with_providers(&[&provider]).expect("registration is lazy");
    let found = registry.get("broken").expect("registered");
    let err = registry.compute_phases(found).expect_err("unknown target");
    assert!(err.to_string().contains("assemble"));
}

#[test]
fn contradictory_links_report_a_cycle() {
    let lifecycle = TreeLifecycle::new("tangled")
        .phase(Phase::new("one").after("two"))
        .phase(Phase::new("two").after("one"));
    let provider = FixedProvider(vec![Lifecycle::Tree(lifecycle)]);
    let registry = LifecycleRegistry::with_providers(&[&provider]).expect("registration is lazy");
    let found = registry.get("tangled").expect("registered");
    let err = registry.compute_phases(found).expect_err("cycle");
    assert!(err.to_string().contains("cycle"));
}
